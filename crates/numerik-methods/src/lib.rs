//! Numerik Methods - finite differences, composite quadrature and polynomial
//! interpolation.
//!
//! Every routine is a synchronous pure function over its arguments: nothing is
//! cached, no global state is read or written, and each call can run on any
//! thread independently of the others.
//!
//! # Available Methods
//!
//! - **Differentiation**: forward, backward and central differences
//! - **Integration**: composite trapezoidal and Simpson's 1/3 rules, over a
//!   callable or over tabulated samples
//! - **Interpolation**: Newton divided differences and Lagrange form
//! - **Analysis**: absolute/relative error and a caller-owned result history
//! - **Series**: sample grids for plotting
//!
//! # Examples
//!
//! ```rust
//! use numerik_methods::{central_difference, simpsons_rule, newton_interpolation};
//!
//! let slope = central_difference(&|x: f64| x.sin(), 1.0, 1e-3);
//! assert!((slope - 1.0f64.cos()).abs() < 1e-6);
//!
//! let area = simpsons_rule(&|x: f64| x * x, 0.0, 3.0, 2).unwrap();
//! assert_eq!(area, 9.0);
//!
//! let value: f64 = newton_interpolation(2.5, &[1.0, 2.0, 3.0], &[1.0, 8.0, 27.0]).unwrap();
//! assert!((value - 16.0).abs() < 1e-12);
//! ```

pub mod analysis;
pub mod differentiation;
pub mod integration;
pub mod interpolation;
pub mod series;

// Re-export main routines for convenience
pub use analysis::{
    absolute_error, relative_error, ComparisonRecord, ErrorReport, ResultHistory,
};
pub use differentiation::{
    backward_difference, central_difference, forward_difference, DifferenceScheme,
};
pub use integration::{
    n_from_step, n_from_step_with, simpsons_from_points, simpsons_from_points_with,
    simpsons_rule, trapezoidal_from_points, trapezoidal_rule, QuadratureRule,
};
pub use interpolation::{
    classify_evaluation, divided_differences, lagrange_interpolation, newton_interpolation,
    EvaluationKind, InterpolationMethod, NewtonPolynomial,
};
pub use series::{
    linspace, sample_function, sample_interpolant, sample_interpolant_on, Series,
    DEFAULT_SERIES_POINTS,
};

// Re-export commonly used items from core
pub use numerik_core::{NumericsError, RealFunction, Result, SampleSet, Scalar, ToleranceConfig};
