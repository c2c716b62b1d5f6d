//! Numerik - numerical differentiation, integration and interpolation.
//!
//! This crate bundles [`numerik_core`] (scalar types, errors, tolerances and
//! sample validation) with [`numerik_methods`] (the numerical routines) behind
//! a single dependency.
//!
//! # Quick Start
//!
//! ```rust
//! use numerik::prelude::*;
//!
//! # fn main() -> numerik::Result<()> {
//! let f = |x: f64| x.powi(3);
//!
//! let slope = central_difference(&f, 2.0, 1e-4);
//! let area = simpsons_rule(&f, 0.0, 2.0, n_from_step(0.0, 2.0, 0.5)?)?;
//! let value = newton_interpolation(1.5, &[1.0, 2.0, 3.0], &[1.0, 8.0, 27.0])?;
//!
//! let mut history = ResultHistory::new();
//! history.record("Symbolic vs Central Divided Difference", 12.0, slope);
//! let report = history.report_latest(&ToleranceConfig::default()).unwrap();
//!
//! assert!(report.absolute_error < 1e-6);
//! assert!((area - 4.0).abs() < 1e-12);
//! assert!(value > 1.0 && value < 8.0);
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `parallel` (default): sample large interpolation grids with rayon
//! - `serde`: serialization for configurations, reports and histories

pub use numerik_core;
pub use numerik_methods;

pub use numerik_core::{NumericsError, RealFunction, Result, SampleSet, Scalar, ToleranceConfig};

/// Everything needed for typical use.
pub mod prelude {
    pub use numerik_core::prelude::*;
    pub use numerik_methods::{
        absolute_error, backward_difference, central_difference, classify_evaluation,
        divided_differences, forward_difference, lagrange_interpolation, linspace, n_from_step,
        n_from_step_with, newton_interpolation, relative_error, sample_function,
        sample_interpolant, sample_interpolant_on, simpsons_from_points,
        simpsons_from_points_with, simpsons_rule, trapezoidal_from_points, trapezoidal_rule,
        ComparisonRecord, DifferenceScheme, ErrorReport, EvaluationKind, InterpolationMethod,
        NewtonPolynomial, QuadratureRule, ResultHistory, Series, DEFAULT_SERIES_POINTS,
    };
}
