//! Core traits and types for numerik.
//!
//! This crate holds what the numerical routines share: the scalar
//! abstraction, the two-class error taxonomy, the tolerance policy, the
//! callable seam and tabulated sample sets.
//!
//! # Modules
//!
//! - [`config`]: Tolerance policy with per-precision defaults
//! - [`error`]: `InvalidArgument` / `DomainError` conditions
//! - [`function`]: The [`RealFunction`] trait for scalar callables
//! - [`samples`]: Sample sets and shared shape checks
//! - [`types`]: The [`Scalar`] trait and the matrix alias

pub mod config;
pub mod error;
pub mod function;
pub mod samples;
pub mod types;

// Re-export commonly used items at the crate root
pub use config::ToleranceConfig;
pub use error::{NumericsError, Result};
pub use function::RealFunction;
pub use samples::SampleSet;
pub use types::Scalar;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use numerik_core::prelude::*;
///
/// let samples = SampleSet::new(vec![0.0, 1.0], vec![1.0, 3.0]).unwrap();
/// assert_eq!(samples.len(), 2);
/// ```
pub mod prelude {
    pub use crate::config::ToleranceConfig;
    pub use crate::error::{NumericsError, Result};
    pub use crate::function::RealFunction;
    pub use crate::samples::SampleSet;
    pub use crate::types::{DMatrix, Scalar};
}
