//! Tolerance policy for the numerical routines.
//!
//! The defaults come from the [`Scalar`] constants for each precision. Callers
//! that need a stricter or looser policy build one with the `with_*` setters,
//! or, with the `serde` feature, deserialize it from their own settings file.

use crate::error::{NumericsError, Result};
use crate::types::Scalar;
use num_traits::Float;

/// Tolerances used by the quadrature and error-analysis routines.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToleranceConfig<T> {
    /// Maximum deviation of a spacing from the first spacing for point-based Simpson
    pub spacing_tolerance: T,
    /// Absolute tolerance when checking that `(b - a) / h` is an integer
    pub step_abs_tolerance: T,
    /// Relative tolerance when checking that `(b - a) / h` is an integer
    pub step_rel_tolerance: T,
    /// Absolute errors below this are suspicious when the reference is large
    pub significance_threshold: T,
    /// Reference magnitude above which a tiny absolute error is flagged
    pub significance_magnitude: T,
}

impl<T: Scalar> Default for ToleranceConfig<T> {
    fn default() -> Self {
        Self {
            spacing_tolerance: T::SPACING_TOLERANCE,
            step_abs_tolerance: T::STEP_ABS_TOLERANCE,
            step_rel_tolerance: T::STEP_REL_TOLERANCE,
            significance_threshold: <T as Scalar>::from_f64(1e-6),
            significance_magnitude: T::one(),
        }
    }
}

impl<T: Scalar> ToleranceConfig<T> {
    /// Create a configuration with default tolerances.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the uniform-spacing tolerance for point-based Simpson.
    pub fn with_spacing_tolerance(mut self, tolerance: T) -> Self {
        self.spacing_tolerance = tolerance;
        self
    }

    /// Set both tolerances of the step-size-to-count conversion.
    pub fn with_step_tolerances(mut self, absolute: T, relative: T) -> Self {
        self.step_abs_tolerance = absolute;
        self.step_rel_tolerance = relative;
        self
    }

    /// Set the loss-of-significance heuristic thresholds.
    pub fn with_significance_check(mut self, threshold: T, magnitude: T) -> Self {
        self.significance_threshold = threshold;
        self.significance_magnitude = magnitude;
        self
    }

    /// Reject negative or non-finite tolerances.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("spacing_tolerance", self.spacing_tolerance),
            ("step_abs_tolerance", self.step_abs_tolerance),
            ("step_rel_tolerance", self.step_rel_tolerance),
            ("significance_threshold", self.significance_threshold),
            ("significance_magnitude", self.significance_magnitude),
        ];
        for (name, value) in fields {
            if !<T as Float>::is_finite(value) || value < T::zero() {
                return Err(NumericsError::invalid_argument(format!(
                    "{name} must be a finite non-negative number (got {value})"
                )));
            }
        }
        Ok(())
    }
}
