//! Scalar abstraction and the matrix alias.
//!
//! Every routine is generic over [`Scalar`], implemented for `f32` and `f64`.

use nalgebra::{Dyn, OMatrix, Scalar as NalgebraScalar};
use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// Trait for scalar types used by the numerical routines (f32 or f64).
///
/// This trait combines all the numeric traits the algorithms rely on and
/// carries the per-precision default tolerances.
pub trait Scalar:
    NalgebraScalar + Float + FromPrimitive + Display + Debug + Default + Copy + Send + Sync + 'static
{
    /// Default tolerance for the uniform-spacing check of point-based Simpson.
    const SPACING_TOLERANCE: Self;

    /// Absolute tolerance when checking that a step size tiles an interval.
    const STEP_ABS_TOLERANCE: Self;

    /// Relative tolerance when checking that a step size tiles an interval.
    const STEP_REL_TOLERANCE: Self;

    /// Convert from f64 (for constants).
    ///
    /// # Panics
    ///
    /// Panics if the conversion fails.
    fn from_f64(v: f64) -> Self {
        <Self as FromPrimitive>::from_f64(v).expect("Failed to convert from f64")
    }

    /// Convert from usize (for node counts and indices).
    ///
    /// # Panics
    ///
    /// Panics if the conversion fails.
    fn from_usize(v: usize) -> Self {
        <Self as FromPrimitive>::from_usize(v).expect("Failed to convert from usize")
    }

    /// `|a - b| <= atol + rtol * |b|`, the closeness test used for tolerances.
    fn is_close(a: Self, b: Self, atol: Self, rtol: Self) -> bool {
        <Self as Float>::abs(a - b) <= atol + rtol * <Self as Float>::abs(b)
    }
}

impl Scalar for f32 {
    const SPACING_TOLERANCE: Self = 1e-5;
    const STEP_ABS_TOLERANCE: Self = 1e-5;
    const STEP_REL_TOLERANCE: Self = 1e-5;
}

impl Scalar for f64 {
    const SPACING_TOLERANCE: Self = 1e-9;
    const STEP_ABS_TOLERANCE: Self = 1e-9;
    const STEP_REL_TOLERANCE: Self = 1e-9;
}

/// Type alias for a dynamically-sized matrix.
pub type DMatrix<T> = OMatrix<T, Dyn, Dyn>;
