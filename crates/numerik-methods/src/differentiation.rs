//! Finite-difference derivative estimators.
//!
//! Each estimator evaluates `f` at two points near `x` and returns a slope.
//! The step `h` is not validated: any nonzero `h` (negative included) is
//! mathematically defined, and `h = 0` yields NaN or an infinity that is
//! handed back to the caller unchanged.
//!
//! Truncation error is O(h) for the one-sided schemes and O(h²) for the
//! central scheme.

use numerik_core::{RealFunction, Scalar};
use std::fmt;
use tracing::trace;

/// Forward difference `(f(x + h) - f(x)) / h`.
pub fn forward_difference<T, F>(f: &F, x: T, h: T) -> T
where
    T: Scalar,
    F: RealFunction<T> + ?Sized,
{
    let slope = (f.value(x + h) - f.value(x)) / h;
    trace!(x = %x, h = %h, slope = %slope, "forward difference");
    slope
}

/// Backward difference `(f(x) - f(x - h)) / h`.
pub fn backward_difference<T, F>(f: &F, x: T, h: T) -> T
where
    T: Scalar,
    F: RealFunction<T> + ?Sized,
{
    let slope = (f.value(x) - f.value(x - h)) / h;
    trace!(x = %x, h = %h, slope = %slope, "backward difference");
    slope
}

/// Central difference `(f(x + h) - f(x - h)) / (2h)`.
pub fn central_difference<T, F>(f: &F, x: T, h: T) -> T
where
    T: Scalar,
    F: RealFunction<T> + ?Sized,
{
    let two = T::one() + T::one();
    let slope = (f.value(x + h) - f.value(x - h)) / (two * h);
    trace!(x = %x, h = %h, slope = %slope, "central difference");
    slope
}

/// The three finite-difference schemes, for callers that pick one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DifferenceScheme {
    /// `(f(x + h) - f(x)) / h`
    Forward,
    /// `(f(x) - f(x - h)) / h`
    Backward,
    /// `(f(x + h) - f(x - h)) / (2h)`
    Central,
}

impl DifferenceScheme {
    /// All schemes, in menu order.
    pub const ALL: [Self; 3] = [Self::Backward, Self::Forward, Self::Central];

    /// Estimate `f'(x)` with this scheme.
    pub fn estimate<T, F>(self, f: &F, x: T, h: T) -> T
    where
        T: Scalar,
        F: RealFunction<T> + ?Sized,
    {
        match self {
            Self::Forward => forward_difference(f, x, h),
            Self::Backward => backward_difference(f, x, h),
            Self::Central => central_difference(f, x, h),
        }
    }

    /// Order of accuracy: the truncation error shrinks like `h^order`.
    pub fn order(self) -> u32 {
        match self {
            Self::Forward | Self::Backward => 1,
            Self::Central => 2,
        }
    }
}

impl fmt::Display for DifferenceScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Forward => "Forward Divided Difference",
            Self::Backward => "Backward Divided Difference",
            Self::Central => "Central Divided Difference",
        };
        f.write_str(name)
    }
}
