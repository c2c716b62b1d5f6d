//! Scalar-to-scalar callables consumed by the differentiation and quadrature
//! routines.
//!
//! Any closure or `fn` item of shape `Fn(T) -> T` is a [`RealFunction`]. Types
//! that can evaluate a whole grid more cheaply than point by point (a compiled
//! expression, a lookup table) can implement the trait directly and override
//! [`RealFunction::values`].

use crate::types::Scalar;

/// A real function of one real variable, vectorizable over a grid of points.
pub trait RealFunction<T: Scalar> {
    /// Evaluate the function at a single point.
    fn value(&self, x: T) -> T;

    /// Evaluate the function at every point of `xs`, in order.
    ///
    /// Implementations must return exactly one value per point; callers
    /// reject any other length.
    fn values(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.value(x)).collect()
    }
}

impl<T, F> RealFunction<T> for F
where
    T: Scalar,
    F: Fn(T) -> T + ?Sized,
{
    fn value(&self, x: T) -> T {
        self(x)
    }
}
