//! Numeric (x, y) series for a plotting layer.
//!
//! Nothing here renders anything; these helpers only produce the sample
//! grids a caller would hand to a chart.

use crate::interpolation::{lagrange_interpolation, InterpolationMethod, NewtonPolynomial};
use numerik_core::samples::{ensure_min_points, ensure_same_length};
use numerik_core::{NumericsError, RealFunction, Result, Scalar};
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Number of points used when a caller does not pick one.
pub const DEFAULT_SERIES_POINTS: usize = 100;

/// Below this many points the interpolant is sampled sequentially.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 512;

/// Paired x and y values of equal length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series<T> {
    /// Abscissae
    pub xs: Vec<T>,
    /// Ordinates
    pub ys: Vec<T>,
}

impl<T: Scalar> Series<T> {
    /// Number of points.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterate over `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// `n` evenly spaced values from `start` to `end` inclusive.
///
/// # Errors
///
/// `InvalidArgument` if `n == 0`.
pub fn linspace<T: Scalar>(start: T, end: T, n: usize) -> Result<Vec<T>> {
    match n {
        0 => Err(NumericsError::invalid_argument(
            "a series needs at least one point (got 0)",
        )),
        1 => Ok(vec![start]),
        _ => {
            let step = (end - start) / <T as Scalar>::from_usize(n - 1);
            let mut grid: Vec<T> = (0..n - 1)
                .map(|i| start + <T as Scalar>::from_usize(i) * step)
                .collect();
            grid.push(end);
            Ok(grid)
        }
    }
}

/// Sample `f` at `n` evenly spaced points of `[a, b]`.
pub fn sample_function<T, F>(f: &F, a: T, b: T, n: usize) -> Result<Series<T>>
where
    T: Scalar,
    F: RealFunction<T> + ?Sized,
{
    let xs = linspace(a, b, n)?;
    let ys = f.values(&xs);
    ensure_same_length(&xs, &ys)?;
    Ok(Series { xs, ys })
}

/// Sample the interpolating polynomial through `(xs, ys)` at `n` points
/// spanning `[min(xs), max(xs)]`.
pub fn sample_interpolant<T: Scalar>(
    xs: &[T],
    ys: &[T],
    method: InterpolationMethod,
    n: usize,
) -> Result<Series<T>> {
    ensure_same_length(xs, ys)?;
    ensure_min_points(xs, 1)?;
    let (lo, hi) = xs
        .iter()
        .fold((xs[0], xs[0]), |(lo, hi), &x| (lo.min(x), hi.max(x)));
    sample_interpolant_on(xs, ys, method, lo, hi, n)
}

/// Sample the interpolating polynomial through `(xs, ys)` at `n` points of
/// `[start, end]`, which may reach outside the node range.
pub fn sample_interpolant_on<T: Scalar>(
    xs: &[T],
    ys: &[T],
    method: InterpolationMethod,
    start: T,
    end: T,
    n: usize,
) -> Result<Series<T>> {
    let grid = linspace(start, end, n)?;
    let values = match method {
        InterpolationMethod::Newton => {
            let polynomial = NewtonPolynomial::new(xs, ys)?;
            evaluate_grid(&grid, |x| Ok(polynomial.evaluate(x)))?
        }
        InterpolationMethod::Lagrange => {
            evaluate_grid(&grid, |x| lagrange_interpolation(x, xs, ys))?
        }
    };
    trace!(points = grid.len(), method = %method, "sampled interpolant");
    Ok(Series {
        xs: grid,
        ys: values,
    })
}

#[cfg(feature = "parallel")]
fn evaluate_grid<T, G>(grid: &[T], eval: G) -> Result<Vec<T>>
where
    T: Scalar,
    G: Fn(T) -> Result<T> + Sync,
{
    if grid.len() < PARALLEL_THRESHOLD {
        grid.iter().map(|&x| eval(x)).collect()
    } else {
        grid.par_iter().map(|&x| eval(x)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_grid<T, G>(grid: &[T], eval: G) -> Result<Vec<T>>
where
    T: Scalar,
    G: Fn(T) -> Result<T>,
{
    grid.iter().map(|&x| eval(x)).collect()
}
