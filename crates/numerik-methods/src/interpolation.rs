//! Polynomial interpolation and extrapolation through a fixed node set.
//!
//! Both forms build the unique polynomial of degree `n - 1` through `n`
//! distinct nodes, so [`newton_interpolation`] and [`lagrange_interpolation`]
//! agree up to rounding. Whether the evaluation point lies inside the node
//! range ([`EvaluationKind`]) is advisory and never changes the arithmetic.
//!
//! Coincident nodes are not pre-checked: they surface as a `DomainError` at
//! the division where the zero denominator appears.

use numerik_core::samples::{ensure_min_points, ensure_same_length};
use numerik_core::types::DMatrix;
use numerik_core::{NumericsError, Result, Scalar};
use std::fmt;
use tracing::trace;

fn coincident_nodes<T: Scalar>(i: usize, j: usize, x: T) -> NumericsError {
    NumericsError::domain_error(format!(
        "division by zero: nodes {i} and {j} share the abscissa {x}"
    ))
}

/// Newton divided-difference coefficients `f[x₀], f[x₀,x₁], …, f[x₀,…,xₙ₋₁]`.
///
/// Builds the `n × n` table column by column (column 0 is `ys`, entry
/// `(i, j)` is `(T[i+1, j-1] - T[i, j-1]) / (xs[i+j] - xs[i])`) and returns its
/// top row.
///
/// # Errors
///
/// `InvalidArgument` if the lengths differ or no node is given;
/// `DomainError` if two abscissae coincide.
pub fn divided_differences<T: Scalar>(xs: &[T], ys: &[T]) -> Result<Vec<T>> {
    ensure_same_length(xs, ys)?;
    ensure_min_points(xs, 1)?;

    let n = xs.len();
    let mut table = DMatrix::<T>::zeros(n, n);
    for (i, &y) in ys.iter().enumerate() {
        table[(i, 0)] = y;
    }

    for j in 1..n {
        for i in 0..n - j {
            let denominator = xs[i + j] - xs[i];
            if denominator == T::zero() {
                return Err(coincident_nodes(i, i + j, xs[i]));
            }
            table[(i, j)] = (table[(i + 1, j - 1)] - table[(i, j - 1)]) / denominator;
        }
    }

    Ok(table.row(0).iter().copied().collect())
}

/// Newton form of an interpolating polynomial, reusable across evaluations.
#[derive(Debug, Clone, PartialEq)]
pub struct NewtonPolynomial<T> {
    nodes: Vec<T>,
    coefficients: Vec<T>,
}

impl<T: Scalar> NewtonPolynomial<T> {
    /// Build the polynomial through `(xs[i], ys[i])`.
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self> {
        let coefficients = divided_differences(xs, ys)?;
        Ok(Self {
            nodes: xs.to_vec(),
            coefficients,
        })
    }

    /// Evaluate with Horner's scheme, highest-order coefficient first.
    pub fn evaluate(&self, x: T) -> T {
        let n = self.coefficients.len();
        let mut result = self.coefficients[n - 1];
        for k in (0..n - 1).rev() {
            result = result * (x - self.nodes[k]) + self.coefficients[k];
        }
        result
    }

    /// Divided-difference coefficients, order 0 first.
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Interpolation nodes in the order they were given.
    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    /// Degree bound of the polynomial (`n - 1`).
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Whether `x` is an interpolation or an extrapolation for these nodes.
    pub fn classify(&self, x: T) -> EvaluationKind {
        classify_evaluation(x, &self.nodes)
    }
}

/// Evaluate the Newton-form interpolating polynomial through `(xs, ys)` at `x`.
///
/// Costs O(n²) for the table plus O(n) for the evaluation.
///
/// # Errors
///
/// As [`divided_differences`].
pub fn newton_interpolation<T: Scalar>(x: T, xs: &[T], ys: &[T]) -> Result<T> {
    let value = NewtonPolynomial::new(xs, ys)?.evaluate(x);
    trace!(x = %x, nodes = xs.len(), value = %value, "newton interpolation");
    Ok(value)
}

/// Evaluate the Lagrange-form interpolating polynomial through `(xs, ys)` at `x`.
///
/// Sums `ys[i] · Π_{j≠i} (x - xs[j]) / (xs[i] - xs[j])` over all nodes.
///
/// # Errors
///
/// `InvalidArgument` if the lengths differ or no node is given;
/// `DomainError` if two abscissae coincide.
pub fn lagrange_interpolation<T: Scalar>(x: T, xs: &[T], ys: &[T]) -> Result<T> {
    ensure_same_length(xs, ys)?;
    ensure_min_points(xs, 1)?;

    let mut total = T::zero();
    for (i, (&xi, &yi)) in xs.iter().zip(ys).enumerate() {
        let mut term = yi;
        for (j, &xj) in xs.iter().enumerate() {
            if j == i {
                continue;
            }
            let denominator = xi - xj;
            if denominator == T::zero() {
                return Err(coincident_nodes(i.min(j), i.max(j), xi));
            }
            term = term * (x - xj) / denominator;
        }
        total = total + term;
    }

    trace!(x = %x, nodes = xs.len(), value = %total, "lagrange interpolation");
    Ok(total)
}

/// Where an evaluation point sits relative to the node range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvaluationKind {
    /// `min(X) <= x <= max(X)`
    Interpolation,
    /// Outside the node range (or NaN)
    Extrapolation,
}

/// Classify `x` against `[min(xs), max(xs)]`. An empty node set has no range,
/// so every point is an extrapolation.
pub fn classify_evaluation<T: Scalar>(x: T, xs: &[T]) -> EvaluationKind {
    let Some(&first) = xs.first() else {
        return EvaluationKind::Extrapolation;
    };
    let (lo, hi) = xs
        .iter()
        .fold((first, first), |(lo, hi), &xi| (lo.min(xi), hi.max(xi)));
    if x >= lo && x <= hi {
        EvaluationKind::Interpolation
    } else {
        EvaluationKind::Extrapolation
    }
}

impl fmt::Display for EvaluationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interpolation => f.write_str("interpolation"),
            Self::Extrapolation => f.write_str("extrapolation"),
        }
    }
}

/// The two interpolation forms, for callers that pick one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationMethod {
    /// Newton divided differences with Horner evaluation
    Newton,
    /// Lagrange basis polynomials
    Lagrange,
}

impl InterpolationMethod {
    /// Evaluate the interpolating polynomial through `(xs, ys)` at `x`.
    pub fn evaluate<T: Scalar>(self, x: T, xs: &[T], ys: &[T]) -> Result<T> {
        match self {
            Self::Newton => newton_interpolation(x, xs, ys),
            Self::Lagrange => lagrange_interpolation(x, xs, ys),
        }
    }
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Newton => f.write_str("Newton Divided Difference"),
            Self::Lagrange => f.write_str("Lagrange"),
        }
    }
}
