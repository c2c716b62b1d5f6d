//! Composite Newton-Cotes quadrature.
//!
//! Two input modes are supported:
//!
//! - **Function-based**: a callable over `[a, b]` split into `N` equal
//!   subintervals ([`trapezoidal_rule`], [`simpsons_rule`]). `N` can be derived
//!   from a step size with [`n_from_step`].
//! - **Point-based**: tabulated samples ([`trapezoidal_from_points`] accepts
//!   irregular spacing, [`simpsons_from_points`] requires uniform spacing).
//!
//! All preconditions are checked before any evaluation of `f`, and a failure
//! never returns a partial sum.

use numerik_core::samples::{ensure_min_points, ensure_same_length, ensure_strictly_increasing};
use numerik_core::{NumericsError, RealFunction, Result, Scalar, ToleranceConfig};
use num_traits::{Float, ToPrimitive};
use std::fmt;
use tracing::{debug, trace};

/// `N + 1` equally spaced nodes over `[a, b]`; the last node is exactly `b`.
fn uniform_nodes<T: Scalar>(a: T, b: T, n: usize) -> Vec<T> {
    let h = (b - a) / <T as Scalar>::from_usize(n);
    let mut nodes: Vec<T> = (0..n)
        .map(|i| a + <T as Scalar>::from_usize(i) * h)
        .collect();
    nodes.push(b);
    nodes
}

/// Evaluate `f` on the `N + 1` uniform nodes of `[a, b]`.
fn evaluate_nodes<T, F>(f: &F, a: T, b: T, n: usize) -> Result<Vec<T>>
where
    T: Scalar,
    F: RealFunction<T> + ?Sized,
{
    let ys = f.values(&uniform_nodes(a, b, n));
    if ys.len() != n + 1 {
        debug!(expected = n + 1, got = ys.len(), "function returned wrong number of values");
        return Err(NumericsError::invalid_argument(format!(
            "function returned {} values for {} nodes",
            ys.len(),
            n + 1
        )));
    }
    Ok(ys)
}

/// `h/2 · (y₀ + 2·Σ interior + y_N)`
fn trapezoid_sum<T: Scalar>(ys: &[T], h: T) -> T {
    let two = T::one() + T::one();
    let last = ys.len() - 1;
    let interior = ys[1..last].iter().fold(T::zero(), |acc, &y| acc + y);
    h / two * (ys[0] + two * interior + ys[last])
}

/// `h/3 · (y₀ + y_N + 4·Σ odd interior + 2·Σ even interior)`
fn simpson_sum<T: Scalar>(ys: &[T], h: T) -> T {
    let two = T::one() + T::one();
    let three = two + T::one();
    let four = two + two;
    let last = ys.len() - 1;
    let (odd, even) = ys[1..last]
        .iter()
        .enumerate()
        .fold((T::zero(), T::zero()), |(odd, even), (i, &y)| {
            // ys[1..] starts at index 1, so an even offset is an odd node
            if i % 2 == 0 {
                (odd + y, even)
            } else {
                (odd, even + y)
            }
        });
    h / three * (ys[0] + ys[last] + four * odd + two * even)
}

fn ensure_positive_subintervals(n: usize) -> Result<()> {
    if n == 0 {
        debug!(n, "rejected subinterval count");
        return Err(NumericsError::invalid_argument(
            "N must be a positive integer (got 0)",
        ));
    }
    Ok(())
}

fn ensure_even_subintervals(n: usize) -> Result<()> {
    if n % 2 != 0 {
        debug!(n, "rejected odd subinterval count");
        return Err(NumericsError::invalid_argument(format!(
            "Simpson's rule requires N to be even (got {n})"
        )));
    }
    Ok(())
}

/// Composite trapezoidal rule for `f` on `[a, b]` with `n` subintervals.
///
/// Exact for linear `f` regardless of `n`.
///
/// # Errors
///
/// `InvalidArgument` if `n == 0`.
pub fn trapezoidal_rule<T, F>(f: &F, a: T, b: T, n: usize) -> Result<T>
where
    T: Scalar,
    F: RealFunction<T> + ?Sized,
{
    ensure_positive_subintervals(n)?;

    let h = (b - a) / <T as Scalar>::from_usize(n);
    let ys = evaluate_nodes(f, a, b, n)?;
    let integral = trapezoid_sum(&ys, h);
    trace!(a = %a, b = %b, n, integral = %integral, "trapezoidal rule");
    Ok(integral)
}

/// Composite Simpson's 1/3 rule for `f` on `[a, b]` with `n` subintervals.
///
/// Exact for polynomials of degree three or less.
///
/// # Errors
///
/// `InvalidArgument` if `n == 0` or `n` is odd.
pub fn simpsons_rule<T, F>(f: &F, a: T, b: T, n: usize) -> Result<T>
where
    T: Scalar,
    F: RealFunction<T> + ?Sized,
{
    ensure_positive_subintervals(n)?;
    ensure_even_subintervals(n)?;

    let h = (b - a) / <T as Scalar>::from_usize(n);
    let ys = evaluate_nodes(f, a, b, n)?;
    let integral = simpson_sum(&ys, h);
    trace!(a = %a, b = %b, n, integral = %integral, "simpson's rule");
    Ok(integral)
}

/// Number of subintervals `N = (b - a) / h`, using the default tolerances.
///
/// # Errors
///
/// `InvalidArgument` if `h <= 0`, `b <= a`, the rounded count is not positive,
/// or `h` does not evenly tile `[a, b]`.
pub fn n_from_step<T: Scalar>(a: T, b: T, h: T) -> Result<usize> {
    n_from_step_with(a, b, h, &ToleranceConfig::default())
}

/// Like [`n_from_step`], with the tiling tolerances taken from `config`.
pub fn n_from_step_with<T: Scalar>(a: T, b: T, h: T, config: &ToleranceConfig<T>) -> Result<usize> {
    if !(h > T::zero()) {
        debug!(h = %h, "rejected step size");
        return Err(NumericsError::invalid_argument(format!(
            "h must be positive (got {h})"
        )));
    }
    let length = b - a;
    if !(length > T::zero()) {
        debug!(a = %a, b = %b, "rejected interval");
        return Err(NumericsError::invalid_argument(format!(
            "b must be greater than a (got a = {a}, b = {b})"
        )));
    }

    let n_float = length / h;
    let n_rounded = <T as Float>::round(n_float);
    if !(n_rounded > T::zero()) {
        return Err(NumericsError::invalid_argument(format!(
            "computed N is not positive ((b - a) / h = {n_float})"
        )));
    }
    if !T::is_close(
        n_float,
        n_rounded,
        config.step_abs_tolerance,
        config.step_rel_tolerance,
    ) {
        debug!(h = %h, n_float = %n_float, "step does not tile interval");
        return Err(NumericsError::invalid_argument(format!(
            "h must evenly divide the interval (b - a): (b - a) / h = {n_float}"
        )));
    }

    let n = n_rounded.to_usize().ok_or_else(|| {
        NumericsError::invalid_argument(format!("computed N = {n_rounded} is out of range"))
    })?;
    trace!(a = %a, b = %b, h = %h, n, "step converted to subinterval count");
    Ok(n)
}

/// Composite trapezoidal rule over tabulated samples.
///
/// Spacing may be irregular; the integral is `Σ dxᵢ · (yᵢ + yᵢ₊₁) / 2`.
///
/// # Errors
///
/// `InvalidArgument` if the lengths differ, fewer than two points are given,
/// or `xs` is not strictly increasing.
pub fn trapezoidal_from_points<T: Scalar>(xs: &[T], ys: &[T]) -> Result<T> {
    ensure_same_length(xs, ys)?;
    ensure_min_points(xs, 2)?;
    ensure_strictly_increasing(xs)?;

    let two = T::one() + T::one();
    let integral = xs
        .windows(2)
        .zip(ys.windows(2))
        .fold(T::zero(), |acc, (x, y)| acc + (x[1] - x[0]) * (y[0] + y[1]) / two);
    trace!(points = xs.len(), integral = %integral, "trapezoidal rule over samples");
    Ok(integral)
}

/// Composite Simpson's 1/3 rule over uniformly spaced samples.
///
/// Every consecutive spacing must match `h = xs[1] - xs[0]` within
/// `tolerance` (absolute).
///
/// # Errors
///
/// `InvalidArgument`, with a distinct reason, if the lengths differ, fewer
/// than three points are given, the number of subintervals is odd, `xs` is
/// not strictly increasing, the spacing is not uniform, or `tolerance` is
/// negative.
pub fn simpsons_from_points<T: Scalar>(xs: &[T], ys: &[T], tolerance: T) -> Result<T> {
    if !(tolerance >= T::zero()) {
        return Err(NumericsError::invalid_argument(format!(
            "spacing tolerance must be non-negative (got {tolerance})"
        )));
    }
    ensure_same_length(xs, ys)?;
    ensure_min_points(xs, 3)?;
    if (xs.len() - 1) % 2 != 0 {
        debug!(points = xs.len(), "rejected even point count");
        return Err(NumericsError::invalid_argument(format!(
            "Simpson's rule requires an even number of subintervals (odd number of points, got {})",
            xs.len()
        )));
    }
    ensure_strictly_increasing(xs)?;

    let h = xs[1] - xs[0];
    if let Some(i) = xs
        .windows(2)
        .position(|w| !T::is_close(w[1] - w[0], h, tolerance, T::zero()))
    {
        debug!(index = i, h = %h, "rejected non-uniform spacing");
        return Err(NumericsError::invalid_argument(format!(
            "Simpson's rule requires uniformly spaced x values: x[{}] - x[{}] = {} differs from h = {}",
            i + 1,
            i,
            xs[i + 1] - xs[i],
            h
        )));
    }

    let integral = simpson_sum(ys, h);
    trace!(points = xs.len(), integral = %integral, "simpson's rule over samples");
    Ok(integral)
}

/// Like [`simpsons_from_points`], with the spacing tolerance from `config`.
pub fn simpsons_from_points_with<T: Scalar>(
    xs: &[T],
    ys: &[T],
    config: &ToleranceConfig<T>,
) -> Result<T> {
    simpsons_from_points(xs, ys, config.spacing_tolerance)
}

/// The composite quadrature rules, for callers that pick one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuadratureRule {
    /// Composite trapezoidal rule
    Trapezoidal,
    /// Composite Simpson's 1/3 rule
    Simpson,
}

impl QuadratureRule {
    /// Integrate `f` over `[a, b]` with `n` subintervals.
    pub fn integrate<T, F>(self, f: &F, a: T, b: T, n: usize) -> Result<T>
    where
        T: Scalar,
        F: RealFunction<T> + ?Sized,
    {
        match self {
            Self::Trapezoidal => trapezoidal_rule(f, a, b, n),
            Self::Simpson => simpsons_rule(f, a, b, n),
        }
    }

    /// Integrate `f` over `[a, b]` with step `h`, which must tile the interval.
    pub fn integrate_with_step<T, F>(self, f: &F, a: T, b: T, h: T) -> Result<T>
    where
        T: Scalar,
        F: RealFunction<T> + ?Sized,
    {
        let n = n_from_step(a, b, h)?;
        self.integrate(f, a, b, n)
    }

    /// Integrate tabulated samples.
    pub fn integrate_points<T: Scalar>(
        self,
        xs: &[T],
        ys: &[T],
        config: &ToleranceConfig<T>,
    ) -> Result<T> {
        match self {
            Self::Trapezoidal => trapezoidal_from_points(xs, ys),
            Self::Simpson => simpsons_from_points_with(xs, ys, config),
        }
    }

    /// Smallest number of samples the point-based form accepts.
    pub fn min_points(self) -> usize {
        match self {
            Self::Trapezoidal => 2,
            Self::Simpson => 3,
        }
    }
}

impl fmt::Display for QuadratureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trapezoidal => f.write_str("Trapezoidal Rule"),
            Self::Simpson => f.write_str("Simpson's 1/3 Rule"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_nodes_end_exactly_at_b() {
        let nodes = uniform_nodes(0.0, 1.0, 3);
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[0], 0.0);
        assert_eq!(nodes[3], 1.0);
        assert_relative_eq!(nodes[1], 1.0 / 3.0);
    }

    #[test]
    fn test_simpson_weights() {
        // weights 1 4 2 4 1 with h/3
        let ys = [1.0, 1.0, 1.0, 1.0, 1.0];
        assert_relative_eq!(simpson_sum(&ys, 0.5), 2.0);
        let ys = [0.0, 1.0, 0.0, 0.0, 0.0];
        assert_relative_eq!(simpson_sum(&ys, 3.0), 4.0);
        let ys = [0.0, 0.0, 1.0, 0.0, 0.0];
        assert_relative_eq!(simpson_sum(&ys, 3.0), 2.0);
    }

    #[test]
    fn test_trapezoidal_rule_single_subinterval() {
        let f = |x: f64| x * x;
        // (2 - 0) / 2 * (0 + 4)
        assert_relative_eq!(trapezoidal_rule(&f, 0.0, 2.0, 1).unwrap(), 4.0);
    }

    #[test]
    fn test_simpsons_rule_exact_for_quadratic() {
        let f = |x: f64| x * x;
        assert_eq!(simpsons_rule(&f, 0.0, 3.0, 2).unwrap(), 9.0);
    }

    #[test]
    fn test_subinterval_preconditions() {
        let f = |x: f64| x;
        let err = trapezoidal_rule(&f, 0.0, 1.0, 0).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.reason().contains("positive"));

        let err = simpsons_rule(&f, 0.0, 1.0, 0).unwrap_err();
        assert!(err.reason().contains("positive"));

        let err = simpsons_rule(&f, 0.0, 1.0, 3).unwrap_err();
        assert!(err.reason().contains("even"));
    }

    #[test]
    fn test_preconditions_checked_before_evaluation() {
        let calls = std::cell::Cell::new(0usize);
        let f = |x: f64| {
            calls.set(calls.get() + 1);
            x
        };
        assert!(simpsons_rule(&f, 0.0, 1.0, 5).is_err());
        assert_eq!(calls.get(), 0);
        assert!(simpsons_rule(&f, 0.0, 1.0, 4).is_ok());
        assert_eq!(calls.get(), 5);
    }

    /// Grid evaluator that drops every value.
    struct Truncating;

    impl RealFunction<f64> for Truncating {
        fn value(&self, x: f64) -> f64 {
            x
        }

        fn values(&self, _xs: &[f64]) -> Vec<f64> {
            Vec::new()
        }
    }

    #[test]
    fn test_short_grid_evaluation_is_rejected() {
        let err = trapezoidal_rule(&Truncating, 0.0, 1.0, 4).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.reason().contains("0 values for 5 nodes"));

        let err = simpsons_rule(&Truncating, 0.0, 1.0, 2).unwrap_err();
        assert!(err.reason().contains("0 values for 3 nodes"));
    }

    #[test]
    fn test_n_from_step() {
        assert_eq!(n_from_step(0.0, 3.0, 0.5).unwrap(), 6);
        assert_eq!(n_from_step(0.0, 1.0, 0.1).unwrap(), 10);

        let err = n_from_step(0.0, 3.0, 0.7).unwrap_err();
        assert!(err.reason().contains("evenly divide"));

        assert!(n_from_step(0.0, 3.0, 0.0).unwrap_err().reason().contains("h must be positive"));
        assert!(n_from_step(0.0, 3.0, -0.5).is_err());
        assert!(n_from_step(3.0, 0.0, 0.5)
            .unwrap_err()
            .reason()
            .contains("b must be greater than a"));
        assert!(n_from_step(0.0, 1.0, 10.0)
            .unwrap_err()
            .reason()
            .contains("not positive"));
        assert!(n_from_step(0.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_n_from_step_with_loose_tolerance() {
        let config = ToleranceConfig::new().with_step_tolerances(0.5, 0.0);
        // 3 / 0.7 = 4.29 rounds to 4 and sits within 0.5
        assert_eq!(n_from_step_with(0.0, 3.0, 0.7, &config).unwrap(), 4);
    }

    #[test]
    fn test_trapezoidal_from_points() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [0.0, 1.0, 4.0, 9.0];
        assert_relative_eq!(trapezoidal_from_points(&xs, &ys).unwrap(), 9.5);

        // irregular spacing
        let xs = [0.0, 0.5, 2.0];
        let ys = [1.0, 1.0, 1.0];
        assert_relative_eq!(trapezoidal_from_points(&xs, &ys).unwrap(), 2.0);
    }

    #[test]
    fn test_trapezoidal_from_points_preconditions() {
        let err = trapezoidal_from_points(&[0.0, 1.0], &[0.0]).unwrap_err();
        assert!(err.reason().contains("same length"));

        let err = trapezoidal_from_points(&[0.0], &[0.0]).unwrap_err();
        assert!(err.reason().contains("at least 2"));

        let err = trapezoidal_from_points(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0]).unwrap_err();
        assert!(err.reason().contains("strictly increasing"));

        assert!(trapezoidal_from_points(&[1.0, 0.0], &[0.0, 1.0]).is_err());
    }

    #[test]
    fn test_simpsons_from_points() {
        let xs = [0.0, 1.5, 3.0];
        let ys = [0.0, 2.25, 9.0];
        assert_relative_eq!(simpsons_from_points(&xs, &ys, 1e-9).unwrap(), 9.0);

        let xs: Vec<f64> = (0..=10).map(|i| f64::from(i) * 0.1).collect();
        let ys: Vec<f64> = xs.iter().map(|x| x * x * x).collect();
        assert_relative_eq!(
            simpsons_from_points_with(&xs, &ys, &ToleranceConfig::default()).unwrap(),
            0.25,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_simpsons_from_points_distinct_failures() {
        let reasons: Vec<String> = vec![
            simpsons_from_points(&[0.0, 1.0, 2.0], &[0.0, 1.0], 1e-9),
            simpsons_from_points(&[0.0, 1.0], &[0.0, 1.0], 1e-9),
            simpsons_from_points(&[0.0, 1.0, 2.0, 3.0], &[0.0; 4], 1e-9),
            simpsons_from_points(&[0.0, 1.0, 1.0], &[0.0; 3], 1e-9),
            simpsons_from_points(&[0.0, 1.0, 2.5], &[0.0; 3], 1e-9),
            simpsons_from_points(&[0.0, 1.0, 2.0], &[0.0; 3], -1.0),
        ]
        .into_iter()
        .map(|r| {
            let err = r.unwrap_err();
            assert!(err.is_invalid_argument());
            err.reason().to_string()
        })
        .collect();

        assert!(reasons[0].contains("same length"));
        assert!(reasons[1].contains("at least 3"));
        assert!(reasons[2].contains("even number of subintervals"));
        assert!(reasons[3].contains("strictly increasing"));
        assert!(reasons[4].contains("uniformly spaced"));
        assert!(reasons[5].contains("tolerance"));
    }

    #[test]
    fn test_spacing_tolerance_is_respected() {
        let xs = [0.0, 1.0, 2.0 + 1e-6];
        let ys = [1.0, 1.0, 1.0];
        assert!(simpsons_from_points(&xs, &ys, 1e-9).is_err());
        assert!(simpsons_from_points(&xs, &ys, 1e-5).is_ok());
    }

    #[test]
    fn test_quadrature_rule_dispatch() {
        let f = |x: f64| 2.0 * x + 1.0;
        for rule in [QuadratureRule::Trapezoidal, QuadratureRule::Simpson] {
            assert_relative_eq!(rule.integrate(&f, 0.0, 2.0, 4).unwrap(), 6.0);
            assert_relative_eq!(rule.integrate_with_step(&f, 0.0, 2.0, 0.5).unwrap(), 6.0);
            let xs = [0.0, 1.0, 2.0];
            let ys = [1.0, 3.0, 5.0];
            assert_relative_eq!(
                rule.integrate_points(&xs, &ys, &ToleranceConfig::default()).unwrap(),
                6.0
            );
        }
        assert!(QuadratureRule::Simpson
            .integrate_with_step(&f, 0.0, 3.0, 1.0)
            .is_err());
        assert_eq!(QuadratureRule::Simpson.min_points(), 3);
        assert_eq!(QuadratureRule::Trapezoidal.to_string(), "Trapezoidal Rule");
    }
}
