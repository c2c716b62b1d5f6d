//! Property tests for exactness and agreement guarantees.
//!
//! Each property holds for any input in the generated ranges: exactness of
//! the quadrature rules on low-degree polynomials, agreement of the two
//! interpolation forms, and the convergence order of the difference schemes.

use numerik_methods::{
    lagrange_interpolation, n_from_step, newton_interpolation, relative_error,
    simpsons_from_points, simpsons_rule, trapezoidal_from_points, trapezoidal_rule,
    DifferenceScheme,
};
use proptest::prelude::*;

/// Strictly increasing nodes: a start value followed by positive gaps.
fn increasing_nodes(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    (-5.0f64..5.0, prop::collection::vec(0.5f64..1.5, 1..max_len)).prop_map(|(start, gaps)| {
        let mut nodes = vec![start];
        for gap in gaps {
            let last = nodes[nodes.len() - 1];
            nodes.push(last + gap);
        }
        nodes
    })
}

/// Sum of the absolute Lagrange terms at `x`: the scale of the rounding error
/// either evaluation form can accumulate.
fn lagrange_magnitude(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    xs.iter()
        .zip(ys)
        .enumerate()
        .map(|(i, (&xi, &yi))| {
            let basis: f64 = xs
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &xj)| ((x - xj) / (xi - xj)).abs())
                .product();
            yi.abs() * basis
        })
        .sum()
}

proptest! {
    #[test]
    fn trapezoid_is_exact_for_linear_functions(
        slope in -10.0f64..10.0,
        intercept in -10.0f64..10.0,
        a in -5.0f64..5.0,
        width in 0.1f64..10.0,
        n in 1usize..64,
    ) {
        let b = a + width;
        let f = |x: f64| slope * x + intercept;
        let exact = slope * (b * b - a * a) / 2.0 + intercept * (b - a);
        let approx = trapezoidal_rule(&f, a, b, n).unwrap();
        prop_assert!((approx - exact).abs() <= 1e-9 * (1.0 + exact.abs()));
    }

    #[test]
    fn simpson_is_exact_for_cubics(
        c in prop::array::uniform4(-5.0f64..5.0),
        a in -3.0f64..3.0,
        width in 0.1f64..6.0,
        half_n in 1usize..32,
    ) {
        let b = a + width;
        let f = |x: f64| c[0] + c[1] * x + c[2] * x * x + c[3] * x * x * x;
        let antiderivative =
            |x: f64| c[0] * x + c[1] * x * x / 2.0 + c[2] * x.powi(3) / 3.0 + c[3] * x.powi(4) / 4.0;
        let exact = antiderivative(b) - antiderivative(a);
        let approx = simpsons_rule(&f, a, b, 2 * half_n).unwrap();
        prop_assert!((approx - exact).abs() <= 1e-9 * (1.0 + exact.abs()));
    }

    #[test]
    fn point_rules_match_function_rules_on_uniform_samples(
        c in prop::array::uniform3(-5.0f64..5.0),
        half_n in 1usize..16,
    ) {
        let n = 2 * half_n;
        let f = |x: f64| c[0] + c[1] * x + c[2] * x * x;
        let xs: Vec<f64> = (0..=n).map(|i| i as f64 * 0.5).collect();
        let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();
        let b = xs[n];

        let trap = trapezoidal_from_points(&xs, &ys).unwrap();
        prop_assert!((trap - trapezoidal_rule(&f, 0.0, b, n).unwrap()).abs() < 1e-9);

        let simp = simpsons_from_points(&xs, &ys, 1e-9).unwrap();
        prop_assert!((simp - simpsons_rule(&f, 0.0, b, n).unwrap()).abs() < 1e-9);
    }

    #[test]
    fn step_count_recovers_n(n in 1usize..200, h in prop::sample::select(vec![0.5f64, 0.25, 0.125, 1.0, 2.0])) {
        let b = n as f64 * h;
        prop_assert_eq!(n_from_step(0.0, b, h).unwrap(), n);
    }

    #[test]
    fn newton_and_lagrange_agree(
        xs in increasing_nodes(7),
        seed_ys in prop::collection::vec(-10.0f64..10.0, 7),
        t in 0.0f64..1.0,
    ) {
        let ys = &seed_ys[..xs.len()];
        let lo = xs[0];
        let hi = xs[xs.len() - 1];
        let x = lo - 0.5 + t * (hi - lo + 1.0);

        let newton = newton_interpolation(x, &xs, ys).unwrap();
        let lagrange = lagrange_interpolation(x, &xs, ys).unwrap();
        let scale = lagrange_magnitude(x, &xs, ys).max(1.0);
        prop_assert!(
            (newton - lagrange).abs() <= 1e-9 * scale,
            "newton = {}, lagrange = {}, scale = {}", newton, lagrange, scale
        );
    }

    #[test]
    fn interpolants_reproduce_their_nodes(
        xs in increasing_nodes(6),
        seed_ys in prop::collection::vec(-10.0f64..10.0, 6),
    ) {
        let ys = &seed_ys[..xs.len()];
        for (&x, &y) in xs.iter().zip(ys) {
            prop_assert!((newton_interpolation(x, &xs, ys).unwrap() - y).abs() < 1e-8);
            prop_assert!((lagrange_interpolation(x, &xs, ys).unwrap() - y).abs() < 1e-12);
        }
    }

    #[test]
    fn relative_error_of_exact_match_is_zero(a in prop::num::f64::NORMAL) {
        prop_assert_eq!(relative_error(a, a).unwrap(), 0.0);
        prop_assert!(relative_error(a, 0.0).is_err());
    }
}

#[test]
fn central_difference_converges_quadratically_on_sine() {
    let f = |x: f64| x.sin();
    let exact = 1.0f64.cos();
    let error = |scheme: DifferenceScheme, h: f64| (scheme.estimate(&f, 1.0, h) - exact).abs();

    for h in [1e-2, 1e-3] {
        let central = error(DifferenceScheme::Central, h);
        assert!(central < error(DifferenceScheme::Forward, h));
        assert!(central < error(DifferenceScheme::Backward, h));
    }

    // shrinking h tenfold: one-sided error drops ~10x, central ~100x
    for scheme in DifferenceScheme::ALL {
        let ratio = error(scheme, 1e-2) / error(scheme, 1e-3);
        let expected = 10f64.powi(scheme.order() as i32);
        assert!(
            (0.8 * expected..1.2 * expected).contains(&ratio),
            "{scheme}: error ratio {ratio}, expected about {expected}"
        );
    }
}
