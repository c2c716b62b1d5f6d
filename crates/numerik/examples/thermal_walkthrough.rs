//! Example: a tour of the numerical routines on a cooling experiment.
//!
//! A cup of coffee is left to cool and its temperature is read every minute.
//! The example interpolates the readings, integrates them, estimates the
//! cooling rate by finite differences and compares every estimate against
//! the closed-form Newton cooling law.
//!
//! Run with `RUST_LOG=numerik_methods=trace` to see every evaluation.

use numerik::prelude::*;
use tracing_subscriber::EnvFilter;

/// Room temperature in °C
const AMBIENT: f64 = 20.0;
/// Initial temperature in °C
const INITIAL: f64 = 90.0;
/// Cooling constant in 1/min
const RATE: f64 = 0.1;

/// Newton's law of cooling, `T(t) = T_a + (T_0 - T_a) e^{-kt}`.
fn temperature(t: f64) -> f64 {
    AMBIENT + (INITIAL - AMBIENT) * (-RATE * t).exp()
}

/// `dT/dt`
fn cooling_rate(t: f64) -> f64 {
    -RATE * (INITIAL - AMBIENT) * (-RATE * t).exp()
}

/// `∫₀ᵗ T(s) ds`
fn heat_integral(t: f64) -> f64 {
    AMBIENT * t + (INITIAL - AMBIENT) / RATE * (1.0 - (-RATE * t).exp())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Cooling curve walkthrough ===\n");

    let config = ToleranceConfig::default();
    let mut history = ResultHistory::new();

    // Readings every minute for ten minutes
    let times = linspace(0.0, 10.0, 11)?;
    let readings = SampleSet::new(times.clone(), temperature.values(&times))?;
    println!("Collected {} readings over {:?} min", readings.len(), readings.x_range());

    // Differentiation
    println!("\n--- Cooling rate at t = 4 min ---");
    let t0 = 4.0;
    let h = 0.05;
    for scheme in DifferenceScheme::ALL {
        let estimate = scheme.estimate(&temperature, t0, h);
        let record = history.record(format!("Symbolic vs {scheme}"), cooling_rate(t0), estimate);
        let report = record.report(&config);
        println!(
            "{:<28} {:>12.8} °C/min  abs err {:.3e}  (order {})",
            scheme.to_string(),
            estimate,
            report.absolute_error,
            scheme.order()
        );
    }

    // Integration
    println!("\n--- Temperature-time integral over [0, 10] ---");
    let exact = heat_integral(10.0);
    for rule in [QuadratureRule::Trapezoidal, QuadratureRule::Simpson] {
        let from_function = rule.integrate_with_step(&temperature, 0.0, 10.0, 0.5)?;
        let from_readings = rule.integrate_points(readings.xs(), readings.ys(), &config)?;
        history.record(format!("Symbolic vs {rule}"), exact, from_readings);
        println!(
            "{:<20} function (h = 0.5): {:.6}  readings: {:.6}  exact: {:.6}",
            rule.to_string(),
            from_function,
            from_readings,
            exact
        );
    }

    match n_from_step(0.0, 10.0, 0.3) {
        Ok(n) => println!("h = 0.3 gives {n} subintervals"),
        Err(err) => println!("h = 0.3 rejected: {err}"),
    }

    // Interpolation
    println!("\n--- Temperature between readings ---");
    let polynomial = NewtonPolynomial::new(readings.xs(), readings.ys())?;
    println!("Newton coefficients: {:?}", &polynomial.coefficients()[..4]);
    for t in [2.5, 7.25, 12.0] {
        let newton = polynomial.evaluate(t);
        let lagrange = lagrange_interpolation(t, readings.xs(), readings.ys())?;
        history.record(format!("Symbolic vs Newton at t = {t}"), temperature(t), newton);
        println!(
            "t = {t:>5}: newton {newton:.6}  lagrange {lagrange:.6}  ({})",
            polynomial.classify(t)
        );
    }

    let curve = sample_interpolant(
        readings.xs(),
        readings.ys(),
        InterpolationMethod::Newton,
        DEFAULT_SERIES_POINTS,
    )?;
    let peak_deviation = curve
        .points()
        .map(|(t, value)| absolute_error(value, temperature(t)))
        .fold(0.0, f64::max);
    println!(
        "Sampled {} points of the interpolant, max deviation {peak_deviation:.3e} °C",
        curve.len()
    );

    // Error analysis
    println!("\n--- Recorded comparisons ---");
    for record in history.records() {
        let report = record.report(&config);
        let relative = report
            .relative_percent()
            .map_or_else(|| "n/a".to_string(), |r| format!("{r:.4e} %"));
        let warning = if report.loss_of_significance {
            "  [possible loss of significance]"
        } else {
            ""
        };
        println!(
            "{:<45} abs {:.3e}  rel {relative}{warning}",
            record.description, report.absolute_error
        );
    }

    if let Some(latest) = history.report_latest(&config) {
        println!("\nLatest comparison: absolute error {:.3e}", latest.absolute_error);
    }

    Ok(())
}
