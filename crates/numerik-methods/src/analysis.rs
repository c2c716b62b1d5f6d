//! Error measures between an approximation and a reference value, and a
//! caller-owned history of computations to compare.
//!
//! The history is a plain value: whoever computes a result records it, and
//! whoever reports on it reads it back. Nothing is kept in global state.

use numerik_core::{NumericsError, Result, Scalar, ToleranceConfig};
use num_traits::Float;
use tracing::debug;

/// `|approx - exact|`
pub fn absolute_error<T: Scalar>(approx: T, exact: T) -> T {
    <T as Float>::abs(approx - exact)
}

/// `|approx - exact| / |exact|`
///
/// # Errors
///
/// `InvalidArgument` if `exact == 0`. A zero reference is rejected rather
/// than producing an infinity; callers comparing against a possibly-zero
/// value special-case it themselves.
pub fn relative_error<T: Scalar>(approx: T, exact: T) -> Result<T> {
    if exact == T::zero() {
        debug!(approx = %approx, "relative error against zero reference");
        return Err(NumericsError::invalid_argument(
            "exact value cannot be zero for relative error calculation",
        ));
    }
    Ok(absolute_error(approx, exact) / <T as Float>::abs(exact))
}

/// Comparison of one approximation against its reference value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorReport<T> {
    /// Reference (exact or symbolic) value
    pub exact: T,
    /// Numerical approximation
    pub approximation: T,
    /// `|approximation - exact|`
    pub absolute_error: T,
    /// `|approximation - exact| / |exact|`, or `None` when `exact` is zero
    pub relative_error: Option<T>,
    /// A tiny absolute error against a large reference, which usually means
    /// cancellation rather than accuracy
    pub loss_of_significance: bool,
}

impl<T: Scalar> ErrorReport<T> {
    /// Compare `approximation` with `exact` under the thresholds of `config`.
    pub fn compare(approximation: T, exact: T, config: &ToleranceConfig<T>) -> Self {
        let absolute = absolute_error(approximation, exact);
        let loss_of_significance = absolute < config.significance_threshold
            && <T as Float>::abs(exact) > config.significance_magnitude;
        Self {
            exact,
            approximation,
            absolute_error: absolute,
            relative_error: relative_error(approximation, exact).ok(),
            loss_of_significance,
        }
    }

    /// Relative error as a percentage, `None` when `exact` is zero.
    pub fn relative_percent(&self) -> Option<T> {
        self.relative_error
            .map(|r| r * <T as Scalar>::from_f64(100.0))
    }
}

/// One recorded computation: what was computed and the two values to compare.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonRecord<T> {
    /// Free-form label, e.g. "Symbolic vs Central Divided Difference"
    pub description: String,
    /// Reference value
    pub exact: T,
    /// Numerical approximation
    pub approximation: T,
}

impl<T: Scalar> ComparisonRecord<T> {
    /// Error measures for this record.
    pub fn report(&self, config: &ToleranceConfig<T>) -> ErrorReport<T> {
        ErrorReport::compare(self.approximation, self.exact, config)
    }
}

/// Ordered history of computations, owned and passed around by the caller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultHistory<T> {
    records: Vec<ComparisonRecord<T>>,
}

impl<T> Default for ResultHistory<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Scalar> ResultHistory<T> {
    /// An empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a computation and return a reference to the stored record.
    pub fn record<S: Into<String>>(
        &mut self,
        description: S,
        exact: T,
        approximation: T,
    ) -> &ComparisonRecord<T> {
        self.records.push(ComparisonRecord {
            description: description.into(),
            exact,
            approximation,
        });
        &self.records[self.records.len() - 1]
    }

    /// Most recent record, if any.
    pub fn latest(&self) -> Option<&ComparisonRecord<T>> {
        self.records.last()
    }

    /// Error report for the most recent record, if any.
    pub fn report_latest(&self, config: &ToleranceConfig<T>) -> Option<ErrorReport<T>> {
        self.latest().map(|record| record.report(config))
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[ComparisonRecord<T>] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Forget every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
