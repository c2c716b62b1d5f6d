//! Tabulated (x, y) samples and the shape checks shared by the point-based
//! routines.

use crate::error::{NumericsError, Result};
use crate::types::Scalar;

/// Check that `xs` and `ys` have the same length.
pub fn ensure_same_length<T>(xs: &[T], ys: &[T]) -> Result<()> {
    if xs.len() != ys.len() {
        tracing::debug!(x_len = xs.len(), y_len = ys.len(), "sample lengths differ");
        return Err(NumericsError::length_mismatch(xs.len(), ys.len()));
    }
    Ok(())
}

/// Check that there are at least `required` samples.
pub fn ensure_min_points<T>(xs: &[T], required: usize) -> Result<()> {
    if xs.len() < required {
        tracing::debug!(len = xs.len(), required, "too few samples");
        return Err(NumericsError::too_few_points(required, xs.len()));
    }
    Ok(())
}

/// Check that `xs` is strictly increasing (no duplicate or decreasing values).
pub fn ensure_strictly_increasing<T: Scalar>(xs: &[T]) -> Result<()> {
    let bad_step = xs
        .windows(2)
        .position(|w| w[0].is_nan() || w[1].is_nan() || w[1] - w[0] <= T::zero());
    if let Some(i) = bad_step {
        tracing::debug!(index = i + 1, "abscissae not strictly increasing");
        return Err(NumericsError::invalid_argument(format!(
            "x values must be strictly increasing (no duplicates): x[{}] = {} follows x[{}] = {}",
            i + 1,
            xs[i + 1],
            i,
            xs[i]
        )));
    }
    Ok(())
}

/// An ordered set of samples `(X, Y)` of equal, non-zero length.
///
/// The set is never mutated by the algorithms; callers that need a particular
/// order build a reordered copy with [`SampleSet::sorted_by_x`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SampleSet<T> {
    xs: Vec<T>,
    ys: Vec<T>,
}

impl<T: Scalar> SampleSet<T> {
    /// Build a sample set, rejecting empty or mismatched sequences.
    pub fn new(xs: Vec<T>, ys: Vec<T>) -> Result<Self> {
        ensure_same_length(&xs, &ys)?;
        ensure_min_points(&xs, 1)?;
        Ok(Self { xs, ys })
    }

    /// Build a sample set from `(x, y)` pairs.
    pub fn from_pairs<I: IntoIterator<Item = (T, T)>>(pairs: I) -> Result<Self> {
        let (xs, ys) = pairs.into_iter().unzip();
        Self::new(xs, ys)
    }

    /// Independent-variable positions.
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Observed values.
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false; construction and deserialization reject empty sets.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Smallest and largest abscissa.
    pub fn x_range(&self) -> (T, T) {
        let first = self.xs[0];
        self.xs
            .iter()
            .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x)))
    }

    /// Whether the abscissae are strictly increasing.
    pub fn is_strictly_increasing(&self) -> bool {
        ensure_strictly_increasing(&self.xs).is_ok()
    }

    /// A copy of the set with samples reordered by increasing x.
    ///
    /// NaN abscissae sort last.
    pub fn sorted_by_x(&self) -> Self {
        let mut pairs: Vec<(T, T)> = self
            .xs
            .iter()
            .copied()
            .zip(self.ys.iter().copied())
            .collect();
        pairs.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or_else(|| a.0.is_nan().cmp(&b.0.is_nan()))
        });
        let (xs, ys) = pairs.into_iter().unzip();
        Self { xs, ys }
    }
}

/// Deserialization runs the same checks as [`SampleSet::new`].
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SampleSet<T>
where
    T: Scalar + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Unchecked<T> {
            xs: Vec<T>,
            ys: Vec<T>,
        }

        let Unchecked { xs, ys } = Unchecked::<T>::deserialize(deserializer)?;
        Self::new(xs, ys).map_err(serde::de::Error::custom)
    }
}
