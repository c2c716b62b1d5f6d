//! Error types for numerical routines.
//!
//! Every routine in the workspace fails with one of two conditions:
//! a precondition on the inputs was violated before any work started, or the
//! arithmetic itself reached an undefined operation while computing.

use thiserror::Error;

/// Errors that can occur while differentiating, integrating or interpolating.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericsError {
    /// Malformed shape, count or sign of an input.
    ///
    /// Raised by explicit precondition checks (unequal lengths, too few
    /// points, non-positive or odd subinterval counts, non-increasing or
    /// non-uniform abscissae, zero reference value) before any computation.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the violated constraint
        reason: String,
    },

    /// Mathematically undefined operation reached during computation.
    ///
    /// Raised when a denominator vanishes mid-computation, e.g. two
    /// interpolation nodes share the same abscissa.
    #[error("Domain error: {reason}")]
    DomainError {
        /// Description of the undefined operation
        reason: String,
    },
}

impl NumericsError {
    /// Create an InvalidArgument error naming the violated constraint.
    pub fn invalid_argument<S: Into<String>>(reason: S) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Create a DomainError describing the undefined operation.
    pub fn domain_error<S: Into<String>>(reason: S) -> Self {
        Self::DomainError {
            reason: reason.into(),
        }
    }

    /// Create an InvalidArgument error for two sequences of different length.
    pub fn length_mismatch(x_len: usize, y_len: usize) -> Self {
        Self::invalid_argument(format!(
            "x and y must have the same length (got {x_len} and {y_len})"
        ))
    }

    /// Create an InvalidArgument error for an input with too few points.
    pub fn too_few_points(required: usize, actual: usize) -> Self {
        Self::invalid_argument(format!(
            "at least {required} points are required (got {actual})"
        ))
    }

    /// Whether this is an InvalidArgument condition.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Whether this is a DomainError condition.
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Self::DomainError { .. })
    }

    /// The human readable reason carried by the error.
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidArgument { reason } | Self::DomainError { reason } => reason,
        }
    }
}

/// Result type alias for numerical routines.
pub type Result<T> = std::result::Result<T, NumericsError>;
