//! Error types for Farey sequence construction and queries.
//!
//! All failures are reported as values — the library never terminates the
//! process on bad input. Callers match on [`FareyError`] to decide recovery.

use std::fmt;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FareyError>;

/// Error type for sequence construction and positional queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FareyError {
    /// A supplied fraction had a zero denominator.
    InvalidFraction {
        /// Numerator of the offending fraction
        numerator: i64,
    },

    /// The requested range violates a precondition: bounds out of order,
    /// outside [0, 1], or a reduced denominator exceeding the limit.
    InvalidRange {
        /// Which precondition failed
        reason: String,
    },

    /// A positional query fell outside the generated sequence.
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of terms in the sequence
        len: usize,
    },
}

impl fmt::Display for FareyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFraction { numerator } => {
                write!(f, "Invalid fraction {numerator}/0: denominator cannot be zero")
            }
            Self::InvalidRange { reason } => {
                write!(f, "Invalid range: {reason}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} out of range for sequence of {len} terms")
            }
        }
    }
}

impl std::error::Error for FareyError {}

impl FareyError {
    /// Build an [`FareyError::InvalidRange`] from a reason string.
    pub(crate) fn range(reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            reason: reason.into(),
        }
    }
}
