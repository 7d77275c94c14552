//! Fluent builder for sequence construction.
//!
//! Wraps [`FareySequence::range`] in a builder so call sites can set only
//! the bounds they care about; the defaults produce the full sequence.
//!
//! # Example
//!
//! ```
//! use farey_sequence::FareySequenceBuilder;
//!
//! // Full sequence of order 8
//! let f8 = FareySequenceBuilder::new(8).build()?;
//! assert_eq!(f8.len(), 23);
//!
//! // Ranged build with raw (numerator, denominator) pairs
//! let run = FareySequenceBuilder::new(5)
//!     .lower_bound(1, 3)
//!     .upper_bound(2, 3)
//!     .build()?;
//! assert_eq!(run.len(), 5);
//! # Ok::<(), farey_sequence::FareyError>(())
//! ```

use crate::config::BuildConfig;
use crate::error::Result;
use crate::fraction::Fraction;
use crate::sequence::FareySequence;

/// Fluent builder for [`FareySequence`].
///
/// Bounds are supplied as raw (numerator, denominator) pairs and only
/// checked at [`FareySequenceBuilder::build`] time, so an invalid pair is
/// reported as a typed error rather than a construction panic.
#[derive(Debug, Clone)]
pub struct FareySequenceBuilder {
    limit: i64,
    lower: Option<(i64, i64)>,
    upper: Option<(i64, i64)>,
}

impl FareySequenceBuilder {
    /// Create a builder for the given order with the full [0/1, 1/1] range.
    pub fn new(limit: i64) -> Self {
        Self {
            limit,
            lower: None,
            upper: None,
        }
    }

    /// Create a builder from a configuration.
    pub fn from_config(config: &BuildConfig) -> Self {
        Self {
            limit: config.limit,
            lower: config.lower_bound,
            upper: config.upper_bound,
        }
    }

    /// Set the inclusive lower bound.
    pub fn lower_bound(mut self, numerator: i64, denominator: i64) -> Self {
        self.lower = Some((numerator, denominator));
        self
    }

    /// Set the inclusive upper bound.
    pub fn upper_bound(mut self, numerator: i64, denominator: i64) -> Self {
        self.upper = Some((numerator, denominator));
        self
    }

    /// Validate the bounds and generate the sequence.
    pub fn build(self) -> Result<FareySequence> {
        let lower = match self.lower {
            Some((n, d)) => Fraction::new(n, d)?,
            None => Fraction::ZERO,
        };
        let upper = match self.upper {
            Some((n, d)) => Fraction::new(n, d)?,
            None => Fraction::ONE,
        };
        FareySequence::range(self.limit, lower, upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FareyError;

    #[test]
    fn test_default_range_is_full() {
        let built = FareySequenceBuilder::new(5).build().unwrap();
        let full = FareySequence::full(5).unwrap();
        assert_eq!(built, full);
    }

    #[test]
    fn test_bounds_applied() {
        let seq = FareySequenceBuilder::new(5)
            .lower_bound(1, 3)
            .upper_bound(2, 3)
            .build()
            .unwrap();
        assert_eq!(format!("{seq}"), "[1/3, 2/5, 1/2, 3/5, 2/3]");
    }

    #[test]
    fn test_zero_denominator_is_typed_error() {
        let err = FareySequenceBuilder::new(5)
            .lower_bound(1, 0)
            .build()
            .unwrap_err();
        assert_eq!(err, FareyError::InvalidFraction { numerator: 1 });
    }

    #[test]
    fn test_from_config() {
        let config = BuildConfig {
            limit: 5,
            lower_bound: Some((1, 3)),
            upper_bound: Some((2, 3)),
            description: None,
        };
        let seq = FareySequenceBuilder::from_config(&config).build().unwrap();
        assert_eq!(seq.len(), 5);
    }
}
