//! Farey Sequence
//!
//! Exact generation of Farey sequences — the ascending runs of fully
//! reduced fractions in [0, 1] with bounded denominators — via the O(1)
//! per-step neighbor recurrence instead of enumerate-and-sort.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      farey_sequence                        │
//! ├────────────────────────────────────────────────────────────┤
//! │  fraction    - exact rational type (i128 cross-products)   │
//! │  sequence    - neighbor recurrence and sequence container  │
//! │  builder     - fluent construction API                     │
//! │  config      - TOML/JSON build configuration               │
//! │  validation  - post-hoc invariant checks                   │
//! │  error       - typed failures (never process exit)         │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use farey_sequence::{FareySequence, FareySequenceBuilder};
//!
//! // Full sequence of order 5: 0/1, 1/5, 1/4, ..., 4/5, 1/1
//! let f5 = FareySequence::full(5)?;
//! assert_eq!(f5.len(), 11);
//!
//! // A contiguous sub-range of the same sequence
//! let run = FareySequenceBuilder::new(5)
//!     .lower_bound(1, 3)
//!     .upper_bound(2, 3)
//!     .build()?;
//! assert_eq!(format!("{run}"), "[1/3, 2/5, 1/2, 3/5, 2/3]");
//! # Ok::<(), farey_sequence::FareyError>(())
//! ```
//!
//! All comparisons are exact integer cross-products; floating point is
//! never consulted, so ordering stays correct at denominators where an
//! `f64` would collapse adjacent terms.

pub mod builder;
pub mod config;
pub mod error;
pub mod fraction;
pub mod prelude;
pub mod sequence;
pub mod validation;

// Re-exports - Core
pub use error::{FareyError, Result};
pub use fraction::Fraction;
pub use sequence::FareySequence;

// Re-exports - Construction
pub use builder::FareySequenceBuilder;
pub use config::BuildConfig;

// Re-exports - Validation
pub use validation::{SequenceValidator, ValidationLevel, ValidationResult};
