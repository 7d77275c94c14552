//! Prelude module for convenient imports.
//!
//! ```
//! use farey_sequence::prelude::*;
//!
//! let seq = FareySequence::full(8)?;
//! assert!(SequenceValidator::new().validate(&seq).is_valid());
//! # Ok::<(), FareyError>(())
//! ```

// ============================================================================
// Core
// ============================================================================

pub use crate::error::{FareyError, Result};
pub use crate::fraction::Fraction;
pub use crate::sequence::FareySequence;

// ============================================================================
// Construction
// ============================================================================

pub use crate::builder::FareySequenceBuilder;
pub use crate::config::BuildConfig;

// ============================================================================
// Validation
// ============================================================================

pub use crate::validation::{SequenceValidator, ValidationLevel, ValidationResult};
