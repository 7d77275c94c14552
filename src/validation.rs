//! Sequence validation.
//!
//! Post-hoc checks of the structural invariants a built sequence must
//! satisfy. The generator maintains these by construction; the validator
//! exists so tests and diagnostics can verify them independently instead
//! of trusting the recurrence.
//!
//! # Checks
//!
//! 1. **Adjacency**: every consecutive pair (a/b, c/d) has b·c − a·d = 1
//! 2. **Monotonicity**: terms strictly increase
//! 3. **Denominator bound**: every denominator ≤ the sequence order
//! 4. **Range**: every term lies in [0, 1]
//!
//! # Usage
//!
//! ```
//! use farey_sequence::{FareySequence, SequenceValidator};
//!
//! let seq = FareySequence::full(8)?;
//! let result = SequenceValidator::new().validate(&seq);
//! assert!(result.is_valid());
//! # Ok::<(), farey_sequence::FareyError>(())
//! ```

use crate::fraction::Fraction;
use crate::sequence::FareySequence;
use std::fmt;

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationLevel {
    /// Invariant holds
    Valid,
    /// Invariant violated
    Error(String),
}

impl ValidationLevel {
    /// Check if this result indicates a held invariant.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationLevel::Valid)
    }
}

impl fmt::Display for ValidationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationLevel::Valid => write!(f, "Valid"),
            ValidationLevel::Error(msg) => write!(f, "Error: {msg}"),
        }
    }
}

/// Aggregated validation result.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    results: Vec<(String, ValidationLevel)>,
}

impl ValidationResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a check result.
    pub fn add(&mut self, check_name: &str, level: ValidationLevel) {
        self.results.push((check_name.to_string(), level));
    }

    /// Check if every invariant held.
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, level)| level.is_valid())
    }

    /// Get all failed checks as formatted strings.
    pub fn errors(&self) -> Vec<String> {
        self.results
            .iter()
            .filter_map(|(name, level)| match level {
                ValidationLevel::Error(msg) => Some(format!("{name}: {msg}")),
                ValidationLevel::Valid => None,
            })
            .collect()
    }

    /// Get all results.
    pub fn all_results(&self) -> &[(String, ValidationLevel)] {
        &self.results
    }

    /// Number of checks performed.
    pub fn check_count(&self) -> usize {
        self.results.len()
    }

    /// Number of checks that passed.
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|(_, l)| l.is_valid()).count()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let passed = self.passed_count();
        let total = self.check_count();
        writeln!(f, "Validation: {passed}/{total} checks passed")?;

        for (name, level) in &self.results {
            if !level.is_valid() {
                writeln!(f, "  - {name}: {level}")?;
            }
        }

        Ok(())
    }
}

/// Validator for built Farey sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceValidator;

impl SequenceValidator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Run every invariant check against a sequence.
    pub fn validate(&self, seq: &FareySequence) -> ValidationResult {
        let mut result = ValidationResult::new();

        self.check_adjacency(seq, &mut result);
        self.check_monotonic(seq, &mut result);
        self.check_denominators(seq, &mut result);
        self.check_range(seq, &mut result);

        result
    }

    fn check_adjacency(&self, seq: &FareySequence, result: &mut ValidationResult) {
        for (i, pair) in seq.as_slice().windows(2).enumerate() {
            let det = pair[0].neighbor_determinant(&pair[1]);
            if det != 1 {
                result.add(
                    "adjacency",
                    ValidationLevel::Error(format!(
                        "pair {} -> {} at index {i} has determinant {det}, expected 1",
                        pair[0], pair[1]
                    )),
                );
                return;
            }
        }
        result.add("adjacency", ValidationLevel::Valid);
    }

    fn check_monotonic(&self, seq: &FareySequence, result: &mut ValidationResult) {
        for (i, pair) in seq.as_slice().windows(2).enumerate() {
            if pair[0] >= pair[1] {
                result.add(
                    "monotonicity",
                    ValidationLevel::Error(format!(
                        "terms not strictly increasing at index {i}: {} >= {}",
                        pair[0], pair[1]
                    )),
                );
                return;
            }
        }
        result.add("monotonicity", ValidationLevel::Valid);
    }

    fn check_denominators(&self, seq: &FareySequence, result: &mut ValidationResult) {
        let limit = seq.limit();
        for (i, term) in seq.iter().enumerate() {
            if term.denominator() > limit {
                result.add(
                    "denominator_bound",
                    ValidationLevel::Error(format!(
                        "term {term} at index {i} exceeds order {limit}"
                    )),
                );
                return;
            }
        }
        result.add("denominator_bound", ValidationLevel::Valid);
    }

    fn check_range(&self, seq: &FareySequence, result: &mut ValidationResult) {
        for (i, term) in seq.iter().enumerate() {
            if *term < Fraction::ZERO || *term > Fraction::ONE {
                result.add(
                    "unit_range",
                    ValidationLevel::Error(format!("term {term} at index {i} outside [0, 1]")),
                );
                return;
            }
        }
        result.add("unit_range", ValidationLevel::Valid);
    }
}
