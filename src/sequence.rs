//! Farey sequence generation.
//!
//! A Farey sequence of order `limit` is the ascending list of fully reduced
//! fractions in [0, 1] whose denominators do not exceed `limit`. Rather
//! than enumerating and sorting all candidate fractions, generation walks
//! the sequence with an O(1)-per-step recurrence derived from two
//! neighbor properties:
//!
//! 1. Reduced fractions a/b < c/d are adjacent in some Farey sequence
//!    iff b·c − a·d = 1.
//! 2. For three consecutive terms a/b < c/d < e/f, the middle one is the
//!    mediant: c/d = (a+e)/(b+f).
//!
//! From (2), e = k·c − a and f = k·d − b for an integer k; the mediant of
//! c/d and e/f must have denominator d + f > limit (otherwise it would be
//! an intervening term of order ≤ limit), which pins k to the unique value
//! (limit + b) / d under integer division.
//!
//! # Example
//!
//! ```
//! use farey_sequence::FareySequence;
//!
//! let f5 = FareySequence::full(5)?;
//! assert_eq!(f5.len(), 11);
//! assert_eq!(format!("{}", f5.get(5)?), "1/2");
//! # Ok::<(), farey_sequence::FareyError>(())
//! ```

use crate::error::{FareyError, Result};
use crate::fraction::Fraction;
use std::fmt;

/// An immutable, strictly increasing run of Farey sequence terms.
///
/// Built once by [`FareySequence::full`] or [`FareySequence::range`] and
/// queried afterwards; no mutation is exposed. Every adjacent pair
/// (a/b, c/d) satisfies b·c − a·d = 1 and every denominator is ≤ the
/// order the sequence was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareySequence {
    terms: Vec<Fraction>,
    limit: i64,
}

impl FareySequence {
    /// Build the full Farey sequence of the given order, 0/1 to 1/1.
    pub fn full(limit: i64) -> Result<Self> {
        Self::range(limit, Fraction::ZERO, Fraction::ONE)
    }

    /// Build the run of the order-`limit` Farey sequence from `lower` to
    /// `upper`, both inclusive.
    ///
    /// Both bounds are reduced to lowest terms first. Preconditions
    /// (checked before generation, violation yields
    /// [`FareyError::InvalidRange`]):
    ///
    /// - `lower <= upper`
    /// - `0/1 <= lower` and `upper <= 1/1`
    /// - neither reduced denominator exceeds `limit`
    ///
    /// A reduced fraction in [0, 1] with denominator ≤ `limit` is by
    /// definition a member of the order-`limit` sequence, so these checks
    /// also guarantee the generation loop terminates.
    pub fn range(limit: i64, lower: Fraction, upper: Fraction) -> Result<Self> {
        if limit < 1 {
            return Err(FareyError::range(format!("limit must be >= 1, got {limit}")));
        }
        let lower = lower.reduced();
        let upper = upper.reduced();
        check_bounds(limit, &lower, &upper)?;

        log::debug!("generating Farey sequence: limit={limit} lower={lower} upper={upper}");
        let terms = generate(limit, lower, upper);
        log::debug!("generated {} terms", terms.len());

        Ok(Self { terms, limit })
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always false for a successfully built sequence (a valid range
    /// contains at least its lower bound), kept for idiom.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The order this sequence was built with.
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Term at `index` (0-based).
    pub fn get(&self, index: usize) -> Result<Fraction> {
        self.terms
            .get(index)
            .copied()
            .ok_or(FareyError::IndexOutOfRange {
                index,
                len: self.terms.len(),
            })
    }

    /// First term (the reduced lower bound).
    pub fn first(&self) -> Fraction {
        self.terms[0]
    }

    /// Last term (the reduced upper bound).
    pub fn last(&self) -> Fraction {
        self.terms[self.terms.len() - 1]
    }

    /// Iterate over the terms in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, Fraction> {
        self.terms.iter()
    }

    /// All terms as a slice.
    pub fn as_slice(&self) -> &[Fraction] {
        &self.terms
    }
}

impl<'a> IntoIterator for &'a FareySequence {
    type Item = &'a Fraction;
    type IntoIter = std::slice::Iter<'a, Fraction>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl fmt::Display for FareySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{term}")?;
        }
        write!(f, "]")
    }
}

/// Validate the (already reduced) bounds against the preconditions.
fn check_bounds(limit: i64, lower: &Fraction, upper: &Fraction) -> Result<()> {
    if lower > upper {
        return Err(FareyError::range(format!(
            "lower bound {lower} exceeds upper bound {upper}"
        )));
    }
    if *lower < Fraction::ZERO {
        return Err(FareyError::range(format!(
            "lower bound {lower} is negative"
        )));
    }
    if *upper > Fraction::ONE {
        return Err(FareyError::range(format!(
            "upper bound {upper} exceeds 1/1"
        )));
    }
    if lower.denominator() > limit || upper.denominator() > limit {
        return Err(FareyError::range(format!(
            "reduced bound denominator exceeds limit {limit} (lower={lower}, upper={upper})"
        )));
    }
    Ok(())
}

/// Walk the neighbor recurrence from `lower` to `upper`.
///
/// Both bounds are reduced and validated; the loop does not re-check
/// denominator bounds per step.
fn generate(limit: i64, lower: Fraction, upper: Fraction) -> Vec<Fraction> {
    let mut terms = vec![lower];
    if lower == upper {
        return terms;
    }

    // (a, b) is the term the recurrence advances from. 0/1 cannot seed the
    // recurrence on its own (its only order-1 neighbor is 1/1), but the
    // second term of any F(limit) is fixed at 1/limit.
    let (mut a, mut b) = if lower.numerator() == 0 {
        let second = Fraction::new_unchecked(1, limit);
        terms.push(second);
        if second == upper {
            return terms;
        }
        (1, limit)
    } else {
        (lower.numerator(), lower.denominator())
    };

    // First successor of a/b within order `limit`, from an auxiliary pair
    // (c0, d0) satisfying b·c0 − a·d0 = 1: the successor c/d also
    // satisfies b·c − a·d = 1 with d ≤ limit < b + d, which pins
    // k = (limit − d0) / b.
    let (c0, d0) = auxiliary_pair(a, b);
    let k = (limit - d0) / b;
    let (mut c, mut d) = (k * a + c0, k * b + d0);

    while c != upper.numerator() || d != upper.denominator() {
        terms.push(Fraction::new_unchecked(c, d));
        let k = (limit + b) / d;
        let e = k * c - a;
        let f = k * d - b;
        a = c;
        b = d;
        c = e;
        d = f;
    }
    terms.push(upper);
    terms
}

/// An auxiliary pair (c0, d0) with b·c0 − a·d0 = 1, 0 < c0 ≤ a and
/// 0 ≤ d0 < b, for coprime a/b with a ≥ 1.
///
/// Derived from the extended-Euclidean relation: c0 is the inverse of b
/// modulo a, and d0 = (b·c0 − 1) / a is then an exact integer.
fn auxiliary_pair(a: i64, b: i64) -> (i64, i64) {
    if a == 1 {
        return (1, b - 1);
    }
    let c0 = mod_inverse(b, a);
    let d0 = (b * c0 - 1) / a;
    (c0, d0)
}

/// Inverse of `value` modulo `modulus` in [1, modulus), for coprime inputs
/// with modulus > 1.
fn mod_inverse(value: i64, modulus: i64) -> i64 {
    let (mut r0, mut r1) = (modulus, value % modulus);
    let (mut t0, mut t1) = (0_i64, 1_i64);
    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (t0, t1) = (t1, t0 - q * t1);
    }
    debug_assert_eq!(r0, 1, "inputs must be coprime");
    t0.rem_euclid(modulus)
}
