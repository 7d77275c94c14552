//! Exact rational value type.
//!
//! [`Fraction`] is an ordered pair (numerator, denominator) with the
//! denominator kept strictly positive. Ordering and equality compare
//! `i128` cross-products, never floating point, so comparisons stay exact
//! at denominators where an `f64` round-trip would lose precision.
//!
//! # Example
//!
//! ```
//! use farey_sequence::Fraction;
//!
//! let a = Fraction::new(1, 3)?;
//! let b = Fraction::new(2, 5)?;
//! assert!(a < b);
//! assert_eq!(Fraction::new(4, 8)?.reduced(), Fraction::new(1, 2)?);
//! # Ok::<(), farey_sequence::FareyError>(())
//! ```

use crate::error::{FareyError, Result};
use std::cmp::Ordering;
use std::fmt;

/// A rational number n/d with d > 0.
///
/// Construction normalizes the sign into the numerator; a zero denominator
/// is rejected with [`FareyError::InvalidFraction`]. The pair is not
/// automatically reduced — call [`Fraction::reduced`] for lowest terms.
#[derive(Debug, Clone, Copy)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

/// Greatest common divisor (non-negative inputs, gcd(0, b) = b).
fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

impl Fraction {
    /// The fraction 0/1.
    pub const ZERO: Fraction = Fraction {
        numerator: 0,
        denominator: 1,
    };

    /// The fraction 1/1.
    pub const ONE: Fraction = Fraction {
        numerator: 1,
        denominator: 1,
    };

    /// Create a fraction, rejecting a zero denominator.
    ///
    /// A negative denominator is normalized by moving the sign to the
    /// numerator, so `new(1, -2)` yields -1/2.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        if denominator == 0 {
            return Err(FareyError::InvalidFraction { numerator });
        }
        if denominator < 0 {
            Ok(Self {
                numerator: -numerator,
                denominator: -denominator,
            })
        } else {
            Ok(Self {
                numerator,
                denominator,
            })
        }
    }

    /// Internal constructor for terms produced by the recurrence, whose
    /// denominators are positive by construction.
    pub(crate) fn new_unchecked(numerator: i64, denominator: i64) -> Self {
        debug_assert!(denominator > 0);
        Self {
            numerator,
            denominator,
        }
    }

    /// Numerator (sign-carrying).
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Denominator (always positive).
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// This fraction in lowest terms.
    pub fn reduced(&self) -> Self {
        let g = gcd(self.numerator.abs(), self.denominator);
        if g <= 1 {
            return *self;
        }
        Self {
            numerator: self.numerator / g,
            denominator: self.denominator / g,
        }
    }

    /// The mediant (a+c)/(b+d) of two fractions.
    ///
    /// For Farey neighbors a/b and c/d, the mediant is the unique fraction
    /// between them with the smallest denominator.
    pub fn mediant(&self, other: &Fraction) -> Self {
        Self {
            numerator: self.numerator + other.numerator,
            denominator: self.denominator + other.denominator,
        }
    }

    /// b·c − a·d for self = a/b and next = c/d, computed in `i128`.
    ///
    /// Equals 1 exactly when the two fractions are adjacent in some Farey
    /// sequence.
    pub fn neighbor_determinant(&self, next: &Fraction) -> i128 {
        self.denominator as i128 * next.numerator as i128
            - self.numerator as i128 * next.denominator as i128
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.neighbor_determinant(other) == 0
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // Cross-products; both denominators are positive so the inequality
        // direction is preserved.
        let lhs = self.numerator as i128 * other.denominator as i128;
        let rhs = other.numerator as i128 * self.denominator as i128;
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_denominator_rejected() {
        let err = Fraction::new(3, 0).unwrap_err();
        assert_eq!(err, FareyError::InvalidFraction { numerator: 3 });
    }

    #[test]
    fn test_negative_denominator_normalized() {
        let f = Fraction::new(1, -2).unwrap();
        assert_eq!(f.numerator(), -1);
        assert_eq!(f.denominator(), 2);
    }

    #[test]
    fn test_reduction() {
        let f = Fraction::new(6, 8).unwrap().reduced();
        assert_eq!(f.numerator(), 3);
        assert_eq!(f.denominator(), 4);

        let zero = Fraction::new(0, 7).unwrap().reduced();
        assert_eq!(zero, Fraction::ZERO);
        assert_eq!(zero.denominator(), 1);
    }

    #[test]
    fn test_ordering_is_exact() {
        let a = Fraction::new(1, 3).unwrap();
        let b = Fraction::new(2, 5).unwrap();
        assert!(a < b);
        assert!(b > a);

        // Equal values with different representations compare equal.
        assert_eq!(Fraction::new(1, 2).unwrap(), Fraction::new(2, 4).unwrap());
    }

    #[test]
    fn test_ordering_large_denominators() {
        // Adjacent fractions whose f64 values collide: n/d and (n+1)/(d+1)
        // near 1 with d around 2^40 differ by less than f64 epsilon at 1.0
        // times d, but cross-products distinguish them.
        let d = 1_099_511_627_776_i64; // 2^40
        let a = Fraction::new(d - 1, d).unwrap();
        let b = Fraction::new(d, d + 1).unwrap();
        assert!(a < b);
        assert_ne!(a, b);
    }

    #[test]
    fn test_mediant() {
        let a = Fraction::new(1, 3).unwrap();
        let b = Fraction::new(1, 2).unwrap();
        let m = a.mediant(&b);
        assert_eq!(m, Fraction::new(2, 5).unwrap());
        assert!(a < m && m < b);
    }

    #[test]
    fn test_neighbor_determinant() {
        // 1/3 and 2/5 are neighbors in F5.
        let a = Fraction::new(1, 3).unwrap();
        let b = Fraction::new(2, 5).unwrap();
        assert_eq!(a.neighbor_determinant(&b), 1);

        // 1/3 and 1/2 are neighbors in F3 as well.
        let c = Fraction::new(1, 2).unwrap();
        assert_eq!(a.neighbor_determinant(&c), 1);

        // 1/4 and 3/4 are not adjacent anywhere.
        let d = Fraction::new(1, 4).unwrap();
        let e = Fraction::new(3, 4).unwrap();
        assert_ne!(d.neighbor_determinant(&e), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Fraction::new(2, 5).unwrap()), "2/5");
        assert_eq!(format!("{}", Fraction::ZERO), "0/1");
    }
}
