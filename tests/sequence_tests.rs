//! Integration tests for Farey sequence generation.
//!
//! These verify the generated sequences against classically known contents
//! and cardinalities, plus the structural invariants every output must
//! satisfy.

use farey_sequence::{FareyError, FareySequence, Fraction, SequenceValidator};

fn frac(n: i64, d: i64) -> Fraction {
    Fraction::new(n, d).unwrap()
}

#[test]
fn test_f5_exact_contents() {
    let f5 = FareySequence::full(5).unwrap();
    let expected: Vec<Fraction> = [
        (0, 1),
        (1, 5),
        (1, 4),
        (1, 3),
        (2, 5),
        (1, 2),
        (3, 5),
        (2, 3),
        (3, 4),
        (4, 5),
        (1, 1),
    ]
    .iter()
    .map(|&(n, d)| frac(n, d))
    .collect();

    assert_eq!(f5.len(), 11);
    assert_eq!(f5.as_slice(), expected.as_slice());
}

#[test]
fn test_f8_cardinality() {
    let f8 = FareySequence::full(8).unwrap();
    assert_eq!(f8.len(), 23);
}

#[test]
fn test_range_within_f5() {
    let run = FareySequence::range(5, frac(1, 3), frac(2, 3)).unwrap();
    let expected = [frac(1, 3), frac(2, 5), frac(1, 2), frac(3, 5), frac(2, 3)];
    assert_eq!(run.as_slice(), &expected);
}

#[test]
fn test_range_is_contiguous_slice_of_full() {
    let full = FareySequence::full(7).unwrap();
    let run = FareySequence::range(7, frac(1, 4), frac(5, 7)).unwrap();

    let start = full.iter().position(|t| *t == frac(1, 4)).unwrap();
    let end = full.iter().position(|t| *t == frac(5, 7)).unwrap();
    assert_eq!(run.as_slice(), &full.as_slice()[start..=end]);
}

#[test]
fn test_swapped_bounds_rejected() {
    let err = FareySequence::range(5, frac(2, 1), frac(1, 1)).unwrap_err();
    assert!(matches!(err, FareyError::InvalidRange { .. }));
}

#[test]
fn test_negative_lower_bound_rejected() {
    let err = FareySequence::range(5, frac(-1, 1), frac(1, 1)).unwrap_err();
    assert!(matches!(err, FareyError::InvalidRange { .. }));
}

#[test]
fn test_upper_bound_above_one_rejected() {
    let err = FareySequence::range(5, frac(0, 1), frac(3, 2)).unwrap_err();
    assert!(matches!(err, FareyError::InvalidRange { .. }));
}

#[test]
fn test_zero_denominator_rejected() {
    let err = Fraction::new(1, 0).unwrap_err();
    assert_eq!(err, FareyError::InvalidFraction { numerator: 1 });
}

#[test]
fn test_index_out_of_range() {
    let f5 = FareySequence::full(5).unwrap();

    let err = f5.get(f5.len()).unwrap_err();
    assert_eq!(
        err,
        FareyError::IndexOutOfRange {
            index: 11,
            len: 11
        }
    );

    // Indices are unsigned, so "-1" has no representation; the furthest
    // out-of-range value stands in for it.
    assert!(matches!(
        f5.get(usize::MAX),
        Err(FareyError::IndexOutOfRange { .. })
    ));
}

#[test]
fn test_idempotence() {
    let a = FareySequence::full(12).unwrap();
    let b = FareySequence::full(12).unwrap();
    assert_eq!(a, b);

    let r1 = FareySequence::range(9, frac(1, 5), frac(4, 5)).unwrap();
    let r2 = FareySequence::range(9, frac(1, 5), frac(4, 5)).unwrap();
    assert_eq!(r1, r2);
}

#[test]
fn test_invariants_across_limit_sweep() {
    let validator = SequenceValidator::new();
    for limit in 1..=60 {
        let seq = FareySequence::full(limit).unwrap();
        let result = validator.validate(&seq);
        assert!(result.is_valid(), "limit {limit}: {result}");

        assert_eq!(seq.first(), Fraction::ZERO);
        assert_eq!(seq.last(), Fraction::ONE);
    }
}

#[test]
fn test_ranged_invariants() {
    let validator = SequenceValidator::new();
    let seq = FareySequence::range(20, frac(1, 7), frac(6, 7)).unwrap();
    assert!(validator.validate(&seq).is_valid());
    assert_eq!(seq.first(), frac(1, 7));
    assert_eq!(seq.last(), frac(6, 7));
}

#[test]
fn test_iteration_matches_positional_access() {
    let f6 = FareySequence::full(6).unwrap();
    for (i, term) in f6.iter().enumerate() {
        assert_eq!(*term, f6.get(i).unwrap());
    }
    // IntoIterator for &FareySequence
    let collected: Vec<_> = (&f6).into_iter().copied().collect();
    assert_eq!(collected.as_slice(), f6.as_slice());
}

#[test]
fn test_terms_are_fully_reduced() {
    let f30 = FareySequence::full(30).unwrap();
    for term in &f30 {
        let reduced = term.reduced();
        assert_eq!(term.numerator(), reduced.numerator());
        assert_eq!(term.denominator(), reduced.denominator());
    }
}
