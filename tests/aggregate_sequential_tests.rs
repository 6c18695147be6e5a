//! Tests for sequential conservative aggregation.
//!
//! ## Test Organization
//!
//! 1. **Pairwise Combinator** - averaging plus disagreement penalty
//! 2. **Sequential Fold** - empty, single, and multi-element input
//! 3. **Order Sensitivity** - permutations legitimately differ
//! 4. **Trace** - step records match the fold

use approx::assert_abs_diff_eq;

use nu_algebra::prelude::*;

const H0: [f64; 6] = [67.4, 73.04, 73.3, 73.9, 67.19, 69.6];
const H0_U: [f64; 6] = [0.5, 1.04, 1.8, 3.0, 0.65, 2.5];

// ============================================================================
// Pairwise Combinator Tests
// ============================================================================

#[test]
fn test_pair_planck_shoes() {
    let (v, e) = aggregate_pair(67.4, 0.5, 73.04, 1.04);
    assert_abs_diff_eq!(v, (67.4 + 73.04) / 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(v, 70.22, epsilon = 1e-9);
    assert_abs_diff_eq!(e, 3.59, epsilon = 1e-9);
}

/// Agreeing measurements just average their uncertainties.
#[test]
fn test_pair_agreement_has_no_penalty() {
    assert_eq!(aggregate_pair(5.0, 1.0, 5.0, 3.0), (5.0, 2.0));
}

#[test]
fn test_pair_is_symmetric() {
    assert_eq!(
        aggregate_pair(1.0, 0.25, 4.0, 0.5),
        aggregate_pair(4.0, 0.5, 1.0, 0.25)
    );
}

// ============================================================================
// Sequential Fold Tests
// ============================================================================

#[test]
fn test_sequential_two_measurements() {
    let (v, e) = aggregate_sequential(&[67.4, 73.04], &[0.5, 1.04]).unwrap();
    assert_abs_diff_eq!(v, 70.22, epsilon = 1e-9);
    assert_abs_diff_eq!(e, 3.59, epsilon = 1e-9);
}

#[test]
fn test_sequential_empty_returns_zero() {
    assert_eq!(aggregate_sequential::<f64>(&[], &[]).unwrap(), (0.0, 0.0));
}

#[test]
fn test_sequential_single_returns_input() {
    assert_eq!(aggregate_sequential(&[3.5], &[0.25]).unwrap(), (3.5, 0.25));
}

#[test]
fn test_sequential_length_mismatch() {
    assert_eq!(
        aggregate_sequential(&[1.0, 2.0], &[0.1]),
        Err(NuError::LengthMismatch { left: 2, right: 1 })
    );
}

#[test]
fn test_sequential_h0_dataset() {
    let (v, e) = aggregate_sequential(&H0, &H0_U).unwrap();
    assert_abs_diff_eq!(v, 69.805, epsilon = 1e-9);
    assert_abs_diff_eq!(e, 4.199375, epsilon = 1e-9);
}

// ============================================================================
// Order Sensitivity Tests
// ============================================================================

/// The fold is not associative; permutations may give different results.
/// Both orders must succeed and follow the documented step rule.
#[test]
fn test_sequential_order_sensitive() {
    let a = aggregate_sequential(&[1.0, 2.0, 10.0], &[0.0, 0.0, 0.0]).unwrap();
    let b = aggregate_sequential(&[10.0, 1.0, 2.0], &[0.0, 0.0, 0.0]).unwrap();

    // (1, 2) -> (1.5, 0.5); with 10 -> (5.75, 0.25 + 4.25)
    assert_eq!(a, (5.75, 4.5));
    // (10, 1) -> (5.5, 4.5); with 2 -> (3.75, 2.25 + 1.75)
    assert_eq!(b, (3.75, 4.0));
    assert_ne!(a, b);
}

// ============================================================================
// Trace Tests
// ============================================================================

#[test]
fn test_steps_match_fold() {
    let steps = aggregation_steps(&H0, &H0_U).unwrap();
    assert_eq!(steps.len(), H0.len());

    assert_eq!(steps[0].step, 0);
    assert_eq!(steps[0].value, 67.4);
    assert_eq!(steps[0].uncertainty, 0.5);
    assert_eq!(steps[0].interval_low, 67.4 - 0.5);

    let last = steps.last().unwrap();
    assert_eq!((last.value, last.uncertainty), aggregate_sequential(&H0, &H0_U).unwrap());
    assert_eq!(last.step, 5);
}

#[test]
fn test_steps_intervals() {
    for s in aggregation_steps(&H0, &H0_U).unwrap() {
        assert_eq!(s.interval_low, s.value - s.uncertainty);
        assert_eq!(s.interval_high, s.value + s.uncertainty);
    }
}

#[test]
fn test_steps_empty_and_mismatch() {
    assert!(aggregation_steps::<f64>(&[], &[]).unwrap().is_empty());
    assert!(aggregation_steps(&[1.0], &[]).is_err());
}
