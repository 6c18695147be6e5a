//! Tests for the pairwise tension metric.

use approx::assert_abs_diff_eq;

use nu_algebra::prelude::*;

#[test]
fn test_tension_planck_shoes() {
    let sigma = tension_sigma(67.4, 0.5, 73.04, 1.04);
    // 5.64 / sqrt(0.25 + 1.0816)
    assert_abs_diff_eq!(sigma, 5.64 / 1.3316_f64.sqrt(), epsilon = 1e-9);
    assert_abs_diff_eq!(sigma, 4.8876, epsilon = 1e-4);
    assert!(!intervals_overlap(67.4, 0.5, 73.04, 1.04));
}

#[test]
fn test_tension_is_symmetric() {
    assert_eq!(
        tension_sigma(1.0, 0.3, 2.0, 0.4),
        tension_sigma(2.0, 0.4, 1.0, 0.3)
    );
}

#[test]
fn test_tension_zero_uncertainty() {
    assert_eq!(tension_sigma(1.0, 0.0, 2.0, 0.0), f64::INFINITY);
    assert!(tension_sigma(1.0_f64, 0.0, 1.0, 0.0).is_nan());
}

#[test]
fn test_overlap() {
    assert!(intervals_overlap(0.0, 1.0, 1.5, 1.0));
    // Touching endpoints overlap.
    assert!(intervals_overlap(0.0, 1.0, 2.0, 1.0));
    assert!(!intervals_overlap(0.0, 1.0, 2.5, 1.0));
    // Containment.
    assert!(intervals_overlap(0.0, 10.0, 1.0, 0.1));
}

#[test]
fn test_pairwise_table() {
    let values = [67.4, 73.04, 73.3, 73.9, 67.19, 69.6];
    let unc = [0.5, 1.04, 1.8, 3.0, 0.65, 2.5];
    let table = pairwise_tensions(&values, &unc).unwrap();

    assert_eq!(table.len(), 15);
    assert_eq!((table[0].first, table[0].second), (0, 1));
    assert_eq!((table[14].first, table[14].second), (4, 5));
    assert!(table.iter().all(|t| t.first < t.second));

    let first = table[0];
    assert_abs_diff_eq!(first.delta, 5.64, epsilon = 1e-9);
    assert!(!first.overlaps);
    assert!(first.exceeds(3.0));

    let high: Vec<_> = table
        .iter()
        .filter(|t| t.exceeds(3.0))
        .map(|t| (t.first, t.second))
        .collect();
    assert_eq!(high, vec![(0, 1), (0, 2), (1, 4), (2, 4)]);
}

#[test]
fn test_pairwise_small_inputs() {
    assert!(pairwise_tensions::<f64>(&[], &[]).unwrap().is_empty());
    assert!(pairwise_tensions(&[1.0], &[0.1]).unwrap().is_empty());
    assert_eq!(
        pairwise_tensions(&[1.0, 2.0], &[0.1]),
        Err(NuError::LengthMismatch { left: 2, right: 1 })
    );
}

/// Every paired entry point reports the same mismatch for the same inputs.
#[test]
fn test_length_mismatch_consistent_across_entry_points() {
    let values = [1.0, 2.0, 3.0];
    let uncertainties = [0.1, 0.2];
    let expected = NuError::LengthMismatch { left: 3, right: 2 };

    assert_eq!(
        pairwise_tensions(&values, &uncertainties).unwrap_err(),
        expected
    );
    assert_eq!(
        aggregate_sequential(&values, &uncertainties).unwrap_err(),
        expected
    );
    assert_eq!(
        aggregation_steps(&values, &uncertainties).unwrap_err(),
        expected
    );

    let data: Vec<Nu<f64>> = values.iter().map(|&v| Nu::exact(v)).collect();
    assert_eq!(
        weighted_mean(&data, Some(&uncertainties)).unwrap_err(),
        expected
    );
}
