//! Metrics and statistics validation tests
//!
//! Pins the percentile convention and checks the metrics stage against a
//! small hand-computed dataset.

use kitchen_sim::simulation::{
    absolute_errors, apply_kli_correction, apply_merchant_baseline, compute_metrics,
    generate_orders, mean, percentile, OrderDataset, SimulationError,
};

const EPSILON: f64 = 1e-9;

#[test]
fn test_mean_of_known_values() {
    assert!((mean(&[1.0, 2.0, 6.0]) - 3.0).abs() < EPSILON);
}

#[test]
fn test_mean_of_empty_slice_is_zero() {
    assert_eq!(mean(&[]), 0.0);
}

#[test]
fn test_absolute_errors_pair_up_slices() {
    let errors = absolute_errors(&[1.0, 5.0, 2.0], &[3.0, 4.0, 2.0]);
    assert_eq!(errors, vec![2.0, 1.0, 0.0]);
}

#[test]
fn test_percentile_uses_linear_interpolation() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    // Rank 3.6 sits between the 4th and 5th order statistics
    assert!((percentile(&values, 90.0) - 4.6).abs() < EPSILON);
    assert!((percentile(&values, 50.0) - 3.0).abs() < EPSILON);
    assert!((percentile(&values, 0.0) - 1.0).abs() < EPSILON);
    assert!((percentile(&values, 100.0) - 5.0).abs() < EPSILON);
}

#[test]
fn test_percentile_is_order_independent() {
    let shuffled = [5.0, 1.0, 4.0, 2.0, 3.0];
    assert!((percentile(&shuffled, 90.0) - 4.6).abs() < EPSILON);
}

#[test]
fn test_percentile_degenerate_inputs() {
    assert_eq!(percentile(&[], 90.0), 0.0);
    assert_eq!(percentile(&[7.5], 90.0), 7.5);
}

#[test]
fn test_metrics_on_hand_computed_dataset() {
    let mut dataset = OrderDataset {
        active_orders: vec![2, 4],
        complexity: vec![1, 3],
        peak_hour: vec![false, true],
        true_prep_time: vec![10.0, 20.0],
        merchant_for: vec![14.0, 26.0],
        rider_arrival: vec![8.0, 15.0],
        ..OrderDataset::default()
    };
    apply_merchant_baseline(&mut dataset);
    apply_kli_correction(&mut dataset, 0.5);

    // Load indices: 0.5*2 + 0.3*1 = 1.3 and 0.5*4 + 0.3*3 + 0.2 = 3.1,
    // so the corrected predictions are 14 - 0.65 and 26 - 1.55
    assert!((dataset.kli[0] - 1.3).abs() < EPSILON);
    assert!((dataset.kli[1] - 3.1).abs() < EPSILON);
    assert!((dataset.kpt_proposed[0] - 13.35).abs() < EPSILON);
    assert!((dataset.kpt_proposed[1] - 24.45).abs() < EPSILON);

    let metrics = compute_metrics(&mut dataset).expect("metrics should succeed");

    // Baseline errors 4 and 6; corrected errors 3.35 and 4.45
    assert!((metrics.mae_current - 5.0).abs() < EPSILON);
    assert!((metrics.mae_proposed - 3.9).abs() < EPSILON);

    // Waits: baseline 6 and 11, corrected 5.35 and 9.45
    assert_eq!(dataset.wait_current, vec![6.0, 11.0]);
    assert!((dataset.wait_proposed[0] - 5.35).abs() < EPSILON);
    assert!((dataset.wait_proposed[1] - 9.45).abs() < EPSILON);
    assert!((metrics.avg_wait_current - 8.5).abs() < EPSILON);
    assert!((metrics.avg_wait_proposed - 7.4).abs() < EPSILON);

    // P90 interpolates at rank 0.9 between the two errors
    assert!((metrics.p90_current - 5.8).abs() < EPSILON);
    assert!((metrics.p90_proposed - 4.34).abs() < EPSILON);
}

#[test]
fn test_metrics_reject_empty_dataset() {
    let mut dataset = OrderDataset::default();
    assert!(matches!(
        compute_metrics(&mut dataset),
        Err(SimulationError::EmptyDataset)
    ));
}

#[test]
fn test_metrics_require_both_estimators() {
    let mut dataset = generate_orders(50, 6.0, 0.35, 42).expect("generation failed");
    assert!(matches!(
        compute_metrics(&mut dataset),
        Err(SimulationError::MissingEstimates)
    ));

    // One estimator alone is still not enough
    apply_merchant_baseline(&mut dataset);
    assert!(matches!(
        compute_metrics(&mut dataset),
        Err(SimulationError::MissingEstimates)
    ));

    apply_kli_correction(&mut dataset, 0.7);
    assert!(compute_metrics(&mut dataset).is_ok());
}

#[test]
fn test_metrics_are_idempotent() {
    let mut dataset = generate_orders(500, 6.0, 0.35, 42).expect("generation failed");
    apply_merchant_baseline(&mut dataset);
    apply_kli_correction(&mut dataset, 0.7);

    let first = compute_metrics(&mut dataset).expect("metrics should succeed");
    let waits_after_first = dataset.wait_current.clone();
    let second = compute_metrics(&mut dataset).expect("metrics should succeed");

    assert_eq!(first, second);
    assert_eq!(dataset.wait_current, waits_after_first);
}
