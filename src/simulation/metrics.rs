//! Comparative error and wait statistics for the two estimators.

use super::dataset::OrderDataset;
use super::error::SimulationError;
use super::stats::{absolute_errors, mean, percentile};

/// Percentile used for the tail-error comparison
const TAIL_ERROR_PERCENTILE: f64 = 90.0;

/// The six comparison scalars extracted from one simulation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationMetrics {
    /// Mean absolute prediction error of the baseline estimator
    pub mae_current: f64,
    /// Mean absolute prediction error of the KLI-corrected estimator
    pub mae_proposed: f64,
    /// Average rider wait under the baseline prediction
    pub avg_wait_current: f64,
    /// Average rider wait under the corrected prediction
    pub avg_wait_proposed: f64,
    /// 90th-percentile absolute error of the baseline estimator
    pub p90_current: f64,
    /// 90th-percentile absolute error of the corrected estimator
    pub p90_proposed: f64,
}

/// Fill the wait columns and extract the comparison metrics.
///
/// Requires a non-empty dataset on which both estimators have already run.
/// The wait columns are overwritten wholesale, so repeated calls on the
/// same dataset are idempotent.
pub fn compute_metrics(dataset: &mut OrderDataset) -> Result<SimulationMetrics, SimulationError> {
    if dataset.is_empty() {
        return Err(SimulationError::EmptyDataset);
    }
    if !dataset.has_estimates() {
        return Err(SimulationError::MissingEstimates);
    }

    dataset.wait_current = waits(&dataset.kpt_current, &dataset.rider_arrival);
    dataset.wait_proposed = waits(&dataset.kpt_proposed, &dataset.rider_arrival);

    let errors_current = absolute_errors(&dataset.true_prep_time, &dataset.kpt_current);
    let errors_proposed = absolute_errors(&dataset.true_prep_time, &dataset.kpt_proposed);

    Ok(SimulationMetrics {
        mae_current: mean(&errors_current),
        mae_proposed: mean(&errors_proposed),
        avg_wait_current: mean(&dataset.wait_current),
        avg_wait_proposed: mean(&dataset.wait_proposed),
        p90_current: percentile(&errors_current, TAIL_ERROR_PERCENTILE),
        p90_proposed: percentile(&errors_proposed, TAIL_ERROR_PERCENTILE),
    })
}

/// Rider wait per order: predicted ready time minus rider arrival.
/// Negative when the rider arrived after the predicted ready time.
fn waits(predicted: &[f64], rider_arrival: &[f64]) -> Vec<f64> {
    predicted
        .iter()
        .zip(rider_arrival)
        .map(|(prediction, arrival)| prediction - arrival)
        .collect()
}
