//! The full simulation pipeline behind one function boundary.

use log::debug;

use super::dataset::OrderDataset;
use super::error::SimulationError;
use super::estimator::{apply_kli_correction, apply_merchant_baseline};
use super::generator::generate_orders;
use super::metrics::{compute_metrics, SimulationMetrics};
use super::params::SimulationParams;

/// Everything one simulation run produces: the fully widened dataset for
/// distribution rendering plus the comparison metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRun {
    pub dataset: OrderDataset,
    pub metrics: SimulationMetrics,
}

/// Run the whole pipeline: validate, generate, estimate, measure.
///
/// Deterministic for fixed parameters. The dataset is owned by this call
/// for the duration of the run and handed back with every column filled.
pub fn run_simulation(params: &SimulationParams) -> Result<SimulationRun, SimulationError> {
    params.validate()?;

    let mut dataset = generate_orders(
        params.order_count,
        params.avg_active_orders,
        params.peak_ratio,
        params.seed,
    )?;

    apply_merchant_baseline(&mut dataset);
    apply_kli_correction(&mut dataset, params.kli_weight);

    let metrics = compute_metrics(&mut dataset)?;
    debug!(
        "run complete: {} orders, mae {:.3} current vs {:.3} proposed",
        dataset.len(),
        metrics.mae_current,
        metrics.mae_proposed
    );

    Ok(SimulationRun { dataset, metrics })
}
