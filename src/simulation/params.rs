//! Simulation parameters and their accepted ranges.

use super::error::SimulationError;

/// Default number of synthetic orders per run
pub const DEFAULT_ORDER_COUNT: usize = 15_000;
/// Default mean concurrent kitchen load
pub const DEFAULT_AVG_ACTIVE_ORDERS: f64 = 6.0;
/// Default probability that an order lands during a peak hour
pub const DEFAULT_PEAK_RATIO: f64 = 0.35;
/// Default correction strength applied to the Kitchen Load Index
pub const DEFAULT_KLI_WEIGHT: f64 = 0.7;
/// Default seed for the run's random source
pub const DEFAULT_SEED: u64 = 42;

/// Lowest accepted KLI correction strength
pub const KLI_WEIGHT_MIN: f64 = 0.1;
/// Highest accepted KLI correction strength
pub const KLI_WEIGHT_MAX: f64 = 1.0;

/// Input parameters for one simulation run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    /// Number of synthetic orders to generate
    pub order_count: usize,
    /// Mean of the Poisson-distributed concurrent kitchen load
    pub avg_active_orders: f64,
    /// Probability that an order lands during a peak hour
    pub peak_ratio: f64,
    /// Correction strength applied to the Kitchen Load Index
    pub kli_weight: f64,
    /// Seed for the run's random source
    pub seed: u64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            order_count: DEFAULT_ORDER_COUNT,
            avg_active_orders: DEFAULT_AVG_ACTIVE_ORDERS,
            peak_ratio: DEFAULT_PEAK_RATIO,
            kli_weight: DEFAULT_KLI_WEIGHT,
            seed: DEFAULT_SEED,
        }
    }
}

impl SimulationParams {
    /// Check every parameter against its accepted range.
    ///
    /// Returns the first violation found, so callers get one actionable
    /// message rather than a bundle.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.order_count == 0 {
            return Err(SimulationError::invalid_parameter(
                "order_count must be at least 1",
            ));
        }
        if !self.avg_active_orders.is_finite() || self.avg_active_orders <= 0.0 {
            return Err(SimulationError::invalid_parameter(
                "avg_active_orders must be positive and finite",
            ));
        }
        if !(0.0..=1.0).contains(&self.peak_ratio) {
            return Err(SimulationError::invalid_parameter(
                "peak_ratio must lie in [0, 1]",
            ));
        }
        if !(KLI_WEIGHT_MIN..=KLI_WEIGHT_MAX).contains(&self.kli_weight) {
            return Err(SimulationError::invalid_parameter(
                "kli_weight must lie in [0.1, 1.0]",
            ));
        }
        Ok(())
    }
}
