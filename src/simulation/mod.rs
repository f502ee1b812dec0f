//! Standalone kitchen prep time simulation engine
//!
//! This module contains the whole pipeline behind the prep-time study:
//! synthetic order generation, the two competing estimators, and the
//! comparison metrics. It runs independently of any presentation surface
//! and is deterministic for fixed input parameters.

mod dataset;
mod error;
mod estimator;
mod generator;
mod metrics;
mod params;
mod pipeline;
mod stats;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use dataset::OrderDataset;
#[allow(unused_imports)]
pub use error::SimulationError;
#[allow(unused_imports)]
pub use estimator::{
    apply_kli_correction, apply_merchant_baseline, KLI_ACTIVE_ORDERS_WEIGHT,
    KLI_COMPLEXITY_WEIGHT, KLI_PEAK_HOUR_WEIGHT,
};
#[allow(unused_imports)]
pub use generator::{
    generate_orders, BASE_PREP_TIME, COMPLEXITY_MAX, COMPLEXITY_MIN, MERCHANT_BIAS_MEAN,
    MERCHANT_BIAS_STD, PEAK_HOUR_PREP_BUMP, PREP_NOISE_STD, PREP_TIME_PER_ACTIVE_ORDER,
    PREP_TIME_PER_COMPLEXITY, RIDER_OFFSET_MEAN, RIDER_OFFSET_STD,
};
#[allow(unused_imports)]
pub use metrics::{compute_metrics, SimulationMetrics};
#[allow(unused_imports)]
pub use params::{
    SimulationParams, DEFAULT_AVG_ACTIVE_ORDERS, DEFAULT_KLI_WEIGHT, DEFAULT_ORDER_COUNT,
    DEFAULT_PEAK_RATIO, DEFAULT_SEED, KLI_WEIGHT_MAX, KLI_WEIGHT_MIN,
};
#[allow(unused_imports)]
pub use stats::{absolute_errors, mean, percentile};
#[allow(unused_imports)]
pub use pipeline::SimulationRun;
pub use pipeline::run_simulation;
