//! The tabular order dataset shared by every pipeline stage.
//!
//! Columns are parallel vectors with one entry per order. The generator
//! fills the observation columns; each later stage appends its own columns
//! and never rewrites an earlier one.

/// Column-oriented storage for one simulation run.
///
/// The estimator and wait columns start empty and are filled by their
/// stage. A filled column always holds exactly one entry per order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDataset {
    /// Concurrent orders already in the kitchen when this one arrived
    pub active_orders: Vec<u32>,
    /// Preparation complexity score from 1 (simple) to 5 (elaborate)
    pub complexity: Vec<u8>,
    /// Whether the order landed during a peak hour
    pub peak_hour: Vec<bool>,
    /// Latent true preparation time in minutes, hidden from both estimators
    pub true_prep_time: Vec<f64>,
    /// Merchant-reported preparation time, the true time plus a systematic
    /// over-report
    pub merchant_for: Vec<f64>,
    /// Rider arrival time relative to order placement
    pub rider_arrival: Vec<f64>,

    /// Kitchen Load Index, filled by the proposed estimator
    pub kli: Vec<f64>,
    /// Baseline predicted prep time, which trusts the merchant report
    pub kpt_current: Vec<f64>,
    /// KLI-corrected predicted prep time
    pub kpt_proposed: Vec<f64>,

    /// Rider wait under the baseline prediction, filled by the metrics stage
    pub wait_current: Vec<f64>,
    /// Rider wait under the corrected prediction, filled by the metrics stage
    pub wait_proposed: Vec<f64>,
}

impl OrderDataset {
    /// Number of orders in the dataset
    pub fn len(&self) -> usize {
        self.active_orders.len()
    }

    /// True when the dataset holds no orders
    pub fn is_empty(&self) -> bool {
        self.active_orders.is_empty()
    }

    /// True once both estimators have filled their prediction columns
    pub fn has_estimates(&self) -> bool {
        self.kpt_current.len() == self.len() && self.kpt_proposed.len() == self.len()
    }
}
