//! The two competing prep-time estimators.
//!
//! Both are stateless passes over the dataset. Each fills only its own
//! columns and leaves every earlier column untouched, so the estimators can
//! run in either order and repeated runs overwrite cleanly.

use super::dataset::OrderDataset;

/// KLI contribution per concurrent active order
pub const KLI_ACTIVE_ORDERS_WEIGHT: f64 = 0.5;
/// KLI contribution per complexity point
pub const KLI_COMPLEXITY_WEIGHT: f64 = 0.3;
/// KLI contribution of landing in a peak hour
pub const KLI_PEAK_HOUR_WEIGHT: f64 = 0.2;

/// Baseline estimator: trust the merchant-reported prep time as-is.
pub fn apply_merchant_baseline(dataset: &mut OrderDataset) {
    dataset.kpt_current = dataset.merchant_for.clone();
}

/// Proposed estimator: subtract congestion-driven bias from the merchant
/// report.
///
/// Scores each order's kitchen congestion as the Kitchen Load Index, then
/// shifts the merchant report down by `kli_weight` times that score. A
/// weight of zero reproduces the baseline exactly.
pub fn apply_kli_correction(dataset: &mut OrderDataset, kli_weight: f64) {
    dataset.kli = (0..dataset.len())
        .map(|row| {
            KLI_ACTIVE_ORDERS_WEIGHT * f64::from(dataset.active_orders[row])
                + KLI_COMPLEXITY_WEIGHT * f64::from(dataset.complexity[row])
                + if dataset.peak_hour[row] {
                    KLI_PEAK_HOUR_WEIGHT
                } else {
                    0.0
                }
        })
        .collect();

    dataset.kpt_proposed = dataset
        .merchant_for
        .iter()
        .zip(&dataset.kli)
        .map(|(reported, kli)| reported - kli_weight * kli)
        .collect();
}
