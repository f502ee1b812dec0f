//! Small statistics helpers shared by the metrics stage and its tests.

use ordered_float::OrderedFloat;

/// Arithmetic mean of a slice, or 0.0 when the slice is empty.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Element-wise absolute deviation between paired truth and prediction
/// slices.
pub fn absolute_errors(truth: &[f64], predicted: &[f64]) -> Vec<f64> {
    truth
        .iter()
        .zip(predicted)
        .map(|(t, p)| (t - p).abs())
        .collect()
}

/// Percentile with linear interpolation between closest ranks.
///
/// The rank is `p / 100 * (len - 1)`; a fractional rank interpolates
/// between the two neighboring order statistics. `p` is a percentage and
/// is clamped to [0, 100].
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    if values.len() == 1 {
        return values[0];
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by_key(|v| OrderedFloat(*v));

    let rank = (p.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;

    if upper >= sorted.len() {
        sorted[sorted.len() - 1]
    } else {
        sorted[lower] * (1.0 - fraction) + sorted[upper] * fraction
    }
}
