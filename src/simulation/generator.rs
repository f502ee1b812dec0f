//! Synthetic order generation.
//!
//! Draws every latent per-order variable from one locally seeded random
//! source, then derives the ground-truth and observed timing columns from
//! the linear kitchen model below. The same inputs always reproduce the
//! identical dataset.

use log::debug;
use rand::distr::{Bernoulli, Distribution};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Poisson, StandardNormal};

use super::dataset::OrderDataset;
use super::error::SimulationError;

/// Preparation minutes for a trivial order in an idle kitchen
pub const BASE_PREP_TIME: f64 = 8.0;
/// Extra minutes per concurrent active order
pub const PREP_TIME_PER_ACTIVE_ORDER: f64 = 0.9;
/// Extra minutes per complexity point
pub const PREP_TIME_PER_COMPLEXITY: f64 = 1.5;
/// Extra minutes when the order lands during a peak hour
pub const PEAK_HOUR_PREP_BUMP: f64 = 4.0;
/// Standard deviation of the irreducible prep-time noise
pub const PREP_NOISE_STD: f64 = 2.0;
/// Mean of the merchant's systematic over-report
pub const MERCHANT_BIAS_MEAN: f64 = 4.0;
/// Standard deviation of the merchant's over-report
pub const MERCHANT_BIAS_STD: f64 = 5.0;
/// Mean minutes the rider shows up ahead of true completion
pub const RIDER_OFFSET_MEAN: f64 = 3.0;
/// Standard deviation of the rider arrival offset
pub const RIDER_OFFSET_STD: f64 = 4.0;
/// Lowest order complexity score
pub const COMPLEXITY_MIN: u8 = 1;
/// Highest order complexity score
pub const COMPLEXITY_MAX: u8 = 5;

/// Generate a synthetic order dataset.
///
/// Fails with `InvalidParameter` when `order_count` is zero, when
/// `avg_active_orders` is not positive and finite, or when `peak_ratio`
/// falls outside [0, 1].
pub fn generate_orders(
    order_count: usize,
    avg_active_orders: f64,
    peak_ratio: f64,
    seed: u64,
) -> Result<OrderDataset, SimulationError> {
    if order_count == 0 {
        return Err(SimulationError::invalid_parameter(
            "order_count must be at least 1",
        ));
    }
    if !avg_active_orders.is_finite() || avg_active_orders <= 0.0 {
        return Err(SimulationError::invalid_parameter(
            "avg_active_orders must be positive and finite",
        ));
    }
    let load_dist = Poisson::new(avg_active_orders).map_err(|_| {
        SimulationError::invalid_parameter("avg_active_orders must be positive and finite")
    })?;
    let peak_dist = Bernoulli::new(peak_ratio)
        .map_err(|_| SimulationError::invalid_parameter("peak_ratio must lie in [0, 1]"))?;

    let mut rng = StdRng::seed_from_u64(seed);

    // Latent per-order variables, drawn column by column from one stream
    let active_orders: Vec<u32> = (0..order_count)
        .map(|_| {
            let load: f64 = load_dist.sample(&mut rng);
            load as u32
        })
        .collect();
    let complexity: Vec<u8> = (0..order_count)
        .map(|_| rng.random_range(COMPLEXITY_MIN..=COMPLEXITY_MAX))
        .collect();
    let peak_hour: Vec<bool> = (0..order_count)
        .map(|_| peak_dist.sample(&mut rng))
        .collect();

    let true_prep_time: Vec<f64> = (0..order_count)
        .map(|row| {
            BASE_PREP_TIME
                + PREP_TIME_PER_ACTIVE_ORDER * f64::from(active_orders[row])
                + PREP_TIME_PER_COMPLEXITY * f64::from(complexity[row])
                + if peak_hour[row] { PEAK_HOUR_PREP_BUMP } else { 0.0 }
                + gaussian(&mut rng, 0.0, PREP_NOISE_STD)
        })
        .collect();

    // The merchant reports high on average; the rider tends to arrive
    // before the order is actually ready
    let merchant_for: Vec<f64> = true_prep_time
        .iter()
        .map(|true_time| true_time + gaussian(&mut rng, MERCHANT_BIAS_MEAN, MERCHANT_BIAS_STD))
        .collect();
    let rider_arrival: Vec<f64> = true_prep_time
        .iter()
        .map(|true_time| true_time - gaussian(&mut rng, RIDER_OFFSET_MEAN, RIDER_OFFSET_STD))
        .collect();

    debug!("generated {} synthetic orders (seed {})", order_count, seed);

    Ok(OrderDataset {
        active_orders,
        complexity,
        peak_hour,
        true_prep_time,
        merchant_for,
        rider_arrival,
        ..OrderDataset::default()
    })
}

/// Draw one Gaussian value with the given mean and standard deviation
fn gaussian(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    mean + std_dev * z
}
