mod simulation;

use anyhow::Context;
use clap::Parser;
use log::info;

use simulation::{run_simulation, SimulationMetrics, SimulationParams};

/// Number of bins in the wait-distribution histograms
const HISTOGRAM_BINS: usize = 40;
/// Widest histogram bar in characters
const HISTOGRAM_BAR_WIDTH: usize = 60;

#[derive(Parser)]
#[command(name = "kitchen_sim")]
#[command(about = "Kitchen prep time simulation comparing a merchant-trusting baseline against a KLI-corrected estimator")]
struct Cli {
    /// Number of synthetic orders to generate
    #[arg(long, default_value = "15000")]
    orders: usize,

    /// Average number of concurrent active orders in the kitchen
    #[arg(long, default_value = "6.0")]
    avg_active_orders: f64,

    /// Probability that an order lands during a peak hour
    #[arg(long, default_value = "0.35")]
    peak_ratio: f64,

    /// Correction strength applied to the Kitchen Load Index
    #[arg(long, default_value = "0.7")]
    kli_weight: f64,

    /// Seed for the run's random source
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Print ASCII histograms of the rider wait distributions
    #[arg(long)]
    histograms: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let params = SimulationParams {
        order_count: cli.orders,
        avg_active_orders: cli.avg_active_orders,
        peak_ratio: cli.peak_ratio,
        kli_weight: cli.kli_weight,
        seed: cli.seed,
    };

    info!(
        "running {} orders with avg load {}, peak ratio {}, kli weight {}, seed {}",
        params.order_count,
        params.avg_active_orders,
        params.peak_ratio,
        params.kli_weight,
        params.seed
    );

    let run = run_simulation(&params).context("simulation run failed")?;

    print_report(&params, &run.metrics);

    if cli.histograms {
        draw_histogram(
            "Rider Wait Distribution (current)",
            &run.dataset.wait_current,
        );
        draw_histogram(
            "Rider Wait Distribution (proposed)",
            &run.dataset.wait_proposed,
        );
    }

    Ok(())
}

/// Print the KPI summary for one simulation run
fn print_report(params: &SimulationParams, metrics: &SimulationMetrics) {
    let improvement = if metrics.mae_current > 0.0 {
        (metrics.mae_current - metrics.mae_proposed) / metrics.mae_current * 100.0
    } else {
        0.0
    };
    let p90_reduction = metrics.p90_current - metrics.p90_proposed;

    println!("=== Kitchen Prep Time Simulation ===");
    println!("Orders: {}", params.order_count);
    println!("Avg active orders: {}", params.avg_active_orders);
    println!("Peak ratio: {}", params.peak_ratio);
    println!("KLI weight: {}", params.kli_weight);
    println!("Seed: {}", params.seed);
    println!();

    println!("--- Prediction Error vs True Prep Time ---");
    println!("  MAE current: {:.2} min", metrics.mae_current);
    println!("  MAE proposed: {:.2} min", metrics.mae_proposed);
    println!("  Improvement: {:.1}%", improvement);
    println!();

    println!("--- Rider Wait ---");
    println!("  Avg wait current: {:.2} min", metrics.avg_wait_current);
    println!("  Avg wait proposed: {:.2} min", metrics.avg_wait_proposed);
    println!();

    println!("--- Tail Error (P90) ---");
    println!("  P90 current: {:.2} min", metrics.p90_current);
    println!("  P90 proposed: {:.2} min", metrics.p90_proposed);
    println!("  P90 reduction: {:.2} min", p90_reduction);
}

/// Draw a fixed-width ASCII histogram of the given values
fn draw_histogram(title: &str, values: &[f64]) {
    if values.is_empty() {
        return;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = (max - min).max(f64::EPSILON);
    let bin_width = span / HISTOGRAM_BINS as f64;

    let mut counts = vec![0usize; HISTOGRAM_BINS];
    for value in values {
        let bin = ((value - min) / span * HISTOGRAM_BINS as f64) as usize;
        counts[bin.min(HISTOGRAM_BINS - 1)] += 1;
    }
    let tallest = counts.iter().copied().max().unwrap_or(1).max(1);

    println!();
    println!("=== {} ===", title);
    for (bin, count) in counts.iter().enumerate() {
        let bin_start = min + bin as f64 * bin_width;
        let bar_length = count * HISTOGRAM_BAR_WIDTH / tallest;
        println!(
            "{:>8.2} | {:<width$} {}",
            bin_start,
            "#".repeat(bar_length),
            count,
            width = HISTOGRAM_BAR_WIDTH
        );
    }
}
