//! Suite Execution
//!
//! Each benchmark in the suite receives the problem size itself as its input,
//! so the run stage builds and exercises a structure of that size.

use crate::planner::DoublingPlan;
use indicatif::{ProgressBar, ProgressStyle};
use lapbench_core::BenchmarkRunner;

/// Mean time of one benchmark at one problem size
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Benchmark description
    pub description: String,
    /// Problem size passed to the benchmark
    pub size: usize,
    /// Mean milliseconds per run
    pub mean_ms: f64,
}

/// Run every benchmark at every planned size.
///
/// Results are ordered by size, then by position in `suite`. The first timer
/// error aborts the whole suite.
pub fn run_suite(
    suite: &[BenchmarkRunner<usize>],
    plan: &DoublingPlan,
    runs: usize,
) -> anyhow::Result<Vec<Measurement>> {
    let total = plan.len() * suite.len();
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let mut measurements = Vec::with_capacity(total);
    for size in plan.sizes() {
        for runner in suite {
            pb.set_message(format!("{} n={}", runner.description(), size));
            let mean_ms = runner.run(|| size, runs)?;
            tracing::debug!(description = runner.description(), size, mean_ms, "measured");
            measurements.push(Measurement {
                description: runner.description().to_string(),
                size,
                mean_ms,
            });
            pb.inc(1);
        }
    }

    pb.finish_with_message("Complete");
    Ok(measurements)
}
