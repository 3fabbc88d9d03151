#![warn(missing_docs)]
//! # lapbench
//!
//! Micro-benchmarking harness for comparing algorithm variants.
//!
//! - **Untimed setup and verification**: an optional pre stage prepares each
//!   input and an optional post stage checks each result, both with the clock paused
//! - **Warmup**: every run starts with a short discarded pass
//! - **One comparable number**: mean milliseconds per run
//! - **Doubling driver**: run a suite across sizes `n, 2n, 4n, …` from the command line
//!
//! ## Quick Start
//!
//! ```ignore
//! use lapbench::BenchmarkRunner;
//!
//! let runner = BenchmarkRunner::new("sort", |v: &mut Vec<u32>| v.sort())
//!     .with_post(|v| assert!(v.windows(2).all(|w| w[0] <= w[1])));
//!
//! let mean_ms = runner.run(|| (0..10_000).rev().collect(), 100)?;
//! ```
//!
//! ## Lap Timing
//!
//! ```ignore
//! let mut timer = lapbench::Timer::new();
//! let mean_ms = timer.repeat(10, || 1_000, |n| (0..n).sum::<u64>(), None, None)?;
//! ```

// Re-export core types
pub use lapbench_core::{
    BenchmarkRunner, MAX_WARMUP_RUNS, MIN_WARMUP_RUNS, Timer, TimerError, format_whole,
    warmup_runs,
};

// Re-export driver types
pub use lapbench_cli::{Cli, DoublingPlan, LapConfig, Measurement, format_measurements, run_suite};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{BenchmarkRunner, DoublingPlan, Timer, TimerError};
}

/// Run the lapbench CLI on a suite.
///
/// Call this from your benchmark binary's `main()`:
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     lapbench::run(vec![my_runner()])
/// }
/// ```
pub use lapbench_cli::run;
