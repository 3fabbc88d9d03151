#![warn(missing_docs)]
//! lapbench CLI Library
//!
//! Drives a suite of [`BenchmarkRunner`]s across doubling problem sizes and
//! prints the mean time of each one at each size.
//!
//! # Example
//!
//! ```ignore
//! use lapbench::BenchmarkRunner;
//!
//! fn main() -> anyhow::Result<()> {
//!     let suite = vec![
//!         BenchmarkRunner::new("vec push", |n: &mut usize| {
//!             let mut v = Vec::new();
//!             for i in 0..*n {
//!                 v.push(i);
//!             }
//!         }),
//!     ];
//!     lapbench_cli::run(suite)
//! }
//! ```

mod config;
mod executor;
mod planner;

pub use config::*;
pub use executor::{Measurement, format_measurements, run_suite};
pub use planner::DoublingPlan;

use clap::Parser;
use lapbench_core::BenchmarkRunner;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// lapbench CLI arguments
#[derive(Parser, Debug, Default)]
#[command(name = "lapbench")]
#[command(author, version, about = "lapbench - doubling-size micro-benchmarks")]
pub struct Cli {
    /// Measured repetitions per benchmark and size
    #[arg(long, short = 'n')]
    pub runs: Option<usize>,

    /// First problem size
    #[arg(long)]
    pub initial_size: Option<usize>,

    /// Number of times the problem size doubles
    #[arg(long)]
    pub doublings: Option<u32>,

    /// Configuration file (default: discover lapbench.toml)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Driver settings after merging CLI flags over configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Measured repetitions per benchmark and size
    pub runs: usize,
    /// Problem sizes
    pub plan: DoublingPlan,
    /// Log filter directive
    pub filter: String,
}

impl Settings {
    /// Merge CLI flags over `config`. Flags win when given.
    pub fn resolve(cli: &Cli, config: &LapConfig) -> Self {
        let filter = if cli.verbose {
            "lapbench=debug".to_string()
        } else {
            config.logging.filter.clone()
        };

        Self {
            runs: cli.runs.unwrap_or(config.runner.runs),
            plan: DoublingPlan::new(
                cli.initial_size.unwrap_or(config.runner.initial_size),
                cli.doublings.unwrap_or(config.runner.doublings),
            ),
            filter,
        }
    }
}

/// Run the lapbench CLI on `suite`.
/// This is the main entry point for benchmark binaries.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if configuration or a benchmark fails.
pub fn run(suite: Vec<BenchmarkRunner<usize>>) -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli, suite)
}

/// Run the lapbench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli, suite: Vec<BenchmarkRunner<usize>>) -> anyhow::Result<()> {
    // An explicit --config must load; discovery failures fall back to defaults
    let config = match &cli.config {
        Some(path) => LapConfig::load(path)?,
        None => LapConfig::discover().unwrap_or_default(),
    };
    let settings = Settings::resolve(&cli, &config);

    // Initialize logging
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.filter))
        .with_writer(std::io::stderr)
        .try_init();

    tracing::info!(
        benchmarks = suite.len(),
        sizes = settings.plan.len(),
        runs = settings.runs,
        "Starting doubling run"
    );

    let measurements = run_suite(&suite, &settings.plan, settings.runs)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(format_measurements(&measurements).as_bytes())?;
    stdout.flush()?;

    Ok(())
}
