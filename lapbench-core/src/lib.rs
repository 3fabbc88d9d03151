#![warn(missing_docs)]
//! lapbench Core - Timing Runtime
//!
//! This crate provides the measurement machinery for benchmarks:
//! - `Timer`, a pausable monotonic stopwatch with lap accounting
//! - `Timer::repeat`, the supplier → pre → run → post driver that only
//!   clocks the run stage
//! - `BenchmarkRunner`, which pairs a warmup pass with a measured pass and
//!   reports mean milliseconds per run

mod format;
mod measure;
mod runner;

pub use format::format_whole;
pub use measure::{Timer, TimerError};
pub use runner::{BenchmarkRunner, MAX_WARMUP_RUNS, MIN_WARMUP_RUNS, warmup_runs};
