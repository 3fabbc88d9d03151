//! Suite Executor
//!
//! Runs every benchmark of a suite at every size of a [`DoublingPlan`] and
//! renders the results.
//!
//! - [`execution`] - Drives the runners and collects measurements
//! - [`formatting`] - Human-readable output formatting
//!
//! [`DoublingPlan`]: crate::DoublingPlan

mod execution;
mod formatting;

pub use execution::{Measurement, run_suite};
pub use formatting::format_measurements;
