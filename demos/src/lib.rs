//! lapbench Demos
//!
//! Runnable demonstrations of lapbench. This crate is not published; it
//! hosts the workloads its examples measure.
//!
//! Run an example with:
//! ```sh
//! cargo run --example <name> -p lapbench-demos --release
//! ```
//!
//! | Example | Workload |
//! |---------|----------|
//! | `union_find` | Height-weighted vs size-weighted quick-union across doubling sizes |

pub mod union_find;
