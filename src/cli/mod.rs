//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by
//! main.rs. The binary's argument parsing lives in main.rs; handlers take
//! an assembled [`DiffConfig`](crate::config::DiffConfig).

mod diff;
mod progress;

pub use diff::run_diff;
pub use progress::ProgressBarSink;
