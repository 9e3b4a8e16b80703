//! **Row-level semantic diff for CSV/TSV tables.**
//!
//! `rowdiff` compares two tabular files sharing a column schema and reports
//! which rows were added, removed, or modified. Rows are matched by a
//! composite key built from user-chosen key columns; matched rows are
//! compared over user-chosen compare columns, with per-column old/new
//! values reported for every change. It powers both a command-line tool
//! and a Rust library for embedding the diff engine in other applications.
//!
//! ## Key Features
//!
//! - **Thin CSV/TSV parsing**: delimiter dispatch by file extension with
//!   content sniffing as fallback, plus BOM/UTF-8/Shift-JIS input decoding.
//! - **Key-based row diffing**: hash-index matching over composite keys,
//!   with a documented last-wins policy for duplicate keys.
//! - **Incremental progress**: long scans run in batches through a
//!   resumable session, emitting phase/percent events over a one-way
//!   progress channel that can never affect the result.
//! - **Flexible reporting**: JSON, compact summary, grouped terminal
//!   listing, and CSV export.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the [`Table`] and [`Row`] containers produced by the
//!   parsers and consumed by the engine.
//! - **[`parsers`]**: text-to-table parsing and format/encoding detection.
//! - **[`diff`]**: home of the [`DiffEngine`], the row classification core.
//! - **[`pipeline`]**: parse → schema check → diff → report orchestration
//!   used by the CLI.
//! - **[`reports`]**: report generators for the supported output formats.
//!
//! ## Getting Started: Diffing Two Tables
//!
//! ```
//! use rowdiff::{DiffEngine, parse_table_str, TableFormat};
//!
//! let old = parse_table_str("id,name\n1,Alice", TableFormat::Csv);
//! let new = parse_table_str("id,name\n1,Alicia\n2,Bob", TableFormat::Csv);
//!
//! let engine = DiffEngine::new(["id"], ["name"]);
//! let result = engine.diff(&old, &new);
//!
//! assert_eq!(result.added.len(), 1);
//! assert_eq!(result.modified.len(), 1);
//! assert!(result.removed.is_empty());
//! ```
//!
//! ## Observing Progress
//!
//! ```
//! use rowdiff::{CallbackSink, DiffEngine, ProgressInfo, parse_table_str, TableFormat};
//!
//! let old = parse_table_str("id\n1\n2", TableFormat::Csv);
//! let new = parse_table_str("id\n2\n3", TableFormat::Csv);
//!
//! let mut percents = Vec::new();
//! let mut sink = CallbackSink::new(|info: &ProgressInfo| {
//!     percents.push(info.percent);
//! });
//!
//! let engine = DiffEngine::new(["id"], Vec::<String>::new());
//! let result = engine.diff_with_progress(&old, &new, &mut sink);
//!
//! assert_eq!(percents.last(), Some(&100));
//! assert_eq!(result.added.len(), 1);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Percent math casts usize scan positions into u8 percents - bounded by 100
    clippy::cast_possible_truncation,
    // # Errors / # Panics doc sections are not maintained for every fn
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // old/new naming is the domain vocabulary here
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{
    BehaviorConfig, ColumnsConfig, ConfigError, DiffConfig, DiffConfigBuilder, DiffPaths,
    FileConfig, OutputConfig, Validatable,
};
pub use diff::{
    CallbackSink, ChannelSink, ColumnChange, DiffEngine, DiffResult, DiffSession, DiffSummary,
    KeyBuilder, ModifiedRow, NoProgress, ProgressInfo, ProgressPhase, ProgressSink,
    ProgressSinkError, StepOutcome, KEY_SEPARATOR,
};
pub use error::{Result, RowDiffError};
pub use model::{Row, Table};
pub use parsers::{parse_table, parse_table_str, TableFormat, TableParser};
pub use reports::{ReportConfig, ReportFormat, ReportGenerator};
