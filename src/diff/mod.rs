//! Row-level diff engine for tables.
//!
//! Given two tables sharing a column schema, a set of key columns and a set
//! of compare columns, the engine classifies every row as added, removed,
//! or modified-with-changes:
//!
//! 1. The old table is indexed by composite key (duplicate keys: last row
//!    wins, with the overwrite count surfaced in the summary).
//! 2. The new table is scanned in input order. Rows whose key is absent
//!    from the index are added; matched rows are compared column by column
//!    and kept only when at least one compare column changed. Matched keys
//!    are consumed from the index.
//! 3. Rows surviving in the index are removed.
//!
//! Long scans are broken into batches through [`DiffSession`], an explicit
//! suspension point that lets a host repaint or cancel between batches,
//! and progress events flow through the one-way [`ProgressSink`] channel.
//!
//! # Example
//!
//! ```
//! use rowdiff::diff::DiffEngine;
//! use rowdiff::parsers::{parse_table_str, TableFormat};
//!
//! let old = parse_table_str("id,name\n1,Alice", TableFormat::Csv);
//! let new = parse_table_str("id,name\n1,Alicia\n2,Bob", TableFormat::Csv);
//!
//! let engine = DiffEngine::new(["id"], ["name"]);
//! let result = engine.diff(&old, &new);
//!
//! assert_eq!(result.added.len(), 1);
//! assert_eq!(result.modified.len(), 1);
//! assert_eq!(result.modified[0].changes[0].column, "name");
//! ```

mod engine;
mod key;
mod progress;
mod result;

pub use engine::{DiffEngine, DiffSession, StepOutcome};
pub use key::{KeyBuilder, KEY_SEPARATOR};
pub use progress::{
    CallbackSink, ChannelSink, NoProgress, ProgressInfo, ProgressPhase, ProgressSink,
    ProgressSinkError,
};
pub use result::{ColumnChange, DiffResult, DiffSummary, ModifiedRow};
