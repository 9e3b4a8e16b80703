//! Diff result structures.

use crate::model::Row;
use serde::{Deserialize, Serialize};

/// A single changed cell in a matched row pair.
///
/// Only produced when the old and new values differ under the engine's
/// comparison (missing columns read as empty, so missing and empty compare
/// equal). `None` records that the column was absent from the row, as
/// opposed to present-but-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnChange {
    /// Column the change occurred in
    pub column: String,
    /// Value in the old row, `None` if the column was absent
    pub old_value: Option<String>,
    /// Value in the new row, `None` if the column was absent
    pub new_value: Option<String>,
}

/// A row present in both tables with at least one changed compare column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifiedRow {
    /// Composite key the rows matched on
    pub key: String,
    /// The matched row from the old table
    pub old_row: Row,
    /// The matched row from the new table
    pub new_row: Row,
    /// Changed compare columns, in compare-column order. Never empty.
    pub changes: Vec<ColumnChange>,
}

/// Summary statistics for one diff run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    /// Rows in the old table
    pub rows_old: usize,
    /// Rows in the new table
    pub rows_new: usize,
    /// Rows only in the new table
    pub added: usize,
    /// Rows only in the old table
    pub removed: usize,
    /// Matched rows with changed compare columns
    pub modified: usize,
    /// Matched rows with no changes (omitted from the result buckets)
    pub unchanged: usize,
    /// Old rows overwritten by a later row with the same key while
    /// indexing (last-wins). Zero when the identical-input fast path
    /// skipped index construction. A non-zero count usually signals that
    /// the key columns do not uniquely identify rows.
    pub duplicate_old_keys: usize,
    /// Total classified changes (added + removed + modified)
    pub total_changes: usize,
}

/// Complete result of one diff run.
///
/// Every row of the new table lands in exactly one of `added`, `modified`,
/// or the omitted unchanged set; every old row whose key has no counterpart
/// in the new table lands in `removed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct DiffResult {
    /// Summary statistics
    pub summary: DiffSummary,
    /// New-table rows with no key match in the old table, in new-table order
    pub added: Vec<Row>,
    /// Old-table rows with no key match in the new table. Ordered by the
    /// old index's insertion order (the position of each surviving key's
    /// last occurrence), which makes repeated runs reproducible.
    pub removed: Vec<Row>,
    /// Matched rows with changes, in new-table order
    pub modified: Vec<ModifiedRow>,
}

impl DiffResult {
    /// Create a new empty diff result
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the bucket counts in the summary from the buckets
    /// themselves. Row totals and the unchanged/duplicate counters are
    /// filled in by the engine, which is the only place they are known.
    pub fn calculate_summary(&mut self) {
        self.summary.added = self.added.len();
        self.summary.removed = self.removed.len();
        self.summary.modified = self.modified.len();
        self.summary.total_changes =
            self.summary.added + self.summary.removed + self.summary.modified;
    }

    /// Check if there are any changes
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.summary.total_changes > 0
    }

    /// Total number of classified changes
    #[must_use]
    pub fn total_changes(&self) -> usize {
        self.summary.total_changes
    }
}
