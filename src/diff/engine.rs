//! Row diff engine implementation.

use super::progress::{NoProgress, ProgressInfo, ProgressPhase, ProgressSink};
use super::{ColumnChange, DiffResult, KeyBuilder, ModifiedRow};
use crate::model::{Row, Table};
use indexmap::IndexMap;

/// Row-level diff engine for comparing two tables.
///
/// The engine is configured once with key and compare columns and can then
/// diff any number of table pairs. It is total over well-formed rows:
/// missing columns read as empty strings and nothing in the input data can
/// make a diff fail.
pub struct DiffEngine {
    key_builder: KeyBuilder,
    compare_columns: Vec<String>,
    batch_size: Option<usize>,
}

impl DiffEngine {
    /// Create an engine over the given key and compare columns.
    ///
    /// Key columns determine row identity; compare columns determine what
    /// counts as a modification. The engine accepts an empty key-column
    /// list (every row collapses to one key); callers wanting to reject
    /// that should validate before constructing the engine.
    #[must_use]
    pub fn new<K, C, S, T>(key_columns: K, compare_columns: C) -> Self
    where
        K: IntoIterator<Item = S>,
        S: Into<String>,
        C: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            key_builder: KeyBuilder::new(key_columns),
            compare_columns: compare_columns.into_iter().map(Into::into).collect(),
            batch_size: None,
        }
    }

    /// Override the scan batch size (rows processed per suspension point).
    ///
    /// Defaults to `max(1, new_rows / 100)`, i.e. roughly one progress
    /// event per percent of scan progress.
    #[must_use]
    pub const fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// The configured key columns
    #[must_use]
    pub fn key_columns(&self) -> &[String] {
        self.key_builder.key_columns()
    }

    /// The configured compare columns
    #[must_use]
    pub fn compare_columns(&self) -> &[String] {
        &self.compare_columns
    }

    /// Compare two tables and return the diff result.
    pub fn diff(&self, old: &Table, new: &Table) -> DiffResult {
        self.session(old, new).run(&mut NoProgress)
    }

    /// Compare two tables, emitting progress events while running.
    ///
    /// The result is identical to [`diff`](Self::diff): progress is an
    /// observational side channel, and sink failures are discarded.
    pub fn diff_with_progress(
        &self,
        old: &Table,
        new: &Table,
        sink: &mut dyn ProgressSink,
    ) -> DiffResult {
        self.session(old, new).run(sink)
    }

    /// Start a resumable diff session.
    ///
    /// The session is the engine's cooperative-yielding form: each
    /// [`DiffSession::step`] call processes at most one batch and then
    /// returns control to the caller, which can repaint, check a
    /// cancellation flag (cancel by dropping the session), and call `step`
    /// again.
    #[must_use]
    pub fn session<'a>(&'a self, old: &'a Table, new: &'a Table) -> DiffSession<'a> {
        DiffSession::new(self, old, new)
    }

    /// Compute per-column changes between two matched rows, in
    /// compare-column order. Missing and empty values compare equal; the
    /// recorded values preserve the missing/empty distinction.
    fn compare_rows(&self, old_row: &Row, new_row: &Row) -> Vec<ColumnChange> {
        self.compare_columns
            .iter()
            .filter(|column| old_row.value(column) != new_row.value(column))
            .map(|column| ColumnChange {
                column: column.clone(),
                old_value: old_row.get(column).map(ToOwned::to_owned),
                new_value: new_row.get(column).map(ToOwned::to_owned),
            })
            .collect()
    }
}

/// Outcome of one [`DiffSession::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// More work remains; call `step` again
    Pending,
    /// The diff is complete; take the result with `into_result`
    Done,
}

enum Stage {
    Index,
    Scan,
    Finalize,
    Done,
    /// Content hashes matched: identical inputs short-circuit to an
    /// all-unchanged result without building the index.
    FastPath,
}

/// A resumable diff run.
///
/// The session owns the scratch old-row index for exactly one run and is
/// discarded afterwards. It is logically single-threaded: the host drives
/// it batch by batch, and the result is deterministic for fixed inputs
/// regardless of how the steps are scheduled.
pub struct DiffSession<'a> {
    engine: &'a DiffEngine,
    old: &'a Table,
    new: &'a Table,
    stage: Stage,
    /// Key → old row, in old-table insertion order. Matched slots are
    /// taken (left as `None`) rather than removed so residual iteration
    /// order stays the insertion order without shifting.
    old_index: IndexMap<String, Option<&'a Row>>,
    cursor: usize,
    batch: usize,
    duplicate_old_keys: usize,
    unchanged: usize,
    result: DiffResult,
}

impl<'a> DiffSession<'a> {
    fn new(engine: &'a DiffEngine, old: &'a Table, new: &'a Table) -> Self {
        let batch = engine
            .batch_size
            .unwrap_or_else(|| (new.row_count() / 100).max(1));
        let stage = if old.content_hash == new.content_hash && old.content_hash != 0 {
            Stage::FastPath
        } else {
            Stage::Index
        };
        Self {
            engine,
            old,
            new,
            stage,
            old_index: IndexMap::new(),
            cursor: 0,
            batch,
            duplicate_old_keys: 0,
            unchanged: 0,
            result: DiffResult::new(),
        }
    }

    /// Check whether the run has completed
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self.stage, Stage::Done)
    }

    /// Take the result of a completed run, or `None` if work remains
    #[must_use]
    pub fn into_result(self) -> Option<DiffResult> {
        if self.is_done() {
            Some(self.result)
        } else {
            None
        }
    }

    /// Drive the session to completion
    pub fn run(mut self, sink: &mut dyn ProgressSink) -> DiffResult {
        while self.step(sink) == StepOutcome::Pending {}
        self.result
    }

    /// Process at most one batch of work, emitting progress to `sink`.
    ///
    /// This is the suspension point: between calls the host may service
    /// other work. Calling `step` after completion is a no-op.
    pub fn step(&mut self, sink: &mut dyn ProgressSink) -> StepOutcome {
        match self.stage {
            Stage::FastPath => {
                self.fast_path(sink);
                StepOutcome::Done
            }
            Stage::Index => {
                self.build_index(sink);
                StepOutcome::Pending
            }
            Stage::Scan => {
                self.scan_batch(sink);
                StepOutcome::Pending
            }
            Stage::Finalize => {
                self.finalize(sink);
                StepOutcome::Done
            }
            Stage::Done => StepOutcome::Done,
        }
    }

    fn fast_path(&mut self, sink: &mut dyn ProgressSink) {
        let rows_old = self.old.row_count();
        let rows_new = self.new.row_count();
        tracing::debug!("content hashes match, skipping row scan");

        emit(sink, ProgressInfo::new(ProgressPhase::BuildOldMap, 0, rows_old, 0));
        emit(sink, ProgressInfo::new(ProgressPhase::BuildOldMap, rows_old, rows_old, 5));
        emit(sink, ProgressInfo::new(ProgressPhase::ScanNewMap, 0, rows_new, 5));
        emit(
            sink,
            ProgressInfo::new(ProgressPhase::ScanNewMap, rows_new, rows_new, scan_percent(rows_new, rows_new)),
        );
        emit(sink, ProgressInfo::new(ProgressPhase::Finalizing, 0, 0, 95));

        self.unchanged = rows_new;
        self.fill_summary();
        emit(
            sink,
            ProgressInfo::new(ProgressPhase::Done, rows_new, rows_new, 100).message("diff complete"),
        );
        self.stage = Stage::Done;
    }

    fn build_index(&mut self, sink: &mut dyn ProgressSink) {
        let rows_old = self.old.row_count();
        emit(
            sink,
            ProgressInfo::new(ProgressPhase::BuildOldMap, 0, rows_old, 0)
                .message("indexing old table"),
        );

        self.old_index.reserve(rows_old);
        for row in &self.old.rows {
            let key = self.engine.key_builder.build(row);
            if self.old_index.insert(key, Some(row)).is_some() {
                self.duplicate_old_keys += 1;
            }
        }
        if self.duplicate_old_keys > 0 {
            tracing::warn!(
                duplicates = self.duplicate_old_keys,
                "duplicate keys in old table, keeping the last row for each key"
            );
        }

        emit(
            sink,
            ProgressInfo::new(ProgressPhase::BuildOldMap, rows_old, rows_old, 5)
                .message("old table indexed"),
        );
        emit(
            sink,
            ProgressInfo::new(ProgressPhase::ScanNewMap, 0, self.new.row_count(), 5)
                .message("scanning new table"),
        );
        self.stage = Stage::Scan;
    }

    fn scan_batch(&mut self, sink: &mut dyn ProgressSink) {
        let total = self.new.row_count();
        let end = (self.cursor + self.batch).min(total);

        while self.cursor < end {
            let new_row = &self.new.rows[self.cursor];
            self.cursor += 1;

            let key = self.engine.key_builder.build(new_row);
            let matched = self.old_index.get_mut(&key).and_then(|slot| slot.take());
            match matched {
                Some(old_row) => {
                    let changes = self.engine.compare_rows(old_row, new_row);
                    if changes.is_empty() {
                        self.unchanged += 1;
                    } else {
                        self.result.modified.push(ModifiedRow {
                            key,
                            old_row: old_row.clone(),
                            new_row: new_row.clone(),
                            changes,
                        });
                    }
                }
                None => self.result.added.push(new_row.clone()),
            }
        }

        emit(
            sink,
            ProgressInfo::new(
                ProgressPhase::ScanNewMap,
                self.cursor,
                total,
                scan_percent(self.cursor, total),
            )
            .message(format!("scanning new table ({}/{total})", self.cursor)),
        );

        if self.cursor >= total {
            self.stage = Stage::Finalize;
        }
    }

    fn finalize(&mut self, sink: &mut dyn ProgressSink) {
        let residual = self.old_index.values().filter(|v| v.is_some()).count();
        emit(
            sink,
            ProgressInfo::new(ProgressPhase::Finalizing, 0, residual, 95)
                .message("collecting removed rows"),
        );

        self.result.removed.extend(
            self.old_index
                .drain(..)
                .filter_map(|(_, slot)| slot.cloned()),
        );

        self.fill_summary();
        let rows_new = self.new.row_count();
        emit(
            sink,
            ProgressInfo::new(ProgressPhase::Done, rows_new, rows_new, 100)
                .message("diff complete"),
        );
        self.stage = Stage::Done;
    }

    fn fill_summary(&mut self) {
        self.result.summary.rows_old = self.old.row_count();
        self.result.summary.rows_new = self.new.row_count();
        self.result.summary.unchanged = self.unchanged;
        self.result.summary.duplicate_old_keys = self.duplicate_old_keys;
        self.result.calculate_summary();
    }
}

/// Scan progress maps linearly onto the 5..=90 percent range.
fn scan_percent(processed: usize, total: usize) -> u8 {
    (5 + processed * 85 / total.max(1)) as u8
}

/// Deliver one event, discarding consumer failures.
fn emit(sink: &mut dyn ProgressSink, info: ProgressInfo) {
    if let Err(err) = sink.emit(info) {
        tracing::debug!(%err, "progress sink failure discarded");
    }
}
