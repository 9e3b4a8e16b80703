//! Diff computation stage.
//!
//! Builds the engine from the configuration and runs the diff with the
//! caller's progress sink. The engine is total, so this stage cannot fail;
//! configuration and schema problems are rejected by earlier stages.

use crate::config::DiffConfig;
use crate::diff::{DiffEngine, DiffResult, ProgressSink};
use crate::model::Table;

/// Run the core diff computation between two tables.
///
/// `compare_columns` is the effective compare selection (after empty-set
/// expansion); the key columns come from the config.
pub fn compute_diff(
    config: &DiffConfig,
    compare_columns: &[String],
    old: &Table,
    new: &Table,
    sink: &mut dyn ProgressSink,
) -> DiffResult {
    if !config.behavior.quiet {
        tracing::info!(
            keys = %config.columns.key.join(","),
            compare = %compare_columns.join(","),
            "Computing row diff"
        );
    }

    let mut engine = DiffEngine::new(
        config.columns.key.iter().cloned(),
        compare_columns.iter().cloned(),
    );
    if let Some(batch_size) = config.behavior.batch_size {
        engine = engine.with_batch_size(batch_size);
    }

    let result = engine.diff_with_progress(old, new, sink);

    if !config.behavior.quiet {
        let s = &result.summary;
        tracing::info!(
            added = s.added,
            removed = s.removed,
            modified = s.modified,
            unchanged = s.unchanged,
            "Diff complete"
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::NoProgress;
    use crate::parsers::{parse_table_str, TableFormat};

    #[test]
    fn stage_runs_engine_with_config() {
        let old = parse_table_str("id,name\n1,Alice", TableFormat::Csv);
        let new = parse_table_str("id,name\n1,Alicia\n2,Bob", TableFormat::Csv);
        let config = DiffConfig::builder("old.csv", "new.csv")
            .key_columns(["id"])
            .quiet(true)
            .build();

        let result = compute_diff(
            &config,
            &["name".to_string()],
            &old,
            &new,
            &mut NoProgress,
        );
        assert_eq!(result.added.len(), 1);
        assert_eq!(result.modified.len(), 1);
    }
}
