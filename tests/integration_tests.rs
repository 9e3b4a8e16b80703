//! Integration tests for rowdiff
//!
//! These tests verify end-to-end functionality of table parsing, the diff
//! engine, progress reporting, and report generation.

use rowdiff::{
    diff::{CallbackSink, DiffEngine, ProgressInfo, ProgressPhase},
    parsers::{parse_table, parse_table_str, TableFormat},
    reports::{JsonReporter, ReportConfig, ReportGenerator, SummaryReporter},
};
use std::path::Path;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn csv(content: &str) -> rowdiff::Table {
    parse_table_str(content, TableFormat::Csv)
}

// ============================================================================
// Parser Tests
// ============================================================================

mod parser_tests {
    use super::*;

    #[test]
    fn parse_csv_fixture() {
        let (table, format) = parse_table(&fixture_path("old.csv")).expect("parse should succeed");
        assert_eq!(format, TableFormat::Csv);
        assert_eq!(table.columns, vec!["id", "name", "email"]);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows[0].value("name"), "Alice");
    }

    #[test]
    fn parse_tsv_fixture() {
        let (table, format) = parse_table(&fixture_path("old.tsv")).expect("parse should succeed");
        assert_eq!(format, TableFormat::Tsv);
        assert_eq!(table.columns, vec!["id", "name"]);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(parse_table(&fixture_path("does-not-exist.csv")).is_err());
    }
}

// ============================================================================
// Diff Engine Scenario Tests
// ============================================================================

mod scenario_tests {
    use super::*;

    #[test]
    fn pure_addition() {
        let old = csv("id,name\n1,Alice");
        let new = csv("id,name\n1,Alice\n2,Bob");
        let result = DiffEngine::new(["id"], ["name"]).diff(&old, &new);

        assert_eq!(result.added.len(), 1);
        assert_eq!(result.added[0].value("id"), "2");
        assert_eq!(result.added[0].value("name"), "Bob");
        assert!(result.removed.is_empty());
        assert!(result.modified.is_empty());
    }

    #[test]
    fn pure_modification() {
        let old = csv("id,name\n1,Alice");
        let new = csv("id,name\n1,Alicia");
        let result = DiffEngine::new(["id"], ["name"]).diff(&old, &new);

        assert!(result.added.is_empty());
        assert!(result.removed.is_empty());
        assert_eq!(result.modified.len(), 1);

        let modified = &result.modified[0];
        assert_eq!(modified.key, "1");
        assert_eq!(modified.changes.len(), 1);
        assert_eq!(modified.changes[0].column, "name");
        assert_eq!(modified.changes[0].old_value.as_deref(), Some("Alice"));
        assert_eq!(modified.changes[0].new_value.as_deref(), Some("Alicia"));
    }

    #[test]
    fn pure_removal() {
        let old = csv("id\n1\n2");
        let new = csv("id\n1");
        let result = DiffEngine::new(["id"], Vec::<String>::new()).diff(&old, &new);

        assert!(result.added.is_empty());
        assert_eq!(result.removed.len(), 1);
        assert_eq!(result.removed[0].value("id"), "2");
        assert!(result.modified.is_empty());
    }

    #[test]
    fn duplicate_keys_in_old_table_last_wins() {
        let old = csv("id,v\n1,a\n1,b");
        let new = csv("id,v\n1,b");
        let result = DiffEngine::new(["id"], ["v"]).diff(&old, &new);

        // The index kept the last old row (v=b), so the new row is unchanged
        assert!(result.added.is_empty());
        assert!(result.removed.is_empty());
        assert!(result.modified.is_empty());
        assert_eq!(result.summary.duplicate_old_keys, 1);
    }

    #[test]
    fn composite_key_joins_in_order() {
        let old = csv("region,id,v\neu,1,a");
        let new = csv("region,id,v\neu,1,b\nus,1,c");
        let result = DiffEngine::new(["region", "id"], ["v"]).diff(&old, &new);

        assert_eq!(result.modified.len(), 1);
        assert_eq!(result.modified[0].key, "eu__1");
        assert_eq!(result.added.len(), 1);
        assert_eq!(result.added[0].value("region"), "us");
    }

    #[test]
    fn key_column_also_in_compare_columns() {
        let old = csv("id,name\n1,Alice");
        let new = csv("id,name\n1,Alice");
        let result = DiffEngine::new(["id"], ["id", "name"]).diff(&old, &new);
        assert!(result.modified.is_empty());
    }

    #[test]
    fn changes_restricted_to_compare_columns() {
        let old = csv("id,name,email\n1,Alice,a@x.com");
        let new = csv("id,name,email\n1,Alicia,b@x.com");
        let result = DiffEngine::new(["id"], ["name"]).diff(&old, &new);

        assert_eq!(result.modified.len(), 1);
        let changes = &result.modified[0].changes;
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].column, "name");
    }

    #[test]
    fn unchanged_rows_are_omitted() {
        let old = csv("id,name\n1,Alice\n2,Bob");
        let new = csv("id,name\n1,Alice\n2,Bobby");
        let result = DiffEngine::new(["id"], ["name"]).diff(&old, &new);

        assert_eq!(result.summary.unchanged, 1);
        assert_eq!(result.modified.len(), 1);
        assert_eq!(result.summary.rows_new, 2);
    }

    #[test]
    fn ordering_follows_input_order() {
        let old = csv("id\n10\n20\n30");
        let new = csv("id\n40\n20\n50");
        let result = DiffEngine::new(["id"], Vec::<String>::new()).diff(&old, &new);

        let added: Vec<&str> = result.added.iter().map(|r| r.value("id")).collect();
        assert_eq!(added, vec!["40", "50"]);
        // Removed rows drain in old-table insertion order
        let removed: Vec<&str> = result.removed.iter().map(|r| r.value("id")).collect();
        assert_eq!(removed, vec!["10", "30"]);
    }

    #[test]
    fn duplicate_keys_in_new_table() {
        // The first new row consumes the index entry; the second becomes added
        let old = csv("id,v\n1,a");
        let new = csv("id,v\n1,a\n1,b");
        let result = DiffEngine::new(["id"], ["v"]).diff(&old, &new);

        assert_eq!(result.summary.unchanged, 1);
        assert_eq!(result.added.len(), 1);
        assert_eq!(result.added[0].value("v"), "b");
    }

    #[test]
    fn fixture_end_to_end() {
        let (old, _) = parse_table(&fixture_path("old.csv")).expect("parse old");
        let (new, _) = parse_table(&fixture_path("new.csv")).expect("parse new");
        let result = DiffEngine::new(["id"], ["name", "email"]).diff(&old, &new);

        assert_eq!(result.added.len(), 1); // id=4
        assert_eq!(result.removed.len(), 1); // id=3
        assert_eq!(result.modified.len(), 1); // id=1, name changed
        assert_eq!(result.summary.unchanged, 1); // id=2
        assert_eq!(result.modified[0].changes[0].column, "name");
    }
}

// ============================================================================
// Progress Reporting Tests
// ============================================================================

mod progress_tests {
    use super::*;

    fn collect_events(old: &rowdiff::Table, new: &rowdiff::Table, batch: usize) -> Vec<ProgressInfo> {
        let mut events = Vec::new();
        let mut sink = CallbackSink::new(|info: &ProgressInfo| events.push(info.clone()));
        let engine = DiffEngine::new(["id"], ["name"]).with_batch_size(batch);
        let _ = engine.diff_with_progress(old, new, &mut sink);
        events
    }

    #[test]
    fn phases_occur_in_order() {
        let old = csv("id,name\n1,a\n2,b\n3,c");
        let new = csv("id,name\n1,a\n2,x\n4,d");
        let events = collect_events(&old, &new, 1);

        let order = [
            ProgressPhase::BuildOldMap,
            ProgressPhase::ScanNewMap,
            ProgressPhase::Finalizing,
            ProgressPhase::Done,
        ];
        let rank = |p: ProgressPhase| order.iter().position(|&o| o == p).expect("known phase");

        assert!(events
            .windows(2)
            .all(|w| rank(w[0].phase) <= rank(w[1].phase)));
        for phase in order {
            assert!(
                events.iter().any(|e| e.phase == phase),
                "missing phase {phase:?}"
            );
        }
    }

    #[test]
    fn percent_is_monotone_and_ends_at_100() {
        let old = csv("id,name\n1,a\n2,b");
        let new = csv("id,name\n3,c\n4,d\n5,e\n6,f");
        let events = collect_events(&old, &new, 1);

        assert!(events.windows(2).all(|w| w[0].percent <= w[1].percent));
        assert_eq!(events.first().map(|e| e.percent), Some(0));
        assert_eq!(events.last().map(|e| e.percent), Some(100));
        assert_eq!(events.last().map(|e| e.phase), Some(ProgressPhase::Done));
    }

    #[test]
    fn scan_reports_once_per_batch() {
        let old = csv("id,name\n1,a");
        let mut content = String::from("id,name\n");
        for i in 0..10 {
            content.push_str(&format!("{i},v\n"));
        }
        let new = csv(&content);
        let events = collect_events(&old, &new, 2);

        let scan_events = events
            .iter()
            .filter(|e| e.phase == ProgressPhase::ScanNewMap)
            .count();
        // one start event plus one per 2-row batch
        assert_eq!(scan_events, 6);
    }

    #[test]
    fn empty_tables_still_report_all_phases() {
        let old = csv("id,name");
        let new = csv("id,name");
        let events = collect_events(&old, &new, 1);

        for phase in [
            ProgressPhase::BuildOldMap,
            ProgressPhase::ScanNewMap,
            ProgressPhase::Finalizing,
            ProgressPhase::Done,
        ] {
            assert!(events.iter().any(|e| e.phase == phase));
        }
    }

    #[test]
    fn progress_does_not_change_result() {
        let old = csv("id,name\n1,a\n2,b\n3,c");
        let new = csv("id,name\n2,b\n3,x\n4,d");
        let engine = DiffEngine::new(["id"], ["name"]).with_batch_size(1);

        let silent = engine.diff(&old, &new);
        let mut sink = CallbackSink::new(|_: &ProgressInfo| {});
        let observed = engine.diff_with_progress(&old, &new, &mut sink);
        assert_eq!(silent, observed);
    }
}

// ============================================================================
// Report Generation Tests
// ============================================================================

mod report_tests {
    use super::*;

    fn sample() -> (rowdiff::DiffResult, ReportConfig) {
        let old = csv("id,name\n1,Alice\n3,Carol");
        let new = csv("id,name\n1,Alicia\n2,Bob");
        let result = DiffEngine::new(["id"], ["name"]).diff(&old, &new);
        let config = ReportConfig {
            old_name: "old.csv".into(),
            new_name: "new.csv".into(),
            key_columns: vec!["id".into()],
            compare_columns: vec!["name".into()],
            colored: false,
        };
        (result, config)
    }

    #[test]
    fn json_report_round_trips_buckets() {
        let (result, config) = sample();
        let rendered = JsonReporter::new()
            .generate_diff_report(&result, &config)
            .expect("json report");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");

        assert_eq!(value["summary"]["added"], 1);
        assert_eq!(value["summary"]["removed"], 1);
        assert_eq!(value["summary"]["modified"], 1);
        assert_eq!(value["modified"][0]["key"], "1");
        assert_eq!(value["modified"][0]["changes"][0]["old_value"], "Alice");
        assert_eq!(value["metadata"]["key_columns"][0], "id");
    }

    #[test]
    fn summary_report_shows_counts() {
        let (result, config) = sample();
        let rendered = SummaryReporter::new()
            .no_color()
            .generate_diff_report(&result, &config)
            .expect("summary report");

        assert!(rendered.contains("old.csv"));
        assert!(rendered.contains("+1 added"));
        assert!(rendered.contains("-1 removed"));
        assert!(rendered.contains("~1 modified"));
    }
}
