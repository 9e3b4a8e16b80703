//! CSV report generator.
//!
//! Generates a flat change list suitable for spreadsheet import: one line
//! per added/removed row and one line per changed column of a modified row.

use super::{ReportConfig, ReportError, ReportGenerator};
use crate::diff::DiffResult;
use crate::model::Row;
use std::fmt::Write as _;

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    /// Create a new CSV reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape a value for CSV output (doubles embedded quotes).
fn escape_csv(value: &str) -> String {
    value.replace('"', "\"\"")
}

/// Render a row as `col=value` pairs for the detail field.
fn render_row(row: &Row) -> String {
    row.iter()
        .map(|(c, v)| format!("{c}={v}"))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ReportGenerator for CsvReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut content = String::new();
        let key_columns = config.key_columns.join(", ");

        content.push_str("Change,Key,Column,Old Value,New Value,Row\n");

        for row in &result.added {
            let key: Vec<&str> = config.key_columns.iter().map(|c| row.value(c)).collect();
            writeln!(
                content,
                "Added,\"{}\",,,,\"{}\"",
                escape_csv(&key.join("__")),
                escape_csv(&render_row(row))
            )?;
        }

        for row in &result.removed {
            let key: Vec<&str> = config.key_columns.iter().map(|c| row.value(c)).collect();
            writeln!(
                content,
                "Removed,\"{}\",,,,\"{}\"",
                escape_csv(&key.join("__")),
                escape_csv(&render_row(row))
            )?;
        }

        for row in &result.modified {
            for change in &row.changes {
                writeln!(
                    content,
                    "Modified,\"{}\",\"{}\",\"{}\",\"{}\",",
                    escape_csv(&row.key),
                    escape_csv(&change.column),
                    escape_csv(change.old_value.as_deref().unwrap_or("")),
                    escape_csv(change.new_value.as_deref().unwrap_or(""))
                )?;
            }
        }

        tracing::debug!(key_columns = %key_columns, "generated CSV change list");
        Ok(content)
    }
}
