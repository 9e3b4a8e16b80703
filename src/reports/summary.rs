//! Summary and table report generators for shell output.
//!
//! `SummaryReporter` prints compact counts; `TableReporter` prints the full
//! grouped change listing, one block per classified row.

use super::{ReportConfig, ReportError, ReportGenerator};
use crate::diff::{DiffResult, ModifiedRow};
use crate::model::Row;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Render a row as `col=value` pairs in column order.
fn render_row(row: &Row) -> String {
    row.iter()
        .map(|(c, v)| format!("{c}={v}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let s = &result.summary;

        lines.push(self.color("Table Diff Summary", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{}  {} ({} rows) → {} ({} rows)",
            self.color("Files:", "cyan"),
            config.old_name,
            s.rows_old,
            config.new_name,
            s.rows_new
        ));
        lines.push(format!(
            "{}    {}",
            self.color("Keys:", "cyan"),
            config.key_columns.join(", ")
        ));

        lines.push(format!(
            "  {} added",
            self.color(&format!("+{}", s.added), "green")
        ));
        lines.push(format!(
            "  {} removed",
            self.color(&format!("-{}", s.removed), "red")
        ));
        lines.push(format!(
            "  {} modified",
            self.color(&format!("~{}", s.modified), "yellow")
        ));
        lines.push(format!("  {} unchanged", s.unchanged));

        if s.duplicate_old_keys > 0 {
            lines.push(self.color(
                &format!(
                    "Warning: {} duplicate key(s) in the old table, kept the last row for each",
                    s.duplicate_old_keys
                ),
                "yellow",
            ));
        }

        if !result.has_changes() {
            lines.push(self.color("No changes detected", "dim"));
        }

        Ok(lines.join("\n"))
    }
}

/// Grouped per-row change listing for the terminal
pub struct TableReporter {
    colored: bool,
}

impl TableReporter {
    /// Create a new table reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn render_modified(&self, row: &ModifiedRow, out: &mut Vec<String>) {
        out.push(format!("  {} {}", self.color("~", "yellow"), row.key));
        for change in &row.changes {
            out.push(format!(
                "      {}: {} → {}",
                change.column,
                self.color(change.old_value.as_deref().unwrap_or(""), "red"),
                self.color(change.new_value.as_deref().unwrap_or(""), "green"),
            ));
        }
    }
}

impl Default for TableReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TableReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let s = &result.summary;

        lines.push(format!(
            "{} {} → {}",
            self.color("Comparing", "bold"),
            config.old_name,
            config.new_name
        ));

        if !result.added.is_empty() {
            lines.push(self.color(&format!("Added rows ({})", s.added), "bold"));
            for row in &result.added {
                lines.push(format!("  {} {}", self.color("+", "green"), render_row(row)));
            }
        }

        if !result.removed.is_empty() {
            lines.push(self.color(&format!("Removed rows ({})", s.removed), "bold"));
            for row in &result.removed {
                lines.push(format!("  {} {}", self.color("-", "red"), render_row(row)));
            }
        }

        if !result.modified.is_empty() {
            lines.push(self.color(&format!("Modified rows ({})", s.modified), "bold"));
            for row in &result.modified {
                self.render_modified(row, &mut lines);
            }
        }

        if !result.has_changes() {
            lines.push(self.color("No changes detected", "dim"));
        }

        Ok(lines.join("\n"))
    }
}
