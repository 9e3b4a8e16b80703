//! Table parsing stage.

use crate::model::Table;
use crate::parsers::{parse_table, TableFormat};
use anyhow::{Context, Result};
use std::path::Path;

/// A parsed table with the context the later stages need.
#[derive(Debug)]
pub struct ParsedTable {
    /// The parsed table
    pub table: Table,
    /// Format the file was parsed as
    pub format: TableFormat,
    /// Display name (file name, falling back to the full path)
    pub name: String,
}

impl ParsedTable {
    /// Get a reference to the table
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Consume and return the inner table
    #[must_use]
    pub fn into_table(self) -> Table {
        self.table
    }
}

/// Parse a table with context for error messages.
pub fn parse_table_with_context(path: &Path, quiet: bool) -> Result<ParsedTable> {
    if !quiet {
        tracing::info!("Parsing table: {:?}", path);
    }

    let (table, format) = parse_table(path)
        .with_context(|| format!("Failed to read table file: {}", path.display()))?;

    if !quiet {
        tracing::info!(
            "Parsed {} rows, {} columns ({})",
            table.row_count(),
            table.column_count(),
            format
        );
    }

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map_or_else(|| path.display().to_string(), ToString::to_string);

    Ok(ParsedTable {
        table,
        format,
        name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_path() {
        let err = parse_table_with_context(Path::new("/nonexistent/x.csv"), true).unwrap_err();
        assert!(err.to_string().contains("x.csv"));
    }
}
