//! Table data structure.

use super::Row;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use xxhash_rust::xxh3::Xxh3;

/// A parsed table: header columns plus an ordered sequence of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Header column names, in file order
    pub columns: Vec<String>,
    /// Data rows, in file order
    pub rows: Vec<Row>,
    /// Content hash for quick equality checks
    #[serde(skip)]
    pub content_hash: u64,
}

impl Table {
    /// Create a table from parsed columns and rows, computing the content hash.
    #[must_use]
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        let content_hash = hash_content(&columns, &rows);
        Self {
            columns,
            rows,
            content_hash,
        }
    }

    /// Create an empty table
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Number of data rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of header columns
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Check whether the header contains the given column
    #[must_use]
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Header columns as a set, for order-insensitive schema comparison
    #[must_use]
    pub fn column_set(&self) -> BTreeSet<&str> {
        self.columns.iter().map(String::as_str).collect()
    }

    /// Check whether two tables expose the same column set.
    ///
    /// Column order is a display concern; schema equality is by name only.
    #[must_use]
    pub fn same_columns(&self, other: &Table) -> bool {
        self.column_set() == other.column_set()
    }

    /// Columns from `wanted` that are absent from this table's header
    #[must_use]
    pub fn missing_columns<'a>(&self, wanted: &'a [String]) -> Vec<&'a str> {
        wanted
            .iter()
            .map(String::as_str)
            .filter(|c| !self.has_column(c))
            .collect()
    }
}

/// Hash header and cell content with xxh3 for the diff engine's
/// identical-input fast path. Field and record separators keep
/// `["ab","c"]` and `["a","bc"]` distinct.
fn hash_content(columns: &[String], rows: &[Row]) -> u64 {
    let mut hasher = Xxh3::new();
    for column in columns {
        hasher.update(column.as_bytes());
        hasher.update(&[0x1f]);
    }
    hasher.update(&[0x1e]);
    for row in rows {
        for column in columns {
            hasher.update(row.value(column).as_bytes());
            hasher.update(&[0x1f]);
        }
        hasher.update(&[0x1e]);
    }
    hasher.digest()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[&str], rows: &[&[(&str, &str)]]) -> Table {
        Table::new(
            columns.iter().map(ToString::to_string).collect(),
            rows.iter()
                .map(|cells| cells.iter().copied().collect())
                .collect(),
        )
    }

    #[test]
    fn identical_content_hashes_equal() {
        let a = table(&["id", "name"], &[&[("id", "1"), ("name", "Alice")]]);
        let b = table(&["id", "name"], &[&[("id", "1"), ("name", "Alice")]]);
        assert_eq!(a.content_hash, b.content_hash);
    }

    #[test]
    fn different_content_hashes_differ() {
        let a = table(&["id", "name"], &[&[("id", "1"), ("name", "Alice")]]);
        let b = table(&["id", "name"], &[&[("id", "1"), ("name", "Alicia")]]);
        assert_ne!(a.content_hash, b.content_hash);
    }

    #[test]
    fn cell_boundaries_affect_hash() {
        let a = table(&["a", "b"], &[&[("a", "ab"), ("b", "c")]]);
        let b = table(&["a", "b"], &[&[("a", "a"), ("b", "bc")]]);
        assert_ne!(a.content_hash, b.content_hash);
    }

    #[test]
    fn schema_comparison_ignores_order() {
        let a = table(&["id", "name"], &[]);
        let b = table(&["name", "id"], &[]);
        assert!(a.same_columns(&b));
    }

    #[test]
    fn missing_columns_reported() {
        let t = table(&["id", "name"], &[]);
        let wanted = vec!["id".to_string(), "email".to_string()];
        assert_eq!(t.missing_columns(&wanted), vec!["email"]);
    }
}
