//! Row data structure.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One record of a parsed table: an ordered mapping from column name to
/// cell value.
///
/// Column insertion order is preserved for display purposes; it carries no
/// meaning for diff semantics. Rows are immutable once produced by a parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: IndexMap<String, String>,
}

impl Row {
    /// Create a new empty row
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row with capacity for the given number of columns
    #[must_use]
    pub fn with_capacity(columns: usize) -> Self {
        Self {
            cells: IndexMap::with_capacity(columns),
        }
    }

    /// Set a cell value, overwriting any previous value for the column
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Get a cell value, or `None` if the column is absent
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Get a cell value for diff purposes: an absent column reads as the
    /// empty string, never as an error. This is what makes the diff engine
    /// total over arbitrary column configurations.
    #[must_use]
    pub fn value(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    /// Check whether the row has a value for the column
    #[must_use]
    pub fn has_column(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    /// Iterate over `(column, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(c, v)| (c.as_str(), v.as_str()))
    }

    /// Column names in insertion order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Number of cells in the row
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<C, V> FromIterator<(C, V)> for Row
where
    C: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(c, v)| (c.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Row {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_reads_as_empty() {
        let row = Row::from_iter([("id", "1")]);
        assert_eq!(row.get("name"), None);
        assert_eq!(row.value("name"), "");
        assert_eq!(row.value("id"), "1");
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut row = Row::new();
        row.insert("b", "2");
        row.insert("a", "1");
        let cols: Vec<_> = row.columns().collect();
        assert_eq!(cols, vec!["b", "a"]);
    }

    #[test]
    fn rows_with_same_cells_are_equal() {
        let a = Row::from_iter([("id", "1"), ("name", "Alice")]);
        let b = Row::from_iter([("id", "1"), ("name", "Alice")]);
        assert_eq!(a, b);
    }
}
