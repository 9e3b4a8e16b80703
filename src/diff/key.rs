//! Composite row keys.

use crate::model::Row;

/// Separator between key-column values in a composite key.
pub const KEY_SEPARATOR: &str = "__";

/// Builds the composite key identifying a row's logical identity.
///
/// The key is the row's values for the configured key columns, in column
/// order, joined with [`KEY_SEPARATOR`]. A column missing from the row
/// contributes an empty string. Two rows are the same logical entity iff
/// their keys are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBuilder {
    key_columns: Vec<String>,
}

impl KeyBuilder {
    /// Create a key builder over the given key columns.
    ///
    /// An empty column list is accepted but collapses every row to the same
    /// (empty) key; callers are expected to validate against that upstream.
    #[must_use]
    pub fn new<I, S>(key_columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key_columns: key_columns.into_iter().map(Into::into).collect(),
        }
    }

    /// The configured key columns, in key order
    #[must_use]
    pub fn key_columns(&self) -> &[String] {
        &self.key_columns
    }

    /// Build the composite key for a row
    #[must_use]
    pub fn build(&self, row: &Row) -> String {
        let mut key = String::new();
        for (i, column) in self.key_columns.iter().enumerate() {
            if i > 0 {
                key.push_str(KEY_SEPARATOR);
            }
            key.push_str(row.value(column));
        }
        key
    }
}
