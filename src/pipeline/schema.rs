//! Schema comparison stage.
//!
//! Runs before the diff engine: the engine itself never validates columns
//! (absent columns read as empty strings), so genuine schema drift is
//! caught here, where it can be reported as a user-facing error.

use crate::config::ColumnsConfig;
use crate::error::{Result, RowDiffError};
use crate::model::Table;

/// Check that two tables are comparable under the given column selection.
///
/// Verifies that both tables expose the same column set (by name; order is
/// ignored) and that every configured key and compare column exists in the
/// schema.
pub fn check_schemas(old: &Table, new: &Table, columns: &ColumnsConfig) -> Result<()> {
    if !old.same_columns(new) {
        let old_set = old.column_set();
        let new_set = new.column_set();
        let only_old: Vec<&str> = old_set.difference(&new_set).copied().collect();
        let only_new: Vec<&str> = new_set.difference(&old_set).copied().collect();

        let mut parts = Vec::new();
        if !only_old.is_empty() {
            parts.push(format!("only in old: {}", only_old.join(", ")));
        }
        if !only_new.is_empty() {
            parts.push(format!("only in new: {}", only_new.join(", ")));
        }
        return Err(RowDiffError::validation(format!(
            "column sets differ ({})",
            parts.join("; ")
        )));
    }

    for (role, selected) in [("key", &columns.key), ("compare", &columns.compare)] {
        let missing = old.missing_columns(selected);
        if !missing.is_empty() {
            return Err(RowDiffError::validation(format!(
                "{role} column(s) not present in the tables: {}",
                missing.join(", ")
            )));
        }
    }

    Ok(())
}

/// Expand an empty compare selection to every column that is not a key
/// column, in header order.
#[must_use]
pub fn effective_compare_columns(table: &Table, columns: &ColumnsConfig) -> Vec<String> {
    if !columns.compare.is_empty() {
        return columns.compare.clone();
    }
    table
        .columns
        .iter()
        .filter(|c| !columns.key.contains(c))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{parse_table_str, TableFormat};

    fn columns(key: &[&str], compare: &[&str]) -> ColumnsConfig {
        ColumnsConfig {
            key: key.iter().map(ToString::to_string).collect(),
            compare: compare.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn matching_schemas_pass() {
        let old = parse_table_str("id,name\n1,a", TableFormat::Csv);
        let new = parse_table_str("name,id\n2,b", TableFormat::Csv);
        assert!(check_schemas(&old, &new, &columns(&["id"], &["name"])).is_ok());
    }

    #[test]
    fn differing_schemas_name_the_columns() {
        let old = parse_table_str("id,name\n1,a", TableFormat::Csv);
        let new = parse_table_str("id,email\n1,a", TableFormat::Csv);
        let err = check_schemas(&old, &new, &columns(&["id"], &[])).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("only in old: name"));
        assert!(msg.contains("only in new: email"));
    }

    #[test]
    fn unknown_key_column_rejected() {
        let old = parse_table_str("id,name\n1,a", TableFormat::Csv);
        let new = old.clone();
        let err = check_schemas(&old, &new, &columns(&["uuid"], &[])).unwrap_err();
        assert!(err.to_string().contains("uuid"));
    }

    #[test]
    fn empty_compare_expands_to_non_key_columns() {
        let table = parse_table_str("id,name,email\n1,a,b", TableFormat::Csv);
        let effective = effective_compare_columns(&table, &columns(&["id"], &[]));
        assert_eq!(effective, vec!["name", "email"]);
    }

    #[test]
    fn explicit_compare_is_kept() {
        let table = parse_table_str("id,name,email\n1,a,b", TableFormat::Csv);
        let effective = effective_compare_columns(&table, &columns(&["id"], &["email"]));
        assert_eq!(effective, vec!["email"]);
    }
}
