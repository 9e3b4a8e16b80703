//! Configuration validation for rowdiff.

use super::types::{BehaviorConfig, ColumnsConfig, DiffConfig};

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for ColumnsConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.key.is_empty() {
            errors.push(ConfigError::new(
                "columns.key",
                "at least one key column is required; with no key columns every row \
                 would collapse to the same key",
            ));
        }
        if self.key.iter().any(|c| c.trim().is_empty()) {
            errors.push(ConfigError::new(
                "columns.key",
                "key column names must not be blank",
            ));
        }
        if self.compare.iter().any(|c| c.trim().is_empty()) {
            errors.push(ConfigError::new(
                "columns.compare",
                "compare column names must not be blank",
            ));
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.batch_size == Some(0) {
            errors.push(ConfigError::new(
                "behavior.batch_size",
                "batch size must be at least 1",
            ));
        }
        errors
    }
}

impl Validatable for DiffConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.columns.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_columns_rejected() {
        let columns = ColumnsConfig {
            key: vec![],
            compare: vec!["name".into()],
        };
        let errors = columns.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "columns.key");
    }

    #[test]
    fn blank_column_names_rejected() {
        let columns = ColumnsConfig {
            key: vec!["id".into(), "  ".into()],
            compare: vec![],
        };
        assert!(!columns.is_valid());
    }

    #[test]
    fn valid_columns_pass() {
        let columns = ColumnsConfig {
            key: vec!["id".into()],
            compare: vec!["name".into()],
        };
        assert!(columns.is_valid());
    }

    #[test]
    fn zero_batch_size_rejected() {
        let behavior = BehaviorConfig {
            batch_size: Some(0),
            ..BehaviorConfig::default()
        };
        assert!(!behavior.is_valid());
    }
}
