//! Configuration types for rowdiff operations.

use crate::reports::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Paths of the two tables being compared.
#[derive(Debug, Clone)]
pub struct DiffPaths {
    /// Path to the old/baseline table
    pub old: PathBuf,
    /// Path to the new table
    pub new: PathBuf,
}

/// Column selection: which columns identify a row and which are compared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnsConfig {
    /// Key columns, in key order. Must not be empty.
    pub key: Vec<String>,
    /// Compare columns, in report order. When empty, the pipeline expands
    /// this to every shared column that is not a key column.
    pub compare: Vec<String>,
}

/// Output configuration (format, file, colors).
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Report format
    pub format: ReportFormat,
    /// Output file path (stdout if not specified)
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior flags.
#[derive(Debug, Clone, Default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Exit non-zero when changes are detected
    pub fail_on_change: bool,
    /// Override the engine's scan batch size
    pub batch_size: Option<usize>,
    /// Disable the terminal progress bar
    pub no_progress: bool,
}

/// Configuration for the diff command.
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Input paths
    pub paths: DiffPaths,
    /// Column selection
    pub columns: ColumnsConfig,
    /// Output configuration
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl DiffConfig {
    /// Create a builder for the given input paths.
    pub fn builder(old: impl Into<PathBuf>, new: impl Into<PathBuf>) -> DiffConfigBuilder {
        DiffConfigBuilder::new(old, new)
    }
}

/// Builder for constructing [`DiffConfig`] with a fluent API.
#[derive(Debug)]
#[must_use]
pub struct DiffConfigBuilder {
    config: DiffConfig,
}

impl DiffConfigBuilder {
    /// Start a builder for the given input paths
    pub fn new(old: impl Into<PathBuf>, new: impl Into<PathBuf>) -> Self {
        Self {
            config: DiffConfig {
                paths: DiffPaths {
                    old: old.into(),
                    new: new.into(),
                },
                columns: ColumnsConfig::default(),
                output: OutputConfig::default(),
                behavior: BehaviorConfig::default(),
            },
        }
    }

    /// Set the key columns
    pub fn key_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.columns.key = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the compare columns
    pub fn compare_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.columns.compare = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set the output format
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Enable fail-on-change mode
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_change = fail;
        self
    }

    /// Enable quiet mode
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Override the scan batch size
    pub const fn batch_size(mut self, batch_size: Option<usize>) -> Self {
        self.config.behavior.batch_size = batch_size;
        self
    }

    /// Disable the progress bar
    pub const fn no_progress(mut self, no_progress: bool) -> Self {
        self.config.behavior.no_progress = no_progress;
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> DiffConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let config = DiffConfig::builder("old.csv", "new.csv")
            .key_columns(["id"])
            .compare_columns(["name"])
            .output_format(ReportFormat::Json)
            .fail_on_change(true)
            .build();

        assert_eq!(config.paths.old, PathBuf::from("old.csv"));
        assert_eq!(config.columns.key, vec!["id"]);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.behavior.fail_on_change);
        assert!(!config.behavior.quiet);
    }
}
