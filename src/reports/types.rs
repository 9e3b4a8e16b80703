//! Shared report types.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for diff reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: table if TTY, summary otherwise
    #[default]
    Auto,
    /// Structured JSON output
    Json,
    /// Brief summary output
    Summary,
    /// Grouped per-row change listing for the terminal
    Table,
    /// CSV change list for spreadsheet import
    Csv,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Auto => write!(f, "auto"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Summary => write!(f, "summary"),
            ReportFormat::Table => write!(f, "table"),
            ReportFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Context handed to report generators alongside the diff result.
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    /// Display name of the old input (usually the file name)
    pub old_name: String,
    /// Display name of the new input
    pub new_name: String,
    /// Key columns the diff ran with
    pub key_columns: Vec<String>,
    /// Compare columns the diff ran with
    pub compare_columns: Vec<String>,
    /// Use colored output where the format supports it
    pub colored: bool,
}

/// Report provenance block embedded in machine-readable formats.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    /// Generating tool name
    pub tool: &'static str,
    /// Tool version
    pub version: &'static str,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
    /// Old input name
    pub old: String,
    /// New input name
    pub new: String,
    /// Key columns used
    pub key_columns: Vec<String>,
    /// Compare columns used
    pub compare_columns: Vec<String>,
}

impl ReportMetadata {
    /// Build metadata for a report from its config
    #[must_use]
    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            tool: "rowdiff",
            version: env!("CARGO_PKG_VERSION"),
            generated_at: Utc::now(),
            old: config.old_name.clone(),
            new: config.new_name.clone(),
            key_columns: config.key_columns.clone(),
            compare_columns: config.compare_columns.clone(),
        }
    }
}
