//! Report generation for diff results.
//!
//! This module provides multiple output formats for table diff results:
//! - JSON: structured data for programmatic integration
//! - Summary: compact shell-friendly counts
//! - Table: grouped per-row change listing for the terminal
//! - CSV: flat change list for spreadsheet import

mod csv;
mod json;
mod summary;
mod types;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use summary::{SummaryReporter, TableReporter};
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::diff::DiffResult;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),

    #[error("Output format not supported for this operation: {0}")]
    UnsupportedFormat(String),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from diff results
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;
}

/// Build the generator for a concrete (non-auto) format.
///
/// Returns `UnsupportedFormat` for [`ReportFormat::Auto`], which must be
/// resolved against the output target first.
pub fn generator_for(
    format: ReportFormat,
    colored: bool,
) -> Result<Box<dyn ReportGenerator>, ReportError> {
    match format {
        ReportFormat::Json => Ok(Box::new(JsonReporter::new())),
        ReportFormat::Csv => Ok(Box::new(CsvReporter::new())),
        ReportFormat::Summary => {
            let reporter = SummaryReporter::new();
            Ok(Box::new(if colored { reporter } else { reporter.no_color() }))
        }
        ReportFormat::Table => {
            let reporter = TableReporter::new();
            Ok(Box::new(if colored { reporter } else { reporter.no_color() }))
        }
        ReportFormat::Auto => Err(ReportError::UnsupportedFormat(
            "auto format must be resolved before generating".to_string(),
        )),
    }
}
