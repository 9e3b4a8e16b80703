//! Unified error types for rowdiff.
//!
//! The diff engine itself is total over well-formed rows and never produces
//! an error; everything here belongs to the layers around it (file IO,
//! parsing, configuration, report generation).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rowdiff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RowDiffError {
    /// Errors while reading and parsing an input table
    #[error("Failed to parse table: {context}")]
    Parse {
        context: String,
        #[source]
        source: crate::parsers::ParseError,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: crate::reports::ReportError,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors (schema mismatch, unknown columns)
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Convenient Result type for rowdiff operations
pub type Result<T> = std::result::Result<T, RowDiffError>;

impl RowDiffError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: crate::parsers::ParseError) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: crate::reports::ReportError) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<std::io::Error> for RowDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<crate::config::ConfigError> for RowDiffError {
    fn from(err: crate::config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
