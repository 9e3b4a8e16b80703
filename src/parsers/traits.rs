//! Parser trait definitions and error types.
//!
//! This module defines the `TableParser` trait for delimiter-specific
//! parsers and provides format detection through confidence scoring.

use crate::model::Table;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a table.
///
/// Parsing itself is total: any text yields a (possibly empty) table.
/// Only reading the input can fail.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Confidence level for format detection
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FormatConfidence(f32);

impl FormatConfidence {
    /// No confidence - definitely not this format
    pub const NONE: Self = Self(0.0);
    /// Low confidence - might be this format
    pub const LOW: Self = Self(0.25);
    /// Medium confidence - likely this format
    pub const MEDIUM: Self = Self(0.5);
    /// High confidence - almost certainly this format
    pub const HIGH: Self = Self(0.75);
    /// Certain - definitely this format
    pub const CERTAIN: Self = Self(1.0);

    /// Create a new confidence value
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the confidence value
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.0
    }

    /// Check if this confidence indicates the format can be parsed
    #[must_use]
    pub fn can_parse(&self) -> bool {
        self.0 >= 0.25
    }
}

impl Default for FormatConfidence {
    fn default() -> Self {
        Self::NONE
    }
}

/// Detection result from a parser
#[derive(Debug, Clone)]
pub struct FormatDetection {
    /// Confidence that this parser can handle the content
    pub confidence: FormatConfidence,
    /// Number of columns the header line would produce
    pub columns: Option<usize>,
    /// Any issues detected that might affect parsing
    pub warnings: Vec<String>,
}

impl FormatDetection {
    /// Create a detection result indicating no match
    #[must_use]
    pub const fn no_match() -> Self {
        Self {
            confidence: FormatConfidence::NONE,
            columns: None,
            warnings: Vec::new(),
        }
    }

    /// Create a detection result with confidence
    #[must_use]
    pub const fn with_confidence(confidence: FormatConfidence) -> Self {
        Self {
            confidence,
            columns: None,
            warnings: Vec::new(),
        }
    }

    /// Set the detected column count
    #[must_use]
    pub const fn columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Add a warning
    #[must_use]
    pub fn warning(mut self, warning: &str) -> Self {
        self.warnings.push(warning.to_string());
        self
    }
}

/// Trait for delimited-table parsers.
///
/// Implementors provide format detection via `detect()` and parsing via
/// `parse_str()`. Detection allows delimiter selection without trial
/// parsing when the file extension gives no hint.
pub trait TableParser {
    /// Parse a table from a file path
    fn parse(&self, path: &Path) -> Result<Table, ParseError> {
        let bytes = std::fs::read(path)?;
        let (content, encoding) = super::decode_bytes(&bytes);
        tracing::debug!(path = %path.display(), encoding, "decoded input file");
        Ok(self.parse_str(&content))
    }

    /// Parse a table from string content. Total: never fails.
    fn parse_str(&self, content: &str) -> Table;

    /// Get format name
    fn format_name(&self) -> &str;

    /// Detect if this parser is a plausible fit for the given content
    ///
    /// This inspects the header line without full parsing, returning a
    /// confidence score and the column count the header would produce.
    fn detect(&self, content: &str) -> FormatDetection;

    /// Quick check if this parser can likely handle the content
    fn can_parse(&self, content: &str) -> bool {
        self.detect(content).confidence.can_parse()
    }
}
