//! Table format selection.
//!
//! The format tag is dispatched once per file: the extension decides when it
//! is recognized, otherwise the content is sniffed by scoring each
//! delimiter against the header line. Unknown inputs default to CSV.

use super::{DelimitedParser, FormatConfidence, TableParser};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supported table formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    #[default]
    Csv,
    Tsv,
}

impl TableFormat {
    /// Get the human-readable name for this format
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Tsv => "TSV",
        }
    }

    /// The field delimiter for this format
    #[must_use]
    pub const fn delimiter(self) -> char {
        match self {
            Self::Csv => ',',
            Self::Tsv => '\t',
        }
    }

    /// Select a format from a file extension. Unrecognized or missing
    /// extensions default to CSV.
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "tsv" | "tab" => Self::Tsv,
            _ => Self::Csv,
        }
    }

    /// Select a format from a file path's extension
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map(Self::from_extension)
            .unwrap_or_default()
    }

    /// The parser for this format
    #[must_use]
    pub const fn parser(self) -> DelimitedParser {
        DelimitedParser::new(self)
    }

    /// All supported formats, in sniffing priority order
    pub const ALL: [Self; 2] = [Self::Csv, Self::Tsv];
}

impl std::fmt::Display for TableFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of content-based format detection.
#[derive(Debug, Clone)]
pub struct DetectionResult {
    /// The format that should handle this content, if any scored above the
    /// acceptance threshold
    pub format: Option<TableFormat>,
    /// Confidence of the winning format
    pub confidence: FormatConfidence,
    /// Column count the winning format's header would produce
    pub columns: Option<usize>,
    /// Warnings from the winning format's detection
    pub warnings: Vec<String>,
}

/// Sniff the table format from content alone.
///
/// Each candidate format scores the header line; the best scorer wins ties
/// in `TableFormat::ALL` order, so ambiguous single-column content resolves
/// to CSV.
#[must_use]
pub fn detect_format(content: &str) -> DetectionResult {
    let mut best: Option<(TableFormat, super::FormatDetection)> = None;

    for format in TableFormat::ALL {
        let detection = format.parser().detect(content);
        let better = match &best {
            Some((_, current)) => detection.confidence > current.confidence,
            None => true,
        };
        if better {
            best = Some((format, detection));
        }
    }

    match best {
        Some((format, detection)) if detection.confidence.can_parse() => DetectionResult {
            format: Some(format),
            confidence: detection.confidence,
            columns: detection.columns,
            warnings: detection.warnings,
        },
        _ => DetectionResult {
            format: None,
            confidence: FormatConfidence::NONE,
            columns: None,
            warnings: vec!["content does not look like a delimited table".to_string()],
        },
    }
}

/// Select the format for a file: extension first, content sniffing when the
/// extension is absent or unrecognized as a specific format.
#[must_use]
pub fn format_for_file(path: &Path, content: &str) -> TableFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.is_empty() => TableFormat::from_extension(ext),
        _ => detect_format(content).format.unwrap_or_default(),
    }
}
