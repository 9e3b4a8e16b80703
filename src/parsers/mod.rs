//! Text-to-table parsers.
//!
//! Raw CSV/TSV text is normalized into the [`Table`](crate::model::Table)
//! model by a deliberately thin split-and-trim parser; see
//! [`DelimitedParser`] for the exact contract. Format selection is a single
//! dispatch on the file extension with content sniffing as fallback, and
//! input bytes are decoded with BOM/UTF-8/Shift-JIS detection before
//! parsing.

mod delimited;
mod detection;
mod encoding;
mod traits;

pub use delimited::DelimitedParser;
pub use detection::{detect_format, format_for_file, DetectionResult, TableFormat};
pub use encoding::decode_bytes;
pub use traits::{FormatConfidence, FormatDetection, ParseError, TableParser};

use crate::model::Table;
use std::path::Path;

/// Parse a table from a file.
///
/// The format is chosen from the file extension (content sniffing if there
/// is none), and the bytes are decoded with encoding detection. Returns the
/// parsed table together with the format that was used.
pub fn parse_table(path: &Path) -> Result<(Table, TableFormat), ParseError> {
    let bytes = std::fs::read(path)?;
    let (content, encoding) = decode_bytes(&bytes);
    let format = format_for_file(path, &content);
    tracing::debug!(
        path = %path.display(),
        format = format.name(),
        encoding,
        "parsing table"
    );
    Ok((format.parser().parse_str(&content), format))
}

/// Parse a table from string content with an explicit format.
#[must_use]
pub fn parse_table_str(content: &str, format: TableFormat) -> Table {
    format.parser().parse_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_str_with_format() {
        let table = parse_table_str("id,name\n1,Alice", TableFormat::Csv);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows[0].value("name"), "Alice");
    }
}
