//! Delimiter-split table parser.
//!
//! The parser is intentionally thin: it splits lines on `\n`, fields on the
//! format's delimiter, and trims surrounding whitespace from headers and
//! cells. Rows shorter than the header are padded with empty cells; surplus
//! fields beyond the header width are ignored. There is no quoting or
//! escaping support.

use super::{FormatConfidence, FormatDetection, TableFormat, TableParser};
use crate::model::{Row, Table};

/// Parser for a delimiter-separated table format.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedParser {
    format: TableFormat,
}

impl DelimitedParser {
    /// Create a parser for the given format
    #[must_use]
    pub const fn new(format: TableFormat) -> Self {
        Self { format }
    }

    /// The format this parser handles
    #[must_use]
    pub const fn format(&self) -> TableFormat {
        self.format
    }

    fn split_fields<'a>(&self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        line.split(self.format.delimiter()).map(str::trim)
    }
}

impl TableParser for DelimitedParser {
    fn parse_str(&self, content: &str) -> Table {
        let content = content.trim();
        if content.is_empty() {
            return Table::empty();
        }

        let mut lines = content.split('\n');
        let columns: Vec<String> = match lines.next() {
            Some(header) => self.split_fields(header).map(ToString::to_string).collect(),
            None => return Table::empty(),
        };

        let rows = lines
            .map(|line| {
                let mut values = self.split_fields(line);
                let mut row = Row::with_capacity(columns.len());
                for column in &columns {
                    row.insert(column.clone(), values.next().unwrap_or(""));
                }
                row
            })
            .collect();

        Table::new(columns, rows)
    }

    fn format_name(&self) -> &str {
        self.format.name()
    }

    fn detect(&self, content: &str) -> FormatDetection {
        let content = content.trim();
        let Some(header) = content.split('\n').next() else {
            return FormatDetection::no_match();
        };
        if header.is_empty() {
            return FormatDetection::no_match();
        }

        let columns = header.split(self.format.delimiter()).count();
        if columns < 2 {
            // A single-column header gives no evidence about the delimiter
            return FormatDetection::with_confidence(FormatConfidence::LOW).columns(columns);
        }

        // Ragged data rows still parse (pad/ignore), but are worth a warning
        let ragged = content
            .split('\n')
            .skip(1)
            .filter(|l| !l.trim().is_empty())
            .any(|l| l.split(self.format.delimiter()).count() != columns);

        let detection = FormatDetection::with_confidence(FormatConfidence::HIGH).columns(columns);
        if ragged {
            detection.warning("row width differs from header width")
        } else {
            detection
        }
    }
}
