#![no_main]

use libfuzzer_sys::fuzz_target;
use rowdiff::parsers::{detect_format, parse_table_str, TableFormat};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let _ = detect_format(content);
        for format in [TableFormat::Csv, TableFormat::Tsv] {
            let table = parse_table_str(content, format);
            // Rows never carry cells outside the header (duplicate header
            // names collapse, so a row can have fewer cells than columns)
            for row in &table.rows {
                assert!(row.len() <= table.column_count());
                assert!(row.columns().all(|c| table.has_column(c)));
            }
        }
    }
});
