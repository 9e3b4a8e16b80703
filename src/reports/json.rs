//! JSON report generator.

use super::{ReportConfig, ReportError, ReportGenerator, ReportMetadata};
use crate::diff::DiffResult;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonDiffReport<'a> {
    metadata: ReportMetadata,
    #[serde(flatten)]
    result: &'a DiffResult,
}

impl ReportGenerator for JsonReporter {
    fn generate_diff_report(
        &self,
        result: &DiffResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonDiffReport {
            metadata: ReportMetadata::from_config(config),
            result,
        };

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        rendered.map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Row;

    #[test]
    fn report_is_valid_json_with_metadata() {
        let mut result = DiffResult::new();
        result.added.push(Row::from_iter([("id", "2")]));
        result.calculate_summary();

        let config = ReportConfig {
            old_name: "old.csv".into(),
            new_name: "new.csv".into(),
            key_columns: vec!["id".into()],
            compare_columns: vec!["name".into()],
            colored: false,
        };
        let rendered = JsonReporter::new()
            .generate_diff_report(&result, &config)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["metadata"]["tool"], "rowdiff");
        assert_eq!(value["metadata"]["old"], "old.csv");
        assert_eq!(value["summary"]["added"], 1);
        assert_eq!(value["added"][0]["id"], "2");
    }
}
