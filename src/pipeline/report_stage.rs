//! Report generation stage.

use super::output::{auto_detect_format, should_use_color, write_output, OutputTarget};
use crate::diff::DiffResult;
use crate::reports::{generator_for, ReportConfig, ReportFormat};
use anyhow::{Context, Result};

/// Generate the report in the requested format and write it to the target.
///
/// `Auto` is resolved against the target before choosing the generator.
pub fn output_report(
    format: ReportFormat,
    result: &DiffResult,
    report_config: &ReportConfig,
    target: &OutputTarget,
    quiet: bool,
) -> Result<()> {
    let effective = auto_detect_format(format, target);
    let colored = report_config.colored && target.is_terminal();

    let generator = generator_for(effective, colored).context("Failed to build report generator")?;
    let rendered = generator
        .generate_diff_report(result, report_config)
        .with_context(|| format!("Failed to generate {effective} report"))?;

    write_output(&rendered, target, quiet)
}

/// Assemble the report context from names and column selections.
#[must_use]
pub fn report_config(
    old_name: &str,
    new_name: &str,
    key_columns: &[String],
    compare_columns: &[String],
    no_color: bool,
) -> ReportConfig {
    ReportConfig {
        old_name: old_name.to_string(),
        new_name: new_name.to_string(),
        key_columns: key_columns.to_vec(),
        compare_columns: compare_columns.to_vec(),
        colored: should_use_color(no_color),
    }
}
