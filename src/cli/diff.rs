//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two tables.

use super::progress::ProgressBarSink;
use crate::config::{DiffConfig, Validatable};
use crate::diff::{NoProgress, ProgressSink};
use crate::pipeline::{
    check_schemas, compute_diff, effective_compare_columns, exit_codes, output_report,
    parse_table_with_context, report_config, OutputTarget,
};
use anyhow::{bail, Result};
use std::io::IsTerminal;

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;

    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration:\n  {}", messages.join("\n  "));
    }

    // Parse both tables
    let old_parsed = parse_table_with_context(&config.paths.old, quiet)?;
    let new_parsed = parse_table_with_context(&config.paths.new, quiet)?;

    // Schema comparison happens here, not in the engine
    check_schemas(old_parsed.table(), new_parsed.table(), &config.columns)?;
    let compare_columns = effective_compare_columns(old_parsed.table(), &config.columns);

    // Progress is rendered only for interactive runs
    let mut bar_sink;
    let mut no_sink = NoProgress;
    let sink: &mut dyn ProgressSink =
        if quiet || config.behavior.no_progress || !std::io::stderr().is_terminal() {
            &mut no_sink
        } else {
            bar_sink = ProgressBarSink::new();
            &mut bar_sink
        };

    let result = compute_diff(
        &config,
        &compare_columns,
        old_parsed.table(),
        new_parsed.table(),
        sink,
    );

    let exit_code = if config.behavior.fail_on_change && result.has_changes() {
        exit_codes::CHANGES_DETECTED
    } else {
        exit_codes::SUCCESS
    };

    // Route output
    let target = OutputTarget::from_option(config.output.file.clone());
    let report_config = report_config(
        &old_parsed.name,
        &new_parsed.name,
        &config.columns.key,
        &compare_columns,
        config.output.no_color,
    );
    output_report(
        config.output.format,
        &result,
        &report_config,
        &target,
        quiet,
    )?;

    Ok(exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_key_columns() {
        let config = DiffConfig::builder("old.csv", "new.csv").quiet(true).build();
        let err = run_diff(config).unwrap_err();
        assert!(err.to_string().contains("key column"));
    }
}
