//! rowdiff: Row-level semantic diff tool for CSV/TSV tables
//!
//! Compares two tables sharing a column schema and reports added, removed,
//! and modified rows.

#![allow(clippy::struct_excessive_bools)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use rowdiff::{
    cli,
    config::{self, BehaviorConfig, ColumnsConfig, DiffConfig, DiffPaths, OutputConfig},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported Input Formats:",
        "\n  CSV (.csv, default for unknown extensions)",
        "\n  TSV (.tsv, .tab)",
        "\n  Encodings: UTF-8 (with or without BOM), Shift-JIS fallback",
        "\n\nOutput Formats:",
        "\n  auto, table, summary, json, csv"
    )
}

#[derive(Parser)]
#[command(name = "rowdiff")]
#[command(version, long_version = build_long_version())]
#[command(about = "Row-level semantic diff tool for CSV/TSV tables", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No changes detected (or no --fail-on-change)
    1  Changes detected and --fail-on-change was set
    2  Error occurred

EXAMPLES:
    # Diff on a single key column, comparing every other column
    rowdiff diff old.csv new.csv --key id

    # Composite key, explicit compare columns
    rowdiff diff old.tsv new.tsv --key region,id --compare name,email

    # CI/CD pipeline check
    rowdiff diff old.csv new.csv -o summary --fail-on-change

    # Export JSON for processing
    rowdiff diff old.csv new.csv -o json > diff.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to a config file (defaults to ./.rowdiff.yaml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Path to the old/baseline table
    old: PathBuf,

    /// Path to the new table
    new: PathBuf,

    /// Key columns identifying a row, comma separated
    #[arg(short, long, value_delimiter = ',')]
    key: Vec<String>,

    /// Compare columns, comma separated (default: all non-key columns)
    #[arg(short, long, value_delimiter = ',')]
    compare: Vec<String>,

    /// Output format (auto detects TTY: table if interactive, summary otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if any changes are detected
    #[arg(long)]
    fail_on_change: bool,

    /// Rows processed per progress batch (default: rows/100)
    #[arg(long)]
    batch_size: Option<usize>,

    /// Disable the progress bar
    #[arg(long)]
    no_progress: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two tables and report added/removed/modified rows
    Diff(DiffArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Diff(args) => {
            let (file_config, loaded_from) = config::load_or_default(cli.config.as_deref())?;
            if let Some(path) = loaded_from {
                tracing::debug!(path = %path.display(), "using config file");
            }

            // CLI arguments override config-file defaults
            let key = if args.key.is_empty() {
                file_config.columns.key
            } else {
                args.key
            };
            let compare = if args.compare.is_empty() {
                file_config.columns.compare
            } else {
                args.compare
            };
            let format = match args.output {
                ReportFormat::Auto => file_config.format.unwrap_or(ReportFormat::Auto),
                other => other,
            };

            let config = DiffConfig {
                paths: DiffPaths {
                    old: args.old,
                    new: args.new,
                },
                columns: ColumnsConfig { key, compare },
                output: OutputConfig {
                    format,
                    file: args.output_file,
                    no_color: cli.no_color,
                },
                behavior: BehaviorConfig {
                    quiet: cli.quiet,
                    fail_on_change: args.fail_on_change,
                    batch_size: args.batch_size.or(file_config.batch_size),
                    no_progress: args.no_progress,
                },
            };

            let exit_code = cli::run_diff(config).unwrap_or_else(|err| {
                eprintln!("Error: {err:#}");
                exit_codes::ERROR
            });
            if exit_code != exit_codes::SUCCESS {
                std::process::exit(exit_code);
            }
            Ok(())
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    }
}
