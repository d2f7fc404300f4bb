//! CLI argument definitions for the barcode mapper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use bbm_model::Mode;

#[derive(Parser)]
#[command(
    name = "barcode-mapper",
    version,
    about = "Biospecimen Barcode Mapper - assign patient IDs to specimen rows",
    long_about = "Assign a patient identifier to each row of a specimen CSV by\n\
                  matching tube-number or plate-column values against mapping\n\
                  rules, and report unmapped identifier ranges."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Map a specimen CSV and write the processed export.
    Map(MapArgs),

    /// Validate a rule file and print the accepted rules.
    Rules(RulesArgs),
}

#[derive(Parser)]
pub struct MapArgs {
    /// Path to the specimen CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// JSON rule file (array of {start, end, patientId, mode}).
    #[arg(long = "rules", value_name = "JSON")]
    pub rules_file: Option<PathBuf>,

    /// Inline rule for the active mode, e.g. --rule 1001..1050=PID-001.
    #[arg(long = "rule", value_name = "START..END=PATIENT")]
    pub rules: Vec<String>,

    /// Which column value rules are matched against.
    #[arg(long = "mode", value_enum, default_value = "tube")]
    pub mode: ModeArg,

    /// Tube-number/barcode column (default: auto-detected).
    #[arg(long = "tube-col", value_name = "COLUMN")]
    pub tube_column: Option<String>,

    /// Plate-column coordinate column (default: auto-detected).
    #[arg(long = "column-col", value_name = "COLUMN")]
    pub column_column: Option<String>,

    /// Plate-row label column used for display ordering (default: auto-detected).
    #[arg(long = "row-col", value_name = "COLUMN")]
    pub row_column: Option<String>,

    /// Directory for the export file (default: next to the input CSV).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Review and report without writing the export file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// JSON rule file to validate.
    #[arg(value_name = "JSON")]
    pub rules_file: PathBuf,
}

/// Matching-mode choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Match rows by their tube-number value.
    Tube,
    /// Match rows by their plate-column value.
    Column,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Tube => Self::ByTubeNumber,
            ModeArg::Column => Self::ByColumn,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
