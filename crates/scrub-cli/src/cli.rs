//! CLI argument definitions for the contact scrubber.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "contact-scrub",
    version,
    about = "Convert a KW Command contact export into an AMCards import file",
    long_about = "Convert a KW Command contact export into an AMCards import file.\n\n\
                  Contacts missing a mandatory field or without any key date are skipped.\n\
                  Writes <name>_edited.csv and an audit log <name>_log.txt."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Include contact names in diagnostic logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a contact export.
    Run(RunArgs),

    /// Prompt for the export and save folder, then convert.
    Interactive(ConfigArgs),

    /// Show the active field schema.
    Schema(ConfigArgs),
}

#[derive(Args)]
pub struct ConfigArgs {
    /// TOML config file (default: ./contact-scrub.toml when present).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct RunArgs {
    /// Contact export to convert.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Folder for the edited CSV and log (default: the folder holding INPUT).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Treat schema columns missing from the header as empty instead of failing.
    #[arg(long = "lenient-header")]
    pub lenient_header: bool,

    /// Filter and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the run result as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
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
