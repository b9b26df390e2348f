//! CLI argument definitions for `ena-samples`.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use ena_model::DEFAULT_CHECKLIST;

#[derive(Parser)]
#[command(
    name = "ena-samples",
    version,
    about = "Build and submit ENA sample XML from a sample sheet",
    long_about = "Build ENA SAMPLE_SET and SUBMISSION documents from a delimited sample sheet.\n\n\
                  Fields are checked against an ENA checklist fetched at run time; the\n\
                  documents can then be sent to the Webin drop-box."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Build samples.xml and submission.xml from a sample sheet.
    Samples(SamplesArgs),

    /// Show the fields of an ENA checklist.
    Checklist(ChecklistArgs),

    /// Release a held sample.
    Release(ReleaseArgs),
}

#[derive(Parser)]
pub struct SamplesArgs {
    /// Delimited sample sheet. Line 1 may hold a `Checklist=<id>` directive,
    /// line 2 holds the column headers.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory receiving samples.xml, submission.xml and receipt.xml.
    #[arg(long = "output-dir", short = 'o', value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Field delimiter of the sample sheet and the mapping file.
    #[arg(long = "delimiter", short = 'd', default_value = ";", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Checklist accession, used when the sheet has no directive line.
    #[arg(long = "checklist", short = 'c', value_name = "ID")]
    pub checklist: Option<String>,

    /// Center name for rows without a `center name` value.
    #[arg(long = "center", value_name = "NAME")]
    pub center: Option<String>,

    /// Two-column table renaming sheet headers to checklist field names.
    #[arg(long = "mapping", short = 'm', value_name = "PATH")]
    pub mapping: Option<PathBuf>,

    /// Keep the samples private until this date (YYYY-MM-DD).
    #[arg(long = "hold-until", value_name = "DATE")]
    pub hold_until: Option<NaiveDate>,

    #[command(flatten)]
    pub submit: SubmitArgs,
}

#[derive(Args)]
pub struct SubmitArgs {
    /// Send the documents to the drop-box after writing them.
    #[arg(long = "submit")]
    pub submit: bool,

    /// Use the production server instead of the test server.
    #[arg(long = "production")]
    pub production: bool,

    /// Credentials file (default: ~/.EBI/ebi.toml).
    #[arg(long = "credentials", value_name = "PATH")]
    pub credentials: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ChecklistArgs {
    /// Checklist accession.
    #[arg(value_name = "ID", default_value = DEFAULT_CHECKLIST)]
    pub checklist: String,

    /// Print the catalog as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ReleaseArgs {
    /// Sample accession to release (default: the first accession in
    /// receipt.xml under the output directory).
    #[arg(value_name = "ACCESSION")]
    pub accession: Option<String>,

    /// Directory of an earlier samples run; receives release.xml and
    /// receipt.xml. Its samples.xml, if present, is sent along.
    #[arg(long = "output-dir", short = 'o', value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Use the production server instead of the test server.
    #[arg(long = "production")]
    pub production: bool,

    /// Credentials file (default: ~/.EBI/ebi.toml).
    #[arg(long = "credentials", value_name = "PATH")]
    pub credentials: Option<PathBuf>,
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "\\t" | "tab" => Ok(b'\t'),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => Err(format!("delimiter must be a single ASCII character, got '{value}'")),
            }
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
