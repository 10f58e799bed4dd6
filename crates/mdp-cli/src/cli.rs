use clap::{Args, Parser, Subcommand, ValueEnum};
use mdpcheck::Severity;
use serde::Deserialize;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "mdpcheck contributors",
    version,
    about = "mdpcheck - Validate, format and explain GROMACS molecular dynamics parameter (.mdp) files.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    /// Defaults to ./mdpcheck.toml, then the user configuration directory.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use a custom parameter catalog (TOML) instead of the built-in GROMACS table.
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Set the number of threads used to check files in parallel.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate one or more .mdp files and report diagnostics.
    Check(CheckArgs),
    /// Rewrite a .mdp file with canonical names, normalized values and aligned columns.
    Format(FormatArgs),
    /// Show the documentation of a single parameter.
    Explain(ExplainArgs),
    /// List the parameters known to the catalog.
    List(ListArgs),
}

#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per diagnostic, compiler style.
    Text,
    /// A JSON array of per-file reports.
    Json,
}

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// The .mdp files to validate.
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Output format, overriding `output.format` from the config file.
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Hide diagnostics below this severity (information, warning, error).
    #[arg(long, value_name = "LEVEL", value_parser = parse_severity)]
    pub min_severity: Option<Severity>,

    /// Exit with a failure status when warnings are reported.
    #[arg(long)]
    pub deny_warnings: bool,

    /// Disable a diagnostic code (e.g. missing-recommended-parameter).
    /// Can be used multiple times.
    #[arg(short = 'D', long = "disable", value_name = "CODE")]
    pub disabled_codes: Vec<String>,
}

/// Arguments for the `format` subcommand.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// The .mdp file to format.
    #[arg(required = true, value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub mode: FormatMode,
}

/// Mutually exclusive output modes; without either flag the result goes to stdout.
#[derive(Args, Debug, Clone, Copy)]
#[group(required = false, multiple = false)]
pub struct FormatMode {
    /// Write the formatted text back to the file.
    #[arg(short, long)]
    pub write: bool,
    /// Only check; fail if the file is not already formatted.
    #[arg(long)]
    pub check: bool,
}

/// Arguments for the `explain` subcommand.
#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// Parameter name, in either hyphen or underscore spelling.
    #[arg(required = true, value_name = "PARAMETER")]
    pub parameter: String,
}

/// Arguments for the `list` subcommand.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list parameters of this category (e.g. temperature-coupling).
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// List the category tags instead of parameters.
    #[arg(long, conflicts_with = "category")]
    pub categories: bool,
}

fn parse_severity(value: &str) -> Result<Severity, String> {
    value.parse().map_err(|_| {
        format!(
            "invalid severity '{}' (expected information, warning or error)",
            value
        )
    })
}
