//! CLI argument definitions for the course explorer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use course_core::{FacetKey, SortMode};

#[derive(Parser)]
#[command(
    name = "course-explorer",
    version,
    about = "Browse a JSON course catalog",
    long_about = "Browse a JSON course catalog.\n\n\
                  Loads an array of course records, derives filter facets from\n\
                  the attributes present, and prints the filtered, sorted list."
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
    /// List the courses of a catalog file.
    List(ListArgs),

    /// Show the filter facets of a catalog file.
    Facets(FacetsArgs),
}

#[derive(Parser)]
pub struct ListArgs {
    /// JSON catalog file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Keep only courses whose facet equals VALUE (case-insensitive).
    ///
    /// Repeat for several facets. Keys: level, credits, instructor,
    /// department, type, skill.
    #[arg(long = "filter", value_name = "KEY=VALUE", value_parser = parse_filter)]
    pub filters: Vec<(FacetKey, String)>,

    /// Sort order: none, title-asc, title-desc, id-asc, id-desc,
    /// semester-asc or semester-desc.
    #[arg(long = "sort", value_name = "MODE", default_value = "none")]
    pub sort: SortMode,

    /// Show the details of the course with this id.
    #[arg(long = "select", value_name = "ID")]
    pub select: Option<String>,

    /// Print the view as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Compare ids as text unless every visible id is numeric.
    #[arg(long = "uniform-id-sort")]
    pub uniform_id_sort: bool,
}

#[derive(Parser)]
pub struct FacetsArgs {
    /// JSON catalog file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
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

fn parse_filter(raw: &str) -> Result<(FacetKey, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    let key = key.trim().parse::<FacetKey>().map_err(|err| err.to_string())?;
    Ok((key, value.to_string()))
}
