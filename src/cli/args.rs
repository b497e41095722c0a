//! Command-line argument definitions
//!
//! Defines the CLI interface using the clap derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the hydroindex engine
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hydroindex",
    version,
    about = "Compute heavy-metal and water-quality indices from groundwater survey tables",
    long_about = "Ingests loosely-structured CSV survey tables (arbitrary header naming, \
                  embedded units) and computes six standardized indices (HPI, MI, WQI, CDEG, \
                  HEI, PIG) per station, with classification, JSONL result output and an \
                  aggregate batch summary.",
    arg_required_else_help = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v = debug, -vv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Process a survey table and compute all applicable indices
    Process(ProcessArgs),
    /// Write an empty survey template CSV with the recognized columns
    Template(TemplateArgs),
}

/// Arguments for the process command
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Input survey CSV (header row first, data from row 2)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output JSONL file for per-station results
    #[arg(short, long, value_name = "PATH", default_value = "results.jsonl")]
    pub output: PathBuf,

    /// Optional JSON document overriding/extending the built-in standards
    #[arg(long, value_name = "PATH")]
    pub standards: Option<PathBuf>,

    /// Batch identifier stamped on every persisted record
    #[arg(long, value_name = "ID")]
    pub batch_id: Option<String>,

    /// Write the aggregate summary as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub summary: Option<PathBuf>,

    /// Timeout in seconds for loading the external standards document
    #[arg(long, value_name = "SECS")]
    pub standards_timeout: Option<u64>,

    /// Disable the progress bar
    #[arg(long)]
    pub quiet: bool,
}

/// Arguments for the template command
#[derive(Debug, Clone, Parser)]
pub struct TemplateArgs {
    /// Where to write the template CSV
    #[arg(value_name = "OUTPUT", default_value = "survey_template.csv")]
    pub output: PathBuf,
}
