//! CLI definitions
//!
//! The binary owns flag handling and exit-code policy; the library core
//! never exits the process.

use std::path::PathBuf;

use clap::Parser;

/// runledger - correlate CI workflow artifacts into a deterministic report
#[derive(Parser, Debug)]
#[command(
    name = "runledger",
    version,
    about = "Correlate CI workflow artifacts into a deterministic report",
    long_about = "Walks a directory of job artifacts (workflow metadata, security\n\
                  scan output, verification responses, repository snapshots),\n\
                  parses what it recognizes, correlates runs into a timeline,\n\
                  and writes a single Markdown analysis report."
)]
pub struct Cli {
    /// Root directory to scan for artifacts
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Where to write the report (default: <root>/workflow-log-analysis.md)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Output the run summary in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}
