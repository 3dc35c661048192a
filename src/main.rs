//! runledger - correlates CI workflow artifacts into a deterministic report
//!
//! The binary is the external caller of the pipeline core: it owns argument
//! handling, logging setup, and the process exit code.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;

use clap::Parser as _;

use runledger::output::OutputMode;
use runledger::pipeline;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    let output = cli
        .output
        .unwrap_or_else(|| pipeline::default_report_path(&cli.root));

    let outcome = pipeline::run(&cli.root, &output)?;

    let mode = if cli.json { OutputMode::Json } else { OutputMode::Human };
    outcome.render(mode);

    Ok(())
}
