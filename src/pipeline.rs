//! Pipeline - one synchronous pass over an artifact directory
//!
//! Scan, extract, correlate, render, then a single write of the finished
//! document. Per-file failures become diagnostics and the run continues;
//! only a failed report write is fatal, because the contract promises a
//! report. No partial document is ever persisted.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::correlate;
use crate::extract;
use crate::models::ArtifactRecord;
use crate::report;
use crate::scanner::{self, ScanError};

/// Default report file name, placed under the scanned root
pub const DEFAULT_REPORT_NAME: &str = "workflow-log-analysis.md";

/// Errors that abort a pipeline run
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The root directory could not be scanned
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// The finished report could not be written
    #[error("failed to write report to {path}: {source}")]
    WriteReport {
        /// Intended report location
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },
}

/// A per-file problem that did not abort the run
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// File the problem applies to
    pub path: PathBuf,

    /// What went wrong
    pub message: String,
}

/// Result contract surfaced to the caller after a completed run
///
/// `processed + skipped` always equals the number of files that matched a
/// known pattern; walk-level problems never inflate either counter.
#[derive(Debug, Serialize)]
pub struct RunOutcome {
    /// Recognized artifacts that parsed successfully
    pub processed: usize,

    /// Recognized artifacts skipped with a diagnostic
    pub skipped: usize,

    /// Per-artifact diagnostics, one for each skipped artifact
    pub diagnostics: Vec<Diagnostic>,

    /// Directory-walk diagnostics for entries that were never classified
    /// candidates; surfaced but not counted as skipped
    pub walk_diagnostics: Vec<Diagnostic>,

    /// Where the report was written
    pub report_path: PathBuf,
}

/// Derive the default report path for a scanned root
#[must_use]
pub fn default_report_path(root: &Path) -> PathBuf {
    root.join(DEFAULT_REPORT_NAME)
}

/// Run the full pipeline: scan `root`, write the report to `output`
pub fn run(root: &Path, output: &Path) -> Result<RunOutcome, PipelineError> {
    let scan = scanner::scan(root)?;
    log::info!("scanned {}: {} candidate artifact(s)", root.display(), scan.candidates.len());

    let mut records: Vec<ArtifactRecord> = Vec::with_capacity(scan.candidates.len());
    let walk_diagnostics = scan.diagnostics;
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    for candidate in scan.candidates {
        let absolute = root.join(&candidate.path);
        match fs::read_to_string(&absolute) {
            Ok(raw) => {
                records.push(extract::extract_record(candidate.category, &candidate.path, raw));
            },
            Err(err) => {
                // Unreadable artifact: diagnostic, skip, keep going
                diagnostics.push(Diagnostic {
                    path: candidate.path,
                    message: format!("read failed: {err}"),
                });
            },
        }
    }

    let correlation = correlate::correlate(&records);
    let document = report::render(&records, &correlation, &diagnostics, &walk_diagnostics);

    // Single write of the fully assembled document
    fs::write(output, &document).map_err(|source| PipelineError::WriteReport {
        path: output.to_path_buf(),
        source,
    })?;

    // Invalid records join the caller-facing diagnostics after rendering;
    // the renderer lists them from the records themselves
    for record in records.iter().filter(|r| !r.is_valid()) {
        if let Some(message) = &record.diagnostic {
            diagnostics.push(Diagnostic {
                path: record.path.clone(),
                message: message.clone(),
            });
        }
    }

    // Only classified candidates count: processed + skipped equals the
    // number of recognized files, whatever the walk encountered
    let processed = records.iter().filter(|r| r.is_valid()).count();
    let skipped = diagnostics.len();

    Ok(RunOutcome {
        processed,
        skipped,
        diagnostics,
        walk_diagnostics,
        report_path: output.to_path_buf(),
    })
}
