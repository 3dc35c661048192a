//! Artifact scanner - walks a directory tree and classifies candidate files
//!
//! Classification is purely structural (file-name prefix, suffix, or
//! extension); content is never inspected here. Unrecognized files are
//! dropped silently. The candidate list is sorted by full path before it is
//! handed to extraction, because every downstream ordering guarantee depends
//! on deterministic input order when timestamps tie.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::models::ArtifactCategory;
use crate::pipeline::Diagnostic;

/// Errors that can occur while scanning
#[derive(Debug, Error)]
pub enum ScanError {
    /// Root path does not exist
    #[error("root path does not exist: {0}")]
    RootNotFound(PathBuf),

    /// Root path is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// A classified candidate file awaiting extraction
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Path relative to the scanned root
    pub path: PathBuf,

    /// Category assigned from the file name, never reassigned
    pub category: ArtifactCategory,
}

/// Result of scanning a root directory
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Recognized candidates, sorted by full path
    pub candidates: Vec<Candidate>,

    /// Walk-level diagnostics for unreadable directory entries, with
    /// root-relative paths; these entries were never classified candidates
    pub diagnostics: Vec<Diagnostic>,
}

/// Classify a file name into an artifact category
///
/// The mapping is fixed: exact names for workflow metadata and repository
/// snapshots, a `-summary.txt` suffix for summary text, the `sarif`
/// extension for result sets, and `response_{weekly,live,sandbox}` prefixes
/// for verification responses.
#[must_use]
pub fn classify(file_name: &str) -> ArtifactCategory {
    if file_name == "workflow-metadata.json" {
        return ArtifactCategory::WorkflowMetadata;
    }
    if file_name == "repository-structure.txt" {
        return ArtifactCategory::RepositoryStructureSnapshot;
    }
    if file_name.ends_with("-summary.txt") {
        return ArtifactCategory::SecuritySummary;
    }
    if file_name.ends_with(".sarif") {
        return ArtifactCategory::SecurityResultSet;
    }
    if file_name.ends_with(".json")
        && (file_name.starts_with("response_weekly")
            || file_name.starts_with("response_live")
            || file_name.starts_with("response_sandbox"))
    {
        return ArtifactCategory::VerificationResponse;
    }
    ArtifactCategory::Unrecognized
}

/// Recursively enumerate and classify all files under `root`
///
/// An empty directory yields zero candidates; that is a valid outcome, not
/// an error. Entries that cannot be read are recorded as diagnostics and the
/// scan continues.
pub fn scan(root: &Path) -> Result<ScanOutcome, ScanError> {
    if !root.exists() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut outcome = ScanOutcome::default();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let absolute = err.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
                // Root-relative, like every other diagnostic path
                let path = match absolute.strip_prefix(root) {
                    Ok(relative) => relative.to_path_buf(),
                    Err(_) => absolute.clone(),
                };
                outcome.diagnostics.push(Diagnostic {
                    path,
                    message: format!("unreadable entry: {err}"),
                });
                continue;
            },
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        let category = classify(name);
        if category == ArtifactCategory::Unrecognized {
            log::debug!("ignoring unrecognized file {}", entry.path().display());
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        outcome.candidates.push(Candidate {
            path: relative,
            category,
        });
    }

    // Sort for deterministic output regardless of directory-enumeration order
    outcome.candidates.sort_by(|a, b| a.path.cmp(&b.path));
    outcome.diagnostics.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(outcome)
}
