//! Repository snapshot model
//!
//! Parsed from a `repository-structure.txt` artifact: current branch, short
//! commit hash, and an optional total file count.

use std::path::PathBuf;

use serde::Serialize;

/// A parsed free-text repository snapshot
#[derive(Debug, Clone, Serialize)]
pub struct RepositorySnapshot {
    /// Current branch name
    pub branch: String,

    /// Short commit hash (first 7 characters)
    pub short_commit: String,

    /// Total file count, when the snapshot reported one
    pub file_count: Option<u64>,

    /// Artifact file the snapshot came from
    pub source: PathBuf,
}
