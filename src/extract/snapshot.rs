//! Repository structure snapshot extractor
//!
//! Line-oriented state machine over free text. A line that is exactly a
//! `=== ... ===` marker switches section; the branch, commit, and file-count
//! rules below apply per section. Text extraction cannot fail, so this
//! extractor always yields a snapshot.

use std::path::Path;

use crate::models::{RepositorySnapshot, NOT_AVAILABLE};

const BRANCH_SECTION: &str = "=== Branch Information ===";

/// Section state while walking snapshot lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    /// Before any marker, or inside a section with no extraction rules
    Other,
    /// Inside the branch information section
    Branch,
}

fn is_marker(line: &str) -> bool {
    let trimmed = line.trim_end();
    trimmed.starts_with("=== ") && trimmed.ends_with(" ===")
}

/// Parse a `repository-structure.txt` artifact into a [`RepositorySnapshot`]
#[must_use]
pub fn repository_snapshot(path: &Path, raw: &str) -> RepositorySnapshot {
    let mut section = Section::Other;
    let mut branch: Option<String> = None;
    let mut short_commit: Option<String> = None;
    let mut file_count: Option<u64> = None;

    for line in raw.lines() {
        if is_marker(line) {
            section = if line.trim_end() == BRANCH_SECTION {
                Section::Branch
            } else {
                Section::Other
            };
            continue;
        }

        if section == Section::Branch {
            if branch.is_none() {
                if let Some(rest) = line.strip_prefix("* ") {
                    // Branch name runs up to the first whitespace
                    branch = rest.split_whitespace().next().map(str::to_string);
                }
            }
            if short_commit.is_none() {
                if let Some(rest) = line.strip_prefix("Commit:") {
                    short_commit = Some(rest.trim().chars().take(7).collect());
                }
            }
        }

        if file_count.is_none() {
            if let Some(idx) = line.find("Total files:") {
                let tail = &line[idx + "Total files:".len()..];
                file_count = tail.trim().split_whitespace().next().and_then(|n| n.parse().ok());
            }
        }
    }

    RepositorySnapshot {
        branch: branch.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        short_commit: short_commit.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        file_count,
        source: path.to_path_buf(),
    }
}
