//! Shared test fixtures and helpers
//!
//! Provides a temporary artifact directory with helpers for laying out the
//! file shapes the scanner recognizes.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary directory of artifact files
pub struct ArtifactDir {
    dir: TempDir,
}

impl ArtifactDir {
    /// Create an empty artifact directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Get the root path of the artifact directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed
    pub fn add_file(&self, path: &str, content: &str) {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Add a file with raw bytes, creating parent directories as needed
    pub fn add_file_bytes(&self, path: &str, content: &[u8]) {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Add a typical workflow metadata artifact
    pub fn add_workflow_metadata(&self, dir: &str, workflow: &str, run_number: u64, timestamp: &str) {
        self.add_file(
            &format!("{dir}/workflow-metadata.json"),
            &format!(
                r#"{{"workflow":"{workflow}","run_id":100,"run_number":{run_number},
                    "timestamp":"{timestamp}","ref_name":"main","sha":"abcdef0123456789"}}"#
            ),
        );
    }
}
