//! Workflow run model
//!
//! One execution instance of an external automated job, parsed from a
//! `workflow-metadata.json` artifact. Fields the producer omitted hold the
//! `NOT_AVAILABLE` marker so later formatting never sees a null.

use serde::Serialize;

use crate::models::NOT_AVAILABLE;

/// A single workflow run described by a metadata artifact
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowRun {
    /// Workflow name, e.g. "CodeQL"
    pub workflow: String,

    /// Run identifier assigned by the job runner
    pub run_id: String,

    /// Sequential run number within the workflow
    pub run_number: String,

    /// ISO-8601 timestamp of the run
    pub timestamp: String,

    /// Ref or branch the run executed on (`ref_name`, falling back to `ref`)
    pub ref_name: String,

    /// Commit hash (`sha`, falling back to `head_sha`)
    pub sha: String,
}

impl WorkflowRun {
    /// Short form of the commit hash (first 7 characters)
    #[must_use]
    pub fn short_sha(&self) -> String {
        if self.sha == NOT_AVAILABLE {
            return self.sha.clone();
        }
        self.sha.chars().take(7).collect()
    }

    /// Whether the run carries a usable ref value
    #[must_use]
    pub fn has_ref(&self) -> bool {
        !self.ref_name.is_empty() && self.ref_name != NOT_AVAILABLE
    }
}
