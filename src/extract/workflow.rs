//! Workflow metadata extractor
//!
//! Expects a JSON object. Branch comes from `ref_name` falling back to
//! `ref`; the commit hash from `sha` falling back to `head_sha`. Missing
//! fields default to the `NOT_AVAILABLE` marker.

use crate::extract::{object_root, string_field};
use crate::models::{WorkflowRun, NOT_AVAILABLE};

/// Parse a `workflow-metadata.json` artifact into a [`WorkflowRun`]
pub fn workflow_metadata(raw: &str) -> Result<WorkflowRun, String> {
    let map = object_root(raw)?;

    let timestamp =
        string_field(&map, &["timestamp"]).unwrap_or_else(|| NOT_AVAILABLE.to_string());
    if timestamp != NOT_AVAILABLE
        && chrono::DateTime::parse_from_rfc3339(&timestamp).is_err()
    {
        // Kept verbatim; timeline ordering is by string either way
        log::debug!("timestamp is not valid RFC 3339: {timestamp}");
    }

    Ok(WorkflowRun {
        workflow: string_field(&map, &["workflow"]).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        run_id: string_field(&map, &["run_id"]).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        run_number: string_field(&map, &["run_number"])
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        timestamp,
        ref_name: string_field(&map, &["ref_name", "ref"])
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        sha: string_field(&map, &["sha", "head_sha"])
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    })
}
