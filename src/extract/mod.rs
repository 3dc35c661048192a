//! Extractors - turn raw artifact content into typed records
//!
//! One extractor per category. Each is a pure function from the relative
//! path and raw text to either a parsed payload or a diagnostic string;
//! extraction never aborts the run. Malformed input produces an invalid
//! record that is counted and reported, not an error.

mod security;
mod snapshot;
mod verification;
mod workflow;

use std::path::Path;

use serde_json::Value;

pub use security::{result_set, summary_findings};
pub use snapshot::repository_snapshot;
pub use verification::verification_response;
pub use workflow::workflow_metadata;

use crate::models::{ArtifactCategory, ArtifactRecord, ParsedPayload};

/// Extract a typed record for a classified candidate
///
/// # Panics
///
/// Panics if called with the `Unrecognized` category; the scanner never
/// yields such candidates.
#[must_use]
pub fn extract_record(category: ArtifactCategory, path: &Path, raw: String) -> ArtifactRecord {
    let parsed = match category {
        ArtifactCategory::WorkflowMetadata => workflow_metadata(&raw).map(ParsedPayload::Workflow),
        ArtifactCategory::RepositoryStructureSnapshot => {
            Ok(ParsedPayload::Snapshot(repository_snapshot(path, &raw)))
        },
        ArtifactCategory::SecuritySummary => {
            Ok(ParsedPayload::Summary(summary_findings(path, &raw)))
        },
        ArtifactCategory::SecurityResultSet => {
            result_set(path, &raw).map(ParsedPayload::ResultSet)
        },
        ArtifactCategory::VerificationResponse => {
            verification_response(path, &raw).map(ParsedPayload::Verification)
        },
        ArtifactCategory::Unrecognized => {
            unreachable!("scanner drops unrecognized files before extraction")
        },
    };

    match parsed {
        Ok(payload) => ArtifactRecord {
            path: path.to_path_buf(),
            category,
            raw,
            payload: Some(payload),
            diagnostic: None,
        },
        Err(diagnostic) => {
            log::warn!("{}: {diagnostic}", path.display());
            ArtifactRecord {
                path: path.to_path_buf(),
                category,
                raw,
                payload: None,
                diagnostic: Some(diagnostic),
            }
        },
    }
}

/// Parse raw text as JSON and require an object root
pub(crate) fn object_root(raw: &str) -> Result<serde_json::Map<String, Value>, String> {
    let value: Value =
        serde_json::from_str(raw).map_err(|err| format!("invalid JSON: {err}"))?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(format!("expected JSON object at root, found {}", kind_of(&other))),
    }
}

/// Read the first present field out of `keys`, rendering scalars as text
///
/// Numbers are accepted where strings are expected; producers are not
/// consistent about quoting run identifiers.
pub(crate) fn string_field(map: &serde_json::Map<String, Value>, keys: &[&str]) -> Option<String> {
    for key in keys {
        match map.get(*key) {
            Some(Value::String(s)) => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            Some(Value::Bool(b)) => return Some(b.to_string()),
            _ => {},
        }
    }
    None
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
