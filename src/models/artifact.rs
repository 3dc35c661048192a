//! Artifact model
//!
//! An artifact is a single file produced by an external job. It belongs to
//! exactly one category, assigned at classification time and never changed.

use std::path::PathBuf;

use serde::Serialize;

use crate::models::security::ResultSetSummary;
use crate::models::security::SecurityFinding;
use crate::models::snapshot::RepositorySnapshot;
use crate::models::verification::VerificationRecord;
use crate::models::workflow::WorkflowRun;

/// Category of an artifact, derived purely from its file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ArtifactCategory {
    /// `workflow-metadata.json` - JSON describing one workflow run
    WorkflowMetadata,
    /// `repository-structure.txt` - free-text repository snapshot
    RepositoryStructureSnapshot,
    /// `codeql-summary.txt` or equivalent summary-text name
    SecuritySummary,
    /// `*.sarif` - structured scan result set
    SecurityResultSet,
    /// `response_{weekly,live,sandbox}*.json` - compliance check response
    VerificationResponse,
    /// Anything else; dropped, not an error
    Unrecognized,
}

impl std::fmt::Display for ArtifactCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WorkflowMetadata => write!(f, "workflow metadata"),
            Self::RepositoryStructureSnapshot => write!(f, "repository snapshot"),
            Self::SecuritySummary => write!(f, "security summary"),
            Self::SecurityResultSet => write!(f, "security result set"),
            Self::VerificationResponse => write!(f, "verification response"),
            Self::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Parsed payload of an artifact, one variant per parseable category
#[derive(Debug, Clone, Serialize)]
pub enum ParsedPayload {
    /// Payload of a `WorkflowMetadata` artifact
    Workflow(WorkflowRun),
    /// Payload of a `RepositoryStructureSnapshot` artifact
    Snapshot(RepositorySnapshot),
    /// Findings parsed out of a `SecuritySummary` artifact
    Summary(Vec<SecurityFinding>),
    /// Payload of a `SecurityResultSet` artifact
    ResultSet(ResultSetSummary),
    /// Payload of a `VerificationResponse` artifact
    Verification(VerificationRecord),
}

/// One classified artifact file, valid or not
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactRecord {
    /// Path relative to the scanned root
    pub path: PathBuf,

    /// Category assigned once at classification time
    pub category: ArtifactCategory,

    /// Raw file content as read from disk
    pub raw: String,

    /// Parsed payload; present only if extraction succeeded
    pub payload: Option<ParsedPayload>,

    /// Diagnostic message; present only if extraction failed
    pub diagnostic: Option<String>,
}

impl ArtifactRecord {
    /// Whether extraction produced a payload for this artifact
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.payload.is_some()
    }

    /// The parsed workflow run, if this artifact holds one
    #[must_use]
    pub const fn workflow_run(&self) -> Option<&WorkflowRun> {
        match &self.payload {
            Some(ParsedPayload::Workflow(run)) => Some(run),
            _ => None,
        }
    }

    /// The parsed verification record, if this artifact holds one
    #[must_use]
    pub const fn verification(&self) -> Option<&VerificationRecord> {
        match &self.payload {
            Some(ParsedPayload::Verification(record)) => Some(record),
            _ => None,
        }
    }

    /// The parsed repository snapshot, if this artifact holds one
    #[must_use]
    pub const fn snapshot(&self) -> Option<&RepositorySnapshot> {
        match &self.payload {
            Some(ParsedPayload::Snapshot(snapshot)) => Some(snapshot),
            _ => None,
        }
    }

    /// Security findings carried by this artifact, summary-text or result-set
    #[must_use]
    pub fn findings(&self) -> &[SecurityFinding] {
        match &self.payload {
            Some(ParsedPayload::Summary(findings)) => findings,
            Some(ParsedPayload::ResultSet(summary)) => &summary.findings,
            _ => &[],
        }
    }
}
