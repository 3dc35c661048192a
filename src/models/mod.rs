//! Data models for runledger
//!
//! Core abstractions:
//! - Artifact: one file produced by an external job, in exactly one category
//! - WorkflowRun: one execution instance of an automated job
//! - SecurityFinding: one observation from summary text or a result set
//! - VerificationRecord: a parsed compliance-check response
//! - RepositorySnapshot: a free-text capture of repository state

pub mod artifact;
pub mod security;
pub mod snapshot;
pub mod verification;
pub mod workflow;

pub use artifact::{ArtifactCategory, ArtifactRecord, ParsedPayload};
pub use security::{FindingOrigin, ResultSetSummary, SecurityFinding};
pub use snapshot::RepositorySnapshot;
pub use verification::{CheckType, VerificationRecord};
pub use workflow::WorkflowRun;

/// Explicit marker for fields absent in the source artifact.
///
/// Extractors substitute this marker instead of letting nulls or empty
/// strings propagate into downstream formatting.
pub const NOT_AVAILABLE: &str = "not available";
