//! Verification record model
//!
//! A verification record is a parsed response from an external compliance
//! check. The check type is inferred exactly once, from the file name, and
//! never re-inferred afterwards.

use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;

/// Kind of compliance check that produced a response, inferred from the
/// file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum CheckType {
    /// Response from the live API check
    Live,
    /// Response from the sandbox API check
    Sandbox,
    /// Response from the scheduled weekly check
    Weekly,
    /// File name matched no known type token
    Unknown,
}

impl CheckType {
    /// Infer the check type from a file name, matching against the fixed
    /// list of known type tokens
    #[must_use]
    pub fn from_file_name(name: &str) -> Self {
        if name.contains("live") {
            Self::Live
        } else if name.contains("sandbox") {
            Self::Sandbox
        } else if name.contains("weekly") {
            Self::Weekly
        } else {
            Self::Unknown
        }
    }

    /// All check types in report order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Live, Self::Sandbox, Self::Weekly, Self::Unknown]
    }
}

impl std::fmt::Display for CheckType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Live => write!(f, "Live"),
            Self::Sandbox => write!(f, "Sandbox"),
            Self::Weekly => write!(f, "Weekly"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A parsed compliance-check response
#[derive(Debug, Clone, Serialize)]
pub struct VerificationRecord {
    /// Check type, fixed at extraction time
    pub check_type: CheckType,

    /// Name of the verified subject
    pub subject_name: String,

    /// Identifier of the verified subject
    pub subject_id: String,

    /// Reported status of the subject
    pub subject_status: String,

    /// Artifact file the record came from
    pub source: PathBuf,
}

impl VerificationRecord {
    /// File name of the source artifact, for display
    #[must_use]
    pub fn source_name(&self) -> &str {
        self.source
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("?")
    }
}

/// Infer a check type for a path's file name
#[must_use]
pub fn check_type_for_path(path: &Path) -> CheckType {
    path.file_name()
        .and_then(|n| n.to_str())
        .map_or(CheckType::Unknown, CheckType::from_file_name)
}
