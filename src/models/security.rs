//! Security finding models
//!
//! Findings come from two places: free-text summary artifacts and structured
//! SARIF result sets. Both flatten into `SecurityFinding`, tagged by origin.

use std::path::PathBuf;

use serde::Serialize;

/// Where a finding was extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FindingOrigin {
    /// A `- ` line under the findings marker of a summary artifact
    SummaryText,
    /// One result entry in a structured result set
    ResultSet,
}

impl std::fmt::Display for FindingOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SummaryText => write!(f, "summary text"),
            Self::ResultSet => write!(f, "result set"),
        }
    }
}

/// A single security-relevant observation
#[derive(Debug, Clone, Serialize)]
pub struct SecurityFinding {
    /// Artifact file the finding came from
    pub source: PathBuf,

    /// Description text of the finding
    pub description: String,

    /// Rule identifier, when the result set carries one
    pub rule_id: Option<String>,

    /// Severity level, when the result set carries one
    pub severity: Option<String>,

    /// Origin of the finding
    pub origin: FindingOrigin,
}

/// Aggregated view of one structured result set artifact
#[derive(Debug, Clone, Serialize)]
pub struct ResultSetSummary {
    /// Result count per run entry, in document order
    pub run_result_counts: Vec<usize>,

    /// Flattened findings across all runs
    pub findings: Vec<SecurityFinding>,
}

impl ResultSetSummary {
    /// Total result count across all runs
    #[must_use]
    pub fn total_results(&self) -> usize {
        self.run_result_counts.iter().sum()
    }
}
