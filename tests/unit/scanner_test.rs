//! Tests for the artifact scanner
//!
//! The scanner classifies by file name only and sorts candidates by full
//! path so downstream ordering is deterministic.

use std::path::PathBuf;

use runledger::models::ArtifactCategory;
use runledger::scanner::{classify, scan, ScanError};

use crate::common::ArtifactDir;

// =============================================================================
// Classification Tests
// =============================================================================

#[test]
fn classify_known_patterns() {
    assert_eq!(classify("workflow-metadata.json"), ArtifactCategory::WorkflowMetadata);
    assert_eq!(
        classify("repository-structure.txt"),
        ArtifactCategory::RepositoryStructureSnapshot
    );
    assert_eq!(classify("codeql-summary.txt"), ArtifactCategory::SecuritySummary);
    assert_eq!(classify("results.sarif"), ArtifactCategory::SecurityResultSet);
    assert_eq!(
        classify("response_weekly_20250101.json"),
        ArtifactCategory::VerificationResponse
    );
    assert_eq!(classify("response_live.json"), ArtifactCategory::VerificationResponse);
    assert_eq!(classify("response_sandbox_2.json"), ArtifactCategory::VerificationResponse);
}

#[test]
fn classify_unrecognized() {
    assert_eq!(classify("readme.md"), ArtifactCategory::Unrecognized);
    assert_eq!(classify("response_other.json"), ArtifactCategory::Unrecognized);
    assert_eq!(classify("response_live.txt"), ArtifactCategory::Unrecognized);
    assert_eq!(classify("summary.txt"), ArtifactCategory::Unrecognized);
}

#[test]
fn equivalent_summary_names_match() {
    assert_eq!(classify("security-summary.txt"), ArtifactCategory::SecuritySummary);
}

// =============================================================================
// Scan Tests
// =============================================================================

#[test]
fn scan_finds_nested_artifacts() {
    let dir = ArtifactDir::new();
    dir.add_file("run1/workflow-metadata.json", "{}");
    dir.add_file("data/responses/response_live.json", "{}");
    dir.add_file("notes.md", "ignored");

    let outcome = scan(dir.path()).unwrap();
    assert_eq!(outcome.candidates.len(), 2);
    assert!(outcome.diagnostics.is_empty());
}

#[test]
fn scan_sorts_by_full_path() {
    let dir = ArtifactDir::new();
    dir.add_file("b/workflow-metadata.json", "{}");
    dir.add_file("a/workflow-metadata.json", "{}");
    dir.add_file("a/codeql-summary.txt", "");

    let outcome = scan(dir.path()).unwrap();
    let paths: Vec<PathBuf> = outcome.candidates.iter().map(|c| c.path.clone()).collect();
    assert_eq!(
        paths,
        vec![
            PathBuf::from("a/codeql-summary.txt"),
            PathBuf::from("a/workflow-metadata.json"),
            PathBuf::from("b/workflow-metadata.json"),
        ]
    );
}

#[test]
fn scan_empty_directory_is_not_an_error() {
    let dir = ArtifactDir::new();
    let outcome = scan(dir.path()).unwrap();
    assert!(outcome.candidates.is_empty());
    assert!(outcome.diagnostics.is_empty());
}

#[test]
fn scan_missing_root_fails() {
    let result = scan(std::path::Path::new("/nonexistent/path/that/does/not/exist"));
    assert!(matches!(result, Err(ScanError::RootNotFound(_))));
}

#[test]
fn category_is_assigned_once_at_classification() {
    let dir = ArtifactDir::new();
    // Content that would parse as a different category is irrelevant:
    // classification is purely structural
    dir.add_file("codeql-summary.txt", r#"{"workflow":"CodeQL"}"#);

    let outcome = scan(dir.path()).unwrap();
    assert_eq!(outcome.candidates[0].category, ArtifactCategory::SecuritySummary);
}
