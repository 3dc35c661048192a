//! End-to-end pipeline tests
//!
//! Covers the caller-facing result contract, determinism, and the fatal
//! output-write path.

use std::fs;

use runledger::pipeline::{default_report_path, run, PipelineError};

use crate::common::ArtifactDir;

#[test]
fn processed_plus_skipped_equals_recognized_files() {
    let dir = ArtifactDir::new();
    dir.add_workflow_metadata("run1", "CodeQL", 1, "2025-01-01T00:00:00Z");
    dir.add_file("run1/codeql-summary.txt", "=== Findings ===\n- CWE-79\n");
    dir.add_file("responses/response_live.json", r#"{"company_name":"Acme"}"#);
    dir.add_file("responses/response_weekly.json", "[]"); // invalid: array root
    dir.add_file("notes.md", "unrecognized, excluded from both counters");

    let output = dir.path().join("report.md");
    let outcome = run(dir.path(), &output).unwrap();

    assert_eq!(outcome.processed + outcome.skipped, 4);
    assert_eq!(outcome.processed, 3);
    assert_eq!(outcome.skipped, 1);
    assert_eq!(outcome.diagnostics.len(), 1);
    assert!(outcome.diagnostics[0].path.ends_with("response_weekly.json"));
}

#[test]
fn unreadable_artifact_is_skipped_with_diagnostic() {
    let dir = ArtifactDir::new();
    dir.add_workflow_metadata("a", "CodeQL", 1, "2025-01-01T00:00:00Z");
    // Recognized name, but not valid UTF-8: the read itself fails
    dir.add_file_bytes("b/workflow-metadata.json", b"\xff\xfe\x00broken");

    let output = dir.path().join("report.md");
    let outcome = run(dir.path(), &output).unwrap();

    assert_eq!(outcome.processed + outcome.skipped, 2);
    assert_eq!(outcome.processed, 1);
    assert_eq!(outcome.skipped, 1);
    assert_eq!(outcome.diagnostics.len(), 1);
    assert!(outcome.diagnostics[0].path.ends_with("b/workflow-metadata.json"));
    assert!(outcome.diagnostics[0].message.contains("read failed"));

    // The run still completes with a full report
    let doc = fs::read_to_string(&output).unwrap();
    assert!(doc.contains("- Artifacts skipped: 1"));
    assert!(doc.contains("| CodeQL | 1 |"));
}

#[cfg(unix)]
#[test]
fn walk_errors_are_surfaced_but_never_counted_as_skipped() {
    let dir = ArtifactDir::new();
    dir.add_workflow_metadata("run1", "CodeQL", 1, "2025-01-01T00:00:00Z");
    // A self-referencing symlink makes the walk fail on that entry
    std::os::unix::fs::symlink("loop", dir.path().join("loop")).unwrap();

    let output = dir.path().join("report.md");
    let outcome = run(dir.path(), &output).unwrap();

    // One recognized file: the loop entry joins the walk diagnostics
    // without inflating either counter
    assert_eq!(outcome.processed + outcome.skipped, 1);
    assert_eq!(outcome.processed, 1);
    assert_eq!(outcome.skipped, 0);
    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.walk_diagnostics.len(), 1);
    assert!(outcome.walk_diagnostics[0].path.is_relative());

    let doc = fs::read_to_string(&output).unwrap();
    assert!(doc.contains("- Artifacts skipped: 0"));
    assert!(doc.contains("unreadable entry"));
}

#[test]
fn array_rooted_response_excluded_from_table_but_counted() {
    let dir = ArtifactDir::new();
    dir.add_file("response_live.json", "[]");

    let output = dir.path().join("report.md");
    let outcome = run(dir.path(), &output).unwrap();
    assert_eq!(outcome.skipped, 1);

    let doc = fs::read_to_string(&output).unwrap();
    assert!(!doc.contains("| Live |"));
    assert!(doc.contains("`response_live.json`"));
}

#[test]
fn identical_inputs_produce_identical_reports() {
    let make_dir = || {
        let dir = ArtifactDir::new();
        dir.add_workflow_metadata("a", "CodeQL", 1, "2025-01-01T00:00:00Z");
        dir.add_workflow_metadata("b", "Compliance", 3, "2025-01-02T00:00:00Z");
        dir.add_file("a/codeql-summary.txt", "=== Findings ===\n- CWE-89 in db.py\n");
        dir.add_file("b/response_sandbox.json", r#"{"company_name":"Acme","id":"42"}"#);
        dir
    };

    let first = make_dir();
    let second = make_dir();
    let out1 = first.path().join("report.md");
    let out2 = second.path().join("report.md");

    run(first.path(), &out1).unwrap();
    run(second.path(), &out2).unwrap();

    assert_eq!(fs::read_to_string(&out1).unwrap(), fs::read_to_string(&out2).unwrap());
}

#[test]
fn rendered_timeline_is_non_decreasing() {
    let dir = ArtifactDir::new();
    dir.add_workflow_metadata("z", "A", 1, "2025-01-01T00:00:00Z");
    dir.add_workflow_metadata("a", "B", 1, "2025-03-01T00:00:00Z");
    dir.add_workflow_metadata("m", "C", 1, "2025-02-01T00:00:00Z");

    let output = dir.path().join("report.md");
    run(dir.path(), &output).unwrap();

    let doc = fs::read_to_string(&output).unwrap();
    let timeline = doc.split("## Timeline").nth(1).unwrap();
    let timeline = timeline.split("##").next().unwrap();
    let timestamps: Vec<&str> = timeline
        .lines()
        .filter(|l| l.starts_with("| 2025"))
        .map(|l| l.split('|').nth(1).unwrap().trim())
        .collect();

    assert_eq!(timestamps.len(), 3);
    let mut sorted = timestamps.clone();
    sorted.sort_unstable();
    assert_eq!(timestamps, sorted);
}

#[test]
fn empty_directory_yields_fully_placeholdered_report() {
    let dir = ArtifactDir::new();
    let output = dir.path().join("report.md");
    let outcome = run(dir.path(), &output).unwrap();

    assert_eq!(outcome.processed, 0);
    assert_eq!(outcome.skipped, 0);

    let doc = fs::read_to_string(&output).unwrap();
    assert!(doc.contains("## Workflow Runs"));
    assert!(doc.contains("_No data._"));
    assert!(doc.contains("No workflow executions observed."));
}

#[test]
fn mixed_scenario_workflow_and_verification() {
    let dir = ArtifactDir::new();
    dir.add_file(
        "workflow-metadata.json",
        r#"{"workflow":"CodeQL","run_id":5,"run_number":1,"timestamp":"2025-01-01T00:00:00Z"}"#,
    );
    dir.add_file("response_live.json", r#"{"company_name":"Acme","company_status":"active"}"#);

    let output = dir.path().join("report.md");
    run(dir.path(), &output).unwrap();

    let doc = fs::read_to_string(&output).unwrap();
    assert!(doc.contains("| CodeQL | 1 | 2025-01-01T00:00:00Z |"));
    assert!(doc.contains("| Live | Acme | not available | active |"));
}

#[test]
fn unwritable_output_is_fatal() {
    let dir = ArtifactDir::new();
    dir.add_workflow_metadata("a", "CodeQL", 1, "2025-01-01T00:00:00Z");

    let output = dir.path().join("missing-dir/report.md");
    let result = run(dir.path(), &output);
    assert!(matches!(result, Err(PipelineError::WriteReport { .. })));
    assert!(!output.exists());
}

#[test]
fn default_report_path_is_under_root() {
    let dir = ArtifactDir::new();
    assert_eq!(
        default_report_path(dir.path()),
        dir.path().join("workflow-log-analysis.md")
    );
}
