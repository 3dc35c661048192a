//! Report renderer - serializes the correlated model into Markdown
//!
//! The section order is fixed and every section always renders, with an
//! explicit placeholder when its data is empty. The document carries no
//! wall-clock content, so identical inputs produce byte-identical reports.

use std::fmt::Write as _;

use crate::correlate::CorrelationResult;
use crate::models::{ArtifactCategory, ArtifactRecord, FindingOrigin, SecurityFinding};
use crate::pipeline::Diagnostic;

const NO_DATA: &str = "_No data._";

/// Render the full analysis document in memory
///
/// `file_diagnostics` covers recognized artifacts that could not be read
/// and counts toward the skipped total; `walk_diagnostics` covers
/// directory-walk problems and is listed without affecting any counter.
#[must_use]
pub fn render(
    records: &[ArtifactRecord],
    correlation: &CorrelationResult,
    file_diagnostics: &[Diagnostic],
    walk_diagnostics: &[Diagnostic],
) -> String {
    let mut doc = String::new();

    doc.push_str("# Workflow Artifact Analysis Report\n\n");
    summary_section(&mut doc, records, file_diagnostics, walk_diagnostics);
    workflow_section(&mut doc, correlation);
    timeline_section(&mut doc, correlation);
    findings_section(&mut doc, records);
    verification_section(&mut doc, correlation);
    snapshot_section(&mut doc, records);
    insight_section(&mut doc, correlation);
    doc.push_str("---\n\n_Report generated by runledger._\n");

    doc
}

fn summary_section(
    doc: &mut String,
    records: &[ArtifactRecord],
    file_diagnostics: &[Diagnostic],
    walk_diagnostics: &[Diagnostic],
) {
    doc.push_str("## Summary\n\n");

    let processed = records.iter().filter(|r| r.is_valid()).count();
    let skipped = records.len() - processed + file_diagnostics.len();
    let _ = writeln!(doc, "- Artifacts processed: {processed}");
    let _ = writeln!(doc, "- Artifacts skipped: {skipped}");

    for category in [
        ArtifactCategory::WorkflowMetadata,
        ArtifactCategory::RepositoryStructureSnapshot,
        ArtifactCategory::SecuritySummary,
        ArtifactCategory::SecurityResultSet,
        ArtifactCategory::VerificationResponse,
    ] {
        let count = records.iter().filter(|r| r.category == category).count();
        let _ = writeln!(doc, "- {category}: {count}");
    }

    if file_diagnostics.is_empty()
        && walk_diagnostics.is_empty()
        && records.iter().all(ArtifactRecord::is_valid)
    {
        doc.push_str("- Diagnostics: none\n");
    } else {
        doc.push_str("- Diagnostics:\n");
        for record in records.iter().filter(|r| !r.is_valid()) {
            if let Some(message) = &record.diagnostic {
                let _ = writeln!(doc, "  - `{}`: {message}", record.path.display());
            }
        }
        for diagnostic in file_diagnostics {
            let _ = writeln!(doc, "  - `{}`: {}", diagnostic.path.display(), diagnostic.message);
        }
        for diagnostic in walk_diagnostics {
            let _ = writeln!(doc, "  - `{}`: {}", diagnostic.path.display(), diagnostic.message);
        }
    }
    doc.push('\n');
}

fn workflow_section(doc: &mut String, correlation: &CorrelationResult) {
    doc.push_str("## Workflow Runs\n\n");
    if correlation.workflows.is_empty() {
        doc.push_str(NO_DATA);
        doc.push_str("\n\n");
        return;
    }

    doc.push_str("| Workflow | Runs | Latest run |\n|---|---|---|\n");
    for stats in &correlation.workflows {
        let _ = writeln!(doc, "| {} | {} | {} |", stats.name, stats.runs, stats.latest_timestamp);
    }
    doc.push('\n');
}

fn timeline_section(doc: &mut String, correlation: &CorrelationResult) {
    doc.push_str("## Timeline\n\n");
    if correlation.timeline.is_empty() {
        doc.push_str(NO_DATA);
        doc.push_str("\n\n");
        return;
    }

    doc.push_str("| Timestamp | Workflow | Run # | Ref | Commit |\n|---|---|---|---|---|\n");
    for event in &correlation.timeline {
        let _ = writeln!(
            doc,
            "| {} | {} | {} | {} | {} |",
            event.timestamp, event.workflow, event.run_number, event.ref_name, event.short_sha
        );
    }
    doc.push('\n');
}

fn findings_section(doc: &mut String, records: &[ArtifactRecord]) {
    doc.push_str("## Security Findings\n\n");

    let findings: Vec<&SecurityFinding> = records.iter().flat_map(ArtifactRecord::findings).collect();

    // Summary-text findings render before structured result-set findings
    for (heading, origin) in [
        ("### Summary Text", FindingOrigin::SummaryText),
        ("### Result Sets", FindingOrigin::ResultSet),
    ] {
        doc.push_str(heading);
        doc.push_str("\n\n");
        let of_origin: Vec<&&SecurityFinding> =
            findings.iter().filter(|f| f.origin == origin).collect();
        if of_origin.is_empty() {
            doc.push_str(NO_DATA);
            doc.push_str("\n\n");
            continue;
        }
        for finding in of_origin {
            let mut line = format!("- {}", finding.description);
            if let Some(rule_id) = &finding.rule_id {
                let _ = write!(line, " [{rule_id}]");
            }
            if let Some(severity) = &finding.severity {
                let _ = write!(line, " ({severity})");
            }
            let _ = write!(line, " from `{}`", finding.source.display());
            doc.push_str(&line);
            doc.push('\n');
        }
        doc.push('\n');
    }
}

fn verification_section(doc: &mut String, correlation: &CorrelationResult) {
    doc.push_str("## Verification Checks\n\n");
    if correlation.check_groups.is_empty() {
        doc.push_str(NO_DATA);
        doc.push_str("\n\n");
        return;
    }

    doc.push_str("| Type | Subject | Identifier | Status | Source |\n|---|---|---|---|---|\n");
    for group in &correlation.check_groups {
        for record in &group.records {
            let _ = writeln!(
                doc,
                "| {} | {} | {} | {} | `{}` |",
                group.check_type,
                record.subject_name,
                record.subject_id,
                record.subject_status,
                record.source.display()
            );
        }
    }
    doc.push('\n');

    for group in &correlation.check_groups {
        for record in &group.records {
            let _ = writeln!(doc, "### {}", record.source_name());
            doc.push('\n');
            let _ = writeln!(doc, "- Check type: {}", group.check_type);
            let _ = writeln!(doc, "- Subject: {} ({})", record.subject_name, record.subject_id);
            let _ = writeln!(doc, "- Status: {}", record.subject_status);
            doc.push('\n');
        }
    }
}

fn snapshot_section(doc: &mut String, records: &[ArtifactRecord]) {
    doc.push_str("## Repository Snapshots\n\n");

    let snapshots: Vec<_> = records.iter().filter_map(ArtifactRecord::snapshot).collect();
    if snapshots.is_empty() {
        doc.push_str(NO_DATA);
        doc.push_str("\n\n");
        return;
    }

    doc.push_str("| Branch | Commit | Files | Source |\n|---|---|---|---|\n");
    for snapshot in snapshots {
        let files = snapshot
            .file_count
            .map_or_else(|| "-".to_string(), |n| n.to_string());
        let _ = writeln!(
            doc,
            "| {} | {} | {} | `{}` |",
            snapshot.branch,
            snapshot.short_commit,
            files,
            snapshot.source.display()
        );
    }
    doc.push('\n');
}

fn insight_section(doc: &mut String, correlation: &CorrelationResult) {
    doc.push_str("## Insights\n\n");

    doc.push_str("### Workflow Distribution\n\n");
    let total = correlation.timeline.len();
    if total == 0 {
        // Division-by-zero guard: an empty timeline gets a note, not a NaN
        doc.push_str("No workflow executions observed.\n\n");
    } else {
        for stats in &correlation.workflows {
            #[allow(clippy::cast_precision_loss)]
            let share = (stats.runs as f64 / total as f64) * 100.0;
            let _ = writeln!(doc, "- {}: {} run(s), {share:.1}% of executions", stats.name, stats.runs);
        }
        doc.push('\n');
    }

    doc.push_str("### Branch Activity\n\n");
    if correlation.branch_activity.is_empty() {
        doc.push_str(NO_DATA);
        doc.push_str("\n\n");
    } else {
        for entry in &correlation.branch_activity {
            let _ = writeln!(doc, "- {}: {} event(s)", entry.ref_name, entry.events);
        }
        doc.push('\n');
    }

    doc.push_str("### Findings / Verification Co-occurrence\n\n");
    match correlation.co_occurrence {
        Some(note) => {
            let _ = writeln!(
                doc,
                "{} security finding(s) observed alongside {} verification record(s). \
                 No shared key links them; totals are reported side by side only.",
                note.finding_total, note.verification_total
            );
            doc.push('\n');
        },
        None => {
            doc.push_str(NO_DATA);
            doc.push_str("\n\n");
        },
    }
}
