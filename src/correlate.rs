//! Correlation engine - builds the timeline and aggregate views
//!
//! Records from unrelated jobs share no reliable foreign key, only soft
//! signals (timestamps, branch names, co-occurrence). Correlation therefore
//! derives aggregates: a sorted execution timeline, per-workflow and
//! per-check-type counts, a branch-activity histogram, and a shallow
//! co-occurrence note between findings and verification records. It never
//! mutates the underlying records and it never fabricates a join key.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{ArtifactRecord, CheckType, VerificationRecord};

/// One entry in the execution timeline, derived from a workflow run
#[derive(Debug, Clone, Serialize)]
pub struct TimelineEvent {
    /// ISO-8601 timestamp of the run
    pub timestamp: String,
    /// Workflow name
    pub workflow: String,
    /// Run number within the workflow
    pub run_number: String,
    /// Ref or branch the run executed on
    pub ref_name: String,
    /// Short commit hash
    pub short_sha: String,
}

/// Aggregate view of one workflow across the timeline
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowStats {
    /// Workflow name
    pub name: String,
    /// Number of runs observed
    pub runs: usize,
    /// Timestamp of the latest run (maximum by string comparison)
    pub latest_timestamp: String,
}

/// Verification records grouped under one check type
#[derive(Debug, Clone, Serialize)]
pub struct CheckGroup {
    /// The shared check type
    pub check_type: CheckType,
    /// Records of that type, in discovery order
    pub records: Vec<VerificationRecord>,
}

/// One branch-activity histogram entry
#[derive(Debug, Clone, Serialize)]
pub struct BranchActivity {
    /// Ref value the events executed on
    pub ref_name: String,
    /// Number of timeline events on that ref
    pub events: usize,
}

/// Side-by-side totals when both findings and verifications are present
///
/// Intentionally not a relational join: no field reliably links a specific
/// finding to a specific verification check, so only aggregate counts are
/// reported.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CoOccurrence {
    /// Total security findings across all artifacts
    pub finding_total: usize,
    /// Total valid verification records
    pub verification_total: usize,
}

/// The derived aggregate view over all parsed records
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationResult {
    /// Timeline sorted non-decreasing by timestamp, stable on ties
    pub timeline: Vec<TimelineEvent>,
    /// Per-workflow stats, sorted by workflow name
    pub workflows: Vec<WorkflowStats>,
    /// Non-empty check-type groups, in Live/Sandbox/Weekly/Unknown order
    pub check_groups: Vec<CheckGroup>,
    /// Branch histogram, sorted count-descending then ref ascending
    pub branch_activity: Vec<BranchActivity>,
    /// Co-occurrence note; present only when both sides are non-empty
    pub co_occurrence: Option<CoOccurrence>,
}

/// Correlate parsed records into the aggregate model
#[must_use]
pub fn correlate(records: &[ArtifactRecord]) -> CorrelationResult {
    let timeline = build_timeline(records);
    let workflows = workflow_stats(&timeline);
    let check_groups = group_checks(records);
    let branch_activity = branch_histogram(&timeline);

    let finding_total: usize = records.iter().map(|r| r.findings().len()).sum();
    let verification_total: usize =
        check_groups.iter().map(|g| g.records.len()).sum();
    let co_occurrence = (finding_total > 0 && verification_total > 0).then_some(CoOccurrence {
        finding_total,
        verification_total,
    });

    CorrelationResult {
        timeline,
        workflows,
        check_groups,
        branch_activity,
        co_occurrence,
    }
}

/// Exactly one event per valid workflow run, stable-sorted by timestamp
fn build_timeline(records: &[ArtifactRecord]) -> Vec<TimelineEvent> {
    let mut timeline: Vec<TimelineEvent> = records
        .iter()
        .filter_map(ArtifactRecord::workflow_run)
        .map(|run| TimelineEvent {
            timestamp: run.timestamp.clone(),
            workflow: run.workflow.clone(),
            run_number: run.run_number.clone(),
            ref_name: run.ref_name.clone(),
            short_sha: run.short_sha(),
        })
        .collect();

    // Stable sort: ties keep discovery order, never identifier comparison
    timeline.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    timeline
}

fn workflow_stats(timeline: &[TimelineEvent]) -> Vec<WorkflowStats> {
    let mut by_name: BTreeMap<&str, WorkflowStats> = BTreeMap::new();

    for event in timeline {
        let stats = by_name.entry(event.workflow.as_str()).or_insert_with(|| WorkflowStats {
            name: event.workflow.clone(),
            runs: 0,
            latest_timestamp: event.timestamp.clone(),
        });
        stats.runs += 1;
        // >= so that on ties the later timeline position wins
        if event.timestamp >= stats.latest_timestamp {
            stats.latest_timestamp = event.timestamp.clone();
        }
    }

    by_name.into_values().collect()
}

fn group_checks(records: &[ArtifactRecord]) -> Vec<CheckGroup> {
    CheckType::all()
        .into_iter()
        .filter_map(|check_type| {
            let matching: Vec<VerificationRecord> = records
                .iter()
                .filter_map(ArtifactRecord::verification)
                .filter(|v| v.check_type == check_type)
                .cloned()
                .collect();
            (!matching.is_empty()).then_some(CheckGroup {
                check_type,
                records: matching,
            })
        })
        .collect()
}

fn branch_histogram(timeline: &[TimelineEvent]) -> Vec<BranchActivity> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for event in timeline {
        if !event.ref_name.is_empty() && event.ref_name != crate::models::NOT_AVAILABLE {
            *counts.entry(event.ref_name.as_str()).or_insert(0) += 1;
        }
    }

    let mut histogram: Vec<BranchActivity> = counts
        .into_iter()
        .map(|(ref_name, events)| BranchActivity {
            ref_name: ref_name.to_string(),
            events,
        })
        .collect();
    // Count descending; the BTreeMap already yields refs ascending for ties
    histogram.sort_by(|a, b| b.events.cmp(&a.events).then(a.ref_name.cmp(&b.ref_name)));
    histogram
}
