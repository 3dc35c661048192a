//! Security extractors: summary text and structured result sets
//!
//! Summary text yields one finding per `- ` line after the findings marker,
//! in written order. Result sets are SARIF-shaped JSON: a `runs` array whose
//! entries each hold a `results` array.

use std::path::Path;

use serde_json::Value;

use crate::extract::object_root;
use crate::models::{FindingOrigin, ResultSetSummary, SecurityFinding};

const FINDINGS_MARKER: &str = "=== Findings ===";

/// Parse a summary-text artifact into its findings
///
/// No findings marker, or a marker with no `- ` lines, means zero findings;
/// that is valid output, not an error.
#[must_use]
pub fn summary_findings(path: &Path, raw: &str) -> Vec<SecurityFinding> {
    let mut findings = Vec::new();
    let mut in_findings = false;

    for line in raw.lines() {
        let trimmed = line.trim_end();
        if trimmed == FINDINGS_MARKER {
            in_findings = true;
            continue;
        }
        if trimmed.starts_with("=== ") && trimmed.ends_with(" ===") {
            in_findings = false;
            continue;
        }
        if in_findings {
            if let Some(rest) = trimmed.strip_prefix('-') {
                findings.push(SecurityFinding {
                    source: path.to_path_buf(),
                    description: rest.trim().to_string(),
                    rule_id: None,
                    severity: None,
                    origin: FindingOrigin::SummaryText,
                });
            }
        }
    }

    findings
}

/// Parse a structured result-set artifact (SARIF) into a summary
pub fn result_set(path: &Path, raw: &str) -> Result<ResultSetSummary, String> {
    let map = object_root(raw)?;

    let runs = match map.get("runs") {
        Some(Value::Array(runs)) => runs,
        Some(_) => return Err("'runs' is not an array".to_string()),
        None => return Err("missing 'runs' array".to_string()),
    };

    let mut run_result_counts = Vec::with_capacity(runs.len());
    let mut findings = Vec::new();

    for run in runs {
        let results = match run.get("results") {
            Some(Value::Array(results)) => results.as_slice(),
            _ => &[],
        };
        run_result_counts.push(results.len());

        for result in results {
            findings.push(SecurityFinding {
                source: path.to_path_buf(),
                description: result
                    .get("message")
                    .and_then(|m| m.get("text"))
                    .and_then(Value::as_str)
                    .unwrap_or("(no description)")
                    .to_string(),
                rule_id: result.get("ruleId").and_then(Value::as_str).map(str::to_string),
                severity: result.get("level").and_then(Value::as_str).map(str::to_string),
                origin: FindingOrigin::ResultSet,
            });
        }
    }

    Ok(ResultSetSummary {
        run_result_counts,
        findings,
    })
}
