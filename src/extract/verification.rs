//! Verification response extractor
//!
//! Responses come from external compliance checks. The JSON root must be an
//! object; an array root marks the record invalid but it still counts as
//! processed input. The check type comes from the file name, once.

use std::path::Path;

use crate::extract::{object_root, string_field};
use crate::models::verification::check_type_for_path;
use crate::models::{VerificationRecord, NOT_AVAILABLE};

/// Parse a `response_*.json` artifact into a [`VerificationRecord`]
pub fn verification_response(path: &Path, raw: &str) -> Result<VerificationRecord, String> {
    let map = object_root(raw)?;

    Ok(VerificationRecord {
        check_type: check_type_for_path(path),
        subject_name: string_field(&map, &["company_name", "name"])
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        subject_id: string_field(&map, &["company_number", "id"])
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        subject_status: string_field(&map, &["company_status", "status"])
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        source: path.to_path_buf(),
    })
}
