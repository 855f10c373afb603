//! Machine-readable report

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::compare::ComparisonResult;

#[derive(Serialize)]
struct JsonReport<'a> {
    checked_at: &'a DateTime<Local>,
    clean: bool,
    #[serde(flatten)]
    result: &'a ComparisonResult,
}

/// Render the report as a pretty-printed JSON object
///
/// # Errors
/// Returns an error if a path cannot be represented as a JSON string.
pub fn render_json(
    result: &ComparisonResult,
    checked_at: &DateTime<Local>,
) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        checked_at,
        clean: result.is_clean(),
        result,
    };
    serde_json::to_string_pretty(&report)
}
