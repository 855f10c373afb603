//! Report module: Rendering a comparison for humans or machines

mod json;
mod text;

use chrono::{DateTime, Local};

use crate::compare::ComparisonResult;

pub use json::render_json;
pub use text::render_text;

/// Output format for a verify report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a comparison in the requested format
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render(
    result: &ComparisonResult,
    checked_at: &DateTime<Local>,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(result, checked_at)),
        OutputFormat::Json => render_json(result, checked_at),
    }
}
