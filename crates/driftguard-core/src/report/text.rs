//! Human-readable report

use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::compare::ComparisonResult;

const HEADER: &str = "--- Integrity Check Report ---";
const FOOTER: &str = "------------------------------";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the plain text report
///
/// A clean result collapses to a single success line. Otherwise each
/// non-empty change list gets its own labeled block followed by a summary
/// of all four counts.
#[must_use]
pub fn render_text(result: &ComparisonResult, checked_at: &DateTime<Local>) -> String {
    let mut lines = vec![
        HEADER.to_string(),
        format!("Time: {}", checked_at.format(TIME_FORMAT)),
        String::new(),
    ];

    if result.is_clean() {
        lines.push(format!(
            "SUCCESS: All {} monitored files are unchanged.",
            result.unchanged
        ));
    } else {
        let blocks = [
            ("MODIFIED", &result.modified),
            ("NEW", &result.new),
            ("DELETED", &result.deleted),
        ];
        for (label, paths) in blocks {
            if !paths.is_empty() {
                push_block(&mut lines, label, paths);
            }
        }
        lines.push(format!(
            "Summary: {} files OK, {} modified, {} new, {} deleted.",
            result.unchanged,
            result.modified.len(),
            result.new.len(),
            result.deleted.len()
        ));
    }

    lines.push(FOOTER.to_string());
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn push_block(lines: &mut Vec<String>, label: &str, paths: &[PathBuf]) {
    lines.push(format!("{label} ({}):", paths.len()));
    lines.extend(paths.iter().map(|path| format!("  - {}", path.display())));
    lines.push(String::new());
}
