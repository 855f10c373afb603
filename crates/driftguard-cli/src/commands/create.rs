//! Create command: Record a new baseline for a directory

use anyhow::Result;
use driftguard_core::{AuditConfig, CreateSummary, audit};

/// Run the create command
///
/// # Errors
/// Returns an error if the directory is invalid, cannot be walked, or the
/// baseline cannot be written.
pub fn run(config: &AuditConfig) -> Result<()> {
    let summary = audit::create_baseline(config)?;
    println!("{}", summary_message(&summary));
    Ok(())
}

/// User-facing confirmation for a created baseline
#[must_use]
pub fn summary_message(summary: &CreateSummary) -> String {
    format!(
        "Baseline created successfully: '{}'\nMonitored {} files.",
        summary.baseline_file.display(),
        summary.file_count
    )
}
