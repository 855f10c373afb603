//! Verify command: Compare a directory against its baseline

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use driftguard_core::{AuditConfig, OutputFormat, audit, report};

/// Run the verify command
///
/// Drift is reported, not treated as a failure.
///
/// # Errors
/// Returns an error if the directory is invalid, the baseline is missing
/// or unreadable, or the directory cannot be walked.
pub fn run(config: &AuditConfig, format: OutputFormat) -> Result<()> {
    let output = check(config, format, &Local::now())?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Verify and render the report for a given check time
///
/// # Errors
/// Returns an error if verification or rendering fails.
pub fn check(
    config: &AuditConfig,
    format: OutputFormat,
    checked_at: &DateTime<Local>,
) -> Result<String> {
    let result = audit::verify(config)?;
    report::render(&result, checked_at, format).context("Failed to render report")
}
