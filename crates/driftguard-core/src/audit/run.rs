//! Create and verify runs

use std::path::{Path, PathBuf};

use tracing::info;

use super::{AuditConfig, AuditError};
use crate::baseline;
use crate::compare::{ComparisonResult, compare};
use crate::scanner::Walker;
use crate::snapshot::Snapshot;

/// Outcome of a successful baseline creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSummary {
    pub baseline_file: PathBuf,
    pub file_count: usize,
}

/// Check that `path` is an existing directory
///
/// # Errors
/// Returns `AuditError::NotADirectory` otherwise.
pub fn validate_root(path: &Path) -> Result<(), AuditError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(AuditError::NotADirectory {
            path: path.to_path_buf(),
        })
    }
}

/// Hash every file under the root and write the baseline
///
/// An existing baseline file is replaced. If the baseline file sits inside
/// the root it is left out of the scan.
///
/// # Errors
/// Returns an error if the root is not a directory, a directory cannot be
/// enumerated, or the baseline cannot be written.
pub fn create_baseline(config: &AuditConfig) -> Result<CreateSummary, AuditError> {
    validate_root(config.root())?;
    info!(
        "Creating baseline for directory: '{}'",
        config.root().display()
    );

    let snapshot = scan(config)?;
    baseline::write(&snapshot, config.baseline_file())?;

    info!(
        "Baseline created: '{}' ({} files)",
        config.baseline_file().display(),
        snapshot.len()
    );
    Ok(CreateSummary {
        baseline_file: config.baseline_file().to_path_buf(),
        file_count: snapshot.len(),
    })
}

/// Compare the current directory state against the stored baseline
///
/// The baseline is read before the directory is walked, so a missing
/// baseline fails without scanning anything.
///
/// # Errors
/// Returns an error if the root is not a directory, the baseline is
/// missing, unreadable or malformed, or a directory cannot be enumerated.
pub fn verify(config: &AuditConfig) -> Result<ComparisonResult, AuditError> {
    validate_root(config.root())?;

    let stored = baseline::read(config.baseline_file())?;
    info!(
        "Verifying integrity for directory: '{}'",
        config.root().display()
    );
    info!(
        "Using baseline file: '{}' ({} records)",
        config.baseline_file().display(),
        stored.len()
    );

    let current = scan(config)?;
    let result = compare(&stored, &current);

    info!(
        "Check complete: {} unchanged, {} modified, {} new, {} deleted",
        result.unchanged,
        result.modified.len(),
        result.new.len(),
        result.deleted.len()
    );
    Ok(result)
}

fn scan(config: &AuditConfig) -> Result<Snapshot, AuditError> {
    let walker = Walker::new(config.root()).with_excluded(config.baseline_file());
    Ok(walker.snapshot()?)
}
