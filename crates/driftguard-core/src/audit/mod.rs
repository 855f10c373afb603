//! Audit module: Create and verify operations
//!
//! Ties the walker, the baseline store and the comparator together. Each
//! call builds its own snapshots and keeps no state between calls.

mod config;
mod run;

use std::path::PathBuf;

use thiserror::Error;

use crate::baseline::BaselineError;
use crate::scanner::ScanError;

pub use config::{AuditConfig, DEFAULT_BASELINE_FILE};
pub use run::{CreateSummary, create_baseline, validate_root, verify};

/// Errors that stop a create or verify run
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("The specified path '{}' is not a valid directory.", path.display())]
    NotADirectory { path: PathBuf },

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Baseline(#[from] BaselineError),
}

#[cfg(test)]
mod tests;
