//! Audit configuration

use std::path::{Path, PathBuf};

/// Baseline location used when none is given
pub const DEFAULT_BASELINE_FILE: &str = "baseline.txt";

/// What to audit and where the baseline lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    pub root: PathBuf,
    pub baseline_file: PathBuf,
}

impl AuditConfig {
    /// Create a configuration for `root` with the default baseline file
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            baseline_file: PathBuf::from(DEFAULT_BASELINE_FILE),
        }
    }

    /// Set the baseline file location
    #[must_use]
    pub fn with_baseline_file(mut self, baseline_file: impl Into<PathBuf>) -> Self {
        self.baseline_file = baseline_file.into();
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn baseline_file(&self) -> &Path {
        &self.baseline_file
    }
}
