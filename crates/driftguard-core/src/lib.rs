//! driftguard-core: Core library for directory integrity auditing
//!
//! Hashes every regular file under a directory with SHA-256, persists the
//! result as a flat `path:digest` baseline, and later compares a fresh scan
//! against that baseline to classify each path as unchanged, modified, new,
//! or deleted.

pub mod audit;
pub mod baseline;
pub mod compare;
pub mod report;
pub mod scanner;
pub mod snapshot;

// Re-export commonly used types
pub use audit::{AuditConfig, AuditError, CreateSummary, DEFAULT_BASELINE_FILE};
pub use baseline::BaselineError;
pub use compare::{ComparisonResult, compare};
pub use report::OutputFormat;
pub use scanner::{ScanError, WalkedFile, Walker, hash_file, try_hash_file};
pub use snapshot::{FileRecord, Snapshot};
