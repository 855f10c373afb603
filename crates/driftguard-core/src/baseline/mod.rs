//! Baseline module: Persisting snapshots as flat `path:digest` files
//!
//! One record per line, no header and no escaping. Digests never contain
//! `:`, so splitting on the last `:` recovers both halves even when the
//! path itself contains one.

mod store;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use store::{DELIMITER, parse_line, read, write, write_records};

/// Errors that can occur while reading or writing a baseline file
#[derive(Debug, Error)]
pub enum BaselineError {
    #[error(
        "Baseline file '{}' not found. Please create a baseline first using the --create flag.",
        path.display()
    )]
    NotFound { path: PathBuf },

    #[error("Could not read baseline file '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed baseline file '{}' at line {line}: expected 'path:digest'", path.display())]
    Malformed { path: PathBuf, line: usize },

    #[error("Could not write to baseline file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
