//! Scanner module: File discovery and content hashing
//!
//! Responsible for walking the audited directory and turning every
//! readable regular file into a digest keyed by its relative path.

mod hasher;
mod walker;

use std::path::PathBuf;

use thiserror::Error;

pub use hasher::{BLOCK_SIZE, hash_file, hash_reader, try_hash_file};
pub use walker::{WalkedFile, Walker};

/// Errors that abort a scan
///
/// Per-file read failures never surface here; they only drop the file
/// from the snapshot.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to enumerate {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl ScanError {
    pub(crate) fn from_walk(root: &std::path::Path, source: walkdir::Error) -> Self {
        let path = source
            .path()
            .map_or_else(|| root.to_path_buf(), std::path::Path::to_path_buf);
        Self::Walk { path, source }
    }
}
