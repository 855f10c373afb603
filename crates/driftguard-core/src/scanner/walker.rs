//! File walker: Discovers regular files in a directory tree

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use super::{ScanError, try_hash_file};
use crate::snapshot::{FileRecord, Snapshot};

/// A regular file found during a walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// Path as reached from the walk root, usable for opening the file
    pub path: PathBuf,
    /// Path relative to the walk root
    pub relative_path: PathBuf,
}

/// Recursive walker over the audited directory
#[derive(Debug)]
pub struct Walker {
    root: PathBuf,
    excluded: Vec<PathBuf>,
}

impl Walker {
    /// Create a new walker for the given root directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            excluded: Vec::new(),
        }
    }

    /// Leave `path` out of the walk if it lies inside the root
    ///
    /// The file does not need to exist yet. Paths outside the root are
    /// ignored.
    #[must_use]
    pub fn with_excluded(mut self, path: impl AsRef<Path>) -> Self {
        if let Some(relative) = self.relative_to_root(path.as_ref()) {
            debug!("Excluding {} from walk", relative.display());
            self.excluded.push(relative);
        }
        self
    }

    /// Get the root directory being walked
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the directory and yield every regular file
    ///
    /// Directories are descended into but never yielded. A symlink to a file
    /// is yielded under the link's own path; symlinks to directories are not
    /// descended. A broken symlink is yielded so the hash attempt drops it.
    /// A directory that cannot be listed yields an error item.
    pub fn files(&self) -> impl Iterator<Item = Result<WalkedFile, ScanError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => self.walked_file(entry).map(Ok),
                Err(e) => Some(Err(ScanError::from_walk(&self.root, e))),
            })
    }

    /// Walk and hash every file into a snapshot
    ///
    /// Files that cannot be read are skipped.
    ///
    /// # Errors
    /// Returns an error if any directory under the root cannot be enumerated.
    pub fn snapshot(&self) -> Result<Snapshot, ScanError> {
        let mut snapshot = Snapshot::new();
        let mut skipped = 0usize;

        for file in self.files() {
            let file = file?;
            match try_hash_file(&file.path) {
                Some(digest) => {
                    snapshot.insert(FileRecord::new(file.relative_path, digest));
                }
                None => skipped += 1,
            }
        }

        info!(
            "Hashed {} files under {} ({} unreadable skipped)",
            snapshot.len(),
            self.root.display(),
            skipped
        );
        Ok(snapshot)
    }

    fn walked_file(&self, entry: DirEntry) -> Option<WalkedFile> {
        if !is_file_like(&entry) {
            return None;
        }

        let path = entry.into_path();
        let relative_path = path.strip_prefix(&self.root).ok()?.to_path_buf();

        if self.excluded.contains(&relative_path) {
            return None;
        }

        Some(WalkedFile {
            path,
            relative_path,
        })
    }

    /// Resolve `path` to a path relative to the canonical root
    fn relative_to_root(&self, path: &Path) -> Option<PathBuf> {
        let root = std::fs::canonicalize(&self.root).ok()?;
        let file_name = path.file_name()?;
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let resolved = std::fs::canonicalize(parent).ok()?.join(file_name);

        resolved
            .strip_prefix(&root)
            .ok()
            .map(Path::to_path_buf)
    }
}

fn is_file_like(entry: &DirEntry) -> bool {
    if entry.file_type().is_file() {
        return true;
    }
    if !entry.path_is_symlink() {
        return false;
    }
    match std::fs::metadata(entry.path()) {
        Ok(target) => target.is_file(),
        // Dangling
        Err(_) => true,
    }
}
