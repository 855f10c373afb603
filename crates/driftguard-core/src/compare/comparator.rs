//! Three-way comparison of a stored baseline against the current state

use std::path::PathBuf;

use serde::Serialize;

use crate::snapshot::Snapshot;

/// Classification of every path in the union of two snapshots
///
/// `modified`, `new` and `deleted` are disjoint and sorted by path.
/// Unchanged paths are only counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub unchanged: usize,
    pub modified: Vec<PathBuf>,
    pub new: Vec<PathBuf>,
    pub deleted: Vec<PathBuf>,
}

impl ComparisonResult {
    /// True when no path was modified, added or removed
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.modified.is_empty() && self.new.is_empty() && self.deleted.is_empty()
    }

    /// Number of modified, new and deleted paths together
    #[must_use]
    pub fn total_changes(&self) -> usize {
        self.modified.len() + self.new.len() + self.deleted.len()
    }
}

/// Compare the stored snapshot against the current one
///
/// A path only in `current` is new, a path in both with differing digests
/// is modified, a path only in `stored` is deleted. Everything else counts
/// as unchanged.
#[must_use]
pub fn compare(stored: &Snapshot, current: &Snapshot) -> ComparisonResult {
    let mut result = ComparisonResult::default();

    for (path, digest) in current.iter() {
        match stored.get(path) {
            None => result.new.push(path.to_path_buf()),
            Some(stored_digest) if stored_digest != digest => {
                result.modified.push(path.to_path_buf());
            }
            Some(_) => result.unchanged += 1,
        }
    }

    result.deleted = stored
        .iter()
        .filter(|(path, _)| !current.contains(path))
        .map(|(path, _)| path.to_path_buf())
        .collect();

    result
}
