//! Snapshot model: relative path to content digest
//!
//! A snapshot is either the stored baseline or the state of the directory
//! at scan time. Keys are unique and a later insert for the same path wins.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A single file and its content digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path relative to the audited root
    pub relative_path: PathBuf,
    /// Lowercase hex SHA-256 digest
    pub digest: String,
}

impl FileRecord {
    /// Create a new file record
    #[must_use]
    pub fn new(relative_path: impl Into<PathBuf>, digest: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            digest: digest.into(),
        }
    }
}

/// Mapping of relative path to digest
///
/// Backed by an ordered map, so iteration is sorted by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: BTreeMap<PathBuf, String>,
}

impl Snapshot {
    /// Create an empty snapshot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the digest it replaced if the path was already present
    pub fn insert(&mut self, record: FileRecord) -> Option<String> {
        self.entries.insert(record.relative_path, record.digest)
    }

    /// Digest recorded for a path
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(path, digest)` pairs in path order
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &str)> + '_ {
        self.entries
            .iter()
            .map(|(path, digest)| (path.as_path(), digest.as_str()))
    }

    /// Iterate over owned records in path order
    pub fn records(&self) -> impl Iterator<Item = FileRecord> + '_ {
        self.entries
            .iter()
            .map(|(path, digest)| FileRecord::new(path.clone(), digest.clone()))
    }
}

impl FromIterator<FileRecord> for Snapshot {
    fn from_iter<I: IntoIterator<Item = FileRecord>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        snapshot.extend(iter);
        snapshot
    }
}

impl Extend<FileRecord> for Snapshot {
    fn extend<I: IntoIterator<Item = FileRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}
