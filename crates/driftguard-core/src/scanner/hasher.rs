//! Streaming SHA-256 file hasher

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

/// Read block size used when streaming file contents into the digest
pub const BLOCK_SIZE: usize = 65536;

/// Compute the lowercase hex SHA-256 digest of a file
///
/// The file is read in `BLOCK_SIZE` chunks, so memory use does not grow
/// with file size.
///
/// # Errors
/// Returns an error if the file cannot be opened or read.
pub fn hash_file(path: &Path) -> io::Result<String> {
    let file = File::open(path)?;
    hash_reader(file)
}

/// Compute the lowercase hex SHA-256 digest of everything `reader` yields
///
/// # Errors
/// Returns the first non-interrupt read error.
pub fn hash_reader<R: Read>(mut reader: R) -> io::Result<String> {
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; BLOCK_SIZE];

    loop {
        let read = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Hash a file, turning any I/O failure into `None`
///
/// Callers treat `None` as "leave this file out of the snapshot".
#[must_use]
pub fn try_hash_file(path: &Path) -> Option<String> {
    match hash_file(path) {
        Ok(digest) => Some(digest),
        Err(e) => {
            debug!("Skipping file {}: {}", path.display(), e);
            None
        }
    }
}
