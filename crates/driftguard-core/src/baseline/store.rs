//! Baseline file reader and writer

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::BaselineError;
use crate::snapshot::{FileRecord, Snapshot};

/// Separator between the relative path and the digest
pub const DELIMITER: u8 = b':';

const DIGEST_LEN: usize = 64;

/// Write a snapshot to `file_path`, replacing any existing file
///
/// # Errors
/// Returns `BaselineError::Write` if the file cannot be created or written.
pub fn write(snapshot: &Snapshot, file_path: &Path) -> Result<(), BaselineError> {
    let to_write_error = |source| BaselineError::Write {
        path: file_path.to_path_buf(),
        source,
    };

    let file = File::create(file_path).map_err(to_write_error)?;
    let mut writer = BufWriter::new(file);
    write_records(snapshot, &mut writer).map_err(to_write_error)?;
    writer.flush().map_err(to_write_error)?;

    debug!(
        "Wrote {} records to {}",
        snapshot.len(),
        file_path.display()
    );
    Ok(())
}

/// Serialize every record of a snapshot as `path:digest\n`
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_records<W: Write>(snapshot: &Snapshot, mut writer: W) -> io::Result<()> {
    for (path, digest) in snapshot.iter() {
        writer.write_all(path.as_os_str().as_encoded_bytes())?;
        writer.write_all(&[DELIMITER])?;
        writer.write_all(digest.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Read a baseline file back into a snapshot
///
/// Blank lines are ignored. Trailing whitespace and `\r` are stripped from
/// each line before it is split.
///
/// # Errors
/// Returns `BaselineError::NotFound` if the file does not exist,
/// `BaselineError::Unreadable` on other I/O errors and
/// `BaselineError::Malformed` for a line without a delimiter.
pub fn read(file_path: &Path) -> Result<Snapshot, BaselineError> {
    let file = File::open(file_path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => BaselineError::NotFound {
            path: file_path.to_path_buf(),
        },
        _ => BaselineError::Unreadable {
            path: file_path.to_path_buf(),
            source,
        },
    })?;

    let mut snapshot = Snapshot::new();
    for (index, line) in BufReader::new(file).split(b'\n').enumerate() {
        let line = line.map_err(|source| BaselineError::Unreadable {
            path: file_path.to_path_buf(),
            source,
        })?;
        let line = line.trim_ascii_end();
        if line.is_empty() {
            continue;
        }

        let record = parse_bytes(line).ok_or_else(|| BaselineError::Malformed {
            path: file_path.to_path_buf(),
            line: index + 1,
        })?;
        if !is_well_formed_digest(&record.digest) {
            warn!(
                "Baseline line {} for {} has an unexpected digest '{}'",
                index + 1,
                record.relative_path.display(),
                record.digest
            );
        }
        snapshot.insert(record);
    }

    debug!("Read {} records from {}", snapshot.len(), file_path.display());
    Ok(snapshot)
}

/// Parse a single `path:digest` line
///
/// Digests never contain the delimiter, so the line is split on its last
/// occurrence and any `:` inside the path is kept.
#[must_use]
pub fn parse_line(line: &str) -> Option<FileRecord> {
    parse_bytes(line.as_bytes())
}

fn parse_bytes(line: &[u8]) -> Option<FileRecord> {
    let split = line.iter().rposition(|&b| b == DELIMITER)?;
    let path = path_from_bytes(&line[..split])?;
    let digest = std::str::from_utf8(&line[split + 1..]).ok()?;
    Some(FileRecord::new(path, digest))
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> Option<PathBuf> {
    use std::os::unix::ffi::OsStrExt;

    Some(PathBuf::from(std::ffi::OsStr::from_bytes(bytes)))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> Option<PathBuf> {
    std::str::from_utf8(bytes).ok().map(PathBuf::from)
}

fn is_well_formed_digest(digest: &str) -> bool {
    digest.len() == DIGEST_LEN && digest.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
