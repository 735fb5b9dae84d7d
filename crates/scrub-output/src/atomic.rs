//! Write-then-rename file replacement.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{OutputError, Result};

/// Writes `bytes` to `path` through a sibling temp file.
///
/// Either the complete contents end up at `path` or `path` is left as it was.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let temp_path = temp_path_for(path);

    if let Err(err) = write_synced(&temp_path, bytes) {
        discard_temp(&temp_path);
        return Err(err);
    }

    if let Err(source) = fs::rename(&temp_path, path) {
        discard_temp(&temp_path);
        return Err(OutputError::AtomicWriteFailed {
            temp_path,
            target_path: path.to_path_buf(),
            source,
        });
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote file");
    Ok(())
}

fn discard_temp(temp_path: &Path) {
    if let Err(err) = fs::remove_file(temp_path) {
        if err.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(path = %temp_path.display(), error = %err, "Could not remove temp file");
        }
    }
}

fn write_synced(temp_path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file =
        File::create(temp_path).map_err(|e| OutputError::io("create", temp_path, e))?;
    file.write_all(bytes)
        .map_err(|e| OutputError::io("write", temp_path, e))?;
    file.sync_all()
        .map_err(|e| OutputError::io("sync", temp_path, e))?;
    Ok(())
}

/// `contacts_edited.csv` becomes `contacts_edited.csv.tmp`.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(|| OsString::from("output"), OsString::from);
    name.push(".tmp");
    path.with_file_name(name)
}
