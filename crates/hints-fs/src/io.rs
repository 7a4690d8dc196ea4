//! Atomic writes and best-effort moves

use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::{Error, Result};

/// Read a whole file into memory.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::io(path, e))
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so readers never observe a partial file.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Same directory keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed { path: path.to_path_buf() })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;
    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .unlock()
        .map_err(|_| Error::LockFailed { path: path.to_path_buf() })?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        Error::io(path, e)
    })
}

/// Move a file, never replacing an existing destination.
///
/// Falls back to copy-then-delete when a plain rename is not possible
/// (e.g. source and destination live on different filesystems).
pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    if to.exists() {
        return Err(Error::AlreadyExists { path: to.to_path_buf() });
    }

    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            tracing::debug!(?from, ?to, error = %rename_err, "rename failed, copying instead");
            let content = read_bytes(from)?;
            write_atomic(to, &content)?;
            fs::remove_file(from).map_err(|e| Error::io(from, e))
        }
    }
}
