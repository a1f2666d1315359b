//! Filesystem utilities for atomic writes.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Move a finished temp file over `destination`.
///
/// When the first rename fails (Windows refuses to replace an existing
/// file), the old blob is removed and the rename tried once more. If that
/// also fails the temp file is deleted, so a failed write leaves the
/// previous blob or nothing, never a stray `.tmp` next to it.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Could not replace {} (first try: {}, retry: {})",
                    destination.display(),
                    initial_err,
                    retry_err
                ),
            )
        })?;
    }
    Ok(())
}

/// Write `contents` to `destination` through a sibling temp file.
///
/// Readers never observe a half-written file: they see either the previous
/// contents or the new ones.
pub fn write_atomic(destination: &Path, contents: &[u8]) -> io::Result<()> {
    let file_name = destination
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Not a file path: {}", destination.display()),
            )
        })?;
    let temp_path = destination.with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()));

    let mut file = fs::File::create(&temp_path)?;
    if let Err(err) = file.write_all(contents).and_then(|_| file.sync_all()) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    drop(file);

    rename_with_fallback(&temp_path, destination)
}
