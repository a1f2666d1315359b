//! Directory-backed key/value store.
//!
//! Each key maps to one file inside the data directory. Keys are sanitized
//! into file names (`@reps_templates` becomes `reps_templates.json`), and
//! every write goes through a temp file plus rename.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{RepsError, Result};
use crate::fs::write_atomic;
use crate::storage::traits::KeyValueStore;

/// Key/value store persisting one JSON file per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns `RepsError::Storage` if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            RepsError::Storage(format!(
                "Failed to create data directory {}: {}",
                root.display(),
                e
            ))
        })?;
        Ok(Self { root })
    }

    /// Directory holding the key files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let name: String = key
            .trim_start_matches('@')
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        if name.is_empty() {
            return Err(RepsError::InvalidInput(format!(
                "Key \"{}\" has no usable characters",
                key
            )));
        }
        Ok(self.root.join(format!("{}.json", name)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(RepsError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        write_atomic(&path, value.as_bytes()).map_err(|e| {
            RepsError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(RepsError::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                err
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_key_sanitized_to_file_name() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        let path = store.path_for("@reps_movement_sessions").unwrap();
        assert_eq!(path, dir.path().join("reps_movement_sessions.json"));

        let odd = store.path_for("a/b c").unwrap();
        assert_eq!(odd, dir.path().join("a_b_c.json"));
    }

    #[test]
    fn test_empty_key_rejected() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.path_for("@").is_err());
    }

    #[test]
    fn test_open_creates_nested_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(store.root(), nested.as_path());
    }
}
