//! JSON file backend

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::{RecordStore, StorageError, decode, encode};
use crate::game::PlayerRecord;

/// File name of the record inside the data directory
pub const STORAGE_FILE: &str = "progress.json";

/// Record stored as pretty-printed JSON on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store at an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data_dir>/progress.json`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(STORAGE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Exclusive lock on a sibling `.lock` file (kept separate so renames don't drop it).
    /// Released when the returned file is dropped.
    fn lock(&self) -> Result<File, StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }

        let lock_path = self.path.with_extension("json.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| StorageError::io(&lock_path, e))?;

        lock_file
            .lock_exclusive()
            .map_err(|e| StorageError::io(&lock_path, e))?;

        Ok(lock_file)
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Result<Option<PlayerRecord>, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };

        decode(&text).map(Some)
    }

    fn save(&self, record: &PlayerRecord) -> Result<(), StorageError> {
        let content = encode(record)?;
        let _lock = self.lock()?;

        // Write to temp file first (atomic write pattern)
        let temp_path = self.path.with_extension("json.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| StorageError::io(&temp_path, e))?;

        temp_file
            .write_all(content.as_bytes())
            .and_then(|_| temp_file.sync_all())
            .map_err(|e| StorageError::io(&temp_path, e))?;

        fs::rename(&temp_path, &self.path).map_err(|e| StorageError::io(&self.path, e))?;

        tracing::debug!("Saved player record to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let _lock = self.lock()?;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(&self.path, e)),
        }
    }
}
