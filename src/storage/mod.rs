//! Persistence for the player record
//!
//! The record is a single JSON document rewritten wholesale after every
//! mutation. Two backends are provided:
//!
//! - [`JsonFileStore`]: `progress.json` in the data directory, written
//!   atomically under an exclusive file lock
//! - [`MemoryStore`]: shared in-process text, for tests and throwaway sessions
//!
//! Concurrent sessions do not merge: the last completed write wins.

mod file;
mod memory;

pub use file::{JsonFileStore, STORAGE_FILE};
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::game::PlayerRecord;

/// Error type for record storage
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Stored record is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("Failed to serialize record: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Where the player record lives
pub trait RecordStore {
    /// Read the stored record. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<PlayerRecord>, StorageError>;

    /// Replace the stored record
    fn save(&self, record: &PlayerRecord) -> Result<(), StorageError>;

    /// Remove the stored record entirely
    fn clear(&self) -> Result<(), StorageError>;
}

pub(crate) fn decode(text: &str) -> Result<PlayerRecord, StorageError> {
    serde_json::from_str(text).map_err(StorageError::Corrupt)
}

pub(crate) fn encode(record: &PlayerRecord) -> Result<String, StorageError> {
    serde_json::to_string_pretty(record).map_err(StorageError::Encode)
}
