//! In-memory backend

use std::sync::{Arc, Mutex};

use super::{RecordStore, StorageError, decode, encode};
use crate::game::PlayerRecord;

/// Record held as JSON text in memory. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with raw text (which may not be valid JSON)
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(text.into()))),
        }
    }

    /// Raw stored text, if any
    pub fn contents(&self) -> Option<String> {
        self.slot.lock().expect("memory store lock").clone()
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Result<Option<PlayerRecord>, StorageError> {
        self.contents().as_deref().map(decode).transpose()
    }

    fn save(&self, record: &PlayerRecord) -> Result<(), StorageError> {
        let text = encode(record)?;
        *self.slot.lock().expect("memory store lock") = Some(text);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot.lock().expect("memory store lock") = None;
        Ok(())
    }
}
