use log::info;

use super::{
    backend::{load_json, save_json, DocumentBackend},
    dto::{HistoryEntry, SearchHistory},
};
use crate::error::StorageError;

/// Per-address record of the last search: when it ran and how many tokens
/// came back.
pub struct HistoryStore {
    backend: Box<dyn DocumentBackend>,
}

impl HistoryStore {
    pub fn new(backend: impl DocumentBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    pub fn load(&self) -> Result<SearchHistory, StorageError> {
        load_json(self.backend.as_ref())
    }

    /// Upserts the entry for `address` and rewrites the whole document.
    pub fn save(&self, address: &str, timestamp: String, count: usize) -> Result<(), StorageError> {
        let mut history = self.load()?;
        history.insert(address.to_string(), HistoryEntry { timestamp, count });
        save_json(self.backend.as_ref(), &history)?;

        info!("Recorded search for {address}: {count} tokens");
        Ok(())
    }
}
