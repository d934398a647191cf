use log::{debug, info};

use super::{
    backend::{load_json, save_json, DocumentBackend},
    dto::CollectionEntry,
};
use crate::{error::StorageError, helpers::utils::now_iso, objkt::dto::Token};

/// Ordered list of saved tokens, unique by `token_id`
pub struct CollectionStore {
    backend: Box<dyn DocumentBackend>,
}

impl CollectionStore {
    pub fn new(backend: impl DocumentBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Full collection in insertion order, empty when nothing was saved yet
    pub fn load(&self) -> Result<Vec<CollectionEntry>, StorageError> {
        load_json(self.backend.as_ref())
    }

    /// Appends `token` stamped with the current time. Returns `false` and
    /// leaves the document alone when the token id is already present.
    pub fn add(&self, token: Token) -> Result<bool, StorageError> {
        self.add_at(token, now_iso())
    }

    pub fn add_at(&self, token: Token, added_at: String) -> Result<bool, StorageError> {
        let mut collection = self.load()?;

        if collection
            .iter()
            .any(|entry| entry.token.token_id == token.token_id)
        {
            debug!("Token {} already in collection", token.token_id);
            return Ok(false);
        }

        info!("Adding token {} to collection", token.token_id);
        collection.push(CollectionEntry { token, added_at });
        save_json(self.backend.as_ref(), &collection)?;

        Ok(true)
    }

    /// Drops every entry with `token_id`. The document is only rewritten
    /// when something was removed.
    pub fn remove(&self, token_id: &str) -> Result<bool, StorageError> {
        let mut collection = self.load()?;
        let original_len = collection.len();

        collection.retain(|entry| entry.token.token_id != token_id);

        if collection.len() == original_len {
            debug!("Token {token_id} not in collection");
            return Ok(false);
        }

        info!("Removing token {token_id} from collection");
        save_json(self.backend.as_ref(), &collection)?;

        Ok(true)
    }
}
