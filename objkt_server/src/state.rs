use objkt_core::{
    error::ObjktError,
    objkt::client::ObjktClient,
    storage::{backend::FileBackend, collection::CollectionStore, history::HistoryStore},
};

use crate::config::Config;

pub struct ServerState {
    objkt: ObjktClient,
    history: HistoryStore,
    collection: CollectionStore,
}

impl From<(ObjktClient, HistoryStore, CollectionStore)> for ServerState {
    fn from(states: (ObjktClient, HistoryStore, CollectionStore)) -> Self {
        let (objkt, history, collection) = states;
        Self {
            objkt,
            history,
            collection,
        }
    }
}

impl TryFrom<&Config> for ServerState {
    type Error = ObjktError;

    fn try_from(config: &Config) -> Result<Self, Self::Error> {
        let objkt = ObjktClient::new(config.graphql_url.clone(), config.request_timeout)?;
        let history = HistoryStore::new(FileBackend::new(&config.history_file));
        let collection = CollectionStore::new(FileBackend::new(&config.collection_file));

        Ok(Self::from((objkt, history, collection)))
    }
}

impl ServerState {
    pub fn objkt(&self) -> &ObjktClient {
        &self.objkt
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn collection(&self) -> &CollectionStore {
        &self.collection
    }
}
