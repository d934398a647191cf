use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use objkt_core::{
    objkt::client::ObjktClient,
    storage::{
        backend::MemoryBackend, collection::CollectionStore, history::HistoryStore,
    },
};
use serde_json::Value;
use tower::ServiceExt;
use wiremock::MockServer;

use crate::{router::router, state::ServerState};

/// Router wired to a mock upstream and in-memory documents
pub struct TestApp {
    pub router: Router,
    pub state: Arc<ServerState>,
    pub history: Arc<MemoryBackend>,
    pub collection: Arc<MemoryBackend>,
}

impl TestApp {
    pub fn new(upstream: &MockServer) -> Self {
        Self::with_documents(upstream, None, None)
    }

    pub fn with_documents(
        upstream: &MockServer,
        history: Option<&str>,
        collection: Option<&str>,
    ) -> Self {
        let history = Arc::new(history.map_or_else(MemoryBackend::new, MemoryBackend::with_contents));
        let collection =
            Arc::new(collection.map_or_else(MemoryBackend::new, MemoryBackend::with_contents));

        let objkt = ObjktClient::new(
            format!("{}/v3/graphql", upstream.uri()),
            Duration::from_secs(5),
        )
        .unwrap();

        let state = Arc::new(ServerState::from((
            objkt,
            HistoryStore::new(history.clone()),
            CollectionStore::new(collection.clone()),
        )));

        Self {
            router: router(state.clone()),
            state,
            history,
            collection,
        }
    }
}

pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

pub async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let payload = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, payload)
}
