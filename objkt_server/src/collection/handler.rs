use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use log::error;
use objkt_core::{
    helpers::dto::{ActionResponse, CollectionResponse, ErrorResponse, RemoveFromCollectionRequest},
    objkt::dto::Token,
};

use crate::{extract::ApiJson, state::ServerState};

#[utoipa::path(
    get,
    path = "/api/collection",
    description = "Personal collection",
    responses(
        (status = 200, description = "Saved tokens in insertion order", body = CollectionResponse),
    )
)]
pub async fn get_collection(State(server_state): State<Arc<ServerState>>) -> Response {
    match server_state.collection().load() {
        Ok(collection) => Json(CollectionResponse::from(collection)).into_response(),
        Err(e) => {
            error!("Could not read collection: {e}");
            Json(ErrorResponse::new(e.to_string())).into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/collection/add",
    request_body = Token,
    description = "Add a token to the personal collection",
    responses(
        (status = 200, description = "Whether the token was added", body = ActionResponse),
    )
)]
pub async fn add_to_collection(
    State(server_state): State<Arc<ServerState>>,
    ApiJson(token): ApiJson<Token>,
) -> Json<ActionResponse> {
    let response = match server_state.collection().add(token) {
        Ok(true) => ActionResponse::new(true, "Added to your collection"),
        Ok(false) => ActionResponse::new(false, "Already in your collection"),
        Err(e) => {
            error!("Could not add to collection: {e}");
            ActionResponse::new(false, e.to_string())
        }
    };

    Json(response)
}

#[utoipa::path(
    post,
    path = "/api/collection/remove",
    request_body = RemoveFromCollectionRequest,
    description = "Remove a token from the personal collection",
    responses(
        (status = 200, description = "Whether the token was removed", body = ActionResponse),
    )
)]
pub async fn remove_from_collection(
    State(server_state): State<Arc<ServerState>>,
    ApiJson(request): ApiJson<RemoveFromCollectionRequest>,
) -> Json<ActionResponse> {
    let response = match server_state.collection().remove(&request.token_id) {
        Ok(true) => ActionResponse::new(true, "Removed from your collection"),
        Ok(false) => ActionResponse::new(false, "Not found in your collection"),
        Err(e) => {
            error!("Could not remove from collection: {e}");
            ActionResponse::new(false, e.to_string())
        }
    };

    Json(response)
}
