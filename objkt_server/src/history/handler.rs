use std::{collections::BTreeMap, sync::Arc};

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use log::error;
use objkt_core::{helpers::dto::ErrorResponse, storage::dto::HistoryEntry};

use crate::state::ServerState;

#[utoipa::path(
    get,
    path = "/api/saved-data",
    description = "Last search timestamp and token count for every searched address",
    responses(
        (status = 200, description = "Address to last search", body = BTreeMap<String, HistoryEntry>),
    )
)]
pub async fn saved_data(State(server_state): State<Arc<ServerState>>) -> Response {
    match server_state.history().load() {
        Ok(history) => Json(history).into_response(),
        Err(e) => {
            error!("Could not read search history: {e}");
            Json(ErrorResponse::new(e.to_string())).into_response()
        }
    }
}
