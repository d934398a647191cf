use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, info};
use objkt_core::helpers::{
    dto::{ErrorResponse, GetTokensRequest, GetTokensResponse},
    utils::now_iso,
};

use crate::{extract::ApiJson, state::ServerState};

#[utoipa::path(
    post,
    path = "/api/get-tokens",
    request_body = GetTokensRequest,
    description = "Fetch the tokens created by a wallet address",
    responses(
        (status = 200, description = "Normalized tokens, or an inline upstream/storage error", body = GetTokensResponse),
        (status = 400, description = "Address required", body = ErrorResponse),
    )
)]
pub async fn get_tokens(
    State(server_state): State<Arc<ServerState>>,
    ApiJson(request): ApiJson<GetTokensRequest>,
) -> Response {
    let address = request.address.as_deref().unwrap_or_default().trim();

    if address.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Address required")),
        )
            .into_response();
    }

    info!("Fetching tokens created by {address}");

    let tokens = match server_state.objkt().fetch_tokens(address).await {
        Ok(tokens) => tokens,
        Err(e) => {
            error!("Token query for {address} failed: {e}");
            return Json(ErrorResponse::new(e.to_string())).into_response();
        }
    };

    if let Err(e) = server_state
        .history()
        .save(address, now_iso(), tokens.len())
    {
        error!("Could not record search for {address}: {e}");
        return Json(ErrorResponse::new(e.to_string())).into_response();
    }

    Json(GetTokensResponse::from(tokens)).into_response()
}
