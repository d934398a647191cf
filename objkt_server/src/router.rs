use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use objkt_core::helpers::dto::Endpoints;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use crate::{
    collection::handler::{add_to_collection, get_collection, remove_from_collection},
    docs::{dto::ApiDoc, handler::api_docs},
    history::handler::saved_data,
    state::ServerState,
    tokens::handler::get_tokens,
};

pub fn router(state: Arc<ServerState>) -> Router {
    let doc = ApiDoc::openapi();

    Router::new()
        .merge(Redoc::with_url("/redoc", doc))
        .route(Endpoints::GetTokens.path(), post(get_tokens))
        .route(Endpoints::SavedData.path(), get(saved_data))
        .route(Endpoints::Collection.path(), get(get_collection))
        .route(Endpoints::CollectionAdd.path(), post(add_to_collection))
        .route(Endpoints::CollectionRemove.path(), post(remove_from_collection))
        .route("/docs", get(api_docs))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
