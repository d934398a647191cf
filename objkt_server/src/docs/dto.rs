use crate::{collection, error::ErrorServer, history, tokens};
use objkt_core::{
    helpers::dto::{
        ActionResponse, CollectionResponse, ErrorResponse, GetTokensRequest, GetTokensResponse,
        RemoveFromCollectionRequest,
    },
    objkt::dto::Token,
    storage::dto::{CollectionEntry, HistoryEntry},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        tokens::handler::get_tokens,
        history::handler::saved_data,
        collection::handler::get_collection,
        collection::handler::add_to_collection,
        collection::handler::remove_from_collection,
    ),
    components(
        schemas(
            Token,
            CollectionEntry,
            HistoryEntry,
            GetTokensRequest,
            GetTokensResponse,
            ErrorResponse,
            CollectionResponse,
            RemoveFromCollectionRequest,
            ActionResponse
        ),
        responses(ErrorServer)
    )
)]
pub struct ApiDoc;
