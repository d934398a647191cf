use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::{objkt::dto::Token, storage::dto::CollectionEntry};

pub enum Endpoints {
    GetTokens,
    SavedData,
    Collection,
    CollectionAdd,
    CollectionRemove,
}

impl Endpoints {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoints::GetTokens => "/api/get-tokens",
            Endpoints::SavedData => "/api/saved-data",
            Endpoints::Collection => "/api/collection",
            Endpoints::CollectionAdd => "/api/collection/add",
            Endpoints::CollectionRemove => "/api/collection/remove",
        }
    }
}

impl fmt::Display for Endpoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct GetTokensRequest {
    /// Creator wallet address; surrounding whitespace is ignored. Missing
    /// and null both count as blank.
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct GetTokensResponse {
    pub success: bool,
    pub tokens: Vec<Token>,
    pub count: usize,
}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct CollectionResponse {
    pub collection: Vec<CollectionEntry>,
    pub count: usize,
}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct RemoveFromCollectionRequest {
    pub token_id: String,
}

/// Outcome of a collection add or remove
#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

impl From<Vec<Token>> for GetTokensResponse {
    fn from(tokens: Vec<Token>) -> Self {
        let count = tokens.len();
        GetTokensResponse {
            success: true,
            tokens,
            count,
        }
    }
}

impl From<Vec<CollectionEntry>> for CollectionResponse {
    fn from(collection: Vec<CollectionEntry>) -> Self {
        let count = collection.len();
        CollectionResponse { collection, count }
    }
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl ActionResponse {
    pub fn new(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
        }
    }
}
