use std::time::Duration;

use log::{debug, info};
use reqwest::Client;

use super::{
    dto::{AddressVariables, GraphQlRequest, GraphQlResponse, RawToken, Token},
    normalize::normalize_token,
};
use crate::error::ObjktError;

pub const OBJKT_GRAPHQL_ENDPOINT: &str = "https://data.objkt.com/v3/graphql";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound on tokens returned per address; there is no pagination.
pub const TOKEN_LIMIT: usize = 500;

const ARTIST_TOKENS_QUERY: &str = r#"
query GetArtistTokens($address: String!) {
  token(where: {creators: {creator_address: {_eq: $address}}}, order_by: {timestamp: desc}, limit: 500) {
    token_id
    name
    description
    supply
    display_uri
    thumbnail_uri
    artifact_uri
    mime
    timestamp
    fa_contract
    listings(where: {status: {_eq: "active"}}, order_by: {price: asc}, limit: 1) {
      price
      currency {
        symbol
        decimals
      }
    }
  }
}
"#;

/// Client for the objkt.com GraphQL API
#[derive(Clone, Debug)]
pub struct ObjktClient {
    http: Client,
    endpoint: String,
}

impl ObjktClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ObjktError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Queries the newest tokens created by `address`, each carrying at most
    /// its cheapest active listing. One request, no retries.
    pub async fn artist_tokens(&self, address: &str) -> Result<Vec<RawToken>, ObjktError> {
        let body = GraphQlRequest {
            query: ARTIST_TOKENS_QUERY,
            variables: AddressVariables { address },
        };

        let res = self.http.post(&self.endpoint).json(&body).send().await?;
        info!(target: "objkt", "Status: {}", res.status());

        let text = res.error_for_status()?.text().await?;
        debug!(target: "objkt", "Body:\n{text}");

        let response: GraphQlResponse =
            serde_json::from_str(&text).map_err(|e| ObjktError::Unexpected(e.to_string()))?;

        if let Some(errors) = response.errors {
            return Err(ObjktError::Api(errors.to_string()));
        }

        Ok(response
            .data
            .and_then(|data| data.token)
            .unwrap_or_default())
    }

    /// [`Self::artist_tokens`] followed by normalization of every token.
    pub async fn fetch_tokens(&self, address: &str) -> Result<Vec<Token>, ObjktError> {
        let raw_tokens = self.artist_tokens(address).await?;
        info!(target: "objkt", "Fetched {} tokens for {address}", raw_tokens.len());

        Ok(raw_tokens.iter().map(normalize_token).collect())
    }
}
