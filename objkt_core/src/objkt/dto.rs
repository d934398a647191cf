use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use utoipa::ToSchema;

/// Body posted to the GraphQL endpoint
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: AddressVariables<'a>,
}

#[derive(Debug, Serialize)]
pub struct AddressVariables<'a> {
    pub address: &'a str,
}

/// Envelope returned by the GraphQL endpoint
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    pub data: Option<TokensData>,
    pub errors: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct TokensData {
    pub token: Option<Vec<RawToken>>,
}

/// A token as it appears in the `token` query result
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawToken {
    pub token_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub supply: Option<Number>,
    pub display_uri: Option<String>,
    pub thumbnail_uri: Option<String>,
    pub artifact_uri: Option<String>,
    pub mime: Option<String>,
    pub timestamp: Option<String>,
    pub fa_contract: Option<String>,
    pub listings: Option<Vec<RawListing>>,
}

/// Active listing attached to a token, cheapest first
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawListing {
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<Number>,
    pub currency: Option<RawCurrency>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCurrency {
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub decimals: Option<Number>,
}

/// Display-ready token returned to clients and stored in the collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Token {
    pub token_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub supply: Option<u64>,
    #[serde(default)]
    pub mime: Option<String>,
    #[serde(default)]
    pub asset_url: String,
    #[serde(default)]
    pub thumbnail_url: String,
    /// Lowest active listing as `"<amount> <symbol>"`
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub objkt_url: String,
}

// bigint columns come back either as JSON numbers or as numeric strings
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<Number>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => Ok(Some(number)),
        Some(Value::String(text)) => text
            .trim()
            .parse::<Number>()
            .map(Some)
            .map_err(de::Error::custom),
        Some(other) => Err(de::Error::custom(format!(
            "expected a number or numeric string, found `{other}`"
        ))),
    }
}
