use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::objkt::dto::Token;

/// A token saved into the personal collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CollectionEntry {
    #[serde(flatten)]
    pub token: Token,
    pub added_at: String,
}

/// Last search made for an address. Token contents are never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub count: usize,
}

pub type SearchHistory = BTreeMap<String, HistoryEntry>;
