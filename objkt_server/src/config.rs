use std::{env, time::Duration};

use anyhow::Context;
use objkt_core::objkt::client::{DEFAULT_TIMEOUT, OBJKT_GRAPHQL_ENDPOINT};

pub const DEFAULT_SERVER_DOMAIN: &str = "127.0.0.1:5000";
pub const DEFAULT_HISTORY_FILE: &str = "objkt_data.json";
pub const DEFAULT_COLLECTION_FILE: &str = "my_collection.json";

/// Server configuration, read from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to
    pub server_domain: String,

    /// objkt GraphQL endpoint
    pub graphql_url: String,

    /// Search history document
    pub history_file: String,

    /// Personal collection document
    pub collection_file: String,

    /// Upper bound on a single upstream request
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_domain: DEFAULT_SERVER_DOMAIN.to_string(),
            graphql_url: OBJKT_GRAPHQL_ENDPOINT.to_string(),
            history_file: DEFAULT_HISTORY_FILE.to_string(),
            collection_file: DEFAULT_COLLECTION_FILE.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(
                secs.trim()
                    .parse::<u64>()
                    .with_context(|| format!("REQUEST_TIMEOUT_SECS is not a number: `{secs}`"))?,
            ),
            None => defaults.request_timeout,
        };

        Ok(Self {
            server_domain: lookup("SERVER_DOMAIN").unwrap_or(defaults.server_domain),
            graphql_url: lookup("OBJKT_GRAPHQL_URL").unwrap_or(defaults.graphql_url),
            history_file: lookup("HISTORY_FILE").unwrap_or(defaults.history_file),
            collection_file: lookup("COLLECTION_FILE").unwrap_or(defaults.collection_file),
            request_timeout,
        })
    }
}
