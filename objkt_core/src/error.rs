/// Failures raised while querying the objkt GraphQL API
#[derive(Debug, thiserror::Error)]
pub enum ObjktError {
    #[error("Connection error: {0}")]
    Connection(#[from] reqwest::Error),

    #[error("{0}")]
    Api(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Failures raised by the JSON document stores
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage failure: {0}")]
    Serde(#[from] serde_json::Error),
}
