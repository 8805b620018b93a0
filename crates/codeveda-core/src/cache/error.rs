use thiserror::Error;

use crate::api::FetchError;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Invalid content key: {0:?}")]
    InvalidKey(String),

    /// Neither a fresh fetch nor any stored copy could satisfy the request.
    #[error("No data available for {key}: {source}")]
    Unavailable {
        key: String,
        #[source]
        source: FetchError,
    },

    #[error("Document {key} does not match its schema: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
