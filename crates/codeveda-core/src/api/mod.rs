//! Content document retrieval.
//!
//! Every page document lives at a location derived from its key:
//! `<base>/<key>.json`. `HttpFetcher` retrieves it from the deployed site,
//! `DirFetcher` reads it from a local checkout of the site's data directory.

pub mod client;
pub mod error;
pub mod local;

use async_trait::async_trait;
use serde_json::Value;

pub use client::HttpFetcher;
pub use error::FetchError;
pub use local::DirFetcher;

/// Network side of the content cache: one request per call, no caching.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Retrieve and parse the document for `key`.
    ///
    /// Any non-success status and any body that is not valid JSON is an error.
    async fn fetch_document(&self, key: &str) -> Result<Value, FetchError>;
}
