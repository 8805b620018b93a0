//! Content cache for page documents.
//!
//! `ContentCache` fetches a named document, memoizes it in the durable store
//! under `codeveda_<key>` for 24 hours, and falls back to the last stored
//! copy (even an expired one) when a fresh fetch fails.
//!
//! Stored entries have the shape `{ "data": <document>, "timestamp": <ms>,
//! "expires": <ms> }`.

pub mod entry;
pub mod error;
pub mod load_state;
pub mod service;

pub use entry::CacheEntry;
pub use error::CacheError;
pub use load_state::{Generation, LoadState, LoadTracker};
pub use service::{cache_key, CacheAges, CacheOptions, ContentCache, CACHE_PREFIX};
