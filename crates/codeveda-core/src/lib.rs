//! Core library for codeveda.
//!
//! Codeveda is a coding-education portal whose pages render static JSON
//! content documents. This crate holds everything below the presentation
//! layer:
//!
//! - `store`: the durable key-value store (`MemoryStore`, `FileStore`)
//! - `api`: document retrieval over HTTP or from a local directory
//! - `cache`: the TTL content cache with stale fallback
//! - `progress`: per-problem completed/starred flags for the DSA tracker
//! - `models`: typed schemas for each page's document plus query helpers
//! - `config`: user configuration and store location

pub mod api;
pub mod cache;
pub mod clock;
pub mod config;
pub mod models;
pub mod progress;
pub mod store;
pub mod utils;

pub use cache::{CacheError, ContentCache};
pub use progress::ProgressTracker;
pub use store::{DurableStore, SharedStore};
