//! Durable key-value storage.
//!
//! The content cache and the progress tracker both persist through the
//! `DurableStore` trait, a string-to-string map modelled on browser local
//! storage. Two backends are provided:
//!
//! - `MemoryStore`: process-local, with an optional byte quota
//! - `FileStore`: one JSON file per key under a directory

pub mod error;
pub mod file;
pub mod memory;

use std::sync::Arc;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Keys become file names and URL path segments, so only a conservative
/// alphabet is allowed: ASCII alphanumerics plus `_`, `-` and `.`, not
/// starting with a dot.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// A per-origin string store shared by every component of the site.
///
/// Implementations must tolerate independent callers mutating disjoint keys;
/// no transaction spans more than one call.
pub trait DurableStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;

    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

/// Store handle shared between the content cache and the progress tracker.
pub type SharedStore = Arc<dyn DurableStore>;
