use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Duration;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::{CacheEntry, CacheError};
use crate::api::DocumentFetcher;
use crate::clock::Clock;
use crate::models::{
    BlogPost, BlogsDocument, ContactDocument, ContentKey, DsaSheet, HomeDocument,
    ProjectsDocument, ResourcesDocument, RoadmapsDocument,
};
use crate::store::{is_valid_key, SharedStore};

/// Namespace for every store entry owned by the content cache.
pub const CACHE_PREFIX: &str = "codeveda_";

/// Documents are considered fresh for a day.
pub const DEFAULT_TTL_HOURS: i64 = 24;

pub fn cache_key(key: &str) -> String {
    format!("{}{}", CACHE_PREFIX, key)
}

#[derive(Debug, Clone)]
pub struct CacheOptions {
    pub ttl: Duration,
    /// Serialize concurrent fetches of the same key so one request serves all
    /// waiters. When off, racing callers each fetch and the last write wins.
    pub dedupe_in_flight: bool,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self {
            ttl: Duration::hours(DEFAULT_TTL_HOURS),
            dedupe_in_flight: true,
        }
    }
}

impl CacheOptions {
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_dedupe(mut self, enabled: bool) -> Self {
        self.dedupe_in_flight = enabled;
        self
    }
}

/// Result of consulting the store for a key.
enum Lookup {
    Fresh(Value),
    /// Expired entry, already removed from the store. Kept in hand as the
    /// fallback if the refetch fails.
    Expired(CacheEntry),
    Missing,
}

type KeyLock = Arc<tokio::sync::Mutex<()>>;

/// An expired entry evicted from the store while its refresh is in flight.
///
/// If the refresh future is dropped before reaching a result, the entry is
/// written back on drop so the last known copy survives as a fallback.
struct ExpiredCopy<'a> {
    cache: &'a ContentCache,
    storage_key: &'a str,
    entry: Option<CacheEntry>,
}

impl ExpiredCopy<'_> {
    fn disarm(&mut self) {
        self.entry = None;
    }
}

impl Drop for ExpiredCopy<'_> {
    fn drop(&mut self) {
        let Some(entry) = self.entry.take() else {
            return;
        };
        // Never clobber a copy written in the meantime.
        if self.cache.read_entry(self.storage_key).is_none() {
            debug!(key = %self.storage_key, "Restoring expired entry after abandoned refresh");
            self.cache.write_entry(self.storage_key, &entry);
        }
    }
}

/// TTL cache over a `DocumentFetcher`, persisted in a `DurableStore`.
pub struct ContentCache {
    store: SharedStore,
    fetcher: Arc<dyn DocumentFetcher>,
    clock: Arc<dyn Clock>,
    options: CacheOptions,
    in_flight: Mutex<HashMap<String, KeyLock>>,
}

impl ContentCache {
    pub fn new(
        store: SharedStore,
        fetcher: Arc<dyn DocumentFetcher>,
        clock: Arc<dyn Clock>,
        options: CacheOptions,
    ) -> Self {
        Self {
            store,
            fetcher,
            clock,
            options,
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    pub fn options(&self) -> &CacheOptions {
        &self.options
    }

    /// Return the document for `key`, from the store if fresh, otherwise from
    /// the fetcher. A failed fetch falls back to any stored copy regardless of
    /// age; only when there is none does the call fail.
    pub async fn fetch_data(&self, key: &str) -> Result<Value, CacheError> {
        if !is_valid_key(key) {
            return Err(CacheError::InvalidKey(key.to_string()));
        }
        let storage_key = cache_key(key);

        let evicted = match self.lookup(&storage_key) {
            Lookup::Fresh(data) => {
                debug!(key = %key, "Cache hit");
                return Ok(data);
            }
            Lookup::Expired(entry) => Some(entry),
            Lookup::Missing => None,
        };
        let mut expired = ExpiredCopy {
            cache: self,
            storage_key: &storage_key,
            entry: evicted,
        };

        if !self.options.dedupe_in_flight {
            return self.refresh(key, &storage_key, &mut expired).await;
        }

        let lock = self.key_lock(key);
        let result = {
            let _guard = lock.lock().await;
            // Whoever held the lock before us may have stored a fresh copy.
            match self.lookup(&storage_key) {
                Lookup::Fresh(data) => {
                    debug!(key = %key, "Cache filled by concurrent fetch");
                    expired.disarm();
                    Ok(data)
                }
                Lookup::Expired(entry) => {
                    expired.entry = Some(entry);
                    self.refresh(key, &storage_key, &mut expired).await
                }
                Lookup::Missing => self.refresh(key, &storage_key, &mut expired).await,
            }
        };
        self.release_key_lock(key, &lock);
        result
    }

    /// `fetch_data` decoded into a page schema.
    pub async fn fetch_document<T: DeserializeOwned>(&self, key: &str) -> Result<T, CacheError> {
        let data = self.fetch_data(key).await?;
        serde_json::from_value(data).map_err(|source| CacheError::Decode {
            key: key.to_string(),
            source,
        })
    }

    /// Remove every entry under `CACHE_PREFIX`, leaving other keys alone.
    pub fn clear_cache(&self) {
        let keys = match self.store.keys() {
            Ok(keys) => keys,
            Err(e) => {
                warn!(error = %e, "Failed to list store keys while clearing cache");
                return;
            }
        };

        for key in keys.iter().filter(|k| k.starts_with(CACHE_PREFIX)) {
            if let Err(e) = self.store.remove_item(key) {
                warn!(key = %key, error = %e, "Failed to remove cache entry");
            }
        }
    }

    /// Peek at the stored entry without touching the network or evicting it.
    pub fn cached_entry(&self, key: &str) -> Option<CacheEntry> {
        self.read_entry(&cache_key(key))
    }

    pub fn cache_ages(&self) -> CacheAges {
        let now = self.clock.now_millis();
        let ages = ContentKey::ALL
            .iter()
            .map(|&key| {
                let age = self
                    .cached_entry(key.as_str())
                    .map(|entry| (entry.age_minutes(now), entry.age_display(now)));
                (key, age)
            })
            .collect();
        CacheAges { ages }
    }

    // ===== Page documents =====

    pub async fn home(&self) -> Result<HomeDocument, CacheError> {
        self.fetch_document(ContentKey::Home.as_str()).await
    }

    pub async fn dsa(&self) -> Result<DsaSheet, CacheError> {
        self.fetch_document(ContentKey::Dsa.as_str()).await
    }

    pub async fn blogs(&self) -> Result<BlogsDocument, CacheError> {
        self.fetch_document(ContentKey::Blogs.as_str()).await
    }

    pub async fn get_blog_posts(&self) -> Result<Vec<BlogPost>, CacheError> {
        Ok(self.blogs().await?.posts)
    }

    pub async fn resources(&self) -> Result<ResourcesDocument, CacheError> {
        self.fetch_document(ContentKey::Resources.as_str()).await
    }

    pub async fn projects(&self) -> Result<ProjectsDocument, CacheError> {
        self.fetch_document(ContentKey::Projects.as_str()).await
    }

    pub async fn roadmaps(&self) -> Result<RoadmapsDocument, CacheError> {
        self.fetch_document(ContentKey::Roadmaps.as_str()).await
    }

    pub async fn contact(&self) -> Result<ContactDocument, CacheError> {
        self.fetch_document(ContentKey::Contact.as_str()).await
    }

    // ===== Internals =====

    fn lookup(&self, storage_key: &str) -> Lookup {
        let Some(entry) = self.read_entry(storage_key) else {
            return Lookup::Missing;
        };

        if !entry.is_expired(self.clock.now_millis()) {
            return Lookup::Fresh(entry.data);
        }

        debug!(key = %storage_key, expires = entry.expires, "Removing expired cache entry");
        if let Err(e) = self.store.remove_item(storage_key) {
            warn!(key = %storage_key, error = %e, "Failed to remove expired cache entry");
        }
        Lookup::Expired(entry)
    }

    /// Read and parse a stored entry. Unreadable or corrupt blobs count as absent.
    fn read_entry(&self, storage_key: &str) -> Option<CacheEntry> {
        let raw = match self.store.get_item(storage_key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(key = %storage_key, error = %e, "Failed to read cache entry");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!(key = %storage_key, error = %e, "Ignoring corrupt cache entry");
                None
            }
        }
    }

    /// Write failures are logged; the caller still gets its data.
    fn write_entry(&self, storage_key: &str, entry: &CacheEntry) {
        let serialized = match serde_json::to_string(entry) {
            Ok(s) => s,
            Err(e) => {
                warn!(key = %storage_key, error = %e, "Failed to serialize cache entry");
                return;
            }
        };

        if let Err(e) = self.store.set_item(storage_key, &serialized) {
            warn!(key = %storage_key, error = %e, "Failed to save to durable store");
        }
    }

    async fn refresh(
        &self,
        key: &str,
        storage_key: &str,
        expired: &mut ExpiredCopy<'_>,
    ) -> Result<Value, CacheError> {
        match self.fetcher.fetch_document(key).await {
            Ok(data) => {
                let entry = CacheEntry::new(data, self.clock.now_millis(), self.options.ttl);
                self.write_entry(storage_key, &entry);
                expired.disarm();
                Ok(entry.data)
            }
            Err(source) => {
                warn!(key = %key, error = %source, "Failed to fetch document");

                // Someone else may have written since we looked.
                if let Some(entry) = self.read_entry(storage_key) {
                    debug!(key = %key, "Serving stored copy after failed fetch");
                    expired.disarm();
                    return Ok(entry.data);
                }

                match expired.entry.take() {
                    Some(entry) => {
                        debug!(key = %key, "Serving expired copy after failed fetch");
                        // Put it back so the next failure can fall back too.
                        self.write_entry(storage_key, &entry);
                        Ok(entry.data)
                    }
                    None => Err(CacheError::Unavailable {
                        key: key.to_string(),
                        source,
                    }),
                }
            }
        }
    }

    fn key_lock(&self, key: &str) -> KeyLock {
        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        in_flight.entry(key.to_string()).or_default().clone()
    }

    fn release_key_lock(&self, key: &str, lock: &KeyLock) {
        let mut in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // One reference in the map plus ours: nobody else is waiting.
        if Arc::strong_count(lock) <= 2 {
            in_flight.remove(key);
        }
    }
}

/// Age of each page document's stored copy.
#[derive(Debug, Default)]
pub struct CacheAges {
    /// `(age in minutes, display string)` per key; `None` if never cached.
    pub ages: Vec<(ContentKey, Option<(i64, String)>)>,
}

impl CacheAges {
    pub fn age(&self, key: ContentKey) -> String {
        self.ages
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, age)| age.as_ref())
            .map(|(_, display)| display.clone())
            .unwrap_or_else(|| "never".to_string())
    }

    /// The most recent update across all documents.
    pub fn last_updated(&self) -> String {
        self.ages
            .iter()
            .filter_map(|(_, age)| age.as_ref())
            .min_by_key(|(minutes, _)| *minutes)
            .map(|(_, display)| display.clone())
            .unwrap_or_else(|| "never".to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
