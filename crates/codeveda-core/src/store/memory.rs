use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use super::{DurableStore, StoreError};

/// In-memory store. Quota accounting counts key and value bytes, the same
/// way browsers meter local storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<BTreeMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects writes once `quota_bytes` would be exceeded.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            items: Mutex::new(BTreeMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    fn items(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        // A panicked writer cannot leave a half-written String behind.
        self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn used_bytes(items: &BTreeMap<String, String>) -> usize {
        items.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl DurableStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut items = self.items();

        if let Some(quota) = self.quota_bytes {
            let replaced = items.get(key).map(|v| key.len() + v.len()).unwrap_or(0);
            let used = Self::used_bytes(&items) - replaced;
            let needed = key.len() + value.len();
            let available = quota.saturating_sub(used);
            if needed > available {
                return Err(StoreError::QuotaExceeded { needed, available });
            }
        }

        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.items().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.items().keys().cloned().collect())
    }
}
