use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::store::SharedStore;

/// Store key for the whole progress mapping.
pub const PROGRESS_KEY: &str = "dsa_progress";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct ProgressRecord {
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub starred: bool,
}

/// A partial update: `None` fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub completed: Option<bool>,
    pub starred: Option<bool>,
}

impl ProgressUpdate {
    pub fn completed(value: bool) -> Self {
        Self {
            completed: Some(value),
            ..Default::default()
        }
    }

    pub fn starred(value: bool) -> Self {
        Self {
            starred: Some(value),
            ..Default::default()
        }
    }

    fn apply_to(&self, record: &mut ProgressRecord) {
        if let Some(completed) = self.completed {
            record.completed = completed;
        }
        if let Some(starred) = self.starred {
            record.starred = starred;
        }
    }
}

/// Problem id → flags. Ids serialize as string keys.
pub type ProgressMap = BTreeMap<u64, ProgressRecord>;

/// Holds the progress mapping in memory and writes it through on every change.
pub struct ProgressTracker {
    store: SharedStore,
    progress: ProgressMap,
}

impl ProgressTracker {
    /// Create a tracker and load whatever progress is already stored.
    pub fn open(store: SharedStore) -> Self {
        let mut tracker = Self {
            store,
            progress: ProgressMap::new(),
        };
        tracker.load_progress();
        tracker
    }

    /// Re-read the mapping from the store. Missing or corrupt data yields an
    /// empty mapping.
    pub fn load_progress(&mut self) -> &ProgressMap {
        self.progress = match self.store.get_item(PROGRESS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                debug!(error = %e, "Ignoring unparsable progress data");
                ProgressMap::new()
            }),
            Ok(None) => ProgressMap::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read progress");
                ProgressMap::new()
            }
        };
        &self.progress
    }

    pub fn progress(&self) -> &ProgressMap {
        &self.progress
    }

    /// Flags for `id`, all false if never touched.
    pub fn record(&self, id: u64) -> ProgressRecord {
        self.progress.get(&id).copied().unwrap_or_default()
    }

    /// Merge `update` into the record for `id` and persist the whole mapping.
    /// The in-memory update stands even if the write fails.
    pub fn save_progress(&mut self, id: u64, update: ProgressUpdate) -> ProgressRecord {
        let record = self.progress.entry(id).or_default();
        update.apply_to(record);
        let record = *record;
        self.persist();
        record
    }

    pub fn toggle_completed(&mut self, id: u64) -> ProgressRecord {
        let completed = !self.record(id).completed;
        self.save_progress(id, ProgressUpdate::completed(completed))
    }

    pub fn toggle_starred(&mut self, id: u64) -> ProgressRecord {
        let starred = !self.record(id).starred;
        self.save_progress(id, ProgressUpdate::starred(starred))
    }

    pub fn starred_ids(&self) -> Vec<u64> {
        self.progress
            .iter()
            .filter(|(_, record)| record.starred)
            .map(|(id, _)| *id)
            .collect()
    }

    fn persist(&self) {
        let serialized = match serde_json::to_string(&self.progress) {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "Failed to serialize progress");
                return;
            }
        };
        if let Err(e) = self.store.set_item(PROGRESS_KEY, &serialized) {
            warn!(error = %e, "Failed to save progress");
        }
    }
}
