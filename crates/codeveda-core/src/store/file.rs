use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{is_valid_key, DurableStore, StoreError};

/// File extension for stored values
const ITEM_EXTENSION: &str = "json";

/// Directory-backed store: each key lives in `<dir>/<key>.json`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Result<Self, StoreError> {
        std::fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir.display().to_string(), e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn validate_key(key: &str) -> Result<(), StoreError> {
        if is_valid_key(key) {
            Ok(())
        } else {
            Err(StoreError::InvalidKey(key.to_string()))
        }
    }

    fn item_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        Self::validate_key(key)?;
        Ok(self.dir.join(format!("{}.{}", key, ITEM_EXTENSION)))
    }
}

impl DurableStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.item_path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.item_path(key)?;
        std::fs::write(&path, value).map_err(|e| StoreError::io(key, e))
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let path = self.item_path(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(key, e)),
        }
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let dir_key = self.dir.display().to_string();
        let entries = std::fs::read_dir(&self.dir).map_err(|e| StoreError::io(&dir_key, e))?;

        let mut keys = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| StoreError::io(&dir_key, e))?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(ITEM_EXTENSION) {
                continue;
            }
            match path.file_stem().and_then(|stem| stem.to_str()) {
                Some(stem) => keys.push(stem.to_string()),
                None => debug!(path = %path.display(), "Skipping non-UTF-8 store file"),
            }
        }
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("store")).unwrap();

        store.set_item("codeveda_blogs", r#"{"data":1}"#).unwrap();
        assert_eq!(
            store.get_item("codeveda_blogs").unwrap().as_deref(),
            Some(r#"{"data":1}"#)
        );
        assert!(store.dir().join("codeveda_blogs.json").exists());
    }

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.get_item("dsa_progress").unwrap(), None);
        store.remove_item("dsa_progress").unwrap();
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();
        assert!(matches!(
            store.set_item("../escape", "x"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(matches!(store.get_item(""), Err(StoreError::InvalidKey(_))));
    }

    #[test]
    fn test_keys_ignores_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();
        store.set_item("b", "1").unwrap();
        store.set_item("a", "2").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "hi").unwrap();

        assert_eq!(store.keys().unwrap(), vec!["a".to_string(), "b".to_string()]);
    }
}
