//! Retrieval from a local copy of the site's data directory.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;

use super::{DocumentFetcher, FetchError};

/// Reads `<dir>/<key>.json` from disk.
#[derive(Debug, Clone)]
pub struct DirFetcher {
    dir: PathBuf,
}

impl DirFetcher {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn document_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl DocumentFetcher for DirFetcher {
    async fn fetch_document(&self, key: &str) -> Result<Value, FetchError> {
        let path = self.document_path(key);
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(FetchError::NotFound(path.display().to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_document_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("home.json"), r#"{"hero":{"title":"Hi"}}"#).unwrap();

        let fetcher = DirFetcher::new(dir.path().to_path_buf());
        let doc = fetcher.fetch_document("home").await.unwrap();
        assert_eq!(doc["hero"]["title"], "Hi");
    }

    #[tokio::test]
    async fn test_missing_document_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = DirFetcher::new(dir.path().to_path_buf());
        assert!(matches!(
            fetcher.fetch_document("nope").await,
            Err(FetchError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("dsa.json"), "<html>").unwrap();
        let fetcher = DirFetcher::new(dir.path().to_path_buf());
        assert!(matches!(
            fetcher.fetch_document("dsa").await,
            Err(FetchError::Parse(_))
        ));
    }
}
