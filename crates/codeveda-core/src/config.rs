//! Application configuration management.
//!
//! Configuration is stored at `~/.config/codeveda/config.json`. Two
//! environment variables override the file:
//!
//! - `CODEVEDA_BASE_URL`: where content documents are fetched from
//! - `CODEVEDA_STORE_DIR`: directory backing the durable store

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::api::client::DEFAULT_REQUEST_TIMEOUT_SECS;
use crate::cache::service::DEFAULT_TTL_HOURS;
use crate::cache::CacheOptions;

/// Application name used for config/store directory paths
const APP_NAME: &str = "codeveda";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Deployed site's data directory
pub const DEFAULT_BASE_URL: &str = "https://codeveda.dev/data";

pub const ENV_BASE_URL: &str = "CODEVEDA_BASE_URL";
pub const ENV_STORE_DIR: &str = "CODEVEDA_STORE_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP(S) URL, or a local directory holding `<key>.json` files.
    pub base_url: String,
    pub ttl_hours: i64,
    pub request_timeout_secs: u64,
    pub dedupe_in_flight: bool,
    pub store_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            ttl_hours: DEFAULT_TTL_HOURS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            dedupe_in_flight: true,
            store_dir: None,
        }
    }
}

impl Config {
    /// Load the config file (defaults if absent), then apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Self::from_json(&contents)
                .with_context(|| format!("Invalid config file {}", path.display()))?
        } else {
            Self::default()
        };
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Parse a config document, rejecting values the cache cannot honour.
    pub fn from_json(contents: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(contents)?;
        config.cache_ttl()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.base_url = url;
        }
        if let Some(dir) = var(ENV_STORE_DIR).filter(|v| !v.trim().is_empty()) {
            self.store_dir = Some(PathBuf::from(dir));
        }
    }

    /// Directory for the durable store: configured, else the user cache dir.
    pub fn store_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.store_dir {
            return Ok(dir.clone());
        }
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }

    /// Local directory to read documents from, if `base_url` is not HTTP(S).
    pub fn local_data_dir(&self) -> Option<PathBuf> {
        let url = self.base_url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            None
        } else {
            Some(PathBuf::from(url.strip_prefix("file://").unwrap_or(url)))
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn cache_ttl(&self) -> Result<chrono::Duration> {
        if self.ttl_hours <= 0 {
            bail!("ttl_hours must be positive, got {}", self.ttl_hours);
        }
        chrono::Duration::try_hours(self.ttl_hours)
            .ok_or_else(|| anyhow::anyhow!("ttl_hours is too large: {}", self.ttl_hours))
    }

    pub fn cache_options(&self) -> Result<CacheOptions> {
        Ok(CacheOptions::default()
            .with_ttl(self.cache_ttl()?)
            .with_dedupe(self.dedupe_in_flight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ttl_hours, 24);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.local_data_dir().is_none());
        assert_eq!(config.cache_options().unwrap().ttl, chrono::Duration::hours(24));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = Config::from_json(r#"{"ttl_hours": 1}"#).unwrap();
        assert_eq!(config.ttl_hours, 1);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.dedupe_in_flight);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_env(|name| match name {
            ENV_BASE_URL => Some("file:///srv/site/data".to_string()),
            ENV_STORE_DIR => Some("/tmp/codeveda".to_string()),
            _ => None,
        });
        assert_eq!(config.local_data_dir(), Some(PathBuf::from("/srv/site/data")));
        assert_eq!(config.store_dir().unwrap(), PathBuf::from("/tmp/codeveda"));
    }

    #[test]
    fn test_blank_env_ignored() {
        let mut config = Config::default();
        config.apply_env(|_| Some("  ".to_string()));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.store_dir.is_none());
    }

    #[test]
    fn test_non_positive_ttl_rejected() {
        for body in [r#"{"ttl_hours": 0}"#, r#"{"ttl_hours": -1}"#] {
            let err = Config::from_json(body).unwrap_err();
            assert!(err.to_string().contains("must be positive"), "{body}");
        }
    }

    #[test]
    fn test_out_of_range_ttl_rejected() {
        let err = Config::from_json(r#"{"ttl_hours": 9223372036854775807}"#).unwrap_err();
        assert!(err.to_string().contains("too large"));

        let config = Config {
            ttl_hours: i64::MAX,
            ..Config::default()
        };
        assert!(config.cache_options().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = Config {
            ttl_hours: 6,
            store_dir: Some(PathBuf::from("/var/lib/codeveda")),
            ..Config::default()
        };
        assert_eq!(Config::from_json(&config.to_json().unwrap()).unwrap(), config);
    }
}
