//! Command handlers: load a page's document through the cache, then render it.

use std::future::Future;
use std::sync::Arc;

use anyhow::{anyhow, bail, Result};
use futures::future::join_all;
use rand::Rng;
use tracing::{debug, info};

use codeveda_core::api::{DirFetcher, DocumentFetcher, HttpFetcher};
use codeveda_core::cache::{CacheError, ContentCache};
use codeveda_core::clock::SystemClock;
use codeveda_core::config::Config;
use codeveda_core::models::{filter_projects, filter_resources, ContactForm, ContentKey};
use codeveda_core::progress::{pick_random, progress_stats, ProgressTracker};
use codeveda_core::store::{FileStore, SharedStore};

use crate::pages;

pub struct App {
    config: Config,
    cache: ContentCache,
    store: SharedStore,
}

impl App {
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        let store_dir = config.store_dir()?;
        debug!(dir = %store_dir.display(), base_url = %config.base_url, "Opening store");
        let store: SharedStore = Arc::new(FileStore::new(store_dir)?);

        let fetcher: Arc<dyn DocumentFetcher> = match config.local_data_dir() {
            Some(dir) => Arc::new(DirFetcher::new(dir)),
            None => Arc::new(HttpFetcher::new(&config.base_url, config.request_timeout())?),
        };

        let cache = ContentCache::new(
            store.clone(),
            fetcher,
            Arc::new(SystemClock),
            config.cache_options()?,
        );
        Ok(Self {
            config,
            cache,
            store,
        })
    }

    pub async fn home(&self) -> Result<()> {
        let home = load(self.cache.home()).await?;
        print!("{}", pages::render_home(&home));
        Ok(())
    }

    pub async fn dsa(&self, query: &str, difficulty: &str) -> Result<()> {
        let sheet = load(self.cache.dsa()).await?;
        let tracker = ProgressTracker::open(self.store.clone());
        let stats = progress_stats(&sheet, tracker.progress());
        let visible = sheet.filter(query, difficulty);
        print!(
            "{}",
            pages::render_dsa(&sheet, &visible, &stats, tracker.progress())
        );
        Ok(())
    }

    pub async fn dsa_toggle(&self, id: u64, flag: &str) -> Result<()> {
        let sheet = load(self.cache.dsa()).await?;
        let question = sheet
            .find_question(id)
            .ok_or_else(|| anyhow!("no DSA question with id {}", id))?;

        let mut tracker = ProgressTracker::open(self.store.clone());
        let record = match flag {
            "completed" => tracker.toggle_completed(id),
            "starred" => tracker.toggle_starred(id),
            other => bail!("unknown flag {:?} (expected completed or starred)", other),
        };
        info!(id, completed = record.completed, starred = record.starred, "Progress updated");
        println!("{}", pages::question_line(question, &record));
        Ok(())
    }

    pub async fn dsa_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<()> {
        let sheet = load(self.cache.dsa()).await?;
        let tracker = ProgressTracker::open(self.store.clone());
        match pick_random(&sheet, tracker.progress(), rng) {
            Some(question) => println!("{}", pages::question_line(question, &tracker.record(question.id))),
            None => println!("Every question is solved. Nice work!"),
        }
        Ok(())
    }

    pub async fn blogs(&self, query: &str, category: &str) -> Result<()> {
        let blogs = load(self.cache.blogs()).await?;
        let posts = blogs.visible_posts(query, category);
        print!("{}", pages::render_blog_list(&blogs, &posts));
        Ok(())
    }

    pub async fn blog(&self, id: &str) -> Result<()> {
        let blogs = load(self.cache.blogs()).await?;
        let post = blogs
            .find_post(id)
            .ok_or_else(|| anyhow!("no blog post with id {}", id))?;
        print!("{}", pages::render_blog_post(post));
        Ok(())
    }

    pub async fn resources(&self, query: &str, kind: &str) -> Result<()> {
        let doc = load(self.cache.resources()).await?;
        let visible = filter_resources(&doc.resources, query, kind);
        print!("{}", pages::render_resources(&doc, &visible));
        Ok(())
    }

    pub async fn projects(&self, query: &str, difficulty: &str, category: &str) -> Result<()> {
        let doc = load(self.cache.projects()).await?;
        let visible = filter_projects(&doc.projects, query, difficulty, category);
        print!("{}", pages::render_projects(&doc, &visible));
        Ok(())
    }

    pub async fn roadmaps(&self) -> Result<()> {
        let doc = load(self.cache.roadmaps()).await?;
        print!("{}", pages::render_roadmaps(&doc));
        Ok(())
    }

    pub async fn guide(&self, id: &str) -> Result<()> {
        let doc = load(self.cache.roadmaps()).await?;
        let guide = doc
            .find_guide(id)
            .ok_or_else(|| anyhow!("no guide with id {}", id))?;
        print!("{}", pages::render_guide(guide));
        Ok(())
    }

    pub async fn contact(&self) -> Result<()> {
        let doc = load(self.cache.contact()).await?;
        print!("{}", pages::render_contact(&doc));
        Ok(())
    }

    pub fn contact_send(&self, name: &str, email: &str, subject: &str, message: &str) -> Result<()> {
        let mut form = ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        };
        let receipt = form.submit()?;
        println!("{}\n{}", receipt.title, receipt.description);
        Ok(())
    }

    pub async fn fetch_raw(&self, key: &str) -> Result<()> {
        let data = load(self.cache.fetch_data(key)).await?;
        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }

    /// Fetch every page document concurrently so later runs work offline.
    pub async fn warm(&self) -> Result<()> {
        let results = join_all(
            ContentKey::ALL
                .iter()
                .map(|key| self.cache.fetch_data(key.as_str())),
        )
        .await;

        let mut failed = 0;
        for (key, result) in ContentKey::ALL.iter().zip(results) {
            match result {
                Ok(_) => println!("{:<10} ok", key),
                Err(e) => {
                    failed += 1;
                    println!("{:<10} failed: {}", key, e);
                }
            }
        }
        if failed > 0 {
            bail!("{} of {} documents unavailable", failed, ContentKey::ALL.len());
        }
        Ok(())
    }

    /// Print the effective settings, after environment overrides.
    pub fn show_config(&self) -> Result<()> {
        println!("{}", self.config.to_json()?);
        Ok(())
    }

    pub fn cache_ages(&self) {
        let ages = self.cache.cache_ages();
        for key in ContentKey::ALL {
            println!("{:<10} {}", key, ages.age(key));
        }
        println!("Last updated: {}", ages.last_updated());
    }

    pub fn clear_cache(&self) {
        self.cache.clear_cache();
        println!("Cache cleared. DSA progress was kept.");
    }
}

/// Await a page load and turn a failure into the degraded view.
async fn load<T>(fetch: impl Future<Output = Result<T, CacheError>>) -> Result<T> {
    fetch.await.map_err(|e| {
        let message = e.to_string();
        eprint!("{}", pages::render_load_failure(&message));
        anyhow!(message)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_passes_value_through() {
        let value = load(async { Ok::<_, CacheError>(3) }).await.unwrap();
        assert_eq!(value, 3);
    }

    #[tokio::test]
    async fn test_load_failure_keeps_cache_error_message() {
        let err = load(async { Err::<(), _>(CacheError::InvalidKey("a b".to_string())) })
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            CacheError::InvalidKey("a b".to_string()).to_string()
        );
    }
}
