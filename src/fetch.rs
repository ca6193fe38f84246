use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use tokio::task::AbortHandle;
use url::Url;

use crate::cache::{CacheState, TextCache};
use crate::media::MediaIndex;

/// Plain-GET text transport. HTTP-level failure (non-success status, network
/// error) is an `Err`; callers coalesce it into the cache sentinel.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn get_text(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("atelier/0.1")
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn get_text(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("requesting {url}"))?;
        if !resp.status().is_success() {
            return Err(anyhow!("status {} for {url}", resp.status()));
        }
        resp.text().await.map_err(Into::into)
    }
}

/// In-memory fetcher for tests and offline runs.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    bodies: HashMap<String, String>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.bodies.insert(url.to_string(), body.to_string());
        self
    }
}

#[async_trait]
impl Fetch for StaticFetcher {
    async fn get_text(&self, url: &str) -> Result<String> {
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("not found: {url}"))
    }
}

/// Lazily fetches and memoizes remote text documents, one fetch per distinct
/// cache key for the life of the session. Success stores the body; failure
/// stores the empty-string sentinel. Superseded in-flight fetches are aborted
/// before they can write.
pub struct TextLoader {
    fetcher: Arc<dyn Fetch>,
    cache: Arc<Mutex<TextCache>>,
    pending: Arc<Mutex<HashMap<String, AbortHandle>>>,
}

impl TextLoader {
    pub fn new(fetcher: Arc<dyn Fetch>) -> Self {
        Self {
            fetcher,
            cache: Arc::new(Mutex::new(TextCache::new())),
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn state(&self, key: &str) -> CacheState {
        self.cache.lock().unwrap().state(key)
    }

    pub fn cached(&self, key: &str) -> Option<String> {
        self.cache.lock().unwrap().get(key).map(str::to_string)
    }

    pub fn entry_count(&self) -> usize {
        self.cache.lock().unwrap().len()
    }

    /// Fire-and-forget fetch. Returns false without issuing anything when the
    /// key is already cached (sentinel included) or a fetch is in flight.
    pub fn request(&self, key: &str, url: &str) -> bool {
        if self.cache.lock().unwrap().has(key) {
            return false;
        }
        let mut pending = self.pending.lock().unwrap();
        if pending.contains_key(key) {
            return false;
        }
        let fetcher = self.fetcher.clone();
        let cache = self.cache.clone();
        let pending_map = self.pending.clone();
        let key_owned = key.to_string();
        let url_owned = url.to_string();
        let handle = tokio::spawn(async move {
            let body = match fetcher.get_text(&url_owned).await {
                Ok(text) => text,
                Err(err) => {
                    tracing::debug!(key = %key_owned, error = %err, "text fetch failed, storing sentinel");
                    String::new()
                }
            };
            cache.lock().unwrap().set(&key_owned, body);
            pending_map.lock().unwrap().remove(&key_owned);
        });
        pending.insert(key.to_string(), handle.abort_handle());
        drop(pending);
        // the task can complete before its handle is recorded; drop the
        // stale entry so the key does not look pending forever
        if self.cache.lock().unwrap().has(key) {
            self.pending.lock().unwrap().remove(key);
        }
        true
    }

    /// Cancel the in-flight fetch for a key, if any. The aborted task never
    /// reaches its cache write; cancellation is not an error.
    pub fn supersede(&self, key: &str) -> bool {
        match self.pending.lock().unwrap().remove(key) {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Awaiting variant for CLI use: returns the cached value, fetching it
    /// first when absent. A newer inline request supersedes any pending
    /// background fetch for the same key.
    pub async fn load(&self, key: &str, url: &str) -> String {
        if let Some(value) = self.cached(key) {
            return value;
        }
        self.supersede(key);
        let body = match self.fetcher.get_text(url).await {
            Ok(text) => text,
            Err(err) => {
                tracing::debug!(key = %key, error = %err, "text fetch failed, storing sentinel");
                String::new()
            }
        };
        self.cache.lock().unwrap().set(key, body.clone());
        body
    }
}

/// Memoizes the per-project remote media index. A missing file or malformed
/// JSON degrades to "index absent" and is memoized as such.
pub struct MediaIndexLoader {
    fetcher: Arc<dyn Fetch>,
    base: Url,
    cache: Mutex<HashMap<String, Option<MediaIndex>>>,
}

impl MediaIndexLoader {
    pub fn new(fetcher: Arc<dyn Fetch>, base_url: &str) -> Result<Self> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base).with_context(|| format!("invalid base URL: {base_url}"))?;
        Ok(Self {
            fetcher,
            base,
            cache: Mutex::new(HashMap::new()),
        })
    }

    pub fn index_url(&self, slug: &str) -> Result<Url> {
        self.base
            .join(&format!("media/{slug}.json"))
            .with_context(|| format!("deriving media index URL for {slug}"))
    }

    pub fn entry_count(&self) -> usize {
        self.cache.lock().unwrap().len()
    }

    pub async fn index_for(&self, slug: &str) -> Option<MediaIndex> {
        if let Some(hit) = self.cache.lock().unwrap().get(slug) {
            return hit.clone();
        }
        let fetched = match self.fetch_index(slug).await {
            Ok(index) => Some(index),
            Err(err) => {
                tracing::debug!(slug = %slug, error = %err, "media index unavailable");
                None
            }
        };
        self.cache
            .lock()
            .unwrap()
            .insert(slug.to_string(), fetched.clone());
        fetched
    }

    async fn fetch_index(&self, slug: &str) -> Result<MediaIndex> {
        let url = self.index_url(slug)?;
        let body = self.fetcher.get_text(url.as_str()).await?;
        serde_json::from_str(&body).context("parsing media index")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingFetcher {
        inner: StaticFetcher,
        calls: AtomicUsize,
    }

    impl CountingFetcher {
        fn new(inner: StaticFetcher) -> Self {
            Self {
                inner,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Fetch for CountingFetcher {
        async fn get_text(&self, url: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.get_text(url).await
        }
    }

    /// Never resolves; stands in for a slow network.
    struct HangingFetcher;

    #[async_trait]
    impl Fetch for HangingFetcher {
        async fn get_text(&self, _url: &str) -> Result<String> {
            std::future::pending().await
        }
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn load_memoizes_success_and_failure() {
        let fetcher = Arc::new(CountingFetcher::new(
            StaticFetcher::new().with("http://s/brief.txt", "hello"),
        ));
        let loader = TextLoader::new(fetcher.clone());

        assert_eq!(loader.load("brief", "http://s/brief.txt").await, "hello");
        assert_eq!(loader.load("brief", "http://s/brief.txt").await, "hello");
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);

        // failure writes the sentinel, which is just as sticky
        assert_eq!(loader.load("missing", "http://s/404.txt").await, "");
        assert_eq!(loader.load("missing", "http://s/404.txt").await, "");
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
        assert_eq!(loader.state("missing"), CacheState::NotFound);
    }

    #[tokio::test]
    async fn request_is_idempotent_per_key() {
        let fetcher = Arc::new(CountingFetcher::new(
            StaticFetcher::new().with("http://s/a.txt", "a"),
        ));
        let loader = TextLoader::new(fetcher.clone());

        assert!(loader.request("a", "http://s/a.txt"));
        assert!(!loader.request("a", "http://s/a.txt")); // pending
        settle().await;
        assert_eq!(loader.state("a"), CacheState::Ready("a".to_string()));
        assert!(!loader.request("a", "http://s/a.txt")); // cached
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn superseded_fetch_never_writes() {
        let loader = TextLoader::new(Arc::new(HangingFetcher));
        assert!(loader.request("k", "http://s/slow.txt"));
        settle().await;
        assert!(loader.supersede("k"));
        settle().await;
        assert_eq!(loader.state("k"), CacheState::Loading);
        assert_eq!(loader.entry_count(), 0);
        // a fresh request may be issued afterwards
        assert!(loader.request("k", "http://s/slow.txt"));
    }

    #[tokio::test]
    async fn index_loader_degrades_and_memoizes() {
        let fetcher = Arc::new(CountingFetcher::new(
            StaticFetcher::new()
                .with("http://s/media/good.json", r#"{"videos":{"Cut":["/v.mp4"]}}"#)
                .with("http://s/media/bad.json", "{ not json"),
        ));
        let loader = MediaIndexLoader::new(fetcher.clone(), "http://s").unwrap();

        let good = loader.index_for("good").await.unwrap();
        assert_eq!(good.groups(crate::media::MediaKind::Videos)[0].label, "Cut");

        assert!(loader.index_for("bad").await.is_none());
        assert!(loader.index_for("absent").await.is_none());

        // all three outcomes are memoized
        loader.index_for("good").await;
        loader.index_for("bad").await;
        loader.index_for("absent").await;
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 3);
        assert_eq!(loader.entry_count(), 3);
    }

    #[test]
    fn index_url_is_derived_from_slug() {
        let loader =
            MediaIndexLoader::new(Arc::new(StaticFetcher::new()), "https://site.example/assets")
                .unwrap();
        assert_eq!(
            loader.index_url("dys-utopia").unwrap().as_str(),
            "https://site.example/assets/media/dys-utopia.json"
        );
    }
}
