use std::collections::HashMap;

use crate::content::Lang;

/// What a consumer should render for a given cache key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheState {
    /// No entry yet: the fetch has not been requested or is still in flight.
    Loading,
    /// The empty-string sentinel: fetch failed or the document does not exist.
    /// Indistinguishable from a genuinely empty document.
    NotFound,
    Ready(String),
}

/// Append-only session cache for fetched remote text. Keys are never evicted;
/// `set` is the single mutation path. The empty string is the stored sentinel
/// for "not found / failed".
#[derive(Debug, Default)]
pub struct TextCache {
    entries: HashMap<String, String>,
}

impl TextCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Store a value under a key. Last write wins; keys are never removed.
    pub fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    pub fn state(&self, key: &str) -> CacheState {
        match self.entries.get(key) {
            None => CacheState::Loading,
            Some(text) if text.is_empty() => CacheState::NotFound,
            Some(text) => CacheState::Ready(text.clone()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// --- Cache key scheme ---
//
// Brief, overview, updates log, and document text all share one store, so
// every kind except the brief carries a suffix to keep keys disjoint.

pub fn brief_key(slug: &str) -> String {
    slug.to_string()
}

pub fn overview_key(slug: &str, lang: Lang) -> String {
    format!("{slug}-overview-{lang}")
}

pub fn updates_key(slug: &str) -> String {
    format!("{slug}-updates")
}

pub fn document_key(slug: &str, lang: Lang) -> String {
    format!("{slug}-doc-{lang}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_distinguishes_absent_sentinel_and_text() {
        let mut cache = TextCache::new();
        assert_eq!(cache.state("k"), CacheState::Loading);

        cache.set("k", String::new());
        assert_eq!(cache.state("k"), CacheState::NotFound);
        assert!(cache.has("k"));

        cache.set("k", "body".to_string());
        assert_eq!(cache.state("k"), CacheState::Ready("body".to_string()));
        assert_eq!(cache.get("k"), Some("body"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn keys_are_disjoint_per_content_kind() {
        let slug = "bloom-system";
        let keys = [
            brief_key(slug),
            overview_key(slug, Lang::En),
            overview_key(slug, Lang::Zh),
            updates_key(slug),
            document_key(slug, Lang::En),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in keys.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
