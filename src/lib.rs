pub mod cache;
pub mod content;
pub mod fetch;
pub mod hub;
pub mod media;
pub mod search;

// --- Library API for embedding ---

/// Convenience re-exports for embedders.
pub mod prelude {
    pub use crate::cache::{CacheState, TextCache};
    pub use crate::content::{ContentStore, Lang, Project, Status, Theme, ThemeId, UpdateEntry};
    pub use crate::hub::{HubPane, MediaHub, MediaTotals};
    pub use crate::media::{
        MediaGroup, MediaGroups, MediaIndex, MediaItem, MediaKind, MediaRole, MediaType,
    };
    pub use crate::search::{ResultKind, SearchResult};
    pub use crate::Atelier;
}

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use url::Url;

use crate::cache::{brief_key, document_key, overview_key, updates_key, CacheState};
use crate::content::{builtin_content, ContentStore, Lang, Project, Theme};
use crate::fetch::{Fetch, HttpFetcher, MediaIndexLoader, TextLoader};
use crate::media::{build_groups, MediaGroups};
use crate::search::SearchResult;

#[derive(Debug, Clone, Serialize)]
pub struct SiteStats {
    pub themes: usize,
    pub projects: usize,
    pub tags: usize,
    pub text_cache_entries: usize,
    pub media_index_entries: usize,
}

/// Top-level owner of the content tree and the two session caches. Both caches
/// are explicit state here rather than module-level singletons; all mutation
/// goes through their loaders.
pub struct Atelier {
    content: ContentStore,
    base: Url,
    texts: TextLoader,
    media_index: MediaIndexLoader,
}

impl Atelier {
    /// Built-in content over a real HTTP client.
    pub fn new(base_url: &str) -> Result<Self> {
        let fetcher: Arc<dyn Fetch> = Arc::new(HttpFetcher::new()?);
        Self::with_parts(builtin_content(), fetcher, base_url)
    }

    pub fn with_parts(
        content: ContentStore,
        fetcher: Arc<dyn Fetch>,
        base_url: &str,
    ) -> Result<Self> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base).with_context(|| format!("invalid base URL: {base_url}"))?;
        let media_index = MediaIndexLoader::new(fetcher.clone(), base.as_str())?;
        Ok(Self {
            content,
            base,
            texts: TextLoader::new(fetcher),
            media_index,
        })
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn themes(&self, lang: Lang) -> &[Theme] {
        self.content.themes(lang)
    }

    pub fn find_project(&self, lang: Lang, slug: &str) -> Option<&Project> {
        self.content.find_project(lang, slug)
    }

    pub fn search(&self, lang: Lang, query: &str) -> Vec<SearchResult> {
        search::search(self.themes(lang), lang, query)
    }

    /// Canonical media groups for a project, consulting the memoized remote
    /// media index first.
    pub async fn groups(&self, lang: Lang, slug: &str) -> Result<MediaGroups> {
        let project = self.require_project(lang, slug)?;
        let index = self.media_index.index_for(slug).await;
        Ok(build_groups(project, lang, index.as_ref()))
    }

    /// Brief text for a project. The returned string may be the empty sentinel;
    /// presentation falls back to the project-type label in that case.
    pub async fn brief(&self, lang: Lang, slug: &str) -> Result<String> {
        let project = self.require_project(lang, slug)?;
        let Some(path) = project.brief_txt.clone() else {
            return Ok(String::new());
        };
        let url = self.resolve(&path)?;
        Ok(self.texts.load(&brief_key(slug), &url).await)
    }

    /// Markdown overview for the context tab. `None` when the project declares
    /// no overview document.
    pub async fn overview(&self, lang: Lang, slug: &str) -> Result<Option<String>> {
        let project = self.require_project(lang, slug)?;
        let Some(path) = project.overview_txt.clone() else {
            return Ok(None);
        };
        let url = self.resolve(&path)?;
        Ok(Some(self.texts.load(&overview_key(slug, lang), &url).await))
    }

    /// Remote updates log (markdown), distinct from the inline update entries.
    pub async fn updates_log(&self, lang: Lang, slug: &str) -> Result<Option<String>> {
        let project = self.require_project(lang, slug)?;
        let Some(path) = project.updates_txt.clone() else {
            return Ok(None);
        };
        let url = self.resolve(&path)?;
        Ok(Some(self.texts.load(&updates_key(slug), &url).await))
    }

    /// Fallback text/markdown document for the document viewer.
    pub async fn document(&self, lang: Lang, slug: &str) -> Result<Option<String>> {
        let project = self.require_project(lang, slug)?;
        let Some(path) = project.doc_txt.clone() else {
            return Ok(None);
        };
        let url = self.resolve(&path)?;
        Ok(Some(self.texts.load(&document_key(slug, lang), &url).await))
    }

    pub fn text_state(&self, key: &str) -> CacheState {
        self.texts.state(key)
    }

    pub fn texts(&self) -> &TextLoader {
        &self.texts
    }

    pub fn stats(&self) -> SiteStats {
        let themes = self.content.themes(Lang::En);
        SiteStats {
            themes: themes.len(),
            projects: themes.iter().map(|t| t.projects.len()).sum(),
            tags: themes
                .iter()
                .flat_map(|t| t.projects.iter())
                .map(|p| p.tags.len())
                .sum(),
            text_cache_entries: self.texts.entry_count(),
            media_index_entries: self.media_index.entry_count(),
        }
    }

    fn require_project(&self, lang: Lang, slug: &str) -> Result<&Project> {
        self.find_project(lang, slug)
            .with_context(|| format!("unknown project: {slug}"))
    }

    /// Resolve a site-relative document path against the base URL. Absolute
    /// URLs pass through untouched (standard URL join semantics).
    fn resolve(&self, path: &str) -> Result<String> {
        Ok(self
            .base
            .join(path)
            .with_context(|| format!("resolving {path}"))?
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::StaticFetcher;
    use crate::media::{MediaGroup, MediaKind};

    fn atelier(fetcher: StaticFetcher) -> Atelier {
        Atelier::with_parts(builtin_content(), Arc::new(fetcher), "http://site.test").unwrap()
    }

    #[tokio::test]
    async fn index_takes_precedence_over_flat_arrays() {
        // electromagnetic-decay declares flat videos AND grouped videos; a
        // remote index must override both for that kind.
        let fetcher = StaticFetcher::new().with(
            "http://site.test/media/electromagnetic-decay.json",
            r#"{"videos":{"Remaster":["/remaster.mp4"]}}"#,
        );
        let site = atelier(fetcher);
        let groups = site.groups(Lang::En, "electromagnetic-decay").await.unwrap();
        assert_eq!(groups.videos.len(), 1);
        assert_eq!(groups.videos[0].label, "Remaster");
        assert_eq!(groups.videos[0].items, vec!["/remaster.mp4"]);
        // kinds without an index section keep the declared groups
        assert_eq!(groups.audios.len(), 2);
        assert_eq!(groups.audios[0].label, "Demo V1");
    }

    #[tokio::test]
    async fn grouped_media_is_passed_through_unchanged() {
        let site = atelier(StaticFetcher::new());
        let project = site.find_project(Lang::En, "dys-utopia").unwrap();
        let declared = project.media_groups.clone().unwrap();
        let groups = site.groups(Lang::En, "dys-utopia").await.unwrap();
        assert_eq!(groups.videos, declared.videos);
        assert!(groups.images.is_empty());
    }

    #[tokio::test]
    async fn flat_arrays_wrap_into_a_localized_synthetic_group() {
        let mut content = builtin_content();
        for themes in [&mut content.en, &mut content.zh] {
            let project = themes[0]
                .projects
                .iter_mut()
                .find(|p| p.slug == "electromagnetic-decay")
                .unwrap();
            project.media_groups = None;
        }
        let site =
            Atelier::with_parts(content, Arc::new(StaticFetcher::new()), "http://site.test")
                .unwrap();

        let en = site.groups(Lang::En, "electromagnetic-decay").await.unwrap();
        assert_eq!(en.images, vec![MediaGroup {
            label: "Set 1".to_string(),
            items: vec!["/em-decay-1.jpg".to_string(), "/em-decay-2.jpg".to_string()],
        }]);

        let zh = site.groups(Lang::Zh, "electromagnetic-decay").await.unwrap();
        assert_eq!(zh.images[0].label, "组 1");
    }

    #[tokio::test]
    async fn empty_kinds_yield_no_groups() {
        let site = atelier(StaticFetcher::new());
        let groups = site.groups(Lang::En, "fitting-reality").await.unwrap();
        for kind in MediaKind::ALL {
            assert!(groups.get(kind).is_empty());
        }
    }

    #[tokio::test]
    async fn brief_memoizes_and_reports_sentinel_on_failure() {
        let fetcher = StaticFetcher::new().with(
            "http://site.test/brief/Electromagnetic_Decay.txt",
            "A decaying signal chain.",
        );
        let site = atelier(fetcher);
        let text = site.brief(Lang::En, "electromagnetic-decay").await.unwrap();
        assert_eq!(text, "A decaying signal chain.");
        assert_eq!(
            site.text_state("electromagnetic-decay"),
            CacheState::Ready("A decaying signal chain.".to_string())
        );

        // bloom-system's brief is not served: sentinel, then NotFound state
        let missing = site.brief(Lang::En, "bloom-system").await.unwrap();
        assert_eq!(missing, "");
        assert_eq!(site.text_state("bloom-system"), CacheState::NotFound);
        assert_eq!(site.stats().text_cache_entries, 2);
    }

    #[tokio::test]
    async fn documents_are_none_when_not_declared() {
        let site = atelier(StaticFetcher::new());
        assert!(site.overview(Lang::En, "dys-utopia").await.unwrap().is_none());
        assert!(site.document(Lang::En, "dys-utopia").await.unwrap().is_none());
        assert!(site
            .updates_log(Lang::En, "electromagnetic-decay")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn unknown_project_is_an_error() {
        let site = atelier(StaticFetcher::new());
        assert!(site.groups(Lang::En, "nope").await.is_err());
        assert!(site.brief(Lang::En, "nope").await.is_err());
    }
}
