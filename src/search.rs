use serde::{Deserialize, Serialize};

use crate::content::{Lang, Theme, ThemeId};

/// Recommended input debounce before invoking [`search`]; the engine itself is
/// synchronous and stateless per call.
pub const DEBOUNCE_MS: u64 = 200;

/// Result list cap.
pub const MAX_RESULTS: usize = 20;

const THEME_SCORE: u32 = 50;
const PROJECT_TOKEN_SCORE: u32 = 10;
const UPDATE_TOKEN_SCORE: u32 = 3;
const TAG_SCORE: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Theme,
    Project,
    Tag,
    Update,
}

impl ResultKind {
    pub fn label(&self) -> &'static str {
        match self {
            ResultKind::Theme => "theme",
            ResultKind::Project => "project",
            ResultKind::Tag => "tag",
            ResultKind::Update => "update",
        }
    }
}

/// Ephemeral match, recomputed per query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub kind: ResultKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<ThemeId>,
    pub score: u32,
}

fn tokenize(query: &str) -> Vec<String> {
    query
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Linear scan-and-score over the content tree. Naive substring matching by
/// design: the content set is a few dozen items. Scoring weights (50/10/3/5)
/// and the score>0 gate for projects are load-bearing; ranking tests assert
/// on them.
pub fn search(themes: &[Theme], lang: Lang, query: &str) -> Vec<SearchResult> {
    let terms = tokenize(query);
    if terms.is_empty() {
        return Vec::new();
    }
    let mut results = Vec::new();

    for theme in themes {
        let hay = format!("{} {}", theme.title, theme.intro).to_lowercase();
        if terms.iter().all(|t| hay.contains(t.as_str())) {
            results.push(SearchResult {
                kind: ResultKind::Theme,
                title: theme.title.clone(),
                subtitle: Some(match lang {
                    Lang::En => "Theme".to_string(),
                    Lang::Zh => "主题".to_string(),
                }),
                slug: None,
                theme_id: Some(theme.id),
                score: THEME_SCORE,
            });
        }
        for project in &theme.projects {
            let base = format!("{} {} {}", project.title, project.summary, project.tags.join(" "))
                .to_lowercase();
            let mut score = 0;
            for term in &terms {
                if base.contains(term.as_str()) {
                    score += PROJECT_TOKEN_SCORE;
                }
            }
            if !project.updates.is_empty() {
                let updates = project
                    .updates
                    .iter()
                    .map(|u| format!("{} {}", u.date, u.text))
                    .collect::<Vec<_>>()
                    .join(" ")
                    .to_lowercase();
                for term in &terms {
                    if updates.contains(term.as_str()) {
                        score += UPDATE_TOKEN_SCORE;
                    }
                }
            }
            if score > 0 {
                results.push(SearchResult {
                    kind: ResultKind::Project,
                    title: project.title.clone(),
                    subtitle: Some(theme.title.clone()),
                    slug: Some(project.slug.clone()),
                    theme_id: Some(theme.id),
                    score,
                });
            }
            for tag in &project.tags {
                let low = tag.to_lowercase();
                if terms.iter().all(|t| low.contains(t.as_str())) {
                    let subtitle = match lang {
                        Lang::En => format!("Tag of {}", project.title),
                        Lang::Zh => project.title.clone(),
                    };
                    results.push(SearchResult {
                        kind: ResultKind::Tag,
                        title: tag.clone(),
                        subtitle: Some(subtitle),
                        slug: Some(project.slug.clone()),
                        theme_id: Some(theme.id),
                        score: TAG_SCORE,
                    });
                }
            }
        }
    }

    // Descending score; ties broken by the lexicographic kind label so equal
    // inputs always produce identical output.
    results.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.kind.label().cmp(b.kind.label()))
    });
    results.truncate(MAX_RESULTS);
    results
}
