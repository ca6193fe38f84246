use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content::{Lang, Project};

/// The three media kinds a project can carry groups for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Images,
    Videos,
    Audios,
}

impl MediaKind {
    pub const ALL: [MediaKind; 3] = [MediaKind::Images, MediaKind::Videos, MediaKind::Audios];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Images => "images",
            MediaKind::Videos => "videos",
            MediaKind::Audios => "audios",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Audio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaRole {
    Hero,
    Experience,
    Doc,
    System,
    Concept,
    Process,
}

/// A media item as declared in content. Type and role may be omitted when they
/// are inferable from the source path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItemSpec {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<MediaRole>,
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A fully resolved media item. Every item in a normalized list has a concrete
/// type and role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub role: MediaRole,
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A named, ordered collection of source paths of one kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaGroup {
    pub label: String,
    pub items: Vec<String>,
}

/// Canonical media shape: kind -> ordered labeled groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaGroups {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<MediaGroup>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<MediaGroup>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audios: Vec<MediaGroup>,
}

impl MediaGroups {
    pub fn get(&self, kind: MediaKind) -> &[MediaGroup] {
        match kind {
            MediaKind::Images => &self.images,
            MediaKind::Videos => &self.videos,
            MediaKind::Audios => &self.audios,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.videos.is_empty() && self.audios.is_empty()
    }
}

/// Flat per-kind source lists (legacy content shape, no role information).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaCollections {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audios: Vec<String>,
}

impl MediaCollections {
    pub fn get(&self, kind: MediaKind) -> &[String] {
        match kind {
            MediaKind::Images => &self.images,
            MediaKind::Videos => &self.videos,
            MediaKind::Audios => &self.audios,
        }
    }
}

/// A project's `media` field accepts either a flat list of typed items or
/// per-kind path arrays. Normalization collapses both into [`MediaGroups`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaSource {
    Items(Vec<MediaItemSpec>),
    Collections(MediaCollections),
}

/// Externally fetched media index: per kind, a label -> paths mapping.
/// JSON object order is preserved (serde_json `preserve_order`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaIndex {
    #[serde(default)]
    pub images: serde_json::Map<String, Value>,
    #[serde(default)]
    pub videos: serde_json::Map<String, Value>,
    #[serde(default)]
    pub audios: serde_json::Map<String, Value>,
}

impl MediaIndex {
    fn section(&self, kind: MediaKind) -> &serde_json::Map<String, Value> {
        match kind {
            MediaKind::Images => &self.images,
            MediaKind::Videos => &self.videos,
            MediaKind::Audios => &self.audios,
        }
    }

    /// Convert one section to groups, preserving mapping iteration order.
    /// Entries whose value is not an array of strings are skipped.
    pub fn groups(&self, kind: MediaKind) -> Vec<MediaGroup> {
        self.section(kind)
            .iter()
            .filter_map(|(label, value)| {
                let arr = value.as_array()?;
                let items = arr
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect();
                Some(MediaGroup { label: label.clone(), items })
            })
            .collect()
    }
}

pub fn infer_type_from_ext(src: &str) -> Option<MediaType> {
    let lower = src.to_ascii_lowercase();
    let ext = lower.rsplit('.').next()?;
    match ext {
        "jpg" | "jpeg" | "png" | "webp" | "gif" | "tif" | "tiff" => Some(MediaType::Image),
        "mp4" | "mov" | "webm" | "m4v" => Some(MediaType::Video),
        "wav" | "mp3" | "aiff" | "aac" | "ogg" => Some(MediaType::Audio),
        _ => None,
    }
}

pub fn infer_role_from_path(src: &str) -> Option<MediaRole> {
    let lower = src.to_ascii_lowercase();
    let has = |seg: &str, prefix: &str| lower.contains(seg) || lower.contains(prefix);
    if has("/hero/", "/hero_") {
        Some(MediaRole::Hero)
    } else if has("/experience/", "/experience_") {
        Some(MediaRole::Experience)
    } else if has("/concept/", "/concept_") {
        Some(MediaRole::Concept)
    } else if has("/system/", "/system_") {
        Some(MediaRole::System)
    } else if has("/process/", "/process_") {
        Some(MediaRole::Process)
    } else if has("/docs/", "/doc_") {
        Some(MediaRole::Doc)
    } else {
        None
    }
}

/// Resolve declared items to concrete ones, inferring missing type/role from
/// the source path. Items with no inferable type or role are dropped silently.
pub fn normalize_items(items: &[MediaItemSpec]) -> Vec<MediaItem> {
    items
        .iter()
        .filter_map(|spec| {
            let role = spec.role.or_else(|| infer_role_from_path(&spec.src));
            let media_type = spec.media_type.or_else(|| infer_type_from_ext(&spec.src));
            match (role, media_type) {
                (Some(role), Some(media_type)) => Some(MediaItem {
                    media_type,
                    role,
                    src: spec.src.clone(),
                    title: spec.title.clone(),
                    description: spec.description.clone(),
                }),
                _ => {
                    tracing::debug!(src = %spec.src, "dropping media item with no resolvable role or type");
                    None
                }
            }
        })
        .collect()
}

fn fallback_label(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "Set",
        Lang::Zh => "组",
    }
}

fn wrap(
    indexed: Vec<MediaGroup>,
    grouped: Option<&[MediaGroup]>,
    flat: Option<&[String]>,
    lang: Lang,
) -> Vec<MediaGroup> {
    if !indexed.is_empty() {
        return indexed;
    }
    if let Some(groups) = grouped {
        if !groups.is_empty() {
            return groups.to_vec();
        }
    }
    match flat {
        Some(items) if !items.is_empty() => vec![MediaGroup {
            label: format!("{} 1", fallback_label(lang)),
            items: items.to_vec(),
        }],
        _ => Vec::new(),
    }
}

/// Build the canonical group mapping for a project. Per kind, precedence is:
/// external index section, then declared groups, then flat paths wrapped as a
/// single localized "Set 1" group, then empty.
pub fn build_groups(project: &Project, lang: Lang, index: Option<&MediaIndex>) -> MediaGroups {
    let collections = project.media_collections();
    let per_kind = |kind: MediaKind| {
        let indexed = index.map(|ix| ix.groups(kind)).unwrap_or_default();
        let grouped = project
            .media_groups
            .as_ref()
            .map(|groups| groups.get(kind));
        let flat = collections.map(|c| c.get(kind));
        wrap(indexed, grouped, flat, lang)
    };
    MediaGroups {
        images: per_kind(MediaKind::Images),
        videos: per_kind(MediaKind::Videos),
        audios: per_kind(MediaKind::Audios),
    }
}

// --- Role-filtered views consumed by the overlay tabs ---

pub fn items_with_role(items: &[MediaItem], role: MediaRole) -> Vec<&MediaItem> {
    items.iter().filter(|m| m.role == role).collect()
}

pub fn images_with_role(items: &[MediaItem], role: MediaRole) -> Vec<&MediaItem> {
    items
        .iter()
        .filter(|m| m.role == role && m.media_type == MediaType::Image)
        .collect()
}

pub fn experience_videos(items: &[MediaItem]) -> Vec<&MediaItem> {
    items
        .iter()
        .filter(|m| m.role == MediaRole::Experience && m.media_type == MediaType::Video)
        .collect()
}

/// Sidebar filmstrip: hero images when present, experience images otherwise.
pub fn filmstrip(items: &[MediaItem]) -> Vec<&MediaItem> {
    let heroes = images_with_role(items, MediaRole::Hero);
    if !heroes.is_empty() {
        return heroes;
    }
    images_with_role(items, MediaRole::Experience)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(src: &str) -> MediaItemSpec {
        MediaItemSpec {
            media_type: None,
            role: None,
            src: src.to_string(),
            title: None,
            description: None,
        }
    }

    #[test]
    fn type_inference_covers_known_extensions() {
        assert_eq!(infer_type_from_ext("/a/b.JPG"), Some(MediaType::Image));
        assert_eq!(infer_type_from_ext("/a/b.webm"), Some(MediaType::Video));
        assert_eq!(infer_type_from_ext("/a/b.aiff"), Some(MediaType::Audio));
        assert_eq!(infer_type_from_ext("/a/b.txt"), None);
        assert_eq!(infer_type_from_ext("no-extension"), None);
    }

    #[test]
    fn role_inference_matches_segment_or_prefix() {
        assert_eq!(infer_role_from_path("/p/hero/x.jpg"), Some(MediaRole::Hero));
        assert_eq!(infer_role_from_path("/p/hero_01.jpg"), Some(MediaRole::Hero));
        assert_eq!(infer_role_from_path("/p/docs/x.jpg"), Some(MediaRole::Doc));
        assert_eq!(infer_role_from_path("/p/doc_01.jpg"), Some(MediaRole::Doc));
        assert_eq!(infer_role_from_path("/p/cover.jpg"), None);
    }

    #[test]
    fn normalize_fills_missing_fields_from_path() {
        let items = vec![spec("/p/system/system_diagram_01.png")];
        let out = normalize_items(&items);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].role, MediaRole::System);
        assert_eq!(out[0].media_type, MediaType::Image);
    }

    #[test]
    fn normalize_drops_unresolvable_items() {
        let items = vec![
            spec("/p/hero/hero_01.jpg"),
            spec("/p/mystery"),            // no extension, no role segment
            spec("/p/unknown-role.jpg"),   // type only
            spec("/p/process/no-ext-bin"), // role only
        ];
        let out = normalize_items(&items);
        assert_eq!(out.len(), items.len() - 3);
        assert_eq!(out[0].src, "/p/hero/hero_01.jpg");
    }

    #[test]
    fn index_groups_preserve_order_and_skip_malformed_entries() {
        let json = r#"{
            "videos": {
                "Cut B": ["/b1.mp4", "/b2.mp4"],
                "Cut A": ["/a1.mp4"],
                "Broken": "not-an-array"
            }
        }"#;
        let index: MediaIndex = serde_json::from_str(json).unwrap();
        let groups = index.groups(MediaKind::Videos);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].label, "Cut B");
        assert_eq!(groups[0].items, vec!["/b1.mp4", "/b2.mp4"]);
        assert_eq!(groups[1].label, "Cut A");
    }

    #[test]
    fn filmstrip_falls_back_to_experience_images() {
        let items = normalize_items(&[
            spec("/p/experience/experience_01.mp4"),
            spec("/p/experience/experience_02.jpg"),
        ]);
        let strip = filmstrip(&items);
        assert_eq!(strip.len(), 1);
        assert_eq!(strip[0].src, "/p/experience/experience_02.jpg");
    }
}
