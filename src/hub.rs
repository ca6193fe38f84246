use crate::media::{MediaGroups, MediaKind};

/// Overlay pane selection: one of the media kinds or the document tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubPane {
    Media(MediaKind),
    Doc,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupIndex {
    pub images: usize,
    pub videos: usize,
    pub audios: usize,
}

impl GroupIndex {
    fn get_mut(&mut self, kind: MediaKind) -> &mut usize {
        match kind {
            MediaKind::Images => &mut self.images,
            MediaKind::Videos => &mut self.videos,
            MediaKind::Audios => &mut self.audios,
        }
    }

    pub fn get(&self, kind: MediaKind) -> usize {
        match kind {
            MediaKind::Images => self.images,
            MediaKind::Videos => self.videos,
            MediaKind::Audios => self.audios,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MediaTotals {
    pub images: usize,
    pub videos: usize,
    pub audios: usize,
}

/// Session-local state of the media overlay: which project is open, which pane
/// is active, and the group/item selection per media kind. Opening or closing
/// resets all indices.
#[derive(Debug, Default)]
pub struct MediaHub {
    open_slug: Option<String>,
    pane: Option<HubPane>,
    group_index: GroupIndex,
    item_index: usize,
}

impl MediaHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_slug(&self) -> Option<&str> {
        self.open_slug.as_deref()
    }

    pub fn pane(&self) -> Option<HubPane> {
        self.pane
    }

    pub fn group_index(&self) -> GroupIndex {
        self.group_index
    }

    pub fn item_index(&self) -> usize {
        self.item_index
    }

    pub fn open(&mut self, slug: &str) {
        self.open_slug = Some(slug.to_string());
        self.pane = None;
        self.reset_indices();
    }

    pub fn close(&mut self) {
        self.open_slug = None;
        self.pane = None;
        self.reset_indices();
    }

    pub fn set_pane(&mut self, pane: Option<HubPane>) {
        self.pane = pane;
        self.item_index = 0;
        if let Some(HubPane::Media(kind)) = pane {
            *self.group_index.get_mut(kind) = 0;
        }
    }

    pub fn select_group(&mut self, kind: MediaKind, index: usize) {
        *self.group_index.get_mut(kind) = index;
        self.item_index = 0;
    }

    pub fn select_item(&mut self, index: usize) {
        self.item_index = index;
    }

    fn reset_indices(&mut self) {
        self.item_index = 0;
        self.group_index = GroupIndex::default();
    }

    /// Item counts per kind across all groups.
    pub fn totals(groups: &MediaGroups) -> MediaTotals {
        let sum = |kind: MediaKind| {
            groups
                .get(kind)
                .iter()
                .map(|group| group.items.len())
                .sum()
        };
        MediaTotals {
            images: sum(MediaKind::Images),
            videos: sum(MediaKind::Videos),
            audios: sum(MediaKind::Audios),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaGroup;

    #[test]
    fn open_resets_selection() {
        let mut hub = MediaHub::new();
        hub.open("dys-utopia");
        hub.set_pane(Some(HubPane::Media(MediaKind::Audios)));
        hub.select_group(MediaKind::Audios, 2);
        hub.select_item(3);

        hub.open("bloom-system");
        assert_eq!(hub.open_slug(), Some("bloom-system"));
        assert_eq!(hub.pane(), None);
        assert_eq!(hub.group_index(), GroupIndex::default());
        assert_eq!(hub.item_index(), 0);
    }

    #[test]
    fn switching_pane_resets_only_that_kinds_group() {
        let mut hub = MediaHub::new();
        hub.open("p");
        hub.select_group(MediaKind::Images, 1);
        hub.select_group(MediaKind::Audios, 2);
        hub.set_pane(Some(HubPane::Media(MediaKind::Audios)));
        assert_eq!(hub.group_index().audios, 0);
        assert_eq!(hub.group_index().images, 1);
        assert_eq!(hub.item_index(), 0);
    }

    #[test]
    fn totals_sum_items_across_groups() {
        let groups = MediaGroups {
            images: vec![
                MediaGroup { label: "A".into(), items: vec!["/1.jpg".into(), "/2.jpg".into()] },
                MediaGroup { label: "B".into(), items: vec!["/3.jpg".into()] },
            ],
            videos: vec![MediaGroup { label: "V".into(), items: vec!["/v.mp4".into()] }],
            audios: Vec::new(),
        };
        let totals = MediaHub::totals(&groups);
        assert_eq!(totals.images, 3);
        assert_eq!(totals.videos, 1);
        assert_eq!(totals.audios, 0);
    }
}
