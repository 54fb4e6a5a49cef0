use std::collections::HashMap;
use std::sync::Arc;

use crate::artwork::Thumbnail;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub enum ArtworkStatus {
    Pending,
    Ready(Arc<Thumbnail>),
    /// Download or decode failed; the card falls back to its name.
    Missing,
}

/// Artwork for the current grid, keyed by image URL.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArtworkGallery {
    entries: HashMap<String, ArtworkStatus>,
}

impl UiState for ArtworkGallery {}

impl ArtworkGallery {
    pub fn status(&self, url: &str) -> Option<&ArtworkStatus> {
        self.entries.get(url)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    pub fn pending_count(&self) -> usize {
        self.entries
            .values()
            .filter(|status| matches!(status, ArtworkStatus::Pending))
            .count()
    }

    pub(super) fn with_entry(mut self, url: String, status: ArtworkStatus) -> Self {
        self.entries.insert(url, status);
        self
    }
}
