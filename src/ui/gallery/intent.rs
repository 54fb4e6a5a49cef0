use std::sync::Arc;

use crate::artwork::Thumbnail;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ArtworkIntent {
    /// Downloads were started for these URLs.
    Requested { urls: Vec<String> },
    Loaded { url: String, thumbnail: Arc<Thumbnail> },
    Failed { url: String },
}

impl Intent for ArtworkIntent {}
