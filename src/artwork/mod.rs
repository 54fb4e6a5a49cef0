//! Card artwork: download, decode and scale for terminal display.

mod loader;
mod thumbnail;

pub use loader::{ArtworkError, ArtworkLoader};
pub use thumbnail::{Rgb, Thumbnail, ThumbnailBounds};
