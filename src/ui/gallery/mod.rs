//! Per-card artwork state.

mod intent;
mod reducer;
mod state;

pub use intent::ArtworkIntent;
pub use reducer::ArtworkReducer;
pub use state::{ArtworkGallery, ArtworkStatus};
