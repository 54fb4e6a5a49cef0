use crate::ui::mvi::Reducer;

use super::intent::ArtworkIntent;
use super::state::{ArtworkGallery, ArtworkStatus};

pub struct ArtworkReducer;

impl Reducer for ArtworkReducer {
    type State = ArtworkGallery;
    type Intent = ArtworkIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ArtworkIntent::Requested { urls } => urls.into_iter().fold(state, |state, url| {
                if state.contains(&url) {
                    state
                } else {
                    state.with_entry(url, ArtworkStatus::Pending)
                }
            }),
            ArtworkIntent::Loaded { url, thumbnail } => {
                state.with_entry(url, ArtworkStatus::Ready(thumbnail))
            }
            ArtworkIntent::Failed { url } => state.with_entry(url, ArtworkStatus::Missing),
        }
    }
}
