use crate::ui::mvi::Reducer;

use super::intent::ListIntent;
use super::state::ListViewState;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListViewState;
    type Intent = ListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::FetchStarted => match state {
                ListViewState::Loaded { results } => ListViewState::Loading { retained: results },
                loading @ ListViewState::Loading { .. } => loading,
                ListViewState::Idle | ListViewState::Failed { .. } => ListViewState::Loading {
                    retained: Vec::new(),
                },
            },

            ListIntent::ResultsReceived(results) => match state {
                ListViewState::Loading { .. } => ListViewState::Loading { retained: results },
                other => other,
            },

            ListIntent::FetchFailed { message } => match state {
                ListViewState::Loading { .. } => ListViewState::Failed { message },
                other => other,
            },

            ListIntent::FetchFinished => match state {
                ListViewState::Loading { retained } => ListViewState::Loaded { results: retained },
                other => other,
            },
        }
    }
}
