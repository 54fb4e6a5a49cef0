//! View state transitions across whole fetch cycles.

use pokelist::api::FETCH_FAILED_MESSAGE;
use pokelist::pokemon::PokemonSummary;
use pokelist::ui::list::{Display, ListIntent, ListReducer, ListViewState};
use pokelist::ui::mvi::dispatch;

fn fold(state: &mut ListViewState, intents: Vec<ListIntent>) {
    for intent in intents {
        dispatch::<ListReducer>(state, intent);
    }
}

fn two_entries() -> Vec<PokemonSummary> {
    vec![
        PokemonSummary::new("bulbasaur", "https://pokeapi.co/api/v2/pokemon/1/"),
        PokemonSummary::new("ivysaur", "https://pokeapi.co/api/v2/pokemon/2/"),
    ]
}

fn failed() -> ListIntent {
    ListIntent::FetchFailed {
        message: FETCH_FAILED_MESSAGE.to_string(),
    }
}

#[test]
fn test_loading_shown_before_resolution() {
    let mut state = ListViewState::default();
    fold(&mut state, vec![ListIntent::FetchStarted]);
    assert_eq!(state.display(), Display::Spinner);
    assert!(state.error_message().is_none());
    assert!(state.results().is_empty());

    fold(&mut state, vec![ListIntent::ResultsReceived(two_entries())]);
    assert_eq!(state.display(), Display::Spinner);
}

#[test]
fn test_success_cycle_shows_grid() {
    let mut state = ListViewState::default();
    fold(
        &mut state,
        vec![
            ListIntent::FetchStarted,
            ListIntent::ResultsReceived(two_entries()),
            ListIntent::FetchFinished,
        ],
    );
    assert_eq!(state.display(), Display::Grid(&two_entries()));
    assert!(state.is_settled());
}

#[test]
fn test_failure_clears_prior_content() {
    let mut state = ListViewState::Loaded {
        results: two_entries(),
    };
    fold(
        &mut state,
        vec![ListIntent::FetchStarted, failed(), ListIntent::FetchFinished],
    );
    assert_eq!(state.display(), Display::Error(FETCH_FAILED_MESSAGE));
    assert!(state.results().is_empty());
}

#[test]
fn test_no_update_restores_prior_content() {
    let mut state = ListViewState::Loaded {
        results: two_entries(),
    };
    fold(
        &mut state,
        vec![ListIntent::FetchStarted, ListIntent::FetchFinished],
    );
    assert_eq!(
        state,
        ListViewState::Loaded {
            results: two_entries()
        }
    );
}

#[test]
fn test_no_update_on_first_fetch_is_empty_grid() {
    let mut state = ListViewState::default();
    fold(
        &mut state,
        vec![ListIntent::FetchStarted, ListIntent::FetchFinished],
    );
    assert_eq!(state.display(), Display::Grid(&[]));
}

#[test]
fn test_intents_outside_a_cycle_are_ignored() {
    let mut state = ListViewState::default();
    fold(
        &mut state,
        vec![
            ListIntent::ResultsReceived(two_entries()),
            failed(),
            ListIntent::FetchFinished,
        ],
    );
    assert_eq!(state, ListViewState::Idle);
}
