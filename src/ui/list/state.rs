//! State of the Pokémon list view.

use crate::pokemon::PokemonSummary;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListViewState {
    /// Nothing requested yet.
    #[default]
    Idle,

    /// Request in flight.
    Loading {
        /// Content from the last successful fetch, restored if the response
        /// carries no `results`.
        retained: Vec<PokemonSummary>,
    },

    Loaded { results: Vec<PokemonSummary> },

    Failed { message: String },
}

impl UiState for ListViewState {}

/// The single thing the body shows for a given state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Display<'a> {
    Spinner,
    Error(&'a str),
    Grid(&'a [PokemonSummary]),
}

impl ListViewState {
    /// Loading takes precedence over error, error over content.
    pub fn display(&self) -> Display<'_> {
        match self {
            Self::Idle | Self::Loading { .. } => Display::Spinner,
            Self::Failed { message } => Display::Error(message),
            Self::Loaded { results } => Display::Grid(results),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Visible content; empty unless loaded.
    pub fn results(&self) -> &[PokemonSummary] {
        match self {
            Self::Loaded { results } => results,
            _ => &[],
        }
    }

    /// True once the fetch cycle has ended either way.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Loaded { .. } | Self::Failed { .. })
    }
}
