use crate::pokemon::PokemonSummary;
use crate::ui::mvi::Intent;

/// Events produced by one fetch cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ListIntent {
    FetchStarted,
    /// Response carried a `results` list.
    ResultsReceived(Vec<PokemonSummary>),
    FetchFailed { message: String },
    /// Emitted on every exit path, after any of the above.
    FetchFinished,
}

impl Intent for ListIntent {}
