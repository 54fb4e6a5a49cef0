use serde::{Deserialize, Serialize};

/// One entry of the list endpoint's `results` array.
///
/// Entries arrive in API order and that order is the display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub name: String,
    /// Detail resource, e.g. `https://pokeapi.co/api/v2/pokemon/25/`.
    pub url: String,
}

impl PokemonSummary {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}
