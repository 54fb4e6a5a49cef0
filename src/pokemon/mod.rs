//! Pokémon list entries and the cards derived from them.

mod card;
mod identifier;
mod summary;

pub use card::{
    capitalize_words, render_card, render_cards, ArtworkTemplate, Card, CardGrid, GridItem,
    RejectedEntry, DEFAULT_ARTWORK_TEMPLATE, ID_PLACEHOLDER,
};
pub use identifier::{IdentifierError, PokemonId};
pub use summary::PokemonSummary;
