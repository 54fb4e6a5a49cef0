//! Terminal Pokédex list.
//!
//! Fetches the first page of Pokémon from PokeAPI and shows each entry as a
//! card with its official artwork and name.
//!
//! ```text
//! fetcher ──ListIntent──→ ui::list reducer ──→ pokemon::render_cards ──→ view
//!                                                     │
//!                              artwork loader ←───────┘ (one GET per card)
//! ```

pub mod api;
pub mod artwork;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod plain;
pub mod pokemon;
pub mod shutdown;
pub mod ui;
