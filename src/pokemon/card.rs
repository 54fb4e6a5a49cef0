//! Mapping from list entries to display cards.

use crate::pokemon::identifier::{IdentifierError, PokemonId};
use crate::pokemon::summary::PokemonSummary;

/// Placeholder replaced by the identifier in an artwork template.
pub const ID_PLACEHOLDER: &str = "{id}";

pub const DEFAULT_ARTWORK_TEMPLATE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/{id}.png";

/// Image address template with a single `{id}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkTemplate(String);

impl ArtworkTemplate {
    /// Returns `None` when the template has no `{id}` placeholder.
    pub fn new(template: impl Into<String>) -> Option<Self> {
        let template = template.into();
        template.contains(ID_PLACEHOLDER).then_some(Self(template))
    }

    pub fn image_url(&self, id: &PokemonId) -> String {
        self.0.replace(ID_PLACEHOLDER, id.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ArtworkTemplate {
    fn default() -> Self {
        Self(DEFAULT_ARTWORK_TEMPLATE.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Derived identifier. Not unique: two entries may share one.
    pub key: PokemonId,
    pub image_url: String,
    /// Raw name; see [`capitalize_words`] for the displayed form.
    pub label: String,
}

/// An entry whose identifier could not be derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    pub name: String,
    pub error: IdentifierError,
}

/// One grid slot, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridItem {
    Card(Card),
    Rejected(RejectedEntry),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardGrid {
    pub items: Vec<GridItem>,
}

impl CardGrid {
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.items.iter().filter_map(|item| match item {
            GridItem::Card(card) => Some(card),
            GridItem::Rejected(_) => None,
        })
    }

    pub fn rejected(&self) -> impl Iterator<Item = &RejectedEntry> {
        self.items.iter().filter_map(|item| match item {
            GridItem::Rejected(entry) => Some(entry),
            GridItem::Card(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub fn render_card(
    summary: &PokemonSummary,
    template: &ArtworkTemplate,
) -> Result<Card, IdentifierError> {
    let key = PokemonId::from_url(&summary.url)?;
    Ok(Card {
        image_url: template.image_url(&key),
        label: summary.name.clone(),
        key,
    })
}

/// Builds one grid item per summary, preserving order and duplicates.
pub fn render_cards(results: &[PokemonSummary], template: &ArtworkTemplate) -> CardGrid {
    let items = results
        .iter()
        .map(|summary| match render_card(summary, template) {
            Ok(card) => GridItem::Card(card),
            Err(error) => {
                tracing::warn!(name = %summary.name, %error, "Rejected list entry");
                GridItem::Rejected(RejectedEntry {
                    name: summary.name.clone(),
                    error,
                })
            }
        })
        .collect();
    CardGrid { items }
}

/// Uppercases the first letter of every whitespace-separated word.
pub fn capitalize_words(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for ch in name.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            at_word_start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, id: &str) -> PokemonSummary {
        PokemonSummary::new(name, format!("https://pokeapi.co/api/v2/pokemon/{id}/"))
    }

    #[test]
    fn template_requires_placeholder() {
        assert!(ArtworkTemplate::new("https://example.com/art.png").is_none());
        assert!(ArtworkTemplate::new("https://example.com/{id}.png").is_some());
    }

    #[test]
    fn default_template_builds_official_artwork_url() {
        let card = render_card(&summary("pikachu", "25"), &ArtworkTemplate::default()).unwrap();
        assert_eq!(
            card.image_url,
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/25.png"
        );
        assert_eq!(card.key.as_str(), "25");
        assert_eq!(card.label, "pikachu");
    }

    #[test]
    fn duplicates_are_kept() {
        let results = vec![summary("a", "1"), summary("b", "1")];
        let grid = render_cards(&results, &ArtworkTemplate::default());
        let keys: Vec<_> = grid.cards().map(|c| c.key.as_str().to_string()).collect();
        assert_eq!(keys, vec!["1", "1"]);
    }

    #[test]
    fn rejected_entries_keep_their_slot() {
        let results = vec![
            summary("a", "1"),
            PokemonSummary::new("broken", "not-a-url"),
            summary("c", "3"),
        ];
        let grid = render_cards(&results, &ArtworkTemplate::default());
        assert_eq!(grid.len(), 3);
        assert!(matches!(grid.items[1], GridItem::Rejected(ref r) if r.name == "broken"));
        assert_eq!(grid.rejected().count(), 1);
    }

    #[test]
    fn capitalize_words_handles_spaces() {
        assert_eq!(capitalize_words("bulbasaur"), "Bulbasaur");
        assert_eq!(capitalize_words("mr mime"), "Mr Mime");
        assert_eq!(capitalize_words("nidoran-f"), "Nidoran-f");
        assert_eq!(capitalize_words(""), "");
    }
}
