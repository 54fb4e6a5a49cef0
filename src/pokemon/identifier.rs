//! Identifier extraction from detail URLs.
//!
//! The identifier is the second-to-last `/`-delimited segment of a detail
//! URL, so `https://pokeapi.co/api/v2/pokemon/25/` yields `25`. Parsing is
//! strict: anything other than a non-empty run of ASCII digits is rejected.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("URL '{url}' has no identifier segment")]
    MissingSegment { url: String },

    #[error("URL '{url}' has non-numeric identifier segment '{segment}'")]
    NotNumeric { url: String, segment: String },
}

/// Numeric Pokémon identifier as it appears in the detail URL.
///
/// Kept as text so leading zeros (never produced by the API) survive a
/// round trip into the artwork URL unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PokemonId(String);

impl PokemonId {
    pub fn from_url(url: &str) -> Result<Self, IdentifierError> {
        let segment = url
            .rsplit('/')
            .nth(1)
            .filter(|segment| !segment.is_empty())
            .ok_or_else(|| IdentifierError::MissingSegment {
                url: url.to_string(),
            })?;

        if !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdentifierError::NotNumeric {
                url: url.to_string(),
                segment: segment.to_string(),
            });
        }

        Ok(Self(segment.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PokemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_trailing_slash_segment() {
        let id = PokemonId::from_url("https://pokeapi.co/api/v2/pokemon/25/").unwrap();
        assert_eq!(id.as_str(), "25");
    }

    #[test]
    fn extraction_is_repeatable() {
        let url = "https://pokeapi.co/api/v2/pokemon/133/";
        assert_eq!(
            PokemonId::from_url(url).unwrap(),
            PokemonId::from_url(url).unwrap()
        );
    }

    #[test]
    fn missing_trailing_slash_is_rejected() {
        // Without the trailing slash the second-to-last segment is "pokemon".
        let err = PokemonId::from_url("https://pokeapi.co/api/v2/pokemon/25").unwrap_err();
        assert_eq!(
            err,
            IdentifierError::NotNumeric {
                url: "https://pokeapi.co/api/v2/pokemon/25".into(),
                segment: "pokemon".into(),
            }
        );
    }

    #[test]
    fn url_without_slashes_is_missing_segment() {
        assert!(matches!(
            PokemonId::from_url("bulbasaur"),
            Err(IdentifierError::MissingSegment { .. })
        ));
    }

    #[test]
    fn empty_segment_is_missing() {
        assert!(matches!(
            PokemonId::from_url("https://pokeapi.co/api/v2/pokemon//"),
            Err(IdentifierError::MissingSegment { .. })
        ));
    }

    #[test]
    fn display_matches_segment() {
        let id = PokemonId::from_url("/pokemon/7/").unwrap();
        assert_eq!(id.to_string(), "7");
    }
}
