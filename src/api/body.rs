use serde_json::Value;

use crate::pokemon::PokemonSummary;

/// Extracts `results` from a list response body.
///
/// `Ok(None)` means "no update": the body is empty, `null`, not an object,
/// or has no non-null `results` field. A `results` value that is not a list
/// of `{name, url}` objects is a decode error.
pub fn parse_list_body(bytes: &[u8]) -> Result<Option<Vec<PokemonSummary>>, serde_json::Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let Value::Object(mut body) = serde_json::from_slice::<Value>(bytes)? else {
        return Ok(None);
    };

    match body.remove("results") {
        None | Some(Value::Null) => Ok(None),
        Some(results) => serde_json::from_value(results).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_results_in_order() {
        let body = br#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
            ]
        }"#;
        let results = parse_list_body(body).unwrap().unwrap();
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["bulbasaur", "ivysaur"]);
    }

    #[test]
    fn empty_results_is_an_update() {
        assert_eq!(parse_list_body(br#"{"results": []}"#).unwrap(), Some(vec![]));
    }

    #[test]
    fn missing_results_is_no_update() {
        assert_eq!(parse_list_body(br#"{"count": 0}"#).unwrap(), None);
        assert_eq!(parse_list_body(br#"{"results": null}"#).unwrap(), None);
    }

    #[test]
    fn non_object_bodies_are_no_update() {
        assert_eq!(parse_list_body(b"").unwrap(), None);
        assert_eq!(parse_list_body(b"  \n").unwrap(), None);
        assert_eq!(parse_list_body(b"null").unwrap(), None);
        assert_eq!(parse_list_body(b"[1, 2]").unwrap(), None);
        assert_eq!(parse_list_body(br#""text""#).unwrap(), None);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_list_body(b"{\"results\": [").is_err());
    }

    #[test]
    fn wrongly_shaped_results_are_an_error() {
        assert!(parse_list_body(br#"{"results": "nope"}"#).is_err());
        assert!(parse_list_body(br#"{"results": [{"name": "x"}]}"#).is_err());
    }
}
