//! Short identifiers for URIs
//!
//! Maps a URI to the compact name a builder uses as a key: the fragment if
//! there is one, otherwise the last path segment. A few well-known label and
//! type predicates map to fixed names.

use super::vocab::{RDFS_LABEL, RDF_TYPE, SKOS_PREF_LABEL};
use oxiri::IriRef;

/// Resolve a URI to its short identifier.
///
/// Returns `None` for anything that is not usable as a URI: strings without
/// a `/`, strings that do not parse as an IRI reference, and URIs whose
/// fragment and path are both empty.
///
/// ```rust
/// use grom::rdf::resolve_id;
///
/// assert_eq!(resolve_id("http://example.org/people/alice").as_deref(), Some("alice"));
/// assert_eq!(resolve_id("http://example.org/schema#Person").as_deref(), Some("Person"));
/// assert_eq!(resolve_id("alice"), None);
/// ```
pub fn resolve_id(uri: &str) -> Option<String> {
    if !uri.contains('/') {
        return None;
    }

    match uri {
        RDFS_LABEL => return Some("label".to_string()),
        SKOS_PREF_LABEL => return Some("prefLabel".to_string()),
        RDF_TYPE => return Some("type".to_string()),
        _ => {}
    }

    let iri = IriRef::parse(uri).ok()?;

    match iri.fragment() {
        Some(fragment) if !fragment.is_empty() => Some(fragment.to_string()),
        // Empty fragment (`http://x/a#`) counts as no identifier
        Some(_) => None,
        None => last_path_segment(iri.path()).map(str::to_string),
    }
}

fn last_path_segment(path: &str) -> Option<&str> {
    path.rsplit('/').find(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segment() {
        assert_eq!(resolve_id("http://x/knows"), Some("knows".to_string()));
        assert_eq!(
            resolve_id("https://id.parliament.uk/schema/personGivenName"),
            Some("personGivenName".to_string())
        );
    }

    #[test]
    fn test_fragment_wins_over_path() {
        assert_eq!(
            resolve_id("http://xmlns.com/foaf/0.1/Person#member"),
            Some("member".to_string())
        );
        assert_eq!(
            resolve_id("http://www.w3.org/2002/07/owl#sameAs"),
            Some("sameAs".to_string())
        );
    }

    #[test]
    fn test_special_cases() {
        assert_eq!(resolve_id(RDFS_LABEL), Some("label".to_string()));
        assert_eq!(resolve_id(SKOS_PREF_LABEL), Some("prefLabel".to_string()));
        assert_eq!(resolve_id(RDF_TYPE), Some("type".to_string()));
    }

    #[test]
    fn test_no_slash_is_absent() {
        assert_eq!(resolve_id(""), None);
        assert_eq!(resolve_id("knows"), None);
        assert_eq!(resolve_id("urn:isbn:0451450523"), None);
        assert_eq!(resolve_id("_:b0"), None);
    }

    #[test]
    fn test_trailing_slash_uses_last_segment() {
        assert_eq!(resolve_id("http://x/people/"), Some("people".to_string()));
    }

    #[test]
    fn test_empty_identifiers_are_absent() {
        assert_eq!(resolve_id("http://x"), None);
        assert_eq!(resolve_id("http://x/"), None);
        assert_eq!(resolve_id("http://x/a#"), None);
    }

    #[test]
    fn test_malformed_is_absent() {
        assert_eq!(resolve_id("http://x/a b"), None);
        assert_eq!(resolve_id("http://x/<a>"), None);
    }

    #[test]
    fn test_relative_reference() {
        assert_eq!(resolve_id("people/alice"), Some("alice".to_string()));
    }

    #[test]
    fn test_deterministic() {
        let uri = "http://example.org/ns#thing";
        assert_eq!(resolve_id(uri), resolve_id(uri));
    }
}
