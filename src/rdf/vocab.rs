//! Well-known vocabulary IRIs
//!
//! The predicates the identifier resolver special-cases and the reader uses
//! to keep type declarations out of the link graph.

/// `rdf:type`
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// `rdfs:label`
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

/// `skos:prefLabel`
pub const SKOS_PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";

/// Check whether an IRI is the `rdf:type` predicate
pub fn is_rdf_type(iri: &str) -> bool {
    iri == RDF_TYPE
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::vocab::{rdf, rdfs};

    #[test]
    fn test_constants_match_oxrdf() {
        assert_eq!(RDF_TYPE, rdf::TYPE.as_str());
        assert_eq!(RDFS_LABEL, rdfs::LABEL.as_str());
    }

    #[test]
    fn test_is_rdf_type() {
        assert!(is_rdf_type("http://www.w3.org/1999/02/22-rdf-syntax-ns#type"));
        assert!(!is_rdf_type("http://www.w3.org/2000/01/rdf-schema#label"));
        assert!(!is_rdf_type("type"));
    }
}
