//! RDF N-Triples reading and indexing
//!
//! This module turns N-Triples text into two subject-keyed indices that a
//! downstream object builder consumes:
//! - statements grouped by subject, in input order
//! - links between subjects, keyed by short predicate identifier
//!
//! Predicate URIs are shortened to their fragment or last path segment, with
//! fixed names for `rdfs:label`, `skos:prefLabel` and `rdf:type`.
//!
//! # Example
//!
//! ```rust
//! use grom::rdf::Reader;
//!
//! let data = r#"
//! <http://example.org/alice> <http://xmlns.com/foaf/0.1/name> "Alice" .
//! <http://example.org/alice> <http://xmlns.com/foaf/0.1/knows> <http://example.org/bob> .
//! "#;
//!
//! let reader = Reader::new(data).unwrap();
//! assert_eq!(reader.statements_for("http://example.org/alice").len(), 2);
//! assert_eq!(reader.links("http://example.org/alice", "knows"), ["http://example.org/bob"]);
//! ```

mod accumulator;
mod config;
mod identifier;
mod reader;
mod types;
pub mod vocab;

pub use accumulator::{bucket, lazy_insert};

pub use config::{
    ReaderConfig, UnresolvedPredicatePolicy,
    ConfigError, ConfigResult,
};

pub use identifier::resolve_id;

pub use reader::{
    index, index_reader, Reader, IndexSummary,
    StatementsBySubject, EdgesBySubject,
    ParseError, ParseResult,
};

pub use types::{
    NamedNode, BlankNode, Literal,
    RdfSubject, RdfObject, ObjectKind, Statement,
    TermError, TermResult,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rdf_module_exports() {
        // Verify all main types are exported
        let _config: ReaderConfig = ReaderConfig::default();
        let _statements = StatementsBySubject::new();
        let _edges = EdgesBySubject::new();
        assert_eq!(resolve_id(vocab::RDF_TYPE).as_deref(), Some("type"));
    }
}
