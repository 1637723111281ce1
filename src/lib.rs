//! Grom
//!
//! Reads RDF N-Triples into an in-memory index that an object builder can
//! turn into typed domain objects.
//!
//! # Overview
//!
//! - Statements grouped by subject, in order of first appearance
//! - Links from each subject, keyed by a short predicate identifier
//!   (`http://xmlns.com/foaf/0.1/knows` → `knows`)
//! - `rdf:type` statements and literal values stay out of the link graph
//!
//! Each read builds fresh indices; nothing is cached between calls.
//!
//! ## Example Usage
//!
//! ```rust
//! use grom::rdf::index;
//!
//! let data = r#"
//! <http://example.org/alice> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://example.org/Person> .
//! <http://example.org/alice> <http://example.org/knows> <http://example.org/bob> .
//! "#;
//!
//! let (statements, edges) = index(data).unwrap();
//! assert_eq!(statements["http://example.org/alice"].len(), 2);
//! assert_eq!(edges["http://example.org/alice"]["knows"], vec!["http://example.org/bob"]);
//! assert!(!edges["http://example.org/alice"].contains_key("type"));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod rdf;

// Re-export main types for convenience
pub use rdf::{
    index, index_reader, resolve_id, Reader, ReaderConfig, IndexSummary,
    StatementsBySubject, EdgesBySubject, Statement, ObjectKind,
    ParseError, ParseResult,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
