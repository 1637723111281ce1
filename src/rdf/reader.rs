//! N-Triples reader
//!
//! Reads N-Triples text in a single pass and builds two indices keyed by
//! subject:
//!
//! - statements by subject: every statement, grouped under its subject
//! - edges by subject: for statements whose object is a URI or blank node,
//!   subject → short predicate identifier → linked object
//!
//! `rdf:type` statements never become edges; type information is only
//! available through the statement index.

use super::accumulator::{bucket, lazy_insert};
use super::config::{ReaderConfig, UnresolvedPredicatePolicy};
use super::identifier::resolve_id;
use super::types::{BlankNode, Literal, NamedNode, RdfObject, RdfSubject, Statement, TermError};
use indexmap::IndexMap;
use rio_api::model as rio;
use rio_api::parser::ParseError as _;
use rio_api::parser::TriplesParser;
use rio_turtle::{NTriplesParser, TurtleError};
use serde::Serialize;
use std::io::{BufRead, Read};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Subject string → statements with that subject, in input order
pub type StatementsBySubject = IndexMap<String, Vec<Statement>>;

/// Subject string → short predicate id → linked object strings, in input order
pub type EdgesBySubject = IndexMap<String, IndexMap<String, Vec<String>>>;

/// Parse errors
#[derive(Error, Debug)]
pub enum ParseError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not valid N-Triples
    #[error("Syntax error: {message}")]
    Syntax {
        /// Tokenizer message
        message: String,
        /// 1-based line of the error, when known
        line: Option<u64>,
        /// 1-based byte column within the line, when known
        column: Option<u64>,
    },

    /// A parsed term was rejected by the term model
    #[error("Invalid term: {0}")]
    InvalidTerm(#[from] TermError),

    /// RDF-star quoted triples and other non-N-Triples terms
    #[error("Unsupported term: {0}")]
    Unsupported(String),

    /// A link predicate has no short identifier and the reader is strict
    #[error("Predicate has no short identifier: {0}")]
    UnresolvedPredicate(String),
}

impl ParseError {
    /// Line of a syntax error, if the tokenizer reported one
    pub fn line(&self) -> Option<u64> {
        match self {
            ParseError::Syntax { line, .. } => *line,
            _ => None,
        }
    }

    /// Column of a syntax error, if the tokenizer reported one
    pub fn column(&self) -> Option<u64> {
        match self {
            ParseError::Syntax { column, .. } => *column,
            _ => None,
        }
    }
}

impl From<TurtleError> for ParseError {
    fn from(e: TurtleError) -> Self {
        let (line, column) = match e.textual_position() {
            Some(position) => (
                Some(position.line_number() as u64),
                Some(position.byte_number() as u64),
            ),
            None => (None, None),
        };

        ParseError::Syntax {
            message: e.to_string(),
            line,
            column,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Index N-Triples text with the default configuration
pub fn index(data: &str) -> ParseResult<(StatementsBySubject, EdgesBySubject)> {
    index_reader(data.as_bytes(), &ReaderConfig::default())
}

/// Index N-Triples from a buffered stream.
///
/// The stream is consumed statement by statement; the first error aborts
/// the read and nothing built so far is returned.
pub fn index_reader<R: BufRead>(
    input: R,
    config: &ReaderConfig,
) -> ParseResult<(StatementsBySubject, EdgesBySubject)> {
    let mut statements_by_subject = StatementsBySubject::new();
    let mut edges_by_subject = EdgesBySubject::new();

    NTriplesParser::new(input).parse_all(&mut |t| -> ParseResult<()> {
        let statement = convert_triple(t)?;
        let subject = statement.subject.string_form();
        let link = link_target(&statement, config)?;

        lazy_insert(&mut statements_by_subject, subject.clone(), statement);

        if let Some((predicate, object)) = link {
            lazy_insert(bucket(&mut edges_by_subject, subject), predicate, object);
        }

        Ok(())
    })?;

    debug!(
        "Indexed {} statements across {} subjects, {} with links",
        statements_by_subject.values().map(Vec::len).sum::<usize>(),
        statements_by_subject.len(),
        edges_by_subject.len()
    );

    Ok((statements_by_subject, edges_by_subject))
}

/// Short predicate id and object string for a statement that forms a link
fn link_target(
    statement: &Statement,
    config: &ReaderConfig,
) -> ParseResult<Option<(String, String)>> {
    if !statement.is_link_candidate() {
        return Ok(None);
    }

    let predicate = statement.predicate.as_str();
    match resolve_id(predicate) {
        Some(id) => Ok(Some((id, statement.object.string_form()))),
        None => match config.unresolved_predicates {
            UnresolvedPredicatePolicy::Drop => {
                warn!(
                    "Dropping link {} -> {}: predicate {} has no short identifier",
                    statement.subject.string_form(),
                    statement.object.string_form(),
                    predicate
                );
                Ok(None)
            }
            UnresolvedPredicatePolicy::Reject => {
                Err(ParseError::UnresolvedPredicate(predicate.to_string()))
            }
        },
    }
}

/// Counts describing a completed read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexSummary {
    /// Total statements read
    pub statements: usize,
    /// Distinct subjects
    pub subjects: usize,
    /// Subjects with at least one link
    pub linked_subjects: usize,
    /// Total links across all subjects and predicates
    pub links: usize,
}

/// Reads N-Triples data and keeps the data alongside both indices
#[derive(Debug, Clone)]
pub struct Reader {
    data: String,
    statements_by_subject: StatementsBySubject,
    edges_by_subject: EdgesBySubject,
}

impl Reader {
    /// Read N-Triples data with the default configuration
    pub fn new(data: impl Into<String>) -> ParseResult<Self> {
        Self::with_config(data, &ReaderConfig::default())
    }

    /// Read N-Triples data with a custom configuration
    pub fn with_config(data: impl Into<String>, config: &ReaderConfig) -> ParseResult<Self> {
        let data = data.into();
        let (statements_by_subject, edges_by_subject) = index_reader(data.as_bytes(), config)?;

        Ok(Self {
            data,
            statements_by_subject,
            edges_by_subject,
        })
    }

    /// Read N-Triples data from a stream, materializing it first
    pub fn from_buf_read<R: BufRead>(mut input: R, config: &ReaderConfig) -> ParseResult<Self> {
        let mut data = String::new();
        input.read_to_string(&mut data)?;
        Self::with_config(data, config)
    }

    /// Read N-Triples data from a file
    pub fn from_path(path: impl AsRef<Path>, config: &ReaderConfig) -> ParseResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::with_config(data, config)
    }

    /// The raw N-Triples data
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Statements grouped by subject
    pub fn statements_by_subject(&self) -> &StatementsBySubject {
        &self.statements_by_subject
    }

    /// Links grouped by subject and short predicate id
    pub fn edges_by_subject(&self) -> &EdgesBySubject {
        &self.edges_by_subject
    }

    /// Statements for one subject; empty if the subject is unknown
    pub fn statements_for(&self, subject: &str) -> &[Statement] {
        self.statements_by_subject
            .get(subject)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Objects linked from `subject` through `predicate` (a short id)
    pub fn links(&self, subject: &str, predicate: &str) -> &[String] {
        self.edges_by_subject
            .get(subject)
            .and_then(|predicates| predicates.get(predicate))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Subjects in order of first appearance
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.statements_by_subject.keys().map(String::as_str)
    }

    /// Total number of statements read
    pub fn statement_count(&self) -> usize {
        self.statements_by_subject.values().map(Vec::len).sum()
    }

    /// Counts for this read
    pub fn summary(&self) -> IndexSummary {
        IndexSummary {
            statements: self.statement_count(),
            subjects: self.statements_by_subject.len(),
            linked_subjects: self.edges_by_subject.len(),
            links: self
                .edges_by_subject
                .values()
                .flat_map(|predicates| predicates.values())
                .map(Vec::len)
                .sum(),
        }
    }

    /// Hand both indices over to a builder
    pub fn into_parts(self) -> (StatementsBySubject, EdgesBySubject) {
        (self.statements_by_subject, self.edges_by_subject)
    }
}

fn convert_triple(t: rio::Triple<'_>) -> ParseResult<Statement> {
    Ok(Statement::new(
        convert_subject(t.subject)?,
        NamedNode::new(t.predicate.iri)?,
        convert_object(t.object)?,
    ))
}

fn convert_subject(s: rio::Subject<'_>) -> ParseResult<RdfSubject> {
    match s {
        rio::Subject::NamedNode(n) => Ok(NamedNode::new(n.iri)?.into()),
        rio::Subject::BlankNode(b) => Ok(BlankNode::new(b.id)?.into()),
        other => Err(ParseError::Unsupported(other.to_string())),
    }
}

fn convert_object(o: rio::Term<'_>) -> ParseResult<RdfObject> {
    match o {
        rio::Term::NamedNode(n) => Ok(NamedNode::new(n.iri)?.into()),
        rio::Term::BlankNode(b) => Ok(BlankNode::new(b.id)?.into()),
        rio::Term::Literal(l) => match l {
            rio::Literal::Simple { value } => Ok(Literal::new_simple_literal(value).into()),
            rio::Literal::LanguageTaggedString { value, language } => {
                Ok(Literal::new_language_tagged_literal(value, language)?.into())
            }
            rio::Literal::Typed { value, datatype } => {
                let datatype = NamedNode::new(datatype.iri)?;
                Ok(Literal::new_typed_literal(value, datatype).into())
            }
        },
        other => Err(ParseError::Unsupported(other.to_string())),
    }
}
