//! Reader configuration
//!
//! Defaults match the behaviour callers get from `Reader::new`. A config can
//! also be loaded from YAML, e.g.
//!
//! ```yaml
//! unresolved_predicates: reject
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML error
    #[error("Invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// What to do with a link whose predicate has no short identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedPredicatePolicy {
    /// Skip the link and log a warning
    #[default]
    Drop,
    /// Fail the read with `ParseError::UnresolvedPredicate`
    Reject,
}

/// Reader configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Handling of link predicates that resolve to no identifier
    pub unresolved_predicates: UnresolvedPredicatePolicy,
}

impl ReaderConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail instead of dropping links with unresolvable predicates
    pub fn strict(mut self) -> Self {
        self.unresolved_predicates = UnresolvedPredicatePolicy::Reject;
        self
    }

    /// Parse a configuration from a YAML document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_drops() {
        let config = ReaderConfig::new();
        assert_eq!(config.unresolved_predicates, UnresolvedPredicatePolicy::Drop);
    }

    #[test]
    fn test_strict() {
        let config = ReaderConfig::new().strict();
        assert_eq!(config.unresolved_predicates, UnresolvedPredicatePolicy::Reject);
    }

    #[test]
    fn test_from_yaml() {
        let config = ReaderConfig::from_yaml_str("unresolved_predicates: reject\n").unwrap();
        assert_eq!(config.unresolved_predicates, UnresolvedPredicatePolicy::Reject);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = ReaderConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, ReaderConfig::default());
    }

    #[test]
    fn test_unknown_policy_is_an_error() {
        let result = ReaderConfig::from_yaml_str("unresolved_predicates: ignore\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "unresolved_predicates: drop").unwrap();

        let config = ReaderConfig::from_file(file.path()).unwrap();
        assert_eq!(config.unresolved_predicates, UnresolvedPredicatePolicy::Drop);
    }

    #[test]
    fn test_missing_file() {
        let result = ReaderConfig::from_file("/nonexistent/grom.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
