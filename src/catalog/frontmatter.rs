//! Loosely-typed frontmatter access.
//!
//! Frontmatter is whatever YAML mapping a document author wrote. Nothing here
//! enforces a shape: accessors return `None` for missing or wrong-shaped
//! fields and callers skip them.

use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// Failure to read a frontmatter block.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// The block is not valid YAML.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The block is valid YAML but not a mapping.
    #[error("frontmatter must be a mapping, found {found}")]
    NotAMapping { found: &'static str },

    /// An opening `---` fence without a closing one.
    #[error("frontmatter block is not terminated by '---'")]
    Unterminated,
}

/// The metadata block of a catalog document, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter(Mapping);

impl Frontmatter {
    pub fn new(mapping: Mapping) -> Self {
        Self(mapping)
    }

    /// Parse a YAML document. An empty document is an empty mapping.
    pub fn from_yaml(text: &str) -> Result<Self, FrontmatterError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        match serde_yaml::from_str::<Value>(text)? {
            Value::Null => Ok(Self::default()),
            Value::Mapping(mapping) => Ok(Self(mapping)),
            other => Err(FrontmatterError::NotAMapping {
                found: value_kind(&other),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_seq(&self, key: &str) -> Option<&[Value]> {
        self.get(key)
            .and_then(Value::as_sequence)
            .map(|seq| seq.as_slice())
    }

    /// String-keyed entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0
            .iter()
            .filter_map(|(key, value)| key.as_str().map(|k| (k, value)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Mapping> for Frontmatter {
    fn from(mapping: Mapping) -> Self {
        Self(mapping)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
