//! PropertyPath - Validated Dotted Field Paths
//!
//! Addresses a possibly-nested field of a row type as a pre-validated
//! sequence of field names. Paths are parsed once, when a declarative
//! column set is normalized, so per-row lookups never re-validate.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::constants::PROPERTY_PATH_SEPARATOR;
use crate::error::{Error, Result};

/// A validated dotted path into a row, e.g. `"data.weight"`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    raw: String,
    segments: Vec<String>,
}

impl PropertyPath {
    /// Parse and validate a dotted path
    ///
    /// Rejects empty paths and empty segments (`"a..b"`, `".a"`, `"a."`).
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::Invalid {
                message: "property path is empty".to_string(),
            });
        }

        let segments: Vec<String> = raw
            .split(PROPERTY_PATH_SEPARATOR)
            .map(str::to_string)
            .collect();
        if segments.iter().any(String::is_empty) {
            return Err(Error::Invalid {
                message: format!("property path '{raw}' contains an empty segment"),
            });
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// Field names, outermost first
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The raw dotted form
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl std::fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for PropertyPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for PropertyPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        PropertyPath::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Row value lookup by [`PropertyPath`]
///
/// Implementors resolve a path to the scalar it addresses, or `None`
/// when the path misses (absent field, or a segment lands on a
/// non-traversable value). Missing values are treated as non-matching
/// by the filter engine, never as an error.
pub trait ValueAccess {
    fn value_at(&self, path: &PropertyPath) -> Option<Value>;
}

impl ValueAccess for Value {
    fn value_at(&self, path: &PropertyPath) -> Option<Value> {
        let mut current = self;
        for segment in path.segments() {
            current = current.as_object()?.get(segment)?;
        }
        // A path must land on a scalar; stopping short on an object or
        // array is a miss.
        match current {
            Value::Object(_) | Value::Array(_) => None,
            leaf => Some(leaf.clone()),
        }
    }
}
