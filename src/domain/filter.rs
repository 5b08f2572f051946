//! Filter - Per-Column Filter Terms and Matching Modes

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// How a filter term is compared against a row value
///
/// Comparison is always case-insensitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterMode {
    Contains,
    #[default]
    Equals,
    StartWith,
}

impl FilterMode {
    /// Apply the mode to a pair of already-lowercased strings
    pub fn matches(&self, value: &str, term: &str) -> bool {
        match self {
            FilterMode::Contains => value.contains(term),
            FilterMode::Equals => value == term,
            FilterMode::StartWith => value.starts_with(term),
        }
    }
}

/// Active filter terms, keyed by row property path
///
/// An absent key means "no active filter on that column". The map is
/// ordered so serialized params stay deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterEntity(BTreeMap<String, String>);

impl FilterEntity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the term for a property; an empty term clears the entry
    pub fn set(&mut self, property: &str, term: &str) {
        if term.is_empty() {
            self.0.remove(property);
        } else {
            self.0.insert(property.to_string(), term.to_string());
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Active entries as `(property, term)` pairs
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_mode_serde_names() {
        assert_eq!(
            serde_json::to_string(&FilterMode::StartWith).expect("serialize mode"),
            "\"startWith\""
        );
        assert_eq!(
            serde_json::to_string(&FilterMode::Contains).expect("serialize mode"),
            "\"contains\""
        );
        let mode: FilterMode = serde_json::from_str("\"equals\"").expect("deserialize mode");
        assert_eq!(mode, FilterMode::Equals);
    }

    #[test]
    fn test_filter_mode_matching() {
        assert!(FilterMode::Contains.matches("lithium", "thi"));
        assert!(!FilterMode::Equals.matches("lithium", "thi"));
        assert!(FilterMode::Equals.matches("li", "li"));
        assert!(FilterMode::StartWith.matches("lithium", "li"));
        assert!(!FilterMode::StartWith.matches("lithium", "thium"));
    }

    #[test]
    fn test_empty_term_clears_entry() {
        let mut filter = FilterEntity::new();
        filter.set("name", "li");
        assert_eq!(filter.get("name"), Some("li"));
        filter.set("name", "");
        assert_eq!(filter.get("name"), None);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let mut filter = FilterEntity::new();
        filter.set("name", "li");
        filter.set("symbol", "zz");
        let json = serde_json::to_value(&filter).expect("serialize filter");
        assert_eq!(json, serde_json::json!({ "name": "li", "symbol": "zz" }));
    }
}
