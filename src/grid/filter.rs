//! Client-Side Row Filtering
//!
//! Applies the active filter entity to a row array. A row is kept when
//! ANY active filter entry matches (logical OR across fields, not AND).
//! With backend filtering delegated, the predicate is bypassed and all
//! rows pass through; filtering is assumed already applied server-side
//! via the emitted grid params.

use serde_json::Value;

use crate::domain::filter::{FilterEntity, FilterMode};
use crate::domain::path::{PropertyPath, ValueAccess};

/// Filter rows against the active filter entity
pub fn filter_rows<'a, T: ValueAccess>(
    values: &'a [T],
    filter: &FilterEntity,
    backend_filter: bool,
    mode: FilterMode,
) -> Vec<&'a T> {
    if backend_filter || filter.is_empty() {
        return values.iter().collect();
    }

    values
        .iter()
        .filter(|row| matches_any(*row, filter, mode))
        .collect()
}

/// True when at least one active filter entry matches the row
pub fn matches_any<T: ValueAccess>(row: &T, filter: &FilterEntity, mode: FilterMode) -> bool {
    filter.entries().any(|(property, term)| {
        let Ok(path) = PropertyPath::parse(property) else {
            return false;
        };
        match row.value_at(&path) {
            Some(value) => matches_value(&value, term, mode),
            // Missing paths are non-matching, never an error.
            None => false,
        }
    })
}

fn matches_value(value: &Value, term: &str, mode: FilterMode) -> bool {
    let comparable = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Object(_) | Value::Array(_) => return false,
    };
    mode.matches(&comparable.to_lowercase(), &term.to_lowercase())
}
