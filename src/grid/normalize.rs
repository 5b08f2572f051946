//! Column Model Normalizer
//!
//! Converts a caller-supplied declarative column list into the engine's
//! addressable, ordered applied set: fresh uuids, display indices
//! defaulted from declaration order, property paths parsed once, the
//! whole set sorted ascending by index (stable on ties).

use ahash::AHashSet;
use uuid::Uuid;

use crate::domain::column::{AppliedColumn, Column};
use crate::domain::path::PropertyPath;
use crate::domain::state::AppliedState;
use crate::error::{Error, Result};

/// Normalize a declarative column set into a fresh applied state
///
/// Pure function of its input; must be re-invoked whenever the caller
/// supplies a new declarative state. Prior uuids are never reused.
///
/// # Errors
///
/// Rejects malformed property paths and duplicate properties; all
/// engine lookups resolve by property equality, so duplicates would
/// make gesture targets ambiguous.
pub fn normalize(columns: &[Column]) -> Result<AppliedState> {
    let mut seen: AHashSet<&str> = AHashSet::with_capacity(columns.len());
    for column in columns {
        if !seen.insert(column.property.as_str()) {
            return Err(Error::DuplicateProperty {
                property: column.property.clone(),
            });
        }
    }

    let applied = columns
        .iter()
        .enumerate()
        .map(|(position, column)| {
            Ok(AppliedColumn {
                uuid: Uuid::new_v4(),
                name: column.name.clone(),
                property: PropertyPath::parse(&column.property)?,
                visible: column.visible,
                index: column.index.unwrap_or(position),
                sort: column.sort,
                width: column.width,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(AppliedState::from_columns(applied))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_defaults_to_declaration_position() {
        let state = normalize(&[
            Column::new("a", "a"),
            Column::new("b", "b"),
            Column::new("c", "c"),
        ])
        .expect("normalize");

        let indices: Vec<usize> = state.columns().iter().map(|c| c.index).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn test_sorted_ascending_by_index() {
        let state = normalize(&[
            Column::new("position", "position").index(2),
            Column::new("weight", "data.weight").index(1),
            Column::new("symbol", "symbol").index(3),
        ])
        .expect("normalize");

        let properties: Vec<&str> = state
            .columns()
            .iter()
            .map(|c| c.property.as_str())
            .collect();
        assert_eq!(properties, ["data.weight", "position", "symbol"]);
    }

    #[test]
    fn test_ties_keep_declaration_order() {
        let state = normalize(&[
            Column::new("a", "a").index(1),
            Column::new("b", "b").index(1),
            Column::new("c", "c").index(0),
        ])
        .expect("normalize");

        let properties: Vec<&str> = state
            .columns()
            .iter()
            .map(|c| c.property.as_str())
            .collect();
        assert_eq!(properties, ["c", "a", "b"]);
    }

    #[test]
    fn test_normalization_idempotent_on_display_order() {
        let first = normalize(&[
            Column::new("position", "position").index(2),
            Column::new("weight", "data.weight"),
            Column::new("symbol", "symbol").index(0),
        ])
        .expect("normalize");

        let second = normalize(&first.to_declarative().columns).expect("renormalize");
        let order = |state: &AppliedState| -> Vec<String> {
            state
                .columns()
                .iter()
                .map(|c| c.property.to_string())
                .collect()
        };
        assert_eq!(order(&first), order(&second));
    }

    #[test]
    fn test_uuids_regenerate_per_normalization() {
        let columns = vec![Column::new("a", "a"), Column::new("b", "b")];
        let first = normalize(&columns).expect("normalize");
        let second = normalize(&columns).expect("normalize");

        for (left, right) in first.columns().iter().zip(second.columns()) {
            assert_ne!(left.uuid, right.uuid);
        }
    }

    #[test]
    fn test_uuids_unique_within_one_state() {
        let state = normalize(&[
            Column::new("a", "a"),
            Column::new("b", "b"),
            Column::new("c", "c"),
        ])
        .expect("normalize");

        let mut uuids: Vec<_> = state.columns().iter().map(|c| c.uuid).collect();
        uuids.sort();
        uuids.dedup();
        assert_eq!(uuids.len(), 3);
    }

    #[test]
    fn test_duplicate_property_rejected() {
        let result = normalize(&[Column::new("a", "name"), Column::new("b", "name")]);
        assert!(matches!(
            result,
            Err(crate::error::Error::DuplicateProperty { property }) if property == "name"
        ));
    }

    #[test]
    fn test_malformed_path_rejected() {
        assert!(normalize(&[Column::new("bad", "a..b")]).is_err());
        assert!(normalize(&[Column::new("empty", "")]).is_err());
    }
}
