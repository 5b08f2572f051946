//! GridState - Declarative and Applied Grid State
//!
//! The caller supplies a declarative [`GridState`]; the engine owns the
//! derived [`AppliedState`]. Every mutation produces a complete new
//! applied column set (immutable-update discipline, no in-place field
//! mutation), kept sorted ascending by display index.

use serde::{Deserialize, Serialize};

use crate::domain::column::{AppliedColumn, Column};

/// Declarative grid state: an ordered set of column descriptors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GridState {
    pub columns: Vec<Column>,
}

impl GridState {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }
}

/// Engine-owned applied state
///
/// Invariant: columns are always sorted ascending by display `index`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppliedState {
    columns: Vec<AppliedColumn>,
}

impl AppliedState {
    /// Build from an already-normalized column set, restoring the
    /// display-order invariant.
    pub(crate) fn from_columns(mut columns: Vec<AppliedColumn>) -> Self {
        columns.sort_by_key(|column| column.index);
        Self { columns }
    }

    /// All columns, in display order
    pub fn columns(&self) -> &[AppliedColumn] {
        &self.columns
    }

    /// Visible columns, in display order
    pub fn visible_columns(&self) -> impl Iterator<Item = &AppliedColumn> {
        self.columns.iter().filter(|column| column.visible)
    }

    /// Property paths of visible columns, in display order
    pub fn visible_properties(&self) -> Vec<String> {
        self.visible_columns()
            .map(|column| column.property.to_string())
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible_columns().count()
    }

    /// Look up a column by property path
    ///
    /// Properties are unique (enforced at normalization), so at most
    /// one column can match.
    pub fn column_by_property(&self, property: &str) -> Option<&AppliedColumn> {
        self.columns
            .iter()
            .find(|column| column.property.as_str() == property)
    }

    /// Project back to the declarative shape for persistence
    pub fn to_declarative(&self) -> GridState {
        GridState {
            columns: self
                .columns
                .iter()
                .map(AppliedColumn::to_declarative)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::column::SortDirection;
    use crate::grid::normalize::normalize;

    fn sample_state() -> AppliedState {
        normalize(&[
            Column::new("position", "position").index(2),
            Column::new("weight", "data.weight").index(1),
            Column::new("symbol", "symbol").index(3).visible(false),
        ])
        .expect("normalize sample state")
    }

    #[test]
    fn test_visible_properties_in_display_order() {
        let state = sample_state();
        assert_eq!(state.visible_properties(), ["data.weight", "position"]);
        assert_eq!(state.visible_count(), 2);
    }

    #[test]
    fn test_column_lookup_by_property() {
        let state = sample_state();
        let column = state
            .column_by_property("data.weight")
            .expect("weight column");
        assert_eq!(column.name, "weight");
        assert!(state.column_by_property("nope").is_none());
    }

    #[test]
    fn test_declarative_projection_preserves_order_and_fields() {
        let state = sample_state();
        let declarative = state.to_declarative();
        assert_eq!(declarative.columns.len(), 3);
        // Display order, not declaration order.
        assert_eq!(declarative.columns[0].property, "data.weight");
        assert_eq!(declarative.columns[0].index, Some(1));
        assert!(!declarative.columns[2].visible);
    }

    #[test]
    fn test_declarative_round_trip_keeps_display_order() {
        let state = sample_state();
        let reapplied = normalize(&state.to_declarative().columns).expect("renormalize");
        assert_eq!(
            state.visible_properties(),
            reapplied.visible_properties()
        );
    }

    #[test]
    fn test_grid_state_serde_round_trip() {
        let declarative = GridState::new(vec![
            Column::new("position", "position").sort(SortDirection::Asc, 0),
            Column::new("symbol", "symbol").visible(false),
        ]);
        let json = serde_json::to_string(&declarative).expect("serialize state");
        let back: GridState = serde_json::from_str(&json).expect("deserialize state");
        assert_eq!(back, declarative);
    }
}
