//! Column - Declarative and Applied Column Models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::SORT_PARAM_SEPARATOR;
use crate::domain::path::PropertyPath;

/// Direction of a column sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "ASC"),
            SortDirection::Desc => write!(f, "DESC"),
        }
    }
}

/// An active sort on a column
///
/// `index` is the column's rank among currently-sorted columns
/// (0 = primary sort key). It is independent from the column's
/// display index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSort {
    pub direction: SortDirection,
    pub index: usize,
}

/// A declarative column, owned by the caller
///
/// `index` and `sort` are optional; the normalizer fills display
/// indices from declaration order when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Display label
    pub name: String,
    /// Dotted path into the row type (e.g. `"data.weight"`)
    pub property: String,
    /// Whether the column is rendered
    pub visible: bool,
    /// Display ordering hint; defaults to declaration position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    /// Active sort, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<ColumnSort>,
    /// Width in percent of the table width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl Column {
    /// Create a visible column with defaulted ordering
    pub fn new(name: impl Into<String>, property: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            property: property.into(),
            visible: true,
            index: None,
            sort: None,
            width: None,
        }
    }

    /// Set the display index
    pub fn index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Set the active sort
    pub fn sort(mut self, direction: SortDirection, index: usize) -> Self {
        self.sort = Some(ColumnSort { direction, index });
        self
    }

    /// Set visibility
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the width in percent
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }
}

/// An applied column, owned by the grid engine
///
/// Derived from a [`Column`] by the normalizer: the display index is
/// resolved, the property path is parsed and validated, and a fresh
/// identity is generated. The uuid is stable for the lifetime of one
/// applied state and regenerates whenever a new declarative state is
/// pushed in.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedColumn {
    pub uuid: Uuid,
    pub name: String,
    pub property: PropertyPath,
    pub visible: bool,
    pub index: usize,
    pub sort: Option<ColumnSort>,
    pub width: Option<f64>,
}

impl AppliedColumn {
    /// Project back to the declarative shape (identity dropped)
    pub fn to_declarative(&self) -> Column {
        Column {
            name: self.name.clone(),
            property: self.property.to_string(),
            visible: self.visible,
            index: Some(self.index),
            sort: self.sort,
            width: self.width,
        }
    }

    /// Query token for this column's sort, e.g. `"data.weight|DESC"`
    pub fn sort_token(&self) -> Option<String> {
        self.sort.map(|sort| {
            format!(
                "{}{}{}",
                self.property, SORT_PARAM_SEPARATOR, sort.direction
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_direction_display() {
        assert_eq!(SortDirection::Asc.to_string(), "ASC");
        assert_eq!(SortDirection::Desc.to_string(), "DESC");
    }

    #[test]
    fn test_sort_direction_serde() {
        let json = serde_json::to_string(&SortDirection::Desc).expect("serialize direction");
        assert_eq!(json, "\"DESC\"");
        let back: SortDirection = serde_json::from_str("\"ASC\"").expect("deserialize direction");
        assert_eq!(back, SortDirection::Asc);
    }

    #[test]
    fn test_column_builder() {
        let column = Column::new("weight", "data.weight")
            .index(1)
            .sort(SortDirection::Asc, 0)
            .width(25.0);
        assert_eq!(column.index, Some(1));
        assert_eq!(
            column.sort,
            Some(ColumnSort {
                direction: SortDirection::Asc,
                index: 0
            })
        );
        assert!(column.visible);
    }

    #[test]
    fn test_declarative_round_trip_omits_absent_fields() {
        let column = Column::new("symbol", "symbol");
        let json = serde_json::to_value(&column).expect("serialize column");
        assert!(json.get("sort").is_none());
        assert!(json.get("index").is_none());
        assert!(json.get("width").is_none());
    }
}
