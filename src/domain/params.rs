//! GridParams - Outbound Query Parameters
//!
//! The projection handed to a backend data source: active sort tokens,
//! visible column paths, and the flattened filter entity. Recomputed
//! after every filter, sort, visibility, or reorder change; column
//! widths never appear here.

use serde::Serialize;

use crate::domain::filter::FilterEntity;

/// Query-shaped projection of the current grid state
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GridParams {
    /// Sort tokens in precedence order, e.g. `["name|ASC", "symbol|DESC"]`
    pub sort: Vec<String>,
    /// Visible property paths, in display order
    pub columns: Vec<String>,
    /// Active filter terms, flattened alongside the fixed fields
    #[serde(flatten)]
    pub filter: FilterEntity,
}

impl GridParams {
    pub fn new(sort: Vec<String>, columns: Vec<String>, filter: FilterEntity) -> Self {
        Self {
            sort,
            columns,
            filter,
        }
    }
}
