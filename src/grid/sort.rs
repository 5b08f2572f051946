//! Sort Engine
//!
//! Pure transitions over the applied column set maintaining a
//! multi-column sort precedence list. Sort precedence (`sort.index`,
//! 0 = primary key) is independent from display order and must not be
//! conflated with it; every transition returns a fresh state with the
//! display-order invariant restored.

use uuid::Uuid;

use crate::domain::column::{ColumnSort, SortDirection};
use crate::domain::state::AppliedState;

/// Advance a column through the 3-state cycle ASC → DESC → none
pub fn next_direction(current: Option<SortDirection>) -> Option<SortDirection> {
    match current {
        None => Some(SortDirection::Asc),
        Some(SortDirection::Asc) => Some(SortDirection::Desc),
        Some(SortDirection::Desc) => None,
    }
}

/// Clear the sort from every column
pub fn clean_sort(state: &AppliedState) -> AppliedState {
    let columns = state
        .columns()
        .iter()
        .cloned()
        .map(|mut column| {
            column.sort = None;
            column
        })
        .collect();
    AppliedState::from_columns(columns)
}

/// Apply a sort change to one column
///
/// Without `additive` (the multi-sort modifier) every other column's
/// sort is cleared first. Setting a direction assigns a precedence via
/// [`resolve_sort_index`]; only visible columns may receive an active
/// sort; a hidden target is a no-op for that column, the clearing
/// still happens. `None` removes the column's sort and closes the
/// precedence gap: every strictly-higher `sort.index` decrements by one.
pub fn apply_sort_change(
    state: &AppliedState,
    direction: Option<SortDirection>,
    property: &str,
    additive: bool,
) -> AppliedState {
    let Some(target) = state.column_by_property(property) else {
        tracing::warn!(property, "sort change for unknown column ignored");
        return state.clone();
    };
    let target_uuid = target.uuid;
    let removed_index = target.sort.map(|sort| sort.index);

    let mut columns: Vec<_> = if additive {
        state.columns().to_vec()
    } else {
        clean_sort(state).columns().to_vec()
    };

    match direction {
        Some(direction) => {
            let interim = AppliedState::from_columns(columns);
            let index = resolve_sort_index(&interim, target_uuid);
            let mut columns: Vec<_> = interim.columns().to_vec();
            if let Some(column) = columns.iter_mut().find(|c| c.uuid == target_uuid) {
                if column.visible {
                    column.sort = Some(ColumnSort { direction, index });
                } else {
                    tracing::debug!(property, "sort on hidden column ignored");
                }
            }
            AppliedState::from_columns(columns)
        }
        None => {
            let removed_index = removed_index.unwrap_or(0);
            for column in &mut columns {
                if let Some(sort) = column.sort.as_mut() {
                    if sort.index > removed_index {
                        sort.index -= 1;
                    }
                }
            }
            if let Some(column) = columns.iter_mut().find(|c| c.uuid == target_uuid) {
                column.sort = None;
            }
            AppliedState::from_columns(columns)
        }
    }
}

/// Resolve the precedence index for a column about to be sorted
///
/// No active sorts: the column becomes the primary key (0). A column
/// that is already sorted keeps its index (idempotent re-sort, e.g.
/// toggling direction). Otherwise the column appends as next-lowest
/// precedence, saturating so gesture-driven indices stay strictly
/// below the visible-column count.
pub fn resolve_sort_index(state: &AppliedState, target_uuid: Uuid) -> usize {
    let max_index = state
        .columns()
        .iter()
        .filter_map(|column| column.sort.map(|sort| sort.index))
        .max();

    let Some(max_index) = max_index else {
        return 0;
    };

    let existing = state
        .columns()
        .iter()
        .find(|column| column.uuid == target_uuid)
        .and_then(|column| column.sort);
    if let Some(sort) = existing {
        return sort.index;
    }

    if max_index + 1 < state.visible_count() {
        max_index + 1
    } else {
        max_index
    }
}

/// Derived sort parameter list: visible sorted columns ascending by
/// precedence, projected to `"<property>|<direction>"` tokens
pub fn sort_params(state: &AppliedState) -> Vec<String> {
    let mut sorted: Vec<_> = state
        .visible_columns()
        .filter(|column| column.sort.is_some())
        .collect();
    sorted.sort_by_key(|column| column.sort.map(|sort| sort.index));
    sorted
        .iter()
        .filter_map(|column| column.sort_token())
        .collect()
}
