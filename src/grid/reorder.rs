//! Reorder/Resize Engine
//!
//! Drag-drop column reordering operates over the visible subset in
//! display order and swaps display indices. Resizing persists measured
//! widths back into column state once the sequence ends; live visual
//! feedback during the drag belongs to the rendering collaborator.

use ahash::AHashMap;
use uuid::Uuid;

use crate::constants::{MAX_COLUMN_WIDTH_PERCENT, MIN_COLUMN_WIDTH_PERCENT};
use crate::domain::state::AppliedState;

/// Map from column identity to its measured width (percent), supplied
/// by the rendering collaborator on resize end
pub type MeasuredWidths = AHashMap<Uuid, f64>;

/// Drop a dragged column onto a display position among visible columns
///
/// The dragged column and the column currently occupying the target
/// position exchange display indices; every other column keeps its
/// index. Out-of-range targets and unknown dragged properties degrade
/// to a no-op.
pub fn drop_column(
    state: &AppliedState,
    target_visible_index: usize,
    dragged_property: &str,
) -> AppliedState {
    let Some(dragged) = state.column_by_property(dragged_property) else {
        tracing::warn!(property = dragged_property, "drop of unknown column ignored");
        return state.clone();
    };
    let Some(target) = state.visible_columns().nth(target_visible_index) else {
        tracing::warn!(
            target_visible_index,
            "drop target outside visible range ignored"
        );
        return state.clone();
    };

    if target.uuid == dragged.uuid {
        return state.clone();
    }

    let dragged_uuid = dragged.uuid;
    let target_uuid = target.uuid;
    let dragged_index = dragged.index;
    let target_index = target.index;

    let columns = state
        .columns()
        .iter()
        .cloned()
        .map(|mut column| {
            if column.uuid == dragged_uuid {
                column.index = target_index;
            } else if column.uuid == target_uuid {
                column.index = dragged_index;
            }
            column
        })
        .collect();
    AppliedState::from_columns(columns)
}

/// Persist measured widths back into the applied state
///
/// Columns without a measurement keep their previous width. Measured
/// values clamp into the supported percent range.
pub fn apply_measured_widths(state: &AppliedState, widths: &MeasuredWidths) -> AppliedState {
    let columns = state
        .columns()
        .iter()
        .cloned()
        .map(|mut column| {
            if let Some(width) = widths.get(&column.uuid) {
                column.width =
                    Some(width.clamp(MIN_COLUMN_WIDTH_PERCENT, MAX_COLUMN_WIDTH_PERCENT));
            }
            column
        })
        .collect();
    AppliedState::from_columns(columns)
}
