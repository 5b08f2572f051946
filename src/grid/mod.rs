//! Grid Engine
//!
//! The state engine behind the grid widget: normalizes a declarative
//! column configuration, applies user gestures through the sort,
//! selection, reorder/resize and filter engines, and re-derives the
//! outbound query params after every mutation. Each operation runs to
//! completion synchronously inside the host's event handler; there is
//! no internal concurrency.

pub mod filter;
pub mod normalize;
pub mod reorder;
pub mod selection;
pub mod sort;

pub use reorder::MeasuredWidths;
pub use selection::{Modifiers, RangeDirection, SameRow, SelectionState};

use std::sync::Arc;

use crate::domain::filter::{FilterEntity, FilterMode};
use crate::domain::params::GridParams;
use crate::domain::path::ValueAccess;
use crate::domain::state::{AppliedState, GridState};
use crate::domain::SortDirection;
use crate::error::Result;
use crate::eventing::{EventHub, GridEvent};
use crossbeam_channel::Receiver;

/// Feature gates and filter behavior for one grid instance
///
/// Every gesture family is disabled by default; the host opts in.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GridOptions {
    pub enable_filter: bool,
    pub enable_sorting: bool,
    pub enable_reorder: bool,
    pub enable_resize: bool,
    pub enable_select: bool,
    /// Delegate filtering to a backend: the client-side predicate is
    /// bypassed and rows pass through unfiltered
    pub backend_filter: bool,
    pub filter_mode: FilterMode,
}

impl GridOptions {
    /// Enable every gesture family (convenient for hosts and tests)
    pub fn all_enabled() -> Self {
        Self {
            enable_filter: true,
            enable_sorting: true,
            enable_reorder: true,
            enable_resize: true,
            enable_select: true,
            backend_filter: false,
            filter_mode: FilterMode::default(),
        }
    }
}

/// The grid state engine
///
/// Owns the applied column set, filter entity and selection; emits a
/// [`GridEvent`] for every externally visible change. The caller only
/// ever submits declarative state; applied columns are engine-owned.
pub struct GridEngine<T> {
    options: GridOptions,
    state: AppliedState,
    filter: FilterEntity,
    selection: SelectionState<T>,
    same_row: SameRow<T>,
    params: GridParams,
    hub: EventHub<T>,
    resizing: bool,
}

impl<T: Clone> GridEngine<T> {
    /// Build an engine from a declarative state and a row-equivalence
    /// predicate
    pub fn new(
        state: GridState,
        same_row: impl Fn(&T, &T) -> bool + 'static,
        options: GridOptions,
    ) -> Result<Self> {
        let applied = normalize::normalize(&state.columns)?;
        let mut engine = Self {
            options,
            state: applied,
            filter: FilterEntity::new(),
            selection: SelectionState::new(),
            same_row: Arc::new(same_row),
            params: GridParams::default(),
            hub: EventHub::new(),
            resizing: false,
        };
        engine.params = engine.project_params();
        Ok(engine)
    }

    // ==================== State ====================

    /// Replace the whole column configuration
    ///
    /// Re-normalizes and regenerates every column identity (identity
    /// reset); selection and filter survive a state push.
    pub fn set_state(&mut self, state: GridState) -> Result<()> {
        self.state = normalize::normalize(&state.columns)?;
        self.params = self.project_params();
        tracing::debug!(columns = self.state.columns().len(), "grid state replaced");
        Ok(())
    }

    /// The engine-owned applied state
    pub fn state(&self) -> &AppliedState {
        &self.state
    }

    /// Declarative projection of the current state, for persistence
    pub fn declarative_state(&self) -> GridState {
        self.state.to_declarative()
    }

    pub fn options(&self) -> GridOptions {
        self.options
    }

    pub fn set_options(&mut self, options: GridOptions) {
        self.options = options;
    }

    /// Current outbound query params
    pub fn params(&self) -> &GridParams {
        &self.params
    }

    /// Current filter entity
    pub fn filter(&self) -> &FilterEntity {
        &self.filter
    }

    /// Receiver for engine events (multiplexed, host side)
    pub fn events(&self) -> Receiver<GridEvent<T>> {
        self.hub.events()
    }

    /// Toggle a column's visibility
    ///
    /// Unknown properties degrade to a no-op.
    pub fn set_column_visible(&mut self, property: &str, visible: bool) {
        let Some(current) = self.state.column_by_property(property) else {
            tracing::warn!(property, "visibility change for unknown column ignored");
            return;
        };
        if current.visible == visible {
            return;
        }
        let columns = self
            .state
            .columns()
            .iter()
            .cloned()
            .map(|mut column| {
                if column.property.as_str() == property {
                    column.visible = visible;
                }
                column
            })
            .collect();
        self.state = AppliedState::from_columns(columns);
        self.emit_state();
        self.update_params();
    }

    // ==================== Sorting ====================

    /// Advance a column through ASC → DESC → none and apply the result
    ///
    /// `modifiers.ctrl` selects additive multi-sort.
    pub fn cycle_sort(&mut self, property: &str, modifiers: Modifiers) {
        let current = self
            .state
            .column_by_property(property)
            .and_then(|column| column.sort)
            .map(|sort| sort.direction);
        self.apply_sort_change(sort::next_direction(current), property, modifiers);
    }

    /// Set or remove a column's sort
    pub fn apply_sort_change(
        &mut self,
        direction: Option<SortDirection>,
        property: &str,
        modifiers: Modifiers,
    ) {
        if !self.options.enable_sorting {
            tracing::debug!(property, "sorting disabled; gesture ignored");
            return;
        }
        self.state = sort::apply_sort_change(&self.state, direction, property, modifiers.ctrl);
        tracing::debug!(property, ?direction, additive = modifiers.ctrl, "sort applied");
        self.emit_state();
        self.update_params();
    }

    // ==================== Selection ====================

    /// Apply a row click with the current modifier state
    ///
    /// `values` is the full ordered row array, needed to resolve index
    /// positions for shift-ranges.
    pub fn on_row_click(&mut self, row: &T, values: &[T], modifiers: Modifiers) {
        if !self.options.enable_select {
            return;
        }
        self.selection.click(row, values, modifiers, &self.same_row);
        self.hub
            .emit(GridEvent::SelectionChanged(self.selection.items().to_vec()));
    }

    pub fn is_selected(&self, row: &T) -> bool {
        self.selection.is_selected(row, &self.same_row)
    }

    /// Selected rows, in selection order
    pub fn selection(&self) -> &[T] {
        self.selection.items()
    }

    /// Replace the selection wholesale (host-supplied initial set)
    pub fn set_selection(&mut self, items: Vec<T>) {
        self.selection.replace(items);
    }

    // ==================== Filtering ====================

    /// Set or clear (empty term) the filter for a column
    pub fn on_filter_change(&mut self, term: &str, property: &str) {
        if !self.options.enable_filter {
            tracing::debug!(property, "filtering disabled; gesture ignored");
            return;
        }
        self.filter.set(property, term);
        self.hub.emit(GridEvent::FilterChanged(self.filter.clone()));
        self.update_params();
    }

    /// Client-side filter predicate over a row array
    ///
    /// Bypassed entirely when filtering is delegated to the backend.
    pub fn filter_rows<'a>(&self, values: &'a [T]) -> Vec<&'a T>
    where
        T: ValueAccess,
    {
        filter::filter_rows(
            values,
            &self.filter,
            self.options.backend_filter,
            self.options.filter_mode,
        )
    }

    // ==================== Reorder / Resize ====================

    /// Drop a dragged column onto a display position among the visible
    /// columns
    pub fn on_drop_column(&mut self, target_visible_index: usize, dragged_property: &str) {
        if !self.options.enable_reorder {
            tracing::debug!(property = dragged_property, "reorder disabled; gesture ignored");
            return;
        }
        self.state = reorder::drop_column(&self.state, target_visible_index, dragged_property);
        self.emit_state();
        self.update_params();
    }

    /// Mark a resize sequence as started
    pub fn begin_resize(&mut self) {
        if !self.options.enable_resize {
            return;
        }
        self.resizing = true;
    }

    /// Finish a resize sequence, persisting measured widths
    ///
    /// Width is not part of the grid params, so only the state is
    /// re-emitted.
    pub fn end_resize(&mut self, widths: &MeasuredWidths) {
        if !self.options.enable_resize {
            return;
        }
        self.resizing = false;
        self.state = reorder::apply_measured_widths(&self.state, widths);
        self.emit_state();
    }

    /// Whether a resize sequence is in flight
    pub fn is_resizing(&self) -> bool {
        self.resizing
    }

    // ==================== Derivations ====================

    fn project_params(&self) -> GridParams {
        GridParams::new(
            sort::sort_params(&self.state),
            self.state.visible_properties(),
            self.filter.clone(),
        )
    }

    fn update_params(&mut self) {
        self.params = self.project_params();
        self.hub.emit(GridEvent::ParamsChanged(self.params.clone()));
    }

    fn emit_state(&self) {
        self.hub
            .emit(GridEvent::StateChanged(self.state.to_declarative()));
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for GridEngine<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridEngine")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("filter", &self.filter)
            .field("selection", &self.selection)
            .field("resizing", &self.resizing)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::column::Column;

    fn engine() -> GridEngine<i32> {
        GridEngine::new(
            GridState::new(vec![
                Column::new("position", "position"),
                Column::new("weight", "data.weight"),
                Column::new("symbol", "symbol"),
            ]),
            |a: &i32, b: &i32| a == b,
            GridOptions::all_enabled(),
        )
        .expect("engine")
    }

    fn drain<T>(rx: &Receiver<GridEvent<T>>) -> Vec<GridEvent<T>> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[test]
    fn test_initial_params_projection() {
        let engine = engine();
        assert_eq!(
            engine.params().columns,
            ["position", "data.weight", "symbol"]
        );
        assert!(engine.params().sort.is_empty());
    }

    #[test]
    fn test_visibility_toggle_updates_params_and_keeps_sort() {
        let mut engine = engine();
        engine.apply_sort_change(Some(SortDirection::Asc), "position", Modifiers::NONE);
        engine.apply_sort_change(Some(SortDirection::Desc), "symbol", Modifiers::CTRL);

        engine.set_column_visible("data.weight", false);
        assert_eq!(engine.params().columns, ["position", "symbol"]);
        assert_eq!(engine.params().sort, ["position|ASC", "symbol|DESC"]);
    }

    #[test]
    fn test_sort_gesture_emits_state_then_params() {
        let mut engine = engine();
        let rx = engine.events();
        engine.cycle_sort("position", Modifiers::NONE);

        let events = drain(&rx);
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], GridEvent::StateChanged(_)));
        match &events[1] {
            GridEvent::ParamsChanged(params) => {
                assert_eq!(params.sort, ["position|ASC"]);
            }
            other => panic!("expected ParamsChanged, got {other:?}"),
        }
    }

    #[test]
    fn test_cycle_sort_three_states() {
        let mut engine = engine();
        engine.cycle_sort("position", Modifiers::NONE);
        assert_eq!(engine.params().sort, ["position|ASC"]);
        engine.cycle_sort("position", Modifiers::NONE);
        assert_eq!(engine.params().sort, ["position|DESC"]);
        engine.cycle_sort("position", Modifiers::NONE);
        assert!(engine.params().sort.is_empty());
    }

    #[test]
    fn test_filter_change_emits_filter_and_params() {
        let mut engine = engine();
        let rx = engine.events();
        engine.on_filter_change("li", "position");

        let events = drain(&rx);
        assert_eq!(events.len(), 2);
        match &events[0] {
            GridEvent::FilterChanged(filter) => assert_eq!(filter.get("position"), Some("li")),
            other => panic!("expected FilterChanged, got {other:?}"),
        }
        match &events[1] {
            GridEvent::ParamsChanged(params) => {
                assert_eq!(params.filter.get("position"), Some("li"));
            }
            other => panic!("expected ParamsChanged, got {other:?}"),
        }
    }

    #[test]
    fn test_set_state_regenerates_identities() {
        let mut engine = engine();
        let before: Vec<_> = engine.state().columns().iter().map(|c| c.uuid).collect();
        engine
            .set_state(engine.declarative_state())
            .expect("set_state");
        let after: Vec<_> = engine.state().columns().iter().map(|c| c.uuid).collect();
        for (left, right) in before.iter().zip(&after) {
            assert_ne!(left, right);
        }
    }

    #[test]
    fn test_disabled_gestures_short_circuit() {
        let mut engine = GridEngine::new(
            GridState::new(vec![Column::new("position", "position")]),
            |a: &i32, b: &i32| a == b,
            GridOptions::default(),
        )
        .expect("engine");
        let rx = engine.events();

        engine.cycle_sort("position", Modifiers::NONE);
        engine.on_filter_change("x", "position");
        engine.on_row_click(&1, &[1, 2, 3], Modifiers::NONE);
        engine.on_drop_column(0, "position");
        engine.begin_resize();

        assert!(drain(&rx).is_empty());
        assert!(engine.selection().is_empty());
        assert!(!engine.is_resizing());
        assert!(engine.params().sort.is_empty());
    }

    #[test]
    fn test_row_click_emits_selection() {
        let mut engine = engine();
        let rx = engine.events();
        let values: Vec<i32> = (0..10).collect();

        engine.on_row_click(&5, &values, Modifiers::NONE);
        engine.on_row_click(&2, &values, Modifiers::SHIFT);
        assert_eq!(engine.selection(), [2, 3, 4, 5]);
        assert!(engine.is_selected(&3));
        assert!(!engine.is_selected(&7));

        let events = drain(&rx);
        assert_eq!(
            events.last(),
            Some(&GridEvent::SelectionChanged(vec![2, 3, 4, 5]))
        );
    }

    #[test]
    fn test_reorder_updates_param_column_order() {
        let mut engine = engine();
        engine.on_drop_column(0, "symbol");
        assert_eq!(
            engine.params().columns,
            ["symbol", "data.weight", "position"]
        );
    }

    #[test]
    fn test_resize_does_not_touch_params() {
        let mut engine = engine();
        let uuid = engine
            .state()
            .column_by_property("position")
            .expect("column")
            .uuid;
        let params_before = engine.params().clone();
        let rx = engine.events();

        engine.begin_resize();
        let mut widths = MeasuredWidths::default();
        widths.insert(uuid, 40.0);
        engine.end_resize(&widths);

        assert_eq!(engine.params(), &params_before);
        let events = drain(&rx);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GridEvent::StateChanged(_)));
        assert_eq!(
            engine
                .state()
                .column_by_property("position")
                .expect("column")
                .width,
            Some(40.0)
        );
    }

    #[test]
    fn test_unfinished_resize_sequence_stays_stale() {
        // A sequence that never receives its end event leaves the
        // in-flight flag set until the next begin overwrites it.
        let mut engine = engine();
        engine.begin_resize();
        assert!(engine.is_resizing());

        // No end event arrives; the flag is still stale...
        engine.cycle_sort("position", Modifiers::NONE);
        assert!(engine.is_resizing());

        // ...until the next sequence runs to completion.
        engine.begin_resize();
        engine.end_resize(&MeasuredWidths::default());
        assert!(!engine.is_resizing());
    }

    #[test]
    fn test_duplicate_property_rejected_at_construction() {
        let result = GridEngine::<i32>::new(
            GridState::new(vec![Column::new("a", "name"), Column::new("b", "name")]),
            |a: &i32, b: &i32| a == b,
            GridOptions::default(),
        );
        assert!(result.is_err());
    }
}
