//! Demo Host
//!
//! Drives the grid engine through a scripted gesture sequence against
//! the periodic-element dataset, logging every emitted event and the
//! query params a backend would receive. Stands in for a rendering
//! host: clicks, sorts, filters, a column drop and a resize.

pub mod data;

use anyhow::Result;

use crate::domain::column::Column;
use crate::domain::filter::FilterMode;
use crate::domain::state::GridState;
use crate::eventing::GridEvent;
use crate::grid::{GridEngine, GridOptions, MeasuredWidths, Modifiers};
use crate::utils::state_store;
use self::data::{sample_elements, PeriodicElement};

const STATE_FILE: &str = "demo-grid.json";

fn initial_state() -> GridState {
    GridState::new(vec![
        Column::new("name", "name"),
        Column::new("position", "position").index(2),
        Column::new("weight", "data.weight").index(1),
        Column::new("symbol", "symbol").index(3),
    ])
}

fn drain_events(engine: &GridEngine<PeriodicElement>, label: &str) {
    let rx = engine.events();
    while let Ok(event) = rx.try_recv() {
        match event {
            GridEvent::FilterChanged(filter) => {
                tracing::info!(%label, ?filter, "filter changed");
            }
            GridEvent::SelectionChanged(items) => {
                let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
                tracing::info!(%label, ?names, "selection changed");
            }
            GridEvent::StateChanged(state) => {
                tracing::info!(%label, columns = state.columns.len(), "state changed");
            }
            GridEvent::ParamsChanged(params) => {
                tracing::info!(%label, sort = ?params.sort, columns = ?params.columns, "params changed");
            }
        }
    }
}

/// Run the scripted demo
pub fn run() -> Result<()> {
    let rows = sample_elements();
    let options = GridOptions {
        filter_mode: FilterMode::StartWith,
        backend_filter: false,
        ..GridOptions::all_enabled()
    };
    let mut engine = GridEngine::new(initial_state(), |a: &PeriodicElement, b: &PeriodicElement| a.name == b.name, options)?;
    tracing::info!(columns = ?engine.params().columns, "grid ready");

    // Multi-column sort: position ascending, then weight descending.
    engine.cycle_sort("position", Modifiers::NONE);
    engine.cycle_sort("data.weight", Modifiers::CTRL);
    engine.cycle_sort("data.weight", Modifiers::CTRL);
    drain_events(&engine, "sort");

    // Filter: elements whose name starts with "b".
    engine.on_filter_change("b", "name");
    let kept = engine.filter_rows(&rows);
    let names: Vec<&str> = kept.iter().map(|row| row.name.as_str()).collect();
    tracing::info!(?names, "client-side filtered rows");
    engine.on_filter_change("", "name");
    drain_events(&engine, "filter");

    // Selection: click Lithium, extend with shift, toggle with ctrl.
    engine.on_row_click(&rows[1], &rows, Modifiers::NONE);
    engine.on_row_click(&rows[4], &rows, Modifiers::SHIFT);
    engine.on_row_click(&rows[2], &rows, Modifiers::CTRL);
    drain_events(&engine, "selection");

    // Drag the symbol column to the front, then resize it.
    engine.on_drop_column(0, "symbol");
    if let Some(symbol) = engine.state().column_by_property("symbol") {
        let mut widths = MeasuredWidths::default();
        widths.insert(symbol.uuid, 18.0);
        engine.begin_resize();
        engine.end_resize(&widths);
    }
    drain_events(&engine, "reorder/resize");

    // Persist the resulting layout and read it back.
    let layout = engine.declarative_state();
    state_store::save_state(STATE_FILE, &layout)?;
    let restored = state_store::load_state(STATE_FILE)?;
    engine.set_state(restored)?;
    tracing::info!(path = STATE_FILE, "layout persisted and restored");
    state_store::delete_state(STATE_FILE)?;

    Ok(())
}
