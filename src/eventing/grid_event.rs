//! GridEvent - Engine Event Enum
//!
//! All events the grid engine emits toward the hosting application:
//! the new filter entity, selection set, declarative grid state (for
//! persistence) and recomputed query params.

use crate::domain::filter::FilterEntity;
use crate::domain::params::GridParams;
use crate::domain::state::GridState;

/// Engine -> host events
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent<T> {
    /// The filter entity changed
    FilterChanged(FilterEntity),
    /// The row selection changed
    SelectionChanged(Vec<T>),
    /// The column configuration changed (declarative shape, suitable
    /// for persistence and re-submission)
    StateChanged(GridState),
    /// The outbound query params were recomputed
    ParamsChanged(GridParams),
}
