//! Domain - Pure Data Structures for the Grid Engine
//!
//! These types carry no behavior beyond lookups and projections; the
//! transition logic lives in [`crate::grid`].

pub mod column;
pub mod filter;
pub mod params;
pub mod path;
pub mod state;

pub use column::{AppliedColumn, Column, ColumnSort, SortDirection};
pub use filter::{FilterEntity, FilterMode};
pub use params::GridParams;
pub use path::{PropertyPath, ValueAccess};
pub use state::{AppliedState, GridState};
