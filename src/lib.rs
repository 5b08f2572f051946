//! full-grid
//!
//! A reusable data-grid state engine: declarative column configuration
//! in, applied state and backend query params out, with multi-column
//! sorting, row multi-selection, drag reordering, resize persistence
//! and per-column filtering in between. Rendering, pointer plumbing
//! and data fetching stay with the hosting application.

pub mod constants;
pub mod demo;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod grid;
pub mod utils;

pub use error::{Error, Result};
