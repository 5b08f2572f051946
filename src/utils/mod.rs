//! Utilities

pub mod state_store;
