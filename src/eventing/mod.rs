//! Eventing - Engine to Host Event Plumbing
//!
//! A single multiplexed channel carries every engine emission; the
//! host clones the receiver and drains it after each gesture.

pub mod grid_event;

pub use grid_event::GridEvent;

use crossbeam_channel::{Receiver, Sender};

/// Multiplexing hub for engine events
pub struct EventHub<T> {
    tx: Sender<GridEvent<T>>,
    rx: Receiver<GridEvent<T>>,
}

impl<T> EventHub<T> {
    pub fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self { tx, rx }
    }

    /// Emit an event; a host that dropped every receiver is not an error
    pub fn emit(&self, event: GridEvent<T>) {
        if self.tx.send(event).is_err() {
            tracing::debug!("grid event dropped: no receiver");
        }
    }

    /// Get a receiver for the host side
    ///
    /// Events from all engine operations are multiplexed into this
    /// single channel.
    pub fn events(&self) -> Receiver<GridEvent<T>> {
        self.rx.clone()
    }
}

impl<T> Default for EventHub<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for EventHub<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHub")
            .field("pending", &self.rx.len())
            .finish()
    }
}
