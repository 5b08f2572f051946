//! Selection Engine
//!
//! Tracks the current row selection given click gestures with modifier
//! keys. Rows carry no assumed identity field; equality is delegated to
//! a caller-supplied equivalence predicate. Range extension is
//! anchor-based and supports direction reversal mid-range.

use std::sync::Arc;

/// Row-equivalence predicate supplied by the host application
pub type SameRow<T> = Arc<dyn Fn(&T, &T) -> bool>;

/// Keyboard modifier state injected with each gesture
///
/// Sourced from a single process-wide listener owned by the hosting
/// application rather than read from hidden global state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        shift: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        ctrl: false,
        shift: true,
    };
}

/// Which way the most recent shift-click grew the range
///
/// `Desc` means the range last grew toward lower row indices, leaving
/// the anchor at the maximum end of the selection; `Asc` is the mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeDirection {
    Asc,
    Desc,
}

/// The ordered selection set plus the transient range anchor direction
#[derive(Clone)]
pub struct SelectionState<T> {
    items: Vec<T>,
    range_direction: Option<RangeDirection>,
}

impl<T> Default for SelectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            range_direction: None,
        }
    }
}

impl<T: Clone> SelectionState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected rows, in selection order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn range_direction(&self) -> Option<RangeDirection> {
        self.range_direction
    }

    pub fn is_selected(&self, row: &T, same: &SameRow<T>) -> bool {
        self.items.iter().any(|item| same(item, row))
    }

    /// Replace the selection wholesale (e.g. host-supplied initial set)
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.range_direction = None;
    }

    /// Apply a click gesture
    ///
    /// Priority: ctrl toggles membership (anchor untouched); shift
    /// extends or contracts the active range; a plain click collapses
    /// to the clicked row, or deselects when it was the only selection.
    pub fn click(&mut self, row: &T, values: &[T], modifiers: Modifiers, same: &SameRow<T>) {
        if modifiers.ctrl {
            self.toggle(row, same);
        } else if modifiers.shift {
            self.select_range(row, values, same);
        } else if self.is_selected(row, same) {
            self.items = if self.items.len() > 1 {
                vec![row.clone()]
            } else {
                Vec::new()
            };
            self.range_direction = None;
        } else {
            self.items = vec![row.clone()];
            self.range_direction = None;
        }
    }

    fn toggle(&mut self, row: &T, same: &SameRow<T>) {
        if self.is_selected(row, same) {
            self.items.retain(|item| !same(item, row));
        } else {
            self.items.push(row.clone());
        }
    }

    /// Extend or contract the active range toward the clicked row
    ///
    /// The anchor is the maximum end of the current selection when the
    /// range last grew downward (`Desc`), the minimum end otherwise.
    /// The new selection is the inclusive slice of `values` between the
    /// anchor and the clicked row; the resolved direction persists for
    /// the next extension. Rows missing from `values` degrade to a
    /// single-row selection instead of indexing out of bounds.
    fn select_range(&mut self, row: &T, values: &[T], same: &SameRow<T>) {
        if self.items.is_empty() {
            self.items = vec![row.clone()];
            return;
        }

        // Clicking the very first element of the selection resets the anchor.
        if let Some(first) = self.items.first() {
            if same(first, row) {
                self.items = vec![row.clone()];
                self.range_direction = None;
                return;
            }
        }

        let Some(current) = values.iter().position(|value| same(value, row)) else {
            self.items = vec![row.clone()];
            self.range_direction = None;
            return;
        };

        let mut positions: Vec<usize> = self
            .items
            .iter()
            .filter_map(|item| values.iter().position(|value| same(value, item)))
            .collect();
        positions.sort_unstable();
        let (Some(&min), Some(&max)) = (positions.first(), positions.last()) else {
            self.items = vec![row.clone()];
            self.range_direction = None;
            return;
        };

        let base = self.range_direction.unwrap_or(if current < min {
            RangeDirection::Desc
        } else {
            RangeDirection::Asc
        });
        let anchor = match base {
            RangeDirection::Desc => max,
            RangeDirection::Asc => min,
        };
        let direction = if current < anchor {
            RangeDirection::Desc
        } else if current > anchor {
            RangeDirection::Asc
        } else {
            base
        };

        let (lower, upper) = (anchor.min(current), anchor.max(current));
        self.items = values[lower..=upper].to_vec();
        self.range_direction = Some(direction);
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SelectionState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionState")
            .field("items", &self.items)
            .field("range_direction", &self.range_direction)
            .finish()
    }
}
