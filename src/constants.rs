//! Grid Constants
//!
//! Centralized constants for consistent behavior across the engine.

/// Separator between property and direction in a sort query token
pub const SORT_PARAM_SEPARATOR: char = '|';

/// Separator between segments of a dotted property path
pub const PROPERTY_PATH_SEPARATOR: char = '.';

/// Smallest column width a resize may persist (percent of table width)
pub const MIN_COLUMN_WIDTH_PERCENT: f64 = 2.0;

/// Largest column width a resize may persist (percent of table width)
pub const MAX_COLUMN_WIDTH_PERCENT: f64 = 100.0;
