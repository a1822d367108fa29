//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Layout Constants
// ============================================================================

/// Default width of the shape palette sidebar in pixels
pub const DEFAULT_SIDEBAR_WIDTH: f32 = 260.0;

/// Minimum sidebar width during a divider drag
pub const MIN_SIDEBAR_WIDTH: f32 = 150.0;

/// Maximum sidebar width during a divider drag
pub const MAX_SIDEBAR_WIDTH: f32 = 500.0;

/// Width of the sidebar divider drag handle in pixels
pub const DIVIDER_WIDTH: f32 = 4.0;

// ============================================================================
// Item Defaults
// ============================================================================

/// Size given to a shape when it is dropped from the palette (width, height)
pub const DEFAULT_ITEM_SIZE: (f32, f32) = (80.0, 50.0);

/// Minimum item dimension enforced during resize (both axes)
pub const MIN_ITEM_SIZE: f32 = 20.0;
