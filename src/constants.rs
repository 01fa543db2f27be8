//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Layout Constants
// ============================================================================

/// Height of the header bar in pixels
pub const HEADER_HEIGHT: f32 = 48.0;

/// Width of the block dock (left sidebar) in pixels
pub const DOCK_WIDTH: f32 = 64.0;

// ============================================================================
// Canvas & Grid
// ============================================================================

/// Grid cell size in pixels; dropped blocks snap to multiples of this
pub const GRID_SIZE: f32 = 40.0;

/// Maximum pointer travel (per axis) for a press to still count as a click
pub const DRAG_THRESHOLD: f32 = 5.0;

// ============================================================================
// Block Defaults
// ============================================================================

/// Canvas-local position assigned to newly added blocks
pub const DEFAULT_BLOCK_POSITION: (f32, f32) = (100.0, 100.0);

/// Width of a block card in pixels
pub const BLOCK_WIDTH: f32 = 300.0;

/// Height of a block card in pixels
pub const BLOCK_HEIGHT: f32 = 96.0;

/// Side length of the remove control in a block's top-right corner
pub const REMOVE_BUTTON_SIZE: f32 = 20.0;

/// Inset of the remove control from the block's top/right edges
pub const REMOVE_BUTTON_INSET: f32 = 8.0;

// ============================================================================
// Modal Dimensions
// ============================================================================

/// Width of the block edit modal
pub const MODAL_WIDTH_MD: f32 = 520.0;

/// Height of the block edit modal
pub const MODAL_HEIGHT_MD: f32 = 560.0;

/// Backdrop opacity for modal overlays
pub const MODAL_BACKDROP_OPACITY: f32 = 0.6;

// ============================================================================
// Notifications
// ============================================================================

/// How long a toast stays visible, in milliseconds
pub const TOAST_TTL_MS: u64 = 4_000;

// ============================================================================
// Generation Service
// ============================================================================

/// Default generation endpoint; overridable via the settings file
pub const DEFAULT_GENERATOR_URL: &str = "http://localhost:8000/generate";

/// Request timeout for the generation call, in seconds
pub const GENERATE_TIMEOUT_SECS: u64 = 120;
