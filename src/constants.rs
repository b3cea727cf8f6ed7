//! Application-wide constants.
//!
//! Centralizes the node footprint, zoom bounds and interaction tolerances so
//! geometry, hit testing and the input state machine agree on them.

// ============================================================================
// Node Footprint
// ============================================================================

/// Width of every node rectangle in logical units
pub const NODE_WIDTH: f64 = 180.0;

/// Height of every node rectangle in logical units
pub const NODE_HEIGHT: f64 = 120.0;

/// Text given to nodes created without explicit content
pub const DEFAULT_NODE_TEXT: &str = "New node";

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum viewport scale
pub const MIN_SCALE: f64 = 0.3;

/// Maximum viewport scale
pub const MAX_SCALE: f64 = 2.5;

/// Default viewport scale
pub const DEFAULT_SCALE: f64 = 1.0;

/// Scale change per wheel notch
pub const ZOOM_STEP: f64 = 0.1;

// ============================================================================
// Hit Testing (screen pixels)
// ============================================================================

/// Radius around a handle anchor that starts a connection drag
pub const HANDLE_HIT_RADIUS: f64 = 8.0;

/// Maximum distance from a connection segment that still selects it
pub const CONNECTION_HIT_TOLERANCE: f64 = 6.0;

// ============================================================================
// Container
// ============================================================================

/// Canvas container size assumed before the host reports one
pub const DEFAULT_CONTAINER_SIZE: (f64, f64) = (800.0, 600.0);

// ============================================================================
// Colors (default hex values)
// ============================================================================

/// Palette sampled for layers created without an explicit color
pub const LAYER_COLOR_PALETTE: [&str; 7] = [
    "#f97316", "#22c55e", "#3b82f6", "#a855f7", "#ec4899", "#14b8a6", "#eab308",
];

/// Color used when a node's layer cannot be resolved
pub const FALLBACK_LAYER_COLOR: &str = "#999999";
