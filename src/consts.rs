//! Shared numeric constants for the viewport crate.
//!
//! These are the defaults behind [`crate::config::ViewportConfig`]; the engine
//! itself always reads the configured values.

// ── Camera ──────────────────────────────────────────────────────

/// Camera scale at attach time. Configured scale ranges must contain it.
pub const INITIAL_SCALE: f64 = 1.0;

/// Smallest allowed camera scale (zoomed out).
pub const MIN_SCALE: f64 = 0.1;

/// Largest allowed camera scale (zoomed in).
pub const MAX_SCALE: f64 = 10.0;

// ── Grid ────────────────────────────────────────────────────────

/// Distance between grid lines, in logical units.
pub const GRID_SPACING: f64 = 20.0;

/// Smallest configurable grid spacing, in logical units.
pub const MIN_GRID_SPACING: f64 = 1.0;

/// Length of each dash and each gap of a grid line, in screen pixels.
pub const GRID_DASH_PX: f64 = 2.0;

/// Stroke color of the grid lines.
pub const GRID_COLOR: &str = "#ccc";

// ── Wheel ───────────────────────────────────────────────────────

/// Scale factor applied per modifier-wheel step toward the user (zoom in).
pub const WHEEL_ZOOM_IN: f64 = 1.02;

/// Scale factor applied per modifier-wheel step away from the user (zoom out).
pub const WHEEL_ZOOM_OUT: f64 = 0.98;

/// Multiplier from wheel delta to screen-pixel pan distance.
pub const WHEEL_PAN_SPEED: f64 = 0.2;

/// DOM `WheelEvent.deltaMode` value for pixel-granularity deltas.
pub const DOM_DELTA_PIXEL: u32 = 0;

/// DOM `WheelEvent.deltaMode` value for line-granularity deltas.
pub const DOM_DELTA_LINE: u32 = 1;

// ── Touch ───────────────────────────────────────────────────────

/// Change in contact distance, in pixels, above which a two-finger move is a pinch.
pub const PINCH_THRESHOLD_PX: f64 = 10.0;
