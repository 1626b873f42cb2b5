//! Shared numeric constants for the viewer core.

use std::time::Duration;

// ── Zoom ────────────────────────────────────────────────────────

/// Minimum gesture zoom factor.
pub const MIN_GESTURE_ZOOM: f64 = 0.3;

/// Maximum gesture zoom factor.
pub const MAX_GESTURE_ZOOM: f64 = 4.0;

/// Zoom changes smaller than this are dropped without a re-render.
pub const ZOOM_EPSILON: f64 = 0.01;

/// Zoom increment for the keyboard `+` / `-` shortcuts.
pub const ZOOM_STEP: f64 = 0.2;

/// Reference scale for the percentage readout (100% = fit at 1.5).
pub const ZOOM_DISPLAY_REFERENCE: f64 = 1.5;

// ── Strokes ─────────────────────────────────────────────────────

/// Default color for draw strokes.
pub const DRAW_COLOR: &str = "#ff0000";

/// Default draw stroke width in canvas pixels.
pub const DRAW_WIDTH: f64 = 3.0;

/// Default erase stroke width in canvas pixels.
pub const ERASE_WIDTH: f64 = 50.0;

// ── Timing ──────────────────────────────────────────────────────

/// Idle time after which zoom/drawing/erasing modes fall back to navigation.
pub const MODE_DECAY: Duration = Duration::from_millis(2000);
