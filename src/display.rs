//! Display seam between the dispatcher and whatever draws pixels.
//!
//! The viewer core emits effects; [`crate::present::Presenter`] turns
//! them into these calls. Tests record them, the headless host logs
//! them, and a graphical host would paint them.

use viewer::render::{PaintOp, Scene};
use viewer::viewport::{Mode, Point};

/// Where scenes, overlay paint, pointer moves, and status lines go.
pub trait Display {
    /// Present a freshly rendered page at its new pixel size.
    fn show_scene(&mut self, scene: &Scene);
    /// Shift the scroll position (zoom anchoring).
    fn scroll_by(&mut self, dx: f64, dy: f64);
    /// Clear the annotation layer and repaint it from scratch.
    fn redraw_overlay(&mut self, ops: &[PaintOp]);
    /// Paint one incremental segment of the open stroke.
    fn paint_segment(&mut self, op: &PaintOp);
    /// Move, restyle, or hide the pointer dot.
    fn update_pointer(&mut self, pointer: Point, active: bool, mode: Mode);
    /// One-line command readout.
    fn set_status(&mut self, text: &str);
    /// Persistent error banner; the previous frame stays on screen.
    fn show_error(&mut self, text: &str);
}

/// Headless display that narrates everything through `tracing`.
#[derive(Debug, Default)]
pub struct LogDisplay;

impl LogDisplay {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Display for LogDisplay {
    fn show_scene(&mut self, scene: &Scene) {
        tracing::debug!(
            page = scene.page,
            width = scene.width_px,
            height = scene.height_px,
            zoom = scene.zoom_percent,
            strokes = scene.ops.len(),
            "page rendered"
        );
    }

    fn scroll_by(&mut self, dx: f64, dy: f64) {
        tracing::debug!(dx, dy, "scroll adjusted");
    }

    fn redraw_overlay(&mut self, ops: &[PaintOp]) {
        tracing::debug!(ops = ops.len(), "overlay repainted");
    }

    fn paint_segment(&mut self, _op: &PaintOp) {}

    fn update_pointer(&mut self, pointer: Point, active: bool, mode: Mode) {
        tracing::trace!(x = pointer.x, y = pointer.y, active, ?mode, "pointer updated");
    }

    fn set_status(&mut self, text: &str) {
        tracing::info!(status = text, "status");
    }

    fn show_error(&mut self, text: &str) {
        tracing::error!(error = text, "viewer error");
    }
}
