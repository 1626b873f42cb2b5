//! Viewport state: current page, zoom, pointer, and interaction mode.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_GESTURE_ZOOM, MIN_GESTURE_ZOOM, ZOOM_DISPLAY_REFERENCE, ZOOM_EPSILON};

/// A point in normalized page coordinates, `[0, 1]` on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamp both axes into `[0, 1]`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(0.0, 1.0),
            y: self.y.clamp(0.0, 1.0),
        }
    }

    /// Shift by a normalized offset. The result is not re-clamped: stroke
    /// points moved past the page edge must keep their true position so a
    /// later move back restores them.
    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// The most recent user-relevant interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Paging through the document (the resting state).
    #[default]
    Navigation,
    /// The laser-pointer dot is being steered.
    Pointer,
    /// A zoom gesture was just applied.
    Zoom,
    /// A draw stroke is open.
    Drawing,
    /// An erase stroke is open.
    Erasing,
    /// A move transaction is open.
    Moving,
}

impl Mode {
    /// Whether this mode falls back to [`Mode::Navigation`] after idle time.
    #[must_use]
    pub fn decays(self) -> bool {
        matches!(self, Self::Zoom | Self::Drawing | Self::Erasing)
    }
}

/// Clamp a requested zoom factor into the supported range.
#[must_use]
pub fn clamp_zoom(value: f64) -> f64 {
    value.clamp(MIN_GESTURE_ZOOM, MAX_GESTURE_ZOOM)
}

/// Scalar view state for the presented document.
///
/// `base_scale` is the fit-to-container-width scale; `gesture_zoom` is the
/// multiplicative factor layered on top of it. The rendered scale is always
/// their product, never either one alone.
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Current page, 1-based.
    pub current_page: u32,
    /// Total pages in the document. Zero until a document is loaded.
    pub page_count: u32,
    /// Fit-to-container scale, recomputed on load and container resize.
    pub base_scale: f64,
    /// Gesture zoom factor, clamped to `[0.3, 4.0]`.
    pub gesture_zoom: f64,
    /// Last known pointer position in normalized coordinates.
    pub pointer: Point,
    /// Whether the pointer dot is shown.
    pub pointer_active: bool,
    /// Current interaction mode.
    pub mode: Mode,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_count: 0,
            base_scale: 1.5,
            gesture_zoom: 1.0,
            pointer: Point::new(0.5, 0.5),
            pointer_active: false,
            mode: Mode::Navigation,
        }
    }
}

impl ViewportState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total render scale applied to page geometry.
    #[must_use]
    pub fn total_scale(&self) -> f64 {
        self.base_scale * self.gesture_zoom
    }

    /// Zoom readout as a whole percentage of the reference scale.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn zoom_percentage(&self) -> u32 {
        (self.total_scale() * 100.0 / ZOOM_DISPLAY_REFERENCE).round() as u32
    }

    /// Whether `page` is a valid page of the loaded document.
    #[must_use]
    pub fn page_in_range(&self, page: u32) -> bool {
        page >= 1 && page <= self.page_count
    }

    /// Advance one page. Returns `false` when already on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.current_page < self.page_count {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Retreat one page. Returns `false` when already on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Store a clamped zoom factor. Returns `true` when the change crosses
    /// the re-render epsilon; the clamped value is stored either way.
    pub fn set_gesture_zoom(&mut self, value: f64) -> bool {
        let old = self.gesture_zoom;
        self.gesture_zoom = clamp_zoom(value);
        (old - self.gesture_zoom).abs() >= ZOOM_EPSILON
    }

    /// Update the pointer position (clamped) and visibility. Deactivating
    /// the pointer while in pointer mode drops back to navigation.
    pub fn set_pointer(&mut self, x: f64, y: f64, active: bool) {
        self.pointer = Point::new(x, y).clamped();
        self.pointer_active = active;
        if !active && self.mode == Mode::Pointer {
            self.mode = Mode::Navigation;
        }
    }
}
