//! Page geometry and annotation paint ops.
//!
//! This module computes *what* to paint, never painting it: the host owns
//! the actual surface. Strokes are stored normalized, so every repaint
//! scales them against the freshly computed canvas pixel size — that is
//! what makes annotations survive zoom and container resizes.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::stroke::{DrawingStore, Stroke, StrokeKind};
use crate::viewport::{Point, ViewportState};

/// Page dimensions in pixels at scale 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

/// The document abstraction the renderer draws from. Page numbers are
/// 1-based, matching the viewport.
pub trait PageSource {
    fn page_count(&self) -> u32;

    /// Geometry of `page` at scale 1.0.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DocumentUnavailable`] when the document
    /// never loaded, or [`RenderError::Page`] when this page is broken.
    fn page_size(&self, page: u32) -> Result<PageSize, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("document failed to load")]
    DocumentUnavailable,
    #[error("page {page} failed to render: {reason}")]
    Page { page: u32, reason: String },
}

/// How a paint op composites onto the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composite {
    /// Normal ink (draw strokes).
    SourceOver,
    /// Cut-out (erase strokes).
    DestinationOut,
}

/// One polyline to stroke onto the overlay, in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintOp {
    pub composite: Composite,
    /// Stroke color; `None` for erase ops.
    pub color: Option<String>,
    /// Line width in canvas pixels.
    pub width: f64,
    pub path: Vec<(f64, f64)>,
}

/// A fully computed frame: page, canvas size, and overlay repaint.
#[derive(Debug, Clone)]
pub struct Scene {
    pub page: u32,
    pub width_px: f64,
    pub height_px: f64,
    /// Zoom readout for the status chrome, in whole percent.
    pub zoom_percent: u32,
    pub ops: Vec<PaintOp>,
}

/// Compute the scene for the viewport's current page.
///
/// Out-of-range pages yield `Ok(None)` and are simply dropped — not even
/// an error. `move_offset` translates every op for the live move preview
/// without touching stored coordinates.
///
/// # Errors
///
/// Propagates [`RenderError`] from the page source; the host surfaces it
/// and keeps the previous frame on screen.
pub fn render_page(
    source: &impl PageSource,
    viewport: &ViewportState,
    store: &DrawingStore,
    move_offset: Option<(f64, f64)>,
) -> Result<Option<Scene>, RenderError> {
    let page = viewport.current_page;
    if page < 1 || page > source.page_count() {
        return Ok(None);
    }
    let size = source.page_size(page)?;
    let scale = viewport.total_scale();
    let width_px = size.width * scale;
    let height_px = size.height * scale;
    let ops = overlay_ops(store, page, width_px, height_px, move_offset);
    Ok(Some(Scene {
        page,
        width_px,
        height_px,
        zoom_percent: viewport.zoom_percentage(),
        ops,
    }))
}

/// Repaint ops for every committed stroke on `page`, oldest first.
/// Strokes without a full segment paint nothing.
#[must_use]
pub fn overlay_ops(
    store: &DrawingStore,
    page: u32,
    width_px: f64,
    height_px: f64,
    move_offset: Option<(f64, f64)>,
) -> Vec<PaintOp> {
    let (dx, dy) = move_offset.unwrap_or((0.0, 0.0));
    store
        .strokes(page)
        .iter()
        .filter(|stroke| stroke.is_committable())
        .map(|stroke| PaintOp {
            composite: composite_for(stroke.kind),
            color: stroke.color.clone(),
            width: stroke.width,
            path: stroke
                .points
                .iter()
                .map(|p| ((p.x + dx) * width_px, (p.y + dy) * height_px))
                .collect(),
        })
        .collect()
}

/// Incremental op for one freshly drawn segment of the open stroke.
#[must_use]
pub fn segment_op(
    kind: StrokeKind,
    from: Point,
    to: Point,
    color: Option<String>,
    width: f64,
    width_px: f64,
    height_px: f64,
) -> PaintOp {
    PaintOp {
        composite: composite_for(kind),
        color,
        width,
        path: vec![
            (from.x * width_px, from.y * height_px),
            (to.x * width_px, to.y * height_px),
        ],
    }
}

fn composite_for(kind: StrokeKind) -> Composite {
    match kind {
        StrokeKind::Draw => Composite::SourceOver,
        StrokeKind::Erase => Composite::DestinationOut,
    }
}

/// Fit-to-width base scale for `page` in a container of the given pixel
/// width. Falls back to 1.0 when the geometry query fails.
#[must_use]
pub fn base_scale_for(source: &impl PageSource, page: u32, container_width: f64) -> f64 {
    match source.page_size(page) {
        Ok(size) if size.width > 0.0 => container_width / size.width,
        _ => 1.0,
    }
}

/// Scroll shift that keeps `center` visually fixed across a canvas
/// resize: the pixel-size delta weighted by the center on each axis.
#[must_use]
pub fn zoom_scroll_delta(old: (f64, f64), new: (f64, f64), center: Point) -> (f64, f64) {
    ((new.0 - old.0) * center.x, (new.1 - old.1) * center.y)
}

/// A document whose geometry is known up front. Backs the host when page
/// geometry arrives out-of-band, and every headless test.
#[derive(Debug, Clone)]
pub struct StaticDocument {
    pages: Vec<PageSize>,
    available: bool,
}

impl StaticDocument {
    /// A document of `count` identically sized pages.
    #[must_use]
    pub fn uniform(count: u32, size: PageSize) -> Self {
        Self {
            pages: vec![size; count as usize],
            available: true,
        }
    }

    /// A document that failed to load: every page query errors.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { pages: Vec::new(), available: false }
    }
}

impl PageSource for StaticDocument {
    fn page_count(&self) -> u32 {
        u32::try_from(self.pages.len()).unwrap_or(u32::MAX)
    }

    fn page_size(&self, page: u32) -> Result<PageSize, RenderError> {
        if !self.available {
            return Err(RenderError::DocumentUnavailable);
        }
        self.pages
            .get((page as usize).saturating_sub(1))
            .copied()
            .ok_or(RenderError::Page {
                page,
                reason: "page out of range".to_owned(),
            })
    }
}
