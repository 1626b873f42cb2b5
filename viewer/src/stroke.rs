//! Freehand annotation strokes and the per-page drawing store.
//!
//! Points are stored normalized (`[0,1]²`) rather than in pixels so a
//! stroke re-renders correctly at any zoom or container size. Insertion
//! order is drawing order and is never reordered.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::consts::{DRAW_COLOR, DRAW_WIDTH, ERASE_WIDTH};
use crate::viewport::Point;

/// Whether a stroke lays down ink or cuts it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeKind {
    Draw,
    Erase,
}

/// One continuous freehand path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stroke {
    pub kind: StrokeKind,
    /// Normalized points in drawing order.
    pub points: Vec<Point>,
    /// Stroke color; present only for draw strokes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Line width in canvas pixels.
    pub width: f64,
}

impl Stroke {
    /// Open a draw stroke at `start` with the default color and width.
    #[must_use]
    pub fn draw(start: Point) -> Self {
        Self {
            kind: StrokeKind::Draw,
            points: vec![start],
            color: Some(DRAW_COLOR.to_owned()),
            width: DRAW_WIDTH,
        }
    }

    /// Open an erase stroke at `start` with the default width.
    #[must_use]
    pub fn erase(start: Point) -> Self {
        Self {
            kind: StrokeKind::Erase,
            points: vec![start],
            color: None,
            width: ERASE_WIDTH,
        }
    }

    /// Append a point.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// The last two points, oldest first, once the stroke has a segment.
    #[must_use]
    pub fn last_segment(&self) -> Option<(Point, Point)> {
        let n = self.points.len();
        if n < 2 {
            return None;
        }
        Some((self.points[n - 2], self.points[n - 1]))
    }

    /// A stroke is only worth keeping once it forms at least one segment.
    #[must_use]
    pub fn is_committable(&self) -> bool {
        self.points.len() >= 2
    }
}

/// Per-page collections of committed strokes.
///
/// A page absent from the map has no annotations. An entry is created on
/// the first commit for that page and only ever removed whole by
/// [`DrawingStore::clear_page`]; individual strokes are never deleted.
#[derive(Debug, Default)]
pub struct DrawingStore {
    pages: HashMap<u32, Vec<Stroke>>,
}

impl DrawingStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a closed stroke to `page`. Single-point strokes are discarded
    /// and `false` is returned; the store stays unchanged.
    pub fn commit(&mut self, page: u32, stroke: Stroke) -> bool {
        if !stroke.is_committable() {
            return false;
        }
        self.pages.entry(page).or_default().push(stroke);
        true
    }

    /// Committed strokes for `page`, in commit order.
    #[must_use]
    pub fn strokes(&self, page: u32) -> &[Stroke] {
        self.pages.get(&page).map_or(&[], Vec::as_slice)
    }

    /// Drop every stroke on `page`. Other pages are untouched.
    pub fn clear_page(&mut self, page: u32) {
        self.pages.remove(&page);
    }

    /// Shift every point of every stroke on `page` by a normalized offset.
    /// Used to bake a finished move transaction into storage.
    pub fn translate_page(&mut self, page: u32, dx: f64, dy: f64) {
        if let Some(strokes) = self.pages.get_mut(&page) {
            for stroke in strokes {
                for point in &mut stroke.points {
                    *point = point.translated(dx, dy);
                }
            }
        }
    }

    /// Returns `true` when no page holds any strokes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Transient state between `start_move` and `stop_move`.
///
/// The offset is preview-only until `stop_move` bakes it into the store;
/// the transaction is then discarded.
#[derive(Debug, Clone, Copy)]
pub struct MoveTransaction {
    /// Hand position when the grab started.
    pub start: Point,
    /// Current displacement from `start`, normalized.
    pub offset: (f64, f64),
}

impl MoveTransaction {
    #[must_use]
    pub fn new(start: Point) -> Self {
        Self { start, offset: (0.0, 0.0) }
    }

    /// Recompute the offset from the latest hand position.
    pub fn update(&mut self, current: Point) {
        self.offset = (current.x - self.start.x, current.y - self.start.y);
    }
}
