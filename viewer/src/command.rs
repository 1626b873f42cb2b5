//! Token grammar for detector commands and the keyboard shortcut map.
//!
//! The wire format is an underscore-delimited string: either a bare
//! keyword (`next`, `stop_move`) or `<verb>_<args...>` with decimal
//! arguments. The grammar is preserved verbatim for compatibility with
//! the detector; parsing lifts it into a tagged [`Command`] so the
//! dispatcher never touches raw strings. Any malformed token parses to
//! `None` and is dropped silently.

#[cfg(test)]
#[path = "command_test.rs"]
mod command_test;

use crate::viewport::Point;

/// A parsed detector command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Advance one page.
    Next,
    /// Retreat one page.
    Prev,
    /// Steer the laser pointer (`puntero_<x>_<y>`).
    Pointer(Point),
    /// Open a draw stroke.
    StartDraw(Point),
    /// Extend the open draw stroke.
    Drawing(Point),
    /// Close the open draw stroke.
    StopDraw(Point),
    /// Open an erase stroke.
    StartErase(Point),
    /// Extend the open erase stroke.
    Erasing(Point),
    /// Close the open erase stroke.
    StopErase(Point),
    /// Drop every stroke on the current page.
    ClearDrawings,
    /// Set the gesture zoom. Missing center axes default to the pointer.
    Zoom {
        value: f64,
        center_x: Option<f64>,
        center_y: Option<f64>,
    },
    /// Flip the draw-mode flag.
    ToggleDrawMode,
    /// Grab the current page's strokes for a move.
    StartMove(Point),
    /// Update the move offset from the latest hand position.
    Moving(Point),
    /// Bake the move offset into storage.
    StopMove,
}

impl Command {
    /// Parse a wire token. Returns `None` for anything malformed: unknown
    /// verb, missing arguments, or non-numeric coordinates.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "next" => return Some(Self::Next),
            "prev" => return Some(Self::Prev),
            "toggle_draw_mode" => return Some(Self::ToggleDrawMode),
            "clear_drawings" => return Some(Self::ClearDrawings),
            "stop_move" => return Some(Self::StopMove),
            _ => {}
        }

        let parts: Vec<&str> = token.split('_').collect();
        if token.starts_with("puntero_") {
            coords(&parts, 1).map(Self::Pointer)
        } else if token.starts_with("start_draw_") {
            coords(&parts, 2).map(Self::StartDraw)
        } else if token.starts_with("drawing_") {
            coords(&parts, 1).map(Self::Drawing)
        } else if token.starts_with("stop_draw_") {
            coords(&parts, 2).map(Self::StopDraw)
        } else if token.starts_with("start_erase_") {
            coords(&parts, 2).map(Self::StartErase)
        } else if token.starts_with("erasing_") {
            coords(&parts, 1).map(Self::Erasing)
        } else if token.starts_with("stop_erase_") {
            coords(&parts, 2).map(Self::StopErase)
        } else if token.starts_with("start_move_") {
            coords(&parts, 2).map(Self::StartMove)
        } else if token.starts_with("moving_") {
            coords(&parts, 1).map(Self::Moving)
        } else if token.starts_with("zoom_") {
            let value = number(parts.get(1)?)?;
            Some(Self::Zoom {
                value,
                center_x: parts.get(2).and_then(|s| number(s)),
                center_y: parts.get(3).and_then(|s| number(s)),
            })
        } else {
            None
        }
    }

    /// Cooldown key for this command; matches the wire verb.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Prev => "prev",
            Self::Pointer(_) => "puntero",
            Self::StartDraw(_) => "start_draw",
            Self::Drawing(_) => "drawing",
            Self::StopDraw(_) => "stop_draw",
            Self::StartErase(_) => "start_erase",
            Self::Erasing(_) => "erasing",
            Self::StopErase(_) => "stop_erase",
            Self::ClearDrawings => "clear_drawings",
            Self::Zoom { .. } => "zoom",
            Self::ToggleDrawMode => "toggle_draw_mode",
            Self::StartMove(_) => "start_move",
            Self::Moving(_) => "moving",
            Self::StopMove => "stop_move",
        }
    }
}

fn number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn coords(parts: &[&str], at: usize) -> Option<Point> {
    let x = number(parts.get(at)?)?;
    let y = number(parts.get(at + 1)?)?;
    Some(Point::new(x, y))
}

/// A viewer action bound to a keyboard shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    PrevPage,
    NextPage,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    ToggleDrawMode,
    /// Only bound while draw mode is on.
    ClearDrawings,
    /// Escape: hide the pointer dot.
    HidePointer,
}

/// Map a browser-style key name to its action, if any. `draw_mode` gates
/// the clear shortcut, matching the on-screen controls.
#[must_use]
pub fn key_action(key: &str, draw_mode: bool) -> Option<KeyAction> {
    match key {
        "ArrowLeft" => Some(KeyAction::PrevPage),
        "ArrowRight" => Some(KeyAction::NextPage),
        "+" | "=" => Some(KeyAction::ZoomIn),
        "-" => Some(KeyAction::ZoomOut),
        "0" => Some(KeyAction::ResetZoom),
        "d" | "D" => Some(KeyAction::ToggleDrawMode),
        "c" | "C" if draw_mode => Some(KeyAction::ClearDrawings),
        "Escape" => Some(KeyAction::HidePointer),
        _ => None,
    }
}
