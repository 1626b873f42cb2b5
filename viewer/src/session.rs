//! Top-level dispatcher: one token in, state mutations plus effects out.
//!
//! ARCHITECTURE
//! ============
//! `SessionCore` owns every piece of viewer state and is the only writer
//! to it. `dispatch_at` processes a single token synchronously and to
//! completion — tokens are never interleaved — and returns the list of
//! [`Effect`]s the host must apply. The session itself never renders,
//! never touches the network, and never reads a clock: the host passes
//! `Instant`s in.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::time::Instant;

use crate::command::{Command, KeyAction};
use crate::consts::{MODE_DECAY, ZOOM_STEP};
use crate::cooldown::CooldownGate;
use crate::stroke::{DrawingStore, MoveTransaction, Stroke, StrokeKind};
use crate::viewport::{Mode, Point, ViewportState};

/// Work the host must perform after a dispatch. Ordered; apply in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Re-render the page at the current scale.
    RenderPage(u32),
    /// Re-render after a zoom change, then shift scroll so `center`
    /// stays visually fixed.
    RenderZoomed { page: u32, center: Point },
    /// Repaint the whole annotation overlay from the store.
    RedrawOverlay,
    /// Incrementally paint one new segment of the open stroke.
    PaintSegment {
        kind: StrokeKind,
        from: Point,
        to: Point,
        color: Option<String>,
        width: f64,
    },
    /// The pointer dot moved, changed style, or was hidden.
    PointerUpdated,
    /// One-line status readout for the command bar.
    Status(String),
}

/// All viewer state plus the dispatch logic that mutates it.
pub struct SessionCore {
    pub viewport: ViewportState,
    pub store: DrawingStore,
    gate: CooldownGate,
    draw_mode: bool,
    open_stroke: Option<Stroke>,
    move_txn: Option<MoveTransaction>,
    last_command_at: Option<Instant>,
}

impl Default for SessionCore {
    fn default() -> Self {
        Self {
            viewport: ViewportState::new(),
            store: DrawingStore::new(),
            gate: CooldownGate::new(),
            draw_mode: false,
            open_stroke: None,
            move_txn: None,
            last_command_at: None,
        }
    }
}

impl SessionCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether draw/erase start commands currently have any effect.
    #[must_use]
    pub fn draw_mode(&self) -> bool {
        self.draw_mode
    }

    /// Preview offset of the open move transaction, if one exists.
    #[must_use]
    pub fn move_offset(&self) -> Option<(f64, f64)> {
        self.move_txn.map(|txn| txn.offset)
    }

    /// Dispatch a raw token with the current time.
    pub fn dispatch(&mut self, token: &str) -> Vec<Effect> {
        self.dispatch_at(token, Instant::now())
    }

    /// Dispatch a raw token. Malformed tokens are dropped without feedback;
    /// gated-out commands produce at most a cooldown status line. Any
    /// recognized token resets the mode-decay timer, accepted or not.
    pub fn dispatch_at(&mut self, token: &str, now: Instant) -> Vec<Effect> {
        let Some(cmd) = Command::parse(token) else {
            return Vec::new();
        };
        self.last_command_at = Some(now);

        if !self.gate.can_proceed_at(cmd.kind(), now) {
            return self.cooldown_status(&cmd, now);
        }

        match cmd {
            Command::Next => self.page_step(true),
            Command::Prev => self.page_step(false),
            Command::Pointer(p) => self.pointer(p),
            Command::StartDraw(p) => self.start_stroke(StrokeKind::Draw, p),
            Command::Drawing(p) => self.extend_stroke(StrokeKind::Draw, p),
            Command::StopDraw(p) => self.stop_stroke(StrokeKind::Draw, p),
            Command::StartErase(p) => self.start_stroke(StrokeKind::Erase, p),
            Command::Erasing(p) => self.extend_stroke(StrokeKind::Erase, p),
            Command::StopErase(p) => self.stop_stroke(StrokeKind::Erase, p),
            Command::ClearDrawings => self.clear_drawings(),
            Command::Zoom { value, center_x, center_y } => {
                let center = Point::new(
                    center_x.unwrap_or(self.viewport.pointer.x),
                    center_y.unwrap_or(self.viewport.pointer.y),
                );
                self.apply_zoom(value, center, true)
            }
            Command::ToggleDrawMode => self.toggle_draw_mode(),
            Command::StartMove(p) => self.start_move(p),
            Command::Moving(p) => self.moving(p),
            Command::StopMove => self.stop_move(),
        }
    }

    /// Idle tick from the poll loop (no new command this interval).
    /// Returns `true` when the mode decayed back to navigation.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        if !self.viewport.mode.decays() {
            return false;
        }
        let idle = self
            .last_command_at
            .is_none_or(|last| now.duration_since(last) > MODE_DECAY);
        if idle {
            self.viewport.mode = Mode::Navigation;
        }
        idle
    }

    /// Apply a keyboard shortcut. Shortcuts bypass the cooldown gate,
    /// matching the on-screen buttons.
    pub fn on_key(&mut self, action: KeyAction) -> Vec<Effect> {
        match action {
            KeyAction::PrevPage => self.nav_render(false),
            KeyAction::NextPage => self.nav_render(true),
            KeyAction::ZoomIn => {
                let target = self.viewport.gesture_zoom + ZOOM_STEP;
                self.apply_zoom(target, self.viewport.pointer, false)
            }
            KeyAction::ZoomOut => {
                let target = self.viewport.gesture_zoom - ZOOM_STEP;
                self.apply_zoom(target, self.viewport.pointer, false)
            }
            KeyAction::ResetZoom => self.apply_zoom(1.0, self.viewport.pointer, false),
            KeyAction::ToggleDrawMode => self.toggle_draw_mode(),
            KeyAction::ClearDrawings => self.clear_drawings(),
            KeyAction::HidePointer => {
                self.viewport.set_pointer(0.5, 0.5, false);
                vec![Effect::PointerUpdated]
            }
        }
    }

    // --- Command handlers ---

    fn page_step(&mut self, forward: bool) -> Vec<Effect> {
        let mut effects = self.nav_render(forward);
        self.viewport.mode = Mode::Navigation;
        effects.push(Effect::Status(
            if forward { "next page" } else { "previous page" }.to_owned(),
        ));
        effects
    }

    /// Page step shared with the keyboard path: render only on an actual
    /// page change, no mode or status side effects.
    fn nav_render(&mut self, forward: bool) -> Vec<Effect> {
        let moved = if forward {
            self.viewport.next_page()
        } else {
            self.viewport.prev_page()
        };
        if moved {
            vec![Effect::RenderPage(self.viewport.current_page)]
        } else {
            Vec::new()
        }
    }

    fn pointer(&mut self, p: Point) -> Vec<Effect> {
        self.viewport.set_pointer(p.x, p.y, true);
        self.viewport.mode = Mode::Pointer;
        vec![Effect::PointerUpdated]
    }

    fn start_stroke(&mut self, kind: StrokeKind, p: Point) -> Vec<Effect> {
        self.viewport.set_pointer(p.x, p.y, true);
        if self.draw_mode {
            // Draw and erase are mutually exclusive: starting one commits
            // the other if it was open.
            let other = match kind {
                StrokeKind::Draw => StrokeKind::Erase,
                StrokeKind::Erase => StrokeKind::Draw,
            };
            self.commit_open_stroke(other);
            self.open_stroke = Some(match kind {
                StrokeKind::Draw => Stroke::draw(self.viewport.pointer),
                StrokeKind::Erase => Stroke::erase(self.viewport.pointer),
            });
            self.viewport.mode = match kind {
                StrokeKind::Draw => Mode::Drawing,
                StrokeKind::Erase => Mode::Erasing,
            };
        }
        vec![Effect::PointerUpdated]
    }

    fn extend_stroke(&mut self, kind: StrokeKind, p: Point) -> Vec<Effect> {
        self.viewport.set_pointer(p.x, p.y, true);
        let mut effects = vec![Effect::PointerUpdated];
        if !self.draw_mode {
            return effects;
        }
        if let Some(stroke) = self.open_stroke.as_mut().filter(|s| s.kind == kind) {
            stroke.push(self.viewport.pointer);
            if let Some((from, to)) = stroke.last_segment() {
                effects.push(Effect::PaintSegment {
                    kind,
                    from,
                    to,
                    color: stroke.color.clone(),
                    width: stroke.width,
                });
            }
        }
        effects
    }

    fn stop_stroke(&mut self, kind: StrokeKind, p: Point) -> Vec<Effect> {
        if self.draw_mode {
            self.commit_open_stroke(kind);
        }
        self.viewport.set_pointer(p.x, p.y, true);
        self.viewport.mode = Mode::Pointer;
        vec![Effect::PointerUpdated]
    }

    /// Close the open stroke if it matches `kind`, committing it when it
    /// has at least one segment.
    fn commit_open_stroke(&mut self, kind: StrokeKind) {
        if self.open_stroke.as_ref().is_some_and(|s| s.kind == kind) {
            if let Some(stroke) = self.open_stroke.take() {
                self.store.commit(self.viewport.current_page, stroke);
            }
        }
    }

    fn clear_drawings(&mut self) -> Vec<Effect> {
        self.store.clear_page(self.viewport.current_page);
        self.viewport.mode = Mode::Pointer;
        vec![
            Effect::RedrawOverlay,
            Effect::Status("drawings cleared".to_owned()),
        ]
    }

    /// Shared zoom path. `hide_pointer` matches the gesture behavior of
    /// hiding the dot at the zoom center; keyboard zoom leaves it alone.
    fn apply_zoom(&mut self, value: f64, center: Point, hide_pointer: bool) -> Vec<Effect> {
        self.viewport.mode = Mode::Zoom;
        let significant = self.viewport.set_gesture_zoom(value);

        let mut effects = Vec::new();
        if significant {
            effects.push(Effect::RenderZoomed {
                page: self.viewport.current_page,
                center,
            });
            effects.push(Effect::Status(format!(
                "zoom {}% at ({:.1}%, {:.1}%)",
                self.viewport.zoom_percentage(),
                center.x * 100.0,
                center.y * 100.0,
            )));
        }
        if hide_pointer && self.viewport.pointer_active {
            self.viewport.set_pointer(center.x, center.y, false);
            effects.push(Effect::PointerUpdated);
        }
        effects
    }

    fn toggle_draw_mode(&mut self) -> Vec<Effect> {
        self.draw_mode = !self.draw_mode;
        if !self.draw_mode {
            // Turning draw mode off abandons any open stroke uncommitted.
            self.open_stroke = None;
        }
        vec![Effect::Status(
            if self.draw_mode { "draw mode on" } else { "draw mode off" }.to_owned(),
        )]
    }

    fn start_move(&mut self, p: Point) -> Vec<Effect> {
        self.move_txn = Some(MoveTransaction::new(p));
        self.viewport.mode = Mode::Moving;
        vec![Effect::Status("grabbing drawing".to_owned())]
    }

    fn moving(&mut self, p: Point) -> Vec<Effect> {
        let Some(txn) = self.move_txn.as_mut() else {
            return Vec::new();
        };
        txn.update(p);
        let (dx, dy) = txn.offset;
        vec![
            Effect::RedrawOverlay,
            Effect::Status(format!("moving: dx={:.1}%, dy={:.1}%", dx * 100.0, dy * 100.0)),
        ]
    }

    fn stop_move(&mut self) -> Vec<Effect> {
        let Some(txn) = self.move_txn.take() else {
            return Vec::new();
        };
        let (dx, dy) = txn.offset;
        self.store.translate_page(self.viewport.current_page, dx, dy);
        self.viewport.mode = Mode::Pointer;
        vec![
            Effect::RedrawOverlay,
            Effect::Status("drawing moved".to_owned()),
        ]
    }

    /// User feedback for a gated-out command. Only the slow, deliberate
    /// actions get a readout; fast continuous kinds stay silent.
    fn cooldown_status(&self, cmd: &Command, now: Instant) -> Vec<Effect> {
        let remaining = self.gate.remaining_at(cmd.kind(), now);
        match cmd {
            Command::Next | Command::Prev => vec![Effect::Status(format!(
                "navigation cooldown: {:.1}s",
                remaining.as_secs_f64()
            ))],
            Command::ToggleDrawMode => vec![Effect::Status(format!(
                "draw mode cooldown: {:.1}s",
                remaining.as_secs_f64()
            ))],
            Command::Zoom { .. } if remaining.as_millis() > 50 => vec![Effect::Status(
                format!("zoom cooldown: {}ms", remaining.as_millis()),
            )],
            _ => Vec::new(),
        }
    }
}
