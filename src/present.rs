//! Applies dispatcher effects to a display.
//!
//! ARCHITECTURE
//! ============
//! `Presenter` is the render adapter the dispatcher never sees: it owns
//! the session, the page source, and the display, and translates each
//! batch of [`Effect`]s into display calls. Renders are serialized by
//! construction — one batch is applied to completion before the next is
//! taken — and multiple render requests inside a batch coalesce to the
//! latest one, so a burst of zoom effects costs a single render.

#[cfg(test)]
#[path = "present_test.rs"]
mod present_test;

use std::time::Instant;

use viewer::command::KeyAction;
use viewer::render::{self, PageSource};
use viewer::session::{Effect, SessionCore};
use viewer::viewport::Point;

use crate::display::Display;

/// Which flavor of full render a batch asked for.
#[derive(Debug, Clone, Copy)]
enum RenderKind {
    Page,
    Zoomed { center: Point },
}

/// Owns the session and drives a display from its effects.
pub struct Presenter<S: PageSource, D: Display> {
    session: SessionCore,
    source: S,
    display: D,
    container_width: f64,
    /// Pixel size of the last successfully rendered canvas.
    canvas: (f64, f64),
}

impl<S: PageSource, D: Display> Presenter<S, D> {
    #[must_use]
    pub fn new(source: S, display: D, container_width: f64) -> Self {
        Self {
            session: SessionCore::new(),
            source,
            display,
            container_width,
            canvas: (0.0, 0.0),
        }
    }

    #[must_use]
    pub fn session(&self) -> &SessionCore {
        &self.session
    }

    /// Adopt the document: page count, fit-to-width base scale, first render.
    pub fn load(&mut self) {
        self.session.viewport.page_count = self.source.page_count();
        self.fit_base_scale();
        self.render(RenderKind::Page);
    }

    /// The container was resized: refit and re-render the current page.
    pub fn resize(&mut self, container_width: f64) {
        self.container_width = container_width;
        self.fit_base_scale();
        self.render(RenderKind::Page);
    }

    pub fn handle_token(&mut self, token: &str) {
        self.handle_token_at(token, Instant::now());
    }

    pub fn handle_token_at(&mut self, token: &str, now: Instant) {
        let effects = self.session.dispatch_at(token, now);
        self.apply_effects(effects);
    }

    /// Idle poll tick: run mode decay.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        if self.session.tick_at(now) {
            let vp = &self.session.viewport;
            self.display.update_pointer(vp.pointer, vp.pointer_active, vp.mode);
        }
    }

    pub fn on_key(&mut self, action: KeyAction) {
        let effects = self.session.on_key(action);
        self.apply_effects(effects);
    }

    /// Pass a status line straight through to the display.
    pub fn status(&mut self, text: &str) {
        self.display.set_status(text);
    }

    pub(crate) fn apply_effects(&mut self, effects: Vec<Effect>) {
        let mut pending_render: Option<RenderKind> = None;
        let mut overlay_dirty = false;

        for effect in effects {
            match effect {
                // Latest wins: a batch never triggers more than one render.
                Effect::RenderPage(_) => pending_render = Some(RenderKind::Page),
                Effect::RenderZoomed { center, .. } => {
                    pending_render = Some(RenderKind::Zoomed { center });
                }
                Effect::RedrawOverlay => overlay_dirty = true,
                Effect::PaintSegment { kind, from, to, color, width } => {
                    let op = render::segment_op(
                        kind,
                        from,
                        to,
                        color,
                        width,
                        self.canvas.0,
                        self.canvas.1,
                    );
                    self.display.paint_segment(&op);
                }
                Effect::PointerUpdated => {
                    let vp = &self.session.viewport;
                    self.display.update_pointer(vp.pointer, vp.pointer_active, vp.mode);
                }
                Effect::Status(text) => self.display.set_status(&text),
            }
        }

        if let Some(kind) = pending_render {
            // A full render repaints the overlay too.
            self.render(kind);
        } else if overlay_dirty {
            self.redraw_overlay();
        }
    }

    fn fit_base_scale(&mut self) {
        let page = self.session.viewport.current_page;
        self.session.viewport.base_scale =
            render::base_scale_for(&self.source, page, self.container_width);
    }

    fn render(&mut self, kind: RenderKind) {
        let result = render::render_page(
            &self.source,
            &self.session.viewport,
            &self.session.store,
            self.session.move_offset(),
        );
        match result {
            Ok(Some(scene)) => {
                let old = self.canvas;
                self.canvas = (scene.width_px, scene.height_px);
                self.display.show_scene(&scene);
                if let RenderKind::Zoomed { center } = kind {
                    let (dx, dy) = render::zoom_scroll_delta(old, self.canvas, center);
                    self.display.scroll_by(dx, dy);
                }
                let vp = &self.session.viewport;
                if vp.pointer_active {
                    self.display.update_pointer(vp.pointer, true, vp.mode);
                }
            }
            // Out-of-range requests are dropped, not even an error.
            Ok(None) => {}
            Err(err) => {
                tracing::error!(error = %err, "page render failed");
                self.display.show_error("failed to render the page");
            }
        }
    }

    fn redraw_overlay(&mut self) {
        let ops = render::overlay_ops(
            &self.session.store,
            self.session.viewport.current_page,
            self.canvas.0,
            self.canvas.1,
            self.session.move_offset(),
        );
        self.display.redraw_overlay(&ops);
    }
}
