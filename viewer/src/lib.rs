//! Core engine for the gesture-controlled presentation viewer.
//!
//! This crate owns every state transition in the viewer: parsing gesture
//! command tokens, rate-limiting them, mutating viewport and annotation
//! state, and computing the resulting paint work. It performs no I/O and
//! holds no hidden clocks — every timed operation has an explicit-instant
//! `*_at` variant — so the whole dispatch path is testable headlessly.
//! The host crate wires it to the detector endpoint and a display.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Top-level dispatcher and the [`session::Effect`] output type |
//! | [`command`] | Token grammar and keyboard shortcut mapping |
//! | [`cooldown`] | Per-command-kind rate limiting |
//! | [`viewport`] | Page / zoom / pointer / mode state |
//! | [`stroke`] | Freehand annotation strokes and the per-page store |
//! | [`render`] | Page geometry and annotation paint ops |
//! | [`consts`] | Shared numeric constants (zoom limits, stroke defaults) |

pub mod command;
pub mod consts;
pub mod cooldown;
pub mod render;
pub mod session;
pub mod stroke;
pub mod viewport;
