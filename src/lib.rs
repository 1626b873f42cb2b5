//! Host runtime for the gesture-controlled presentation viewer.
//!
//! The [`viewer`] crate owns every state transition; this crate wires it
//! to the outside world: polling the gesture detector over HTTP, driving
//! a display from the dispatcher's effects, and running the peripheral
//! chrome (flash notices, camera indicator, presentation menus).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`poll`] | Fixed-interval command polling and failure accounting |
//! | [`detector`] | HTTP client for the detector endpoints |
//! | [`present`] | Applies dispatcher effects to a [`display::Display`] |
//! | [`display`] | Display seam and the headless tracing-backed impl |
//! | [`notices`] | Transient flash messages |
//! | [`camera`] | Camera availability probing and monitoring |
//! | [`menu`] | Presentation-card dropdown menu state |
//! | [`config`] | Environment-driven configuration |

pub mod camera;
pub mod config;
pub mod detector;
pub mod display;
pub mod menu;
pub mod notices;
pub mod poll;
pub mod present;
