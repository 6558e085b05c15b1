//! mlgame - a small drawing toolkit for the Mate Light
//!
//! The Mate Light is a wall of bottles, each lit by an RGB LED, driven by UDP
//! frames. This crate draws on in-memory [`surface::Surface`]s, composes them
//! onto a [`screen::Screen`] and ships the result to the display.
//!
//! # Architecture
//!
//! - `color`: colors and brightness scaling
//! - `surface`: pixel buffers and drawing primitives
//! - `screen`: the display, a surface bound to a UDP destination
//! - `transport`: frame wire format and the receive side
//! - `text`: bitmap glyph atlas and text rendering
//! - `gui`: the menu widget
//! - `clock`: frame rate limiting
//! - `input`: SDL input, controller buttons and the remote-control bridge
//! - `config`: JSON configuration for the programs in `src/bin`

pub mod clock;
pub mod color;
pub mod config;
pub mod gui;
pub mod input;
pub mod screen;
pub mod surface;
pub mod text;
pub mod transport;

pub use clock::Clock;
pub use color::{get_color, Color, DEFAULT_BRIGHTNESS};
pub use screen::Screen;
pub use surface::Surface;
