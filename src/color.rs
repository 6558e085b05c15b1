//! Colors and brightness scaling
//!
//! Every color that lands on a [`Surface`](crate::surface::Surface) is scaled by a
//! brightness factor first. The Mate Light bottles are very bright, so the whole
//! toolkit defaults to 10% ([`DEFAULT_BRIGHTNESS`]).

use serde::{Deserialize, Serialize};

/// Brightness applied when a caller has no better idea
pub const DEFAULT_BRIGHTNESS: f32 = 0.1;

/// An RGB triplet, one byte per channel
///
/// Serialized as a plain `[r, g, b]` array so config files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Returns this color with `brightness` applied to every channel
    ///
    /// Each channel is multiplied and floored. There is no clamping beyond the
    /// saturating float conversion, callers keep `brightness` within `[0, 1]`.
    pub fn scaled(self, brightness: f32) -> Self {
        let scale = |channel: u8| (channel as f32 * brightness).floor() as u8;
        Color {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }

    /// Channels in wire order
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color { r, g, b }
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.channels()
    }
}

impl From<Color> for sdl2::pixels::Color {
    fn from(color: Color) -> Self {
        sdl2::pixels::Color::RGB(color.r, color.g, color.b)
    }
}

/// Returns `color` with the brightness level applied
pub fn get_color(color: Color, brightness: f32) -> Color {
    color.scaled(brightness)
}

// Named colors shared by every module
pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const GREY: Color = Color::rgb(192, 192, 192);
pub const DARKGREY: Color = Color::rgb(128, 128, 128);
pub const RED: Color = Color::rgb(255, 0, 0);
pub const GREEN: Color = Color::rgb(0, 255, 0);
pub const BLUE: Color = Color::rgb(0, 0, 255);
pub const YELLOW: Color = Color::rgb(255, 255, 0);
pub const MAGENTA: Color = Color::rgb(255, 0, 255);
pub const CYAN: Color = Color::rgb(0, 255, 255);
