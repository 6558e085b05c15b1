//! Pixel surfaces
//!
//! A [`Surface`] is a fixed-size sheet of bottles to draw on. Everything that ends up
//! on the Mate Light (menus, text, sprites) is composed from surfaces and finally
//! blitted onto a [`Screen`](crate::screen::Screen).
//!
//! # Clipping
//!
//! All drawing clips silently. A point is on a surface when
//! `0 <= x < width` and `0 <= y < height`; anything else is dropped without an
//! error. Drawing never fails, so it is safe to call from the frame loop.
//!
//! # Example
//!
//! ```rust
//! use mlgame::color::{CYAN, RED, DEFAULT_BRIGHTNESS};
//! use mlgame::surface::Surface;
//!
//! let mut sheet = Surface::new(10, 10);
//! sheet.draw_rect((0, 0), (10, 10), CYAN, Some(RED), DEFAULT_BRIGHTNESS);
//! sheet.draw_line((0, 0), (9, 9), RED, DEFAULT_BRIGHTNESS);
//! ```

use crate::color::{get_color, Color, BLACK, DEFAULT_BRIGHTNESS};
use std::ops::RangeInclusive;

/// How far from the ideal line a point may be and still be drawn
const LINE_TOLERANCE: f64 = 0.5;

/// How far from the ideal radius a point may be and still count as outline
const CIRCLE_TOLERANCE: f64 = 1.3;

/// An owned rectangular buffer of colors, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Surface {
    /// Creates a black surface of the given size in bottles
    pub fn new(width: u32, height: u32) -> Self {
        let mut surface = Surface {
            width,
            height,
            pixels: vec![BLACK; width as usize * height as usize],
        };
        surface.fill(BLACK, DEFAULT_BRIGHTNESS);
        surface
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All cells, row by row (y outer, x inner)
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Returns true if `pos` addresses a cell of this surface
    #[inline]
    pub fn contains(&self, pos: (i32, i32)) -> bool {
        let (x, y) = pos;
        x >= 0 && y >= 0 && (x as i64) < self.width as i64 && (y as i64) < self.height as i64
    }

    #[inline]
    fn index(&self, pos: (i32, i32)) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.1 as usize * self.width as usize + pos.0 as usize)
        } else {
            None
        }
    }

    /// Reads the color at `pos`, `None` when off the surface
    pub fn get(&self, pos: (i32, i32)) -> Option<Color> {
        self.index(pos).map(|i| self.pixels[i])
    }

    /// Writes an already scaled color, clipped to the surface
    pub fn put_pixel(&mut self, pos: (i32, i32), color: Color) {
        if let Some(i) = self.index(pos) {
            self.pixels[i] = color;
        }
    }

    /// Fills the whole surface with `color`
    pub fn fill(&mut self, color: Color, brightness: f32) {
        let color = get_color(color, brightness);
        self.pixels.fill(color);
    }

    /// Draws one dot, silently ignored when `pos` is off the surface
    pub fn draw_dot(&mut self, pos: (i32, i32), color: Color, brightness: f32) {
        self.put_pixel(pos, get_color(color, brightness));
    }

    /// Columns in `lo..=hi` that lie on the surface
    fn clip_columns(&self, lo: i64, hi: i64) -> RangeInclusive<i64> {
        lo.max(0)..=hi.min(self.width as i64 - 1)
    }

    /// Rows in `lo..=hi` that lie on the surface
    fn clip_rows(&self, lo: i64, hi: i64) -> RangeInclusive<i64> {
        lo.max(0)..=hi.min(self.height as i64 - 1)
    }

    /// Draws a straight line from `start` to `end` (both inclusive)
    ///
    /// Every point in the bounding box of the two endpoints that lies closer
    /// than half a bottle to the ideal line is drawn.
    pub fn draw_line(&mut self, start: (i32, i32), end: (i32, i32), color: Color, brightness: f32) {
        if start == end {
            self.draw_dot(start, color, brightness);
            return;
        }

        let (ax, ay) = (start.0 as f64, start.1 as f64);
        let (bx, by) = (end.0 as f64, end.1 as f64);
        let length = ((bx - ax).powi(2) + (by - ay).powi(2)).sqrt();

        let distance = |px: f64, py: f64| {
            ((bx - ax) * (ay - py) - (ax - px) * (by - ay)).abs() / length
        };

        let columns = self.clip_columns(start.0.min(end.0) as i64, start.0.max(end.0) as i64);
        let rows = self.clip_rows(start.1.min(end.1) as i64, start.1.max(end.1) as i64);
        for x in columns {
            for y in rows.clone() {
                if distance(x as f64, y as f64) < LINE_TOLERANCE {
                    self.draw_dot((x as i32, y as i32), color, brightness);
                }
            }
        }
    }

    /// Draws a rectangle border with its upper left corner at `pos`
    ///
    /// With a `fillcolor` the interior is filled too. Rectangles smaller than
    /// 3x3 have no interior, so only the border is drawn.
    pub fn draw_rect(
        &mut self,
        pos: (i32, i32),
        size: (u32, u32),
        color: Color,
        fillcolor: Option<Color>,
        brightness: f32,
    ) {
        if size.0 == 0 || size.1 == 0 {
            return;
        }
        let (left, top) = (pos.0 as i64, pos.1 as i64);
        let right = left + size.0 as i64 - 1;
        let bottom = top + size.1 as i64 - 1;

        let columns = self.clip_columns(left, right);
        let rows = self.clip_rows(top, bottom);
        for x in columns {
            for y in rows.clone() {
                let on_border = x == left || x == right || y == top || y == bottom;
                let paint = if on_border { Some(color) } else { fillcolor };
                if let Some(paint) = paint {
                    self.draw_dot((x as i32, y as i32), paint, brightness);
                }
            }
        }
    }

    /// Draws a circle around `pos`
    ///
    /// Outline points are those whose distance from the center is within 1.3
    /// bottles of `radius`. Points further inside get `fillcolor` if one is given.
    pub fn draw_circle(
        &mut self,
        pos: (i32, i32),
        radius: u32,
        color: Color,
        fillcolor: Option<Color>,
        brightness: f32,
    ) {
        let (cx, cy) = (pos.0 as i64, pos.1 as i64);
        let r = radius as i64;
        let radius = radius as f64;

        let columns = self.clip_columns(cx - r, cx + r);
        let rows = self.clip_rows(cy - r, cy + r);
        for x in columns {
            for y in rows.clone() {
                let (dx, dy) = ((x - cx) as f64, (y - cy) as f64);
                let distance = (dx * dx + dy * dy).sqrt();
                let paint = if (distance - radius).abs() < CIRCLE_TOLERANCE {
                    Some(color)
                } else if distance < radius {
                    fillcolor
                } else {
                    None
                };
                if let Some(paint) = paint {
                    self.draw_dot((x as i32, y as i32), paint, brightness);
                }
            }
        }
    }

    /// Copies `surface` onto this one with its upper left corner at `pos`
    ///
    /// Only the overlapping region is written.
    pub fn blit(&mut self, surface: &Surface, pos: (i32, i32)) {
        let (left, top) = (pos.0 as i64, pos.1 as i64);
        let columns = self.clip_columns(left, left + surface.width as i64 - 1);
        let rows = self.clip_rows(top, top + surface.height as i64 - 1);

        for y in rows {
            for x in columns.clone() {
                if let Some(color) = surface.get(((x - left) as i32, (y - top) as i32)) {
                    self.put_pixel((x as i32, y as i32), color);
                }
            }
        }
    }

    /// Returns a copy of this surface with every `before` cell turned into `after`
    pub fn replace_color(&self, before: Color, after: Color) -> Surface {
        let mut replaced = self.clone();
        for pixel in replaced.pixels.iter_mut().filter(|p| **p == before) {
            *pixel = after;
        }
        replaced
    }

    /// Same as [`crate::color::get_color`]
    pub fn get_color(color: Color, brightness: f32) -> Color {
        get_color(color, brightness)
    }
}
