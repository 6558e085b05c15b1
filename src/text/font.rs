use super::atlas::{cell_origin, glyph_index, GlyphAtlas, CELL_PITCH, GLYPH_SIZE};
use super::glyphs::{self, FALLBACK};
use crate::color::{get_color, Color, DEFAULT_BRIGHTNESS};
use crate::surface::Surface;

/// Width in bottles of `len` glyphs set side by side with one bottle of spacing
pub fn text_width(len: usize) -> u32 {
    (len as u32 * CELL_PITCH).saturating_sub(CELL_PITCH - GLYPH_SIZE)
}

/// A line of text that renders to a [`Surface`]
///
/// Characters outside the atlas table render as a small hollow box.
///
/// # Example
///
/// ```rust
/// use mlgame::color::{BLACK, WHITE};
/// use mlgame::text::{Font, GlyphAtlas};
///
/// let atlas = GlyphAtlas::builtin();
/// let label = Font::new(&atlas, "hi!", WHITE, BLACK).update();
/// assert_eq!((label.width(), label.height()), (17, 5));
/// ```
#[derive(Debug, Clone)]
pub struct Font<'a> {
    atlas: &'a GlyphAtlas,
    text: String,
    foreground: Color,
    background: Color,
    brightness: f32,
}

impl<'a> Font<'a> {
    /// Creates a font at the default brightness
    pub fn new(
        atlas: &'a GlyphAtlas,
        text: impl Into<String>,
        foreground: Color,
        background: Color,
    ) -> Self {
        Font {
            atlas,
            text: text.into(),
            foreground,
            background,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }

    pub fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Renders the whole text into one surface, 5 bottles high
    pub fn update(&self) -> Surface {
        let len = self.text.chars().count();
        let mut surface = Surface::new(text_width(len), GLYPH_SIZE);
        surface.fill(self.background, self.brightness);

        for (i, c) in self.text.chars().enumerate() {
            let glyph = self.render_char(c);
            surface.blit(&glyph, ((i as u32 * CELL_PITCH) as i32, 0));
        }

        surface
    }

    /// Renders a single 5x5 glyph
    pub fn render_char(&self, c: char) -> Surface {
        let ink = get_color(self.foreground, self.brightness);
        let paper = get_color(self.background, self.brightness);
        let mut surface = Surface::new(GLYPH_SIZE, GLYPH_SIZE);

        match glyph_index(c) {
            Some(index) => {
                let (ox, oy) = cell_origin(index);
                for y in 0..GLYPH_SIZE as i32 {
                    for x in 0..GLYPH_SIZE as i32 {
                        let is_ink = self.atlas.is_ink((ox + x, oy + y));
                        surface.put_pixel((x, y), if is_ink { ink } else { paper });
                    }
                }
            }
            None => {
                for (y, row) in FALLBACK.iter().enumerate() {
                    for x in 0..GLYPH_SIZE {
                        let color = if glyphs::is_set(*row, x) { ink } else { paper };
                        surface.put_pixel((x as i32, y as i32), color);
                    }
                }
            }
        }

        surface
    }
}
