//! Glyph atlas
//!
//! An atlas is an image with one 5x5 cell per character of
//! [`CHARSET`](super::glyphs::CHARSET), eight cells per row, with a one pixel
//! gutter between cells. Black pixels are ink, everything else is paper.
//!
//! ```text
//! cell i:  row = i / 8, col = i % 8, origin = (col * 6, row * 6)
//! ```

use super::glyphs::{self, CHARSET};
use crate::color::{Color, BLACK, WHITE};
use crate::surface::Surface;
use sdl2::image::{InitFlag, LoadSurface};
use sdl2::pixels::PixelFormatEnum;
use std::fmt;
use std::path::Path;

/// Width and height of one glyph
pub const GLYPH_SIZE: u32 = 5;

/// Distance between the origins of neighbouring cells
pub const CELL_PITCH: u32 = GLYPH_SIZE + 1;

/// Cells per atlas row
pub const ATLAS_COLUMNS: usize = 8;

/// Errors that can occur while loading an atlas image
#[derive(Debug, Clone)]
pub enum AtlasError {
    /// The image could not be decoded
    Decode(String),

    /// The image has no room for every cell
    TooSmall {
        width: u32,
        height: u32,
        required_width: u32,
        required_height: u32,
    },
}

impl fmt::Display for AtlasError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AtlasError::Decode(msg) => write!(f, "Failed to decode glyph atlas: {}", msg),
            AtlasError::TooSmall {
                width,
                height,
                required_width,
                required_height,
            } => write!(
                f,
                "Glyph atlas is {}x{}, needs at least {}x{}",
                width, height, required_width, required_height
            ),
        }
    }
}

impl std::error::Error for AtlasError {}

/// Table index of `c`, case-insensitive
pub fn glyph_index(c: char) -> Option<usize> {
    let c = c.to_ascii_lowercase();
    CHARSET.chars().position(|entry| entry == c)
}

/// Upper left corner of cell `index` in the atlas
pub fn cell_origin(index: usize) -> (i32, i32) {
    let row = index / ATLAS_COLUMNS;
    let col = index % ATLAS_COLUMNS;
    ((col as u32 * CELL_PITCH) as i32, (row as u32 * CELL_PITCH) as i32)
}

/// Smallest atlas that holds every cell of the table
pub fn required_size() -> (u32, u32) {
    let cells = CHARSET.chars().count();
    let rows = cells.div_ceil(ATLAS_COLUMNS) as u32;
    let cols = ATLAS_COLUMNS.min(cells) as u32;
    (
        cols * CELL_PITCH - (CELL_PITCH - GLYPH_SIZE),
        rows * CELL_PITCH - (CELL_PITCH - GLYPH_SIZE),
    )
}

/// An immutable glyph sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphAtlas {
    sheet: Surface,
}

impl GlyphAtlas {
    /// Wraps a sheet laid out as described in the module docs
    pub fn from_surface(sheet: Surface) -> Result<Self, AtlasError> {
        let (required_width, required_height) = required_size();
        if sheet.width() < required_width || sheet.height() < required_height {
            return Err(AtlasError::TooSmall {
                width: sheet.width(),
                height: sheet.height(),
                required_width,
                required_height,
            });
        }
        Ok(GlyphAtlas { sheet })
    }

    /// Loads an atlas image (PNG, BMP, ...) through SDL2_image
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AtlasError> {
        let path = path.as_ref();
        let _image_context = sdl2::image::init(InitFlag::PNG).map_err(AtlasError::Decode)?;

        let image = sdl2::surface::Surface::from_file(path)
            .map_err(|e| AtlasError::Decode(format!("{}: {}", path.display(), e)))?;
        let rgb = image
            .convert_format(PixelFormatEnum::RGB24)
            .map_err(AtlasError::Decode)?;

        let (width, height) = (rgb.width(), rgb.height());
        let pitch = rgb.pitch() as usize;
        let mut sheet = Surface::new(width, height);
        rgb.with_lock(|pixels| {
            for y in 0..height as usize {
                for x in 0..width as usize {
                    let i = y * pitch + x * 3;
                    let color = Color::rgb(pixels[i], pixels[i + 1], pixels[i + 2]);
                    sheet.put_pixel((x as i32, y as i32), color);
                }
            }
        });

        Self::from_surface(sheet)
    }

    /// The atlas painted from the built-in glyph patterns
    pub fn builtin() -> Self {
        let (width, height) = required_size();
        let mut sheet = Surface::new(width, height);
        sheet.fill(WHITE, 1.0);

        for (index, c) in CHARSET.chars().enumerate() {
            let Some(rows) = glyphs::pattern(c) else {
                continue;
            };
            let (ox, oy) = cell_origin(index);
            for (y, row) in rows.iter().enumerate() {
                for x in 0..GLYPH_SIZE {
                    if glyphs::is_set(*row, x) {
                        sheet.put_pixel((ox + x as i32, oy + y as i32), BLACK);
                    }
                }
            }
        }

        GlyphAtlas { sheet }
    }

    /// Whether the atlas pixel at `pos` is ink
    pub fn is_ink(&self, pos: (i32, i32)) -> bool {
        self.sheet.get(pos) == Some(BLACK)
    }

    pub fn sheet(&self) -> &Surface {
        &self.sheet
    }
}

impl Default for GlyphAtlas {
    fn default() -> Self {
        GlyphAtlas::builtin()
    }
}
