//! Bitmap text rendering
//!
//! Text is drawn from a glyph atlas of 5x5 cells. The atlas can be loaded from
//! an image file ([`GlyphAtlas::load`]) or painted from the built-in patterns
//! ([`GlyphAtlas::builtin`]). Both use the same cell layout, so a custom image
//! is a drop-in replacement.
//!
//! - `glyphs`: the supported character table and built-in patterns
//! - `atlas`: atlas loading and the cell index math
//! - `font`: turns a string into a [`Surface`](crate::surface::Surface)

pub mod atlas;
pub mod font;
pub mod glyphs;

pub use atlas::{AtlasError, GlyphAtlas};
pub use font::{text_width, Font};
pub use glyphs::CHARSET;
