//! Shaping backends and the shaped-line handle they produce.

pub mod glyph_line;
pub mod shaper;

pub use glyph_line::{Glyph, GlyphLine};
pub use shaper::{ShapedFont, TextShaper};
