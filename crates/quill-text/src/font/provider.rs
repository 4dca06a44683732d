use core::fmt;
use std::sync::Arc;

use crate::font::LineMetrics;
use crate::shaping::{Glyph, GlyphLine};

/// Default glyph substituted for every character of a password line.
pub const PASSWORD_MASK: char = '\u{2022}';

/// Source of shaped lines and typographic metrics for a single font at a
/// single size.
///
/// `shape` returns the owned line handle, or `None` when the backend cannot
/// produce one; callers treat that as "nothing to draw".
pub trait FontProvider: fmt::Debug + Send + Sync {
    /// Ascent, descent and leading in pixels.
    fn metrics(&self) -> LineMetrics;

    /// Shape a run of code points into a positioned glyph line.
    fn shape(&self, text: &[char]) -> Option<GlyphLine>;

    /// Character used to mask password text.
    fn mask_char(&self) -> char {
        PASSWORD_MASK
    }
}

/// Shared font handle. Lines reference a font, they never own it.
pub type Font = Arc<dyn FontProvider>;

/// Fixed-advance font: every code point is one glyph of the same width.
///
/// Used when no real font can be loaded and in tests, where exact pixel
/// positions need to be predictable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceFont {
    pub advance: f32,
    pub metrics: LineMetrics,
}

impl MonospaceFont {
    pub fn new(advance: f32, ascent: f32, descent: f32, leading: f32) -> Self {
        Self {
            advance,
            metrics: LineMetrics::new(ascent, descent, leading),
        }
    }

    /// Rough proportions of a typical UI face at `size_px`.
    pub fn for_size(size_px: f32) -> Self {
        Self::new(size_px * 0.6, size_px * 0.8, size_px * 0.2, 0.0)
    }

    pub fn into_font(self) -> Font {
        Arc::new(self)
    }
}

impl FontProvider for MonospaceFont {
    fn metrics(&self) -> LineMetrics {
        self.metrics
    }

    fn shape(&self, text: &[char]) -> Option<GlyphLine> {
        if text.is_empty() {
            return None;
        }
        let glyphs = text.iter().enumerate().map(|(i, ch)| {
            let glyph = Glyph {
                id: *ch as u32,
                x: i as f32 * self.advance,
                y: 0.0,
                advance: self.advance,
            };
            (glyph, i)
        });
        Some(GlyphLine::from_clusters(text.len(), glyphs, self.metrics))
    }
}
