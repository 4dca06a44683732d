use std::sync::Arc;

use swash::{FontRef, Metrics};

use crate::font::{FontError, FontMetrics, Result, ScaledFontMetrics};

/// Loaded font face backed by a font file (TTF/OTF/collection).
///
/// Owns the font bytes so that both swash (metrics) and harfrust (shaping)
/// can borrow them for as long as the face lives.
#[derive(Debug, Clone)]
pub struct FontFace {
    data: Arc<[u8]>,
    /// Face index within a collection.
    index: u32,
    /// Offset to the table directory for this face.
    offset: u32,
    key: swash::CacheKey,
    metrics: FontMetrics,
}

impl FontFace {
    /// Create a font face from raw bytes and a face index within the file.
    pub fn from_bytes(data: Arc<[u8]>, index: usize) -> Result<Self> {
        let font = FontRef::from_index(&data, index).ok_or(FontError::InvalidFont)?;
        let metrics = Self::metrics_from_swash(&font);
        let (offset, key) = (font.offset, font.key);
        Ok(Self {
            data,
            index: index as u32,
            offset,
            key,
            metrics,
        })
    }

    pub fn from_vec(data: Vec<u8>, index: usize) -> Result<Self> {
        Self::from_bytes(Arc::from(data), index)
    }

    pub fn from_path(path: impl AsRef<std::path::Path>, index: usize) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_vec(data, index)
    }

    /// Raw font bytes, shared with the shaper.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    fn as_swash_ref(&self) -> FontRef<'_> {
        FontRef {
            data: &self.data,
            offset: self.offset,
            key: self.key,
        }
    }

    fn metrics_from_swash(font: &FontRef<'_>) -> FontMetrics {
        let Metrics {
            units_per_em,
            ascent,
            descent,
            leading,
            ..
        } = font.metrics(&[]);

        FontMetrics {
            ascent,
            descent,
            line_gap: leading,
            units_per_em,
        }
    }

    /// Font metrics in font units.
    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    /// Font metrics scaled to the requested pixel size (px per em).
    pub fn scaled_metrics(&self, font_size: f32) -> ScaledFontMetrics {
        self.metrics.scale_to_pixels(font_size)
    }

    /// Nominal glyph for a code point, 0 when the face has no mapping.
    pub fn glyph_for_char(&self, ch: char) -> u16 {
        self.as_swash_ref().charmap().map(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_garbage_bytes() {
        let err = FontFace::from_vec(vec![0u8; 16], 0).unwrap_err();
        assert!(matches!(err, FontError::InvalidFont));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = FontFace::from_path("/definitely/not/here.ttf", 0).unwrap_err();
        assert!(matches!(err, FontError::Io(_)));
    }
}
