use std::sync::Arc;

use harfrust::{
    Direction as HbDirection, FontRef as HbFontRef, Script as HbScript, ShaperData,
    ShaperInstance, Tag as HbTag, UnicodeBuffer as HbUnicodeBuffer,
};
use tracing::debug;

use crate::font::{Font, FontFace, FontProvider, LineMetrics, provider::PASSWORD_MASK};

use super::{Glyph, GlyphLine};

/// Text shaper built on harfrust (pure-Rust HarfBuzz port).
///
/// Single-font, left-to-right runs; kerning and ligatures follow HarfBuzz
/// semantics.
pub struct TextShaper;

impl TextShaper {
    /// Shape `text` with `face` at `font_size` pixels per em.
    ///
    /// Returns `None` for empty text or when harfrust cannot read the face.
    pub fn shape_ltr(face: &FontFace, font_size: f32, text: &[char]) -> Option<GlyphLine> {
        if text.is_empty() {
            return None;
        }

        let utf8: String = text.iter().collect();
        // harfrust clusters are UTF-8 byte offsets; map them back to code points.
        let mut byte_to_char = vec![text.len(); utf8.len() + 1];
        for (ci, (bi, _)) in utf8.char_indices().enumerate() {
            byte_to_char[bi] = ci;
        }

        let font_ref = match HbFontRef::from_index(face.data(), face.index()) {
            Ok(font_ref) => font_ref,
            Err(err) => {
                debug!(?err, "harfrust could not read font face");
                return None;
            }
        };

        let data = ShaperData::new(&font_ref);
        let instance =
            ShaperInstance::from_variations(&font_ref, core::iter::empty::<harfrust::Variation>());
        let shaper = data
            .shaper(&font_ref)
            .instance(Some(&instance))
            .point_size(None)
            .build();

        let mut buffer = HbUnicodeBuffer::new();
        buffer.push_str(&utf8);
        buffer.set_direction(HbDirection::LeftToRight);
        if let Some(script) = HbScript::from_iso15924_tag(HbTag::new(b"Latn")) {
            buffer.set_script(script);
        }
        buffer.guess_segment_properties();

        let glyph_buffer = shaper.shape(buffer, &[]);
        let infos = glyph_buffer.glyph_infos();
        let positions = glyph_buffer.glyph_positions();

        // harfrust works in design units.
        let metrics = face.metrics();
        let scale = if metrics.units_per_em != 0 {
            font_size / metrics.units_per_em as f32
        } else {
            1.0
        };

        let mut pen_x = 0.0f32;
        let mut shaped = Vec::with_capacity(infos.len());
        for (info, pos) in infos.iter().zip(positions.iter()) {
            let advance = pos.x_advance as f32 * scale;
            let glyph = Glyph {
                id: info.glyph_id,
                x: pen_x + pos.x_offset as f32 * scale,
                y: -(pos.y_offset as f32) * scale,
                advance,
            };
            let cluster = byte_to_char
                .get(info.cluster as usize)
                .copied()
                .unwrap_or(text.len());
            shaped.push((glyph, cluster));
            pen_x += advance;
        }

        let line_metrics = LineMetrics::from(face.scaled_metrics(font_size));
        Some(GlyphLine::from_clusters(text.len(), shaped, line_metrics))
    }
}

/// A real font face at a fixed pixel size, shaped through harfrust.
#[derive(Debug, Clone)]
pub struct ShapedFont {
    face: Arc<FontFace>,
    size: f32,
}

impl ShapedFont {
    pub fn new(face: Arc<FontFace>, size: f32) -> Self {
        Self { face, size }
    }

    pub fn face(&self) -> &Arc<FontFace> {
        &self.face
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn into_font(self) -> Font {
        Arc::new(self)
    }
}

impl FontProvider for ShapedFont {
    fn metrics(&self) -> LineMetrics {
        self.face.scaled_metrics(self.size).into()
    }

    fn shape(&self, text: &[char]) -> Option<GlyphLine> {
        TextShaper::shape_ltr(&self.face, self.size, text)
    }

    /// Bullet when the face has one, asterisk otherwise.
    fn mask_char(&self) -> char {
        if self.face.glyph_for_char(PASSWORD_MASK) != 0 {
            PASSWORD_MASK
        } else {
            '*'
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{FontError, load_system_default_font};

    fn system_face() -> anyhow::Result<Option<Arc<FontFace>>> {
        match load_system_default_font() {
            Ok(face) => Ok(Some(Arc::new(face))),
            // Headless machines may not ship any fonts.
            Err(FontError::NoSystemFont) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    #[test]
    fn multibyte_text_keeps_one_stop_per_char() -> anyhow::Result<()> {
        let Some(face) = system_face()? else {
            return Ok(());
        };
        let text: Vec<char> = "héllo ffi ✓".chars().collect();
        let line = TextShaper::shape_ltr(&face, 16.0, &text)
            .ok_or_else(|| anyhow::anyhow!("system face did not shape"))?;

        assert_eq!(line.char_count(), text.len());
        let stops: Vec<f32> = (0..=text.len()).map(|i| line.offset_for_index(i)).collect();
        assert!(stops.windows(2).all(|w| w[0] <= w[1]), "stops decrease: {stops:?}");
        assert_eq!(stops[text.len()], line.width());
        assert!(line.width() > 0.0);
        Ok(())
    }

    #[test]
    fn shaped_font_masks_with_a_drawable_char() -> anyhow::Result<()> {
        let Some(face) = system_face()? else {
            return Ok(());
        };
        let font = ShapedFont::new(face, 16.0);
        let mask = font.mask_char();
        assert!(mask == PASSWORD_MASK || mask == '*');
        assert!(font.shape(&[]).is_none());
        assert!(font.metrics().ascent > 0.0);
        Ok(())
    }
}
