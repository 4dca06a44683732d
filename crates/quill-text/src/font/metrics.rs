/// Font-level metrics in font units.
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    /// Ascent above baseline (positive).
    pub ascent: f32,
    /// Descent below baseline (positive).
    pub descent: f32,
    /// Line gap (leading).
    pub line_gap: f32,
    /// Units per em.
    pub units_per_em: u16,
}

impl FontMetrics {
    /// Calculate line height (ascent + descent + line_gap).
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }

    /// Scale metrics to pixel size, where `font_size` is in logical pixels
    /// (px per em).
    pub fn scale_to_pixels(&self, font_size: f32) -> ScaledFontMetrics {
        let scale = if self.units_per_em != 0 {
            font_size / self.units_per_em as f32
        } else {
            1.0
        };
        ScaledFontMetrics {
            ascent: self.ascent * scale,
            descent: self.descent * scale,
            line_gap: self.line_gap * scale,
            font_size,
        }
    }
}

/// Scaled font metrics in pixels.
#[derive(Debug, Clone, Copy)]
pub struct ScaledFontMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
    pub font_size: f32,
}

impl From<ScaledFontMetrics> for LineMetrics {
    fn from(m: ScaledFontMetrics) -> Self {
        LineMetrics {
            ascent: m.ascent,
            descent: m.descent,
            leading: m.line_gap,
        }
    }
}

/// Typographic metrics of a shaped line, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LineMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub leading: f32,
}

impl LineMetrics {
    pub fn new(ascent: f32, descent: f32, leading: f32) -> Self {
        Self {
            ascent,
            descent,
            leading,
        }
    }

    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.leading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_font_units_to_pixels() {
        let m = FontMetrics {
            ascent: 800.0,
            descent: 200.0,
            line_gap: 100.0,
            units_per_em: 1000,
        };
        let scaled = m.scale_to_pixels(20.0);
        assert_eq!(scaled.ascent, 16.0);
        assert_eq!(scaled.descent, 4.0);
        assert_eq!(scaled.line_gap, 2.0);
        assert_eq!(LineMetrics::from(scaled).line_height(), 22.0);
    }

    #[test]
    fn zero_units_per_em_does_not_divide_by_zero() {
        let m = FontMetrics {
            ascent: 8.0,
            descent: 2.0,
            line_gap: 0.0,
            units_per_em: 0,
        };
        assert_eq!(m.scale_to_pixels(12.0).ascent, 8.0);
    }
}
