use crate::font::LineMetrics;

/// A positioned glyph within a shaped line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    /// Glyph id in the shaping font (code point for the monospace backend).
    pub id: u32,
    /// Pen x position plus shaping offset, relative to the line origin.
    pub x: f32,
    /// Vertical offset from the baseline (y grows downward).
    pub y: f32,
    pub advance: f32,
}

/// Owned result of shaping one line of text.
///
/// Besides the glyphs it keeps one caret stop per character boundary
/// (`char_count + 1` entries, non-decreasing), which makes index/offset
/// mapping a lookup instead of a walk over the glyph run.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphLine {
    glyphs: Vec<Glyph>,
    carets: Vec<f32>,
    metrics: LineMetrics,
}

impl GlyphLine {
    /// Build a line from glyphs tagged with the character index that starts
    /// their cluster. Glyphs must be in visual (left-to-right) order.
    ///
    /// A cluster covering several characters (ligature) spreads its advance
    /// evenly over them so that every boundary gets a caret stop.
    pub fn from_clusters(
        char_count: usize,
        shaped: impl IntoIterator<Item = (Glyph, usize)>,
        metrics: LineMetrics,
    ) -> Self {
        let mut glyphs = Vec::new();
        let mut cluster_advance = vec![0.0f32; char_count];
        let mut cluster_start = vec![false; char_count];

        for (glyph, cluster) in shaped {
            if char_count > 0 {
                let c = cluster.min(char_count - 1);
                cluster_advance[c] += glyph.advance;
                cluster_start[c] = true;
            }
            glyphs.push(glyph);
        }

        let mut carets = vec![0.0f32; char_count + 1];
        let mut x = 0.0f32;
        let mut i = 0usize;
        while i < char_count {
            let mut j = i + 1;
            while j < char_count && !cluster_start[j] {
                j += 1;
            }
            let w = cluster_advance[i];
            let span = (j - i) as f32;
            for k in i..j {
                carets[k] = x + w * (k - i) as f32 / span;
            }
            x += w;
            i = j;
        }
        carets[char_count] = x;

        Self {
            glyphs,
            carets,
            metrics,
        }
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn metrics(&self) -> LineMetrics {
        self.metrics
    }

    /// Number of characters the line was shaped from.
    pub fn char_count(&self) -> usize {
        self.carets.len() - 1
    }

    /// Total advance width in pixels.
    pub fn width(&self) -> f32 {
        self.carets[self.carets.len() - 1]
    }

    pub fn line_height(&self) -> f32 {
        self.metrics.line_height()
    }

    /// Horizontal offset of the boundary before character `index`.
    /// Indices past the end map to the line width.
    pub fn offset_for_index(&self, index: usize) -> f32 {
        self.carets[index.min(self.char_count())]
    }

    /// Character boundary nearest to `x`, clamped to `[0, char_count]`.
    pub fn index_for_offset(&self, x: f32) -> usize {
        let n = self.char_count();
        if x.is_nan() || x <= self.carets[0] {
            return 0;
        }
        if x >= self.carets[n] {
            return n;
        }
        let k = self.carets.partition_point(|&c| c < x);
        let (prev, next) = (self.carets[k - 1], self.carets[k]);
        if x - prev < next - x { k - 1 } else { k }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(x: f32, advance: f32) -> Glyph {
        Glyph {
            id: 1,
            x,
            y: 0.0,
            advance,
        }
    }

    fn metrics() -> LineMetrics {
        LineMetrics::new(8.0, 2.0, 0.0)
    }

    #[test]
    fn caret_stops_follow_advances() {
        let line = GlyphLine::from_clusters(
            3,
            vec![(glyph(0.0, 5.0), 0), (glyph(5.0, 10.0), 1), (glyph(15.0, 7.0), 2)],
            metrics(),
        );
        assert_eq!(line.offset_for_index(0), 0.0);
        assert_eq!(line.offset_for_index(1), 5.0);
        assert_eq!(line.offset_for_index(2), 15.0);
        assert_eq!(line.offset_for_index(3), 22.0);
        assert_eq!(line.offset_for_index(99), 22.0);
        assert_eq!(line.width(), 22.0);
    }

    #[test]
    fn ligature_advance_is_shared() {
        // "ffi" shaped as one glyph covering three characters, then "x".
        let line = GlyphLine::from_clusters(
            4,
            vec![(glyph(0.0, 30.0), 0), (glyph(30.0, 6.0), 3)],
            metrics(),
        );
        assert_eq!(line.offset_for_index(1), 10.0);
        assert_eq!(line.offset_for_index(2), 20.0);
        assert_eq!(line.offset_for_index(3), 30.0);
        assert_eq!(line.offset_for_index(4), 36.0);
    }

    #[test]
    fn hit_testing_picks_nearest_boundary() {
        let line = GlyphLine::from_clusters(
            3,
            vec![(glyph(0.0, 10.0), 0), (glyph(10.0, 10.0), 1), (glyph(20.0, 10.0), 2)],
            metrics(),
        );
        assert_eq!(line.index_for_offset(-5.0), 0);
        assert_eq!(line.index_for_offset(4.0), 0);
        assert_eq!(line.index_for_offset(6.0), 1);
        assert_eq!(line.index_for_offset(14.0), 1);
        assert_eq!(line.index_for_offset(16.0), 2);
        assert_eq!(line.index_for_offset(29.0), 3);
        assert_eq!(line.index_for_offset(500.0), 3);
    }

    #[test]
    fn nan_offset_hits_the_start() {
        let line = GlyphLine::from_clusters(
            2,
            vec![(glyph(0.0, 10.0), 0), (glyph(10.0, 10.0), 1)],
            metrics(),
        );
        assert_eq!(line.index_for_offset(f32::NAN), 0);
    }

    #[test]
    fn empty_line_has_single_stop() {
        let line = GlyphLine::from_clusters(0, Vec::new(), metrics());
        assert_eq!(line.char_count(), 0);
        assert_eq!(line.width(), 0.0);
        assert_eq!(line.index_for_offset(10.0), 0);
    }
}
