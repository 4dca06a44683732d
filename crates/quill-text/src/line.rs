//! A single run of text bound to a font, ready for measurement and drawing.

use core::cell::Cell;
use core::char::REPLACEMENT_CHARACTER;
use core::fmt;

use tracing::debug;

use crate::font::{Font, LineMetrics};
use crate::geometry::{Alignment, HAlign, IndexRange, Point, Rect, Size, VAlign};
use crate::shaping::GlyphLine;

/// Anything a shaped line can be drawn into.
pub trait LineCanvas {
    /// Draw `line` with its baseline origin at `origin`.
    fn draw_glyph_line(&mut self, line: &GlyphLine, origin: Point);
}

/// Unicode text plus a font, with a lazily measured shaped representation.
///
/// The text is stored as code points; every index in this API is a code
/// point index. While the text is empty (or the backend fails) there is no
/// glyph line and all measurement queries answer zero or `None`.
pub struct ShapedLine {
    font: Option<Font>,
    text: Vec<char>,
    password: bool,
    glyphs: Option<GlyphLine>,
    bounds: Cell<Option<Rect>>,
    on_change: Option<Box<dyn FnMut()>>,
}

impl ShapedLine {
    pub fn new() -> Self {
        Self {
            font: None,
            text: Vec::new(),
            password: false,
            glyphs: None,
            bounds: Cell::new(None),
            on_change: None,
        }
    }

    pub fn with_font(font: Font) -> Self {
        let mut line = Self::new();
        line.font = Some(font);
        line
    }

    pub fn with_text(font: Font, text: &str) -> Self {
        let mut line = Self::with_font(font);
        line.set_text(text, false);
        line
    }

    /// Register a callback fired after every rebuild.
    pub fn set_on_change(&mut self, callback: impl FnMut() + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    pub fn set_text(&mut self, text: &str, replace_tabs: bool) {
        self.text = normalize(text.chars(), replace_tabs);
        self.update();
    }

    /// UTF-16 input; unpaired surrogates become U+FFFD.
    pub fn set_text_utf16(&mut self, units: &[u16], replace_tabs: bool) {
        let chars = char::decode_utf16(units.iter().copied())
            .map(|r| r.unwrap_or(REPLACEMENT_CHARACTER));
        self.text = normalize(chars, replace_tabs);
        self.update();
    }

    /// UTF-32 input; values that are not scalar values become U+FFFD.
    pub fn set_text_utf32(&mut self, units: &[u32], replace_tabs: bool) {
        let chars = units
            .iter()
            .map(|&u| char::from_u32(u).unwrap_or(REPLACEMENT_CHARACTER));
        self.text = normalize(chars, replace_tabs);
        self.update();
    }

    pub fn set_chars(&mut self, chars: &[char], replace_tabs: bool) {
        self.text = normalize(chars.iter().copied(), replace_tabs);
        self.update();
    }

    pub fn set_font(&mut self, font: Font) {
        self.font = Some(font);
        self.update();
    }

    /// Mask the visual run. The real text stays authoritative for `text()`
    /// and for caret arithmetic.
    pub fn set_password(&mut self, password: bool) {
        if self.password != password {
            self.password = password;
            self.update();
        }
    }

    /// Apply an arbitrary edit to the code point buffer.
    ///
    /// With `do_update == false` the glyph line is left as it was until the
    /// next `update()`, so several edits can share one rebuild.
    pub fn modify_text<F>(&mut self, edit: F, do_update: bool)
    where
        F: FnOnce(&mut Vec<char>),
    {
        edit(&mut self.text);
        if do_update {
            self.update();
        }
    }

    /// Rebuild the glyph line from the current text, font and mask setting.
    pub fn update(&mut self) {
        // Release the old handle before shaping the new one.
        self.glyphs = None;
        self.bounds.set(None);

        if let Some(font) = &self.font {
            if !self.text.is_empty() {
                self.glyphs = if self.password {
                    let masked = vec![font.mask_char(); self.text.len()];
                    font.shape(&masked)
                } else {
                    font.shape(&self.text)
                };
                if self.glyphs.is_none() {
                    debug!(len = self.text.len(), "shaping backend produced no line");
                }
            }
        }

        if let Some(callback) = self.on_change.as_mut() {
            callback();
        }
    }

    pub fn text(&self) -> &[char] {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_password(&self) -> bool {
        self.password
    }

    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    /// The shaped handle, if one exists.
    pub fn glyph_line(&self) -> Option<&GlyphLine> {
        self.glyphs.as_ref()
    }

    /// Tight typographic box relative to the baseline origin.
    pub fn bounds(&self) -> Rect {
        if let Some(bounds) = self.bounds.get() {
            return bounds;
        }
        let bounds = match &self.glyphs {
            Some(line) => {
                let m = line.metrics();
                Rect::new(0.0, -m.ascent, line.width(), m.ascent + m.descent)
            }
            None => Rect::default(),
        };
        self.bounds.set(Some(bounds));
        bounds
    }

    pub fn width(&self) -> f32 {
        self.bounds().w
    }

    /// Width by line height.
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.line_height())
    }

    pub fn ascent(&self) -> f32 {
        self.glyphs.as_ref().map_or(0.0, |l| l.metrics().ascent)
    }

    pub fn descent(&self) -> f32 {
        self.glyphs.as_ref().map_or(0.0, |l| l.metrics().descent)
    }

    pub fn leading(&self) -> f32 {
        self.glyphs.as_ref().map_or(0.0, |l| l.metrics().leading)
    }

    pub fn line_height(&self) -> f32 {
        self.glyphs.as_ref().map_or(0.0, GlyphLine::line_height)
    }

    /// Metrics of the shaped line, or of the font while there is no line.
    /// Lets an empty line still place and size a caret.
    pub fn metrics(&self) -> LineMetrics {
        match (&self.glyphs, &self.font) {
            (Some(line), _) => line.metrics(),
            (None, Some(font)) => font.metrics(),
            (None, None) => LineMetrics::default(),
        }
    }

    /// Nearest character boundary to `point`, given in line coordinates
    /// (x relative to the line origin). `None` when nothing is shaped.
    pub fn char_index_at_position(&self, point: Point) -> Option<usize> {
        self.glyphs.as_ref().map(|l| l.index_for_offset(point.x))
    }

    /// Like [`char_index_at_position`](Self::char_index_at_position) for a
    /// point in the coordinate space of `rect`, with the line placed at
    /// `alignment` inside it.
    pub fn char_index_at_aligned_position(
        &self,
        point: Point,
        rect: Rect,
        alignment: Alignment,
    ) -> Option<usize> {
        let origin = self.aligned_position(rect, alignment);
        self.char_index_at_position(point - origin)
    }

    pub fn offset_for_char_index(&self, index: usize) -> f32 {
        self.glyphs
            .as_ref()
            .map_or(0.0, |l| l.offset_for_index(index))
    }

    /// Offsets of both ends of `range`.
    pub fn offset_for_range(&self, range: IndexRange) -> (f32, f32) {
        match &self.glyphs {
            Some(l) => (l.offset_for_index(range.min), l.offset_for_index(range.max)),
            None => (0.0, 0.0),
        }
    }

    /// Baseline origin that places the line at `alignment` within `rect`.
    pub fn aligned_position(&self, rect: Rect, alignment: Alignment) -> Point {
        let width = self.width();
        let m = self.metrics();
        let x = match alignment.horizontal() {
            HAlign::Left => rect.x,
            HAlign::Center => rect.x + (rect.w - width) * 0.5,
            HAlign::Right => rect.right() - width,
        };
        let y = match alignment.vertical() {
            VAlign::Top => rect.y + m.ascent,
            VAlign::Center => rect.y + (rect.h + m.ascent - m.descent) * 0.5,
            VAlign::Bottom => rect.bottom() - m.descent,
        };
        Point::new(x, y)
    }

    /// Issue a single draw call with the baseline origin at `origin`.
    pub fn draw<C: LineCanvas + ?Sized>(&self, canvas: &mut C, origin: Point) {
        if let Some(line) = &self.glyphs {
            canvas.draw_glyph_line(line, origin);
        }
    }

    pub fn draw_aligned<C: LineCanvas + ?Sized>(
        &self,
        canvas: &mut C,
        rect: Rect,
        alignment: Alignment,
    ) {
        let origin = self.aligned_position(rect, alignment);
        self.draw(canvas, origin);
    }
}

impl Default for ShapedLine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ShapedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapedLine")
            .field("text", &self.to_string())
            .field("password", &self.password)
            .field("font", &self.font)
            .field("shaped", &self.glyphs.is_some())
            .finish()
    }
}

impl fmt::Display for ShapedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.text {
            fmt::Write::write_char(f, *ch)?;
        }
        Ok(())
    }
}

fn normalize(chars: impl Iterator<Item = char>, replace_tabs: bool) -> Vec<char> {
    if replace_tabs {
        chars.map(|c| if c == '\t' { ' ' } else { c }).collect()
    } else {
        chars.collect()
    }
}
