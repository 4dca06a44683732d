use crate::font::Font;
use crate::geometry::{Alignment, HAlign, IndexRange, Point, Rect};
use crate::line::ShapedLine;

use super::UpdateStatus;
use super::movement::{next_word_end, prev_word_start, word_range_at};

/// Pixel positions derived from the editing state during paint.
///
/// Every field is recomputed by [`TextEditState::resolve`] from the caret,
/// the selection and the shaped line; nothing else writes them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResolvedLayout {
    pub line_width: f32,
    pub effective_alignment: Alignment,
    /// Baseline origin of the unscrolled line inside the frame moved to (0, 0).
    pub line_origin: Point,
    /// Caret offset in line coordinates.
    pub caret_x: f32,
    /// Selection edges in line coordinates.
    pub selection_x: (f32, f32),
}

/// Unit a drag extends by, set by the click count of the press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragGranularity {
    Char,
    Word,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    granularity: DragGranularity,
    anchor: usize,
    /// Selection made by the press itself.
    initial: IndexRange,
    press_index: usize,
    last: Point,
    moved: bool,
}

/// Caret, selection and horizontal scroll of a single-line editor.
///
/// Mutations only touch indices and mark [`UpdateStatus`] flags; pixel
/// positions are produced once per paint by [`resolve`](Self::resolve).
/// Indices handed in from outside are clamped to `[0, len]`. Mouse points
/// are relative to the top-left corner of the text frame.
#[derive(Debug)]
pub struct TextEditState {
    line: ShapedLine,
    caret: usize,
    /// Fixed end of a keyboard or mouse selection.
    anchor: usize,
    /// Empty selections are always stored as `IndexRange::default()`.
    selection: IndexRange,
    scroll_offset: f32,
    frame: Rect,
    alignment: Alignment,
    focused: bool,
    drag: Option<DragState>,
    status: UpdateStatus,
    layout: ResolvedLayout,
}

impl TextEditState {
    pub fn new(font: Font) -> Self {
        Self::from_line(ShapedLine::with_font(font))
    }

    pub fn with_text(font: Font, text: &str) -> Self {
        Self::from_line(ShapedLine::with_text(font, text))
    }

    pub fn from_line(line: ShapedLine) -> Self {
        Self {
            line,
            caret: 0,
            anchor: 0,
            selection: IndexRange::default(),
            scroll_offset: 0.0,
            frame: Rect::default(),
            alignment: Alignment::default(),
            focused: false,
            drag: None,
            status: UpdateStatus::all(),
            layout: ResolvedLayout::default(),
        }
    }

    // --- queries -------------------------------------------------------

    pub fn line(&self) -> &ShapedLine {
        &self.line
    }

    pub fn text(&self) -> String {
        self.line.to_string()
    }

    pub fn len(&self) -> usize {
        self.line.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn selection(&self) -> IndexRange {
        self.selection
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn selected_text(&self) -> String {
        self.selection.slice(self.line.text()).iter().collect()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Requested alignment, or its left-aligned variant while the line is
    /// wider than the frame.
    pub fn effective_alignment(&self) -> Alignment {
        if self.overflows() {
            self.alignment.with_horizontal(HAlign::Left)
        } else {
            self.alignment
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The caret is drawn only while focused and nothing is selected.
    pub fn caret_visible(&self) -> bool {
        self.focused && self.selection.is_empty()
    }

    pub fn status(&self) -> UpdateStatus {
        self.status
    }

    /// Layout produced by the last [`resolve`](Self::resolve).
    pub fn layout(&self) -> ResolvedLayout {
        self.layout
    }

    /// Frame-relative baseline origin of the scrolled line, as of the last
    /// resolve.
    pub fn text_origin(&self) -> Point {
        self.layout.line_origin.offset(self.scroll_offset, 0.0)
    }

    // --- configuration -------------------------------------------------

    pub fn set_text(&mut self, text: &str, replace_tabs: bool) {
        self.line.set_text(text, replace_tabs);
        self.after_text_replaced();
    }

    pub fn set_font(&mut self, font: Font) {
        self.line.set_font(font);
        self.after_text_replaced();
    }

    pub fn set_password(&mut self, password: bool) {
        if self.line.is_password() != password {
            self.line.set_password(password);
            self.after_text_replaced();
        }
    }

    pub fn set_frame(&mut self, frame: Rect) {
        if self.frame != frame {
            self.frame = frame;
            self.status.mark_text();
            self.status.mark_selection();
            self.clip_scroll();
        }
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        if self.alignment != alignment {
            self.alignment = alignment;
            self.status.mark_text();
            self.status.mark_selection();
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            if !focused {
                self.drag = None;
            }
            self.status.mark_caret();
        }
    }

    // --- editing -------------------------------------------------------

    /// Insert at the caret, replacing the selection if there is one.
    pub fn insert_char(&mut self, ch: char) {
        self.insert_chars(&[ch]);
    }

    pub fn insert_text(&mut self, text: &str) {
        let chars: Vec<char> = text.chars().collect();
        self.insert_chars(&chars);
    }

    fn insert_chars(&mut self, chars: &[char]) {
        let sel = self.selection;
        if chars.is_empty() && sel.is_empty() {
            return;
        }
        let at = if sel.is_empty() { self.caret } else { sel.min };
        // Erase and insert share one rebuild.
        self.line.modify_text(
            |text| {
                text.drain(sel.as_range());
                text.splice(at..at, chars.iter().copied());
            },
            true,
        );
        self.caret = at + chars.len();
        self.anchor = self.caret;
        self.clear_selection();
        self.status.mark_text();
        self.reveal_caret();
    }

    /// Remove the selected text. Returns `false` when nothing was selected.
    pub fn delete_selection(&mut self) -> bool {
        let sel = self.selection;
        if sel.is_empty() {
            return false;
        }
        self.line.modify_text(
            |text| {
                text.drain(sel.as_range());
            },
            true,
        );
        self.caret = sel.min;
        self.anchor = sel.min;
        self.clear_selection();
        self.status.mark_text();
        self.reveal_caret();
        true
    }

    pub fn backspace(&mut self) {
        if self.delete_selection() || self.caret == 0 {
            return;
        }
        self.caret -= 1;
        self.anchor = self.caret;
        let at = self.caret;
        self.line.modify_text(
            |text| {
                text.remove(at);
            },
            true,
        );
        self.status.mark_text();
        self.reveal_caret();
    }

    pub fn delete_forward(&mut self) {
        if self.delete_selection() || self.caret >= self.line.len() {
            return;
        }
        let at = self.caret;
        self.line.modify_text(
            |text| {
                text.remove(at);
            },
            true,
        );
        self.status.mark_text();
        self.reveal_caret();
    }

    // --- keyboard navigation -------------------------------------------

    /// Arrow left. Without shift an existing selection collapses to its
    /// start; with shift the moving edge follows the caret.
    pub fn move_left(&mut self, shift: bool) {
        if shift {
            self.begin_keyboard_selection();
            self.select_to(self.caret.saturating_sub(1));
        } else if self.has_selection() {
            self.collapse_to(self.selection.min);
        } else {
            self.collapse_to(self.caret.saturating_sub(1));
        }
    }

    /// Arrow right, mirror of [`move_left`](Self::move_left).
    pub fn move_right(&mut self, shift: bool) {
        if shift {
            self.begin_keyboard_selection();
            self.select_to(self.caret + 1);
        } else if self.has_selection() {
            self.collapse_to(self.selection.max);
        } else {
            self.collapse_to(self.caret + 1);
        }
    }

    pub fn move_word_left(&mut self, shift: bool) {
        if shift {
            self.begin_keyboard_selection();
            self.select_to(prev_word_start(self.line.text(), self.caret));
        } else {
            let from = if self.has_selection() { self.selection.min } else { self.caret };
            self.collapse_to(prev_word_start(self.line.text(), from));
        }
    }

    pub fn move_word_right(&mut self, shift: bool) {
        if shift {
            self.begin_keyboard_selection();
            self.select_to(next_word_end(self.line.text(), self.caret));
        } else {
            let from = if self.has_selection() { self.selection.max } else { self.caret };
            self.collapse_to(next_word_end(self.line.text(), from));
        }
    }

    /// Arrow up: caret to the start, selection cleared, scrolled fully left.
    pub fn move_to_start(&mut self) {
        self.collapse_to(0);
        self.scroll_offset = 0.0;
    }

    /// Arrow down: caret to the end, selection cleared, scrolled fully right.
    pub fn move_to_end(&mut self) {
        self.collapse_to(self.line.len());
        self.scroll_offset = self.min_scroll();
    }

    pub fn set_caret_index(&mut self, index: usize) {
        self.collapse_to(index);
    }

    /// Select `range` (clamped). An empty range collapses the caret there.
    pub fn set_selection(&mut self, range: IndexRange) {
        let range = range.clamp(self.line.len());
        if range.is_empty() {
            self.collapse_to(range.min);
            return;
        }
        self.anchor = range.min;
        self.apply_span(range.max);
        self.reveal_caret();
    }

    /// Select everything. Returns `false`, marking nothing, when the
    /// selection would not change (already all selected, or empty text).
    pub fn select_all(&mut self) -> bool {
        let len = self.line.len();
        let all = IndexRange::new(0, len);
        if len == 0 || self.selection == all {
            return false;
        }
        self.anchor = 0;
        self.apply_span(len);
        true
    }

    /// Double-click selection around `index`. Masked text has no words, so
    /// password lines select everything.
    pub fn select_word_at(&mut self, index: usize) {
        if self.line.is_password() {
            self.select_all();
            return;
        }
        let word = word_range_at(self.line.text(), index);
        if !word.is_empty() {
            self.anchor = word.min;
            self.apply_span(word.max);
        }
    }

    // --- mouse ---------------------------------------------------------

    pub fn mouse_down(&mut self, point: Point, click_count: u32, shift: bool) {
        self.set_focused(true);
        let hit = self.hit_index(point);
        let granularity = match click_count {
            0 | 1 if shift => {
                self.begin_keyboard_selection();
                self.select_to(hit);
                DragGranularity::Char
            }
            0 | 1 => {
                self.collapse_to(hit);
                DragGranularity::Char
            }
            2 if !self.line.is_password() => {
                self.select_word_at(hit);
                DragGranularity::Word
            }
            _ => {
                self.select_all();
                DragGranularity::All
            }
        };
        let initial = if self.has_selection() {
            self.selection
        } else {
            IndexRange::collapsed(self.caret)
        };
        self.drag = Some(DragState {
            granularity,
            anchor: self.anchor,
            initial,
            press_index: hit,
            last: point,
            moved: false,
        });
    }

    /// Extend the selection from the press position to `point`, scrolling by
    /// the pointer delta while the target sits past a frame edge.
    ///
    /// Nothing changes until the pointer reaches a different character
    /// boundary than the press. Word and select-all presses grow by whole
    /// words and never shrink below the range the press selected.
    pub fn mouse_drag(&mut self, point: Point) {
        let Some(mut drag) = self.drag else {
            return;
        };
        let delta = point.x - drag.last.x;
        if self.overflows() {
            let target = self.hit_index(point);
            let visible = self.line.offset_for_char_index(target) + self.scroll_offset;
            if (delta > 0.0 && visible > self.frame.w) || (delta < 0.0 && visible < 0.0) {
                self.scroll_offset -= delta;
                self.clip_scroll();
            }
        }
        let hit = self.hit_index(point);
        drag.last = point;
        drag.moved |= hit != drag.press_index;
        self.drag = Some(drag);
        if drag.moved {
            self.drag_to(&drag, hit);
        }
    }

    pub fn mouse_up(&mut self, point: Point) {
        if let Some(drag) = self.drag.take() {
            if drag.moved {
                let hit = self.hit_index(point);
                self.drag_to(&drag, hit);
            }
        }
    }

    fn drag_to(&mut self, drag: &DragState, hit: usize) {
        match drag.granularity {
            DragGranularity::Char => {
                self.anchor = drag.anchor;
                self.apply_span(hit);
            }
            DragGranularity::Word => {
                let word = word_range_at(self.line.text(), hit);
                let (min, max) = (
                    drag.initial.min.min(word.min),
                    drag.initial.max.max(word.max),
                );
                if hit < drag.initial.min {
                    self.anchor = drag.initial.max;
                    self.apply_span(min);
                } else {
                    self.anchor = drag.initial.min;
                    self.apply_span(max);
                }
            }
            DragGranularity::All => {
                self.anchor = drag.initial.min;
                self.apply_span(drag.initial.max);
            }
        }
    }

    // --- paint-time resolution ----------------------------------------

    /// Turn stale flags into pixel positions and clear them.
    pub fn resolve(&mut self) -> ResolvedLayout {
        if self.status.text() {
            let alignment = self.effective_alignment();
            self.layout.line_width = self.line.width();
            self.layout.effective_alignment = alignment;
            self.layout.line_origin = self.line.aligned_position(self.frame.at_zero(), alignment);
            self.clip_scroll();
        }
        if self.status.caret() && self.caret_visible() {
            self.layout.caret_x = self.line.offset_for_char_index(self.caret);
        }
        if self.status.selection() && self.has_selection() {
            self.layout.selection_x = self.line.offset_for_range(self.selection);
        }
        self.status.clear();
        self.layout
    }

    // --- internals -----------------------------------------------------

    fn overflows(&self) -> bool {
        self.line.width() > self.frame.w
    }

    /// Most negative legal scroll offset.
    fn min_scroll(&self) -> f32 {
        (self.frame.w - self.line.width()).min(0.0)
    }

    fn clip_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.clamp(self.min_scroll(), 0.0);
    }

    fn origin_x(&self) -> f32 {
        self.line
            .aligned_position(self.frame.at_zero(), self.effective_alignment())
            .x
    }

    /// Character boundary under a frame-relative point, 0 with nothing shaped.
    fn hit_index(&self, point: Point) -> usize {
        let x = point.x - self.origin_x() - self.scroll_offset;
        self.line
            .char_index_at_position(Point::new(x, point.y))
            .unwrap_or(0)
            .min(self.line.len())
    }

    fn clear_selection(&mut self) {
        if !self.selection.is_empty() {
            self.selection = IndexRange::default();
            self.status.mark_selection();
        }
    }

    fn begin_keyboard_selection(&mut self) {
        if self.selection.is_empty() {
            self.anchor = self.caret;
        }
    }

    fn collapse_to(&mut self, index: usize) {
        self.caret = index.min(self.line.len());
        self.anchor = self.caret;
        self.clear_selection();
        self.status.mark_caret();
        self.reveal_caret();
    }

    fn select_to(&mut self, index: usize) {
        self.apply_span(index);
        self.reveal_caret();
    }

    /// Caret to `active`, selection spanning anchor..active.
    fn apply_span(&mut self, active: usize) {
        let len = self.line.len();
        self.anchor = self.anchor.min(len);
        self.caret = active.min(len);
        let span = IndexRange::new(self.anchor, self.caret);
        let span = if span.is_empty() { IndexRange::default() } else { span };
        if span != self.selection {
            self.selection = span;
            self.status.mark_selection();
        }
        self.status.mark_caret();
    }

    fn after_text_replaced(&mut self) {
        let len = self.line.len();
        self.caret = self.caret.min(len);
        self.anchor = self.anchor.min(len);
        let clamped = self.selection.clamp(len);
        self.selection = if clamped.is_empty() { IndexRange::default() } else { clamped };
        self.status.mark_text();
        self.status.mark_selection();
        self.clip_scroll();
    }

    /// Scroll by the least amount that brings the caret into the frame.
    /// A caret more than a frame width away is centred instead.
    fn reveal_caret(&mut self) {
        if !self.overflows() {
            self.scroll_offset = 0.0;
            return;
        }
        let w = self.frame.w;
        let caret_x = self.origin_x() + self.line.offset_for_char_index(self.caret);
        let visible = caret_x + self.scroll_offset;
        if visible < -w || visible > 2.0 * w {
            self.scroll_offset = w * 0.5 - caret_x;
        } else if visible < 0.0 {
            self.scroll_offset = -caret_x;
        } else if visible > w {
            self.scroll_offset = w - caret_x;
        }
        self.clip_scroll();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::MonospaceFont;

    fn state(text: &str, frame_w: f32) -> TextEditState {
        let font = MonospaceFont::new(10.0, 8.0, 2.0, 0.0).into_font();
        let mut s = TextEditState::with_text(font, text);
        s.set_frame(Rect::new(0.0, 0.0, frame_w, 20.0));
        s
    }

    #[test]
    fn typing_past_the_edge_scrolls() {
        let mut s = state("", 50.0);
        for ch in "abcdefgh".chars() {
            s.insert_char(ch);
        }
        // 80px of text in a 50px frame, caret at the end.
        assert_eq!(s.caret(), 8);
        assert_eq!(s.scroll_offset(), -30.0);
        s.move_to_start();
        assert_eq!(s.scroll_offset(), 0.0);
        s.move_to_end();
        assert_eq!(s.scroll_offset(), -30.0);
    }

    #[test]
    fn minimal_scroll_to_reveal_caret() {
        let mut s = state("abcdefghij", 50.0);
        s.move_to_end();
        assert_eq!(s.scroll_offset(), -50.0);
        // Caret at 4 → x = 40, visible at -10: scroll just enough.
        s.set_caret_index(4);
        assert_eq!(s.scroll_offset(), -40.0);
        s.move_left(false);
        assert_eq!(s.scroll_offset(), -30.0);
    }

    #[test]
    fn far_jump_centres_caret() {
        let font = MonospaceFont::new(10.0, 8.0, 2.0, 0.0).into_font();
        let mut s = TextEditState::with_text(font, &"x".repeat(100));
        s.set_frame(Rect::new(0.0, 0.0, 100.0, 20.0));
        s.set_caret_index(50);
        // Caret x = 500, centred in a 100px frame.
        assert_eq!(s.scroll_offset(), -450.0);
    }

    #[test]
    fn drag_selects_and_scrolls() {
        let mut s = state("abcdefghij", 50.0);
        s.mouse_down(Point::new(12.0, 5.0), 1, false);
        assert_eq!(s.caret(), 1);
        assert!(s.is_dragging());
        s.mouse_drag(Point::new(45.0, 5.0));
        assert_eq!(s.selection(), IndexRange::new(1, 5));
        // Past the right edge and moving right: scroll follows the pointer.
        s.mouse_drag(Point::new(58.0, 5.0));
        assert_eq!(s.scroll_offset(), -13.0);
        assert_eq!(s.selection(), IndexRange::new(1, 7));
        s.mouse_up(Point::new(58.0, 5.0));
        assert!(!s.is_dragging());
        assert_eq!(s.selection(), IndexRange::new(1, 7));
        assert_eq!(s.caret(), 7);
    }

    #[test]
    fn click_without_drag_keeps_collapsed_caret() {
        let mut s = state("abcdef", 100.0);
        s.mouse_down(Point::new(31.0, 5.0), 1, false);
        s.mouse_up(Point::new(31.0, 5.0));
        assert_eq!(s.caret(), 3);
        assert!(!s.has_selection());
        assert!(s.is_focused());
    }

    #[test]
    fn shift_click_extends_from_caret() {
        let mut s = state("abcdef", 100.0);
        s.set_caret_index(1);
        s.mouse_down(Point::new(50.0, 5.0), 1, true);
        assert_eq!(s.selection(), IndexRange::new(1, 5));
        assert_eq!(s.caret(), 5);
    }

    #[test]
    fn hit_testing_respects_alignment() {
        let mut s = state("ab", 100.0);
        s.set_alignment(Alignment::Center);
        // Line is 20px wide, centred: starts at x = 40.
        s.mouse_down(Point::new(51.0, 5.0), 1, false);
        assert_eq!(s.caret(), 1);
    }

    #[test]
    fn resolve_clears_flags_and_computes_positions() {
        let mut s = state("abcdef", 100.0);
        s.set_focused(true);
        s.set_caret_index(2);
        let layout = s.resolve();
        assert!(s.status().is_clean());
        assert_eq!(layout.line_width, 60.0);
        assert_eq!(layout.caret_x, 20.0);
        assert_eq!(layout.line_origin, Point::new(0.0, 13.0));

        s.set_selection(IndexRange::new(4, 1));
        assert!(s.status().selection());
        let layout = s.resolve();
        assert_eq!(layout.selection_x, (10.0, 40.0));
        // Caret hidden behind the selection keeps its old resolved offset.
        assert_eq!(layout.caret_x, 20.0);
    }

    #[test]
    fn losing_focus_cancels_drag() {
        let mut s = state("abc", 100.0);
        s.mouse_down(Point::new(0.0, 0.0), 1, false);
        s.set_focused(false);
        assert!(!s.is_dragging());
        assert!(!s.caret_visible());
    }
}
