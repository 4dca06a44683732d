use std::str::FromStr;

use quill_config::QuillConfig;
use quill_paint::{Painter, Path};
use quill_text::{
    Alignment, Clipboard, Font, HAlign, MemoryClipboard, Point, Rect, ShapedLine, TextEditState,
    VAlign,
};
use tracing::{trace, warn};

use crate::caret::CaretBlink;
use crate::event::{EventHandler, EventResult, KeyCode, KeyEvent, MouseEvent};
use crate::selection_renderer::{SelectionRenderConfig, render_selection};
use crate::style::TextBoxStyle;

/// Single-line editable text field.
///
/// Wraps a [`TextEditState`] with a visual style, a placeholder, caret
/// blinking and clipboard access, and turns toolkit events into edits.
pub struct TextBox {
    rect: Rect,
    style: TextBoxStyle,
    edit: TextEditState,
    placeholder: ShapedLine,
    caret_blink: CaretBlink,
    clipboard: Box<dyn Clipboard>,
    replace_tabs: bool,
}

impl TextBox {
    pub fn new(rect: Rect, font: Font, style: TextBoxStyle) -> Self {
        let mut edit = TextEditState::new(font.clone());
        edit.set_frame(text_frame(rect, &style));
        Self {
            rect,
            style,
            edit,
            placeholder: ShapedLine::with_font(font),
            caret_blink: CaretBlink::default(),
            clipboard: Box::new(MemoryClipboard::new()),
            replace_tabs: true,
        }
    }

    /// Text box styled and configured from `config`.
    pub fn from_config(rect: Rect, font: Font, config: &QuillConfig) -> Self {
        let mut text_box = Self::new(rect, font, TextBoxStyle::from_config(&config.text_box));
        text_box.replace_tabs = config.text.replace_tabs;
        text_box.set_password(config.editing.password);
        match HAlign::from_str(&config.editing.alignment) {
            Ok(h) => text_box.set_alignment(Alignment::from_parts(h, VAlign::Center)),
            Err(err) => warn!(%err, "keeping default alignment"),
        }
        text_box.caret_blink = if config.editing.caret_blink {
            CaretBlink::new(config.editing.blink_interval)
        } else {
            CaretBlink::steady()
        };
        if let Some(placeholder) = &config.editing.placeholder {
            text_box.set_placeholder(placeholder);
        }
        text_box
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
        self.edit.set_frame(text_frame(rect, &self.style));
    }

    /// Absolute rectangle the text is clipped to.
    pub fn text_frame(&self) -> Rect {
        text_frame(self.rect, &self.style)
    }

    pub fn style(&self) -> &TextBoxStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: TextBoxStyle) {
        self.style = style;
        self.edit.set_frame(text_frame(self.rect, &self.style));
    }

    pub fn text(&self) -> String {
        self.edit.text()
    }

    pub fn set_text(&mut self, text: &str) {
        self.edit.set_text(text, self.replace_tabs);
    }

    pub fn set_placeholder(&mut self, text: &str) {
        self.placeholder.set_text(text, self.replace_tabs);
    }

    pub fn set_font(&mut self, font: Font) {
        self.placeholder.set_font(font.clone());
        self.edit.set_font(font);
    }

    pub fn set_password(&mut self, password: bool) {
        self.edit.set_password(password);
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.edit.set_alignment(alignment);
    }

    pub fn edit(&self) -> &TextEditState {
        &self.edit
    }

    pub fn edit_mut(&mut self) -> &mut TextEditState {
        &mut self.edit
    }

    pub fn caret_blink(&self) -> &CaretBlink {
        &self.caret_blink
    }

    /// Advance the caret blink; call once per frame.
    pub fn update(&mut self, delta_time: f32) {
        self.caret_blink.update(delta_time, self.edit.is_focused());
    }

    fn to_frame(&self, x: f32, y: f32) -> Point {
        Point::new(x, y) - self.text_frame().origin()
    }

    fn copy(&mut self) {
        // Masked text never leaves the box.
        if !self.edit.has_selection() || self.edit.line().is_password() {
            return;
        }
        if let Err(err) = self.clipboard.set_text(&self.edit.selected_text()) {
            warn!(%err, "copy failed");
        }
    }

    fn cut(&mut self) {
        if !self.edit.has_selection() || self.edit.line().is_password() {
            return;
        }
        match self.clipboard.set_text(&self.edit.selected_text()) {
            Ok(()) => {
                self.edit.delete_selection();
            }
            Err(err) => warn!(%err, "cut failed"),
        }
    }

    fn paste(&mut self) {
        match self.clipboard.get_text() {
            Ok(text) => {
                // Single line: everything after the first line break is dropped.
                let line = text.lines().next().unwrap_or_default();
                let line = if self.replace_tabs {
                    line.replace('\t', " ")
                } else {
                    line.to_string()
                };
                self.edit.insert_text(&line);
            }
            Err(err) => warn!(%err, "paste failed"),
        }
    }

    /// Resolve pending layout once, then record the box into `painter`.
    ///
    /// Order: shadow, background, border, then inside a clip of the text
    /// frame the selection, the text and the caret.
    pub fn render(&mut self, painter: &mut Painter) {
        let layout = self.edit.resolve();
        let style = self.style;
        let frame = self.text_frame();
        let focused = self.edit.is_focused();

        let background = Path::rounded_rect(self.rect, style.corner_radius);
        if let Some(shadow) = style.shadow {
            painter.drop_shadow(&background, shadow);
        }
        painter.set_fill_color(style.background);
        painter.fill_path(&background);
        if focused {
            painter.set_stroke_color(style.focus_border_color);
            painter.set_line_width(style.focus_border_width);
        } else {
            painter.set_stroke_color(style.border_color);
            painter.set_line_width(style.border_width);
        }
        painter.stroke_path(&background);

        let mut clip = painter.clip(frame);
        let origin = frame.origin() + self.edit.text_origin();
        let metrics = self.edit.line().metrics();

        if !focused {
            if self.edit.is_empty() {
                let alignment = if self.placeholder.width() > frame.w {
                    self.edit.alignment().with_horizontal(HAlign::Left)
                } else {
                    self.edit.alignment()
                };
                clip.set_fill_color(style.placeholder_color);
                self.placeholder.draw_aligned(&mut *clip, frame, alignment);
            } else {
                clip.set_fill_color(style.text_color);
                self.edit.line().draw(&mut *clip, origin);
            }
            return;
        }

        if self.edit.has_selection() {
            render_selection(
                &mut clip,
                &SelectionRenderConfig {
                    frame,
                    origin,
                    selection_x: layout.selection_x,
                    ascent: metrics.ascent,
                    descent: metrics.descent,
                    color: style.selection_color,
                },
            );
        }

        clip.set_fill_color(style.text_color);
        self.edit.line().draw(&mut *clip, origin);

        if self.edit.caret_visible() && self.caret_blink.is_visible() {
            // A caret on either frame edge is pulled inside the clip.
            let caret_left = (origin.x + layout.caret_x - style.caret_width * 0.5)
                .min(frame.right() - style.caret_width)
                .max(frame.x);
            clip.set_fill_color(style.caret_color);
            clip.fill_rect(Rect::new(
                caret_left,
                origin.y - metrics.ascent,
                style.caret_width,
                metrics.ascent + metrics.descent,
            ));
        }
    }
}

fn text_frame(rect: Rect, style: &TextBoxStyle) -> Rect {
    rect.inset(style.padding_x, style.padding_y)
}

impl EventHandler for TextBox {
    /// Presses inside the box take focus and place the caret.
    fn mouse_down(&mut self, event: MouseEvent) -> EventResult {
        if !self.contains_point(event.x, event.y) {
            return EventResult::Ignored;
        }
        trace!(x = event.x, y = event.y, clicks = event.click_count, "text box mouse down");
        let point = self.to_frame(event.x, event.y);
        self.edit
            .mouse_down(point, event.click_count, event.modifiers.shift);
        self.caret_blink.reset();
        EventResult::Handled
    }

    /// Only drags that started with a press in this box are handled.
    fn mouse_drag(&mut self, event: MouseEvent) -> EventResult {
        if !self.edit.is_dragging() {
            return EventResult::Ignored;
        }
        let point = self.to_frame(event.x, event.y);
        self.edit.mouse_drag(point);
        self.caret_blink.reset();
        EventResult::Handled
    }

    fn mouse_up(&mut self, event: MouseEvent) -> EventResult {
        if !self.edit.is_dragging() {
            return EventResult::Ignored;
        }
        let point = self.to_frame(event.x, event.y);
        self.edit.mouse_up(point);
        EventResult::Handled
    }

    fn key_down(&mut self, event: KeyEvent) -> EventResult {
        if !self.edit.is_focused() {
            return EventResult::Ignored;
        }
        let shift = event.modifiers.shift;
        let shortcut = event.modifiers.shortcut();
        trace!(key = ?event.key, ch = ?event.character, "text box key down");

        match event.key {
            KeyCode::ArrowLeft if event.modifiers.alt => self.edit.move_word_left(shift),
            KeyCode::ArrowRight if event.modifiers.alt => self.edit.move_word_right(shift),
            KeyCode::ArrowLeft => self.edit.move_left(shift),
            KeyCode::ArrowRight => self.edit.move_right(shift),
            KeyCode::ArrowUp | KeyCode::Home => self.edit.move_to_start(),
            KeyCode::ArrowDown | KeyCode::End => self.edit.move_to_end(),
            KeyCode::Backspace => self.edit.backspace(),
            KeyCode::Delete => self.edit.delete_forward(),
            KeyCode::KeyA if shortcut => {
                self.edit.select_all();
            }
            KeyCode::KeyC if shortcut => self.copy(),
            KeyCode::KeyX if shortcut => self.cut(),
            KeyCode::KeyV if shortcut => self.paste(),
            KeyCode::Enter | KeyCode::Escape | KeyCode::Tab => return EventResult::Ignored,
            _ => match event.character {
                Some(ch) if !shortcut && !ch.is_control() => self.edit.insert_char(ch),
                _ => return EventResult::Ignored,
            },
        }
        self.caret_blink.reset();
        EventResult::Handled
    }

    fn focus_gained(&mut self) {
        self.edit.set_focused(true);
        self.caret_blink.reset();
    }

    fn focus_lost(&mut self) {
        self.edit.set_focused(false);
    }

    fn is_focused(&self) -> bool {
        self.edit.is_focused()
    }

    fn contains_point(&self, x: f32, y: f32) -> bool {
        self.rect.contains(Point::new(x, y))
    }
}

impl std::fmt::Debug for TextBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBox")
            .field("rect", &self.rect)
            .field("edit", &self.edit)
            .field("caret_blink", &self.caret_blink)
            .finish_non_exhaustive()
    }
}
