use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use quill_config::QuillConfig;
use quill_paint::{Command, DisplayList, Painter, Viewport};
use quill_text::{
    Clipboard, ClipboardError, Font, HAlign, IndexRange, MonospaceFont, Point, Rect,
};
use quill_widgets::{
    EventHandler, EventResult, KeyCode, KeyEvent, Modifiers, MouseEvent, TextBox, TextBoxStyle,
};

fn mono() -> Font {
    MonospaceFont::new(10.0, 8.0, 2.0, 0.0).into_font()
}

/// 200x30 box; with the default padding the text frame is (8, 4, 184, 22).
fn text_box() -> TextBox {
    TextBox::new(Rect::new(0.0, 0.0, 200.0, 30.0), mono(), TextBoxStyle::default())
}

fn render(text_box: &mut TextBox) -> DisplayList {
    let mut painter = Painter::begin_frame(Viewport {
        width: 200,
        height: 30,
    });
    text_box.render(&mut painter);
    painter.finish()
}

fn type_text(text_box: &mut TextBox, text: &str) {
    for ch in text.chars() {
        text_box.key_down(KeyEvent::character(ch));
    }
}

/// Clipboard whose contents the test can look at.
#[derive(Clone, Default)]
struct SharedClipboard(Rc<RefCell<Option<String>>>);

impl Clipboard for SharedClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.0.borrow().clone().ok_or(ClipboardError::Empty)
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        *self.0.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

#[test]
fn unfocused_empty_box_shows_placeholder() {
    let mut tb = text_box();
    tb.set_placeholder("Search");
    let list = render(&mut tb);
    assert_eq!(
        list.summary(),
        ["fill_path", "stroke_path", "push_clip", "glyphs", "pop_clip"]
    );
    let (glyphs, _, color) = list.glyph_runs().next().expect("placeholder run");
    assert_eq!(glyphs.len(), 6);
    assert_eq!(color, TextBoxStyle::default().placeholder_color);
}

#[test]
fn focused_box_draws_text_then_caret() {
    let mut tb = text_box();
    tb.focus_gained();
    type_text(&mut tb, "abc");
    assert_eq!(tb.text(), "abc");

    let list = render(&mut tb);
    assert_eq!(
        list.summary(),
        ["fill_path", "stroke_path", "push_clip", "glyphs", "fill_rect", "pop_clip"]
    );
    assert_eq!(list.commands[2], Command::PushClip(Rect::new(8.0, 4.0, 184.0, 22.0)));
    match &list.commands[4] {
        Command::FillRect { rect, color } => {
            assert_eq!(*rect, Rect::new(37.25, 10.0, 1.5, 10.0));
            assert_eq!(*color, TextBoxStyle::default().caret_color);
        }
        other => panic!("expected caret, got {other:?}"),
    }
    match &list.commands[1] {
        Command::StrokePath { stroke, .. } => assert_eq!(stroke.width, 2.0),
        other => panic!("expected border, got {other:?}"),
    }
}

#[test]
fn caret_at_the_scrolled_end_stays_inside_the_frame() -> Result<()> {
    let mut tb = text_box();
    tb.focus_gained();
    type_text(&mut tb, &"x".repeat(25));
    // 250px of text in a 184px frame: the line end sits on the right edge.
    assert_eq!(tb.edit().scroll_offset(), -66.0);

    let list = render(&mut tb);
    let caret = list
        .commands
        .iter()
        .find_map(|cmd| match cmd {
            Command::FillRect { rect, .. } => Some(*rect),
            _ => None,
        })
        .ok_or_else(|| anyhow::anyhow!("no caret drawn"))?;
    assert_eq!(caret, Rect::new(190.5, 10.0, 1.5, 10.0));
    assert!(caret.right() <= 192.0);

    tb.key_down(KeyEvent::key(KeyCode::Home));
    let list = render(&mut tb);
    let caret = list
        .commands
        .iter()
        .find_map(|cmd| match cmd {
            Command::FillRect { rect, .. } => Some(*rect),
            _ => None,
        })
        .ok_or_else(|| anyhow::anyhow!("no caret drawn"))?;
    assert_eq!(caret.x, 8.0);
    Ok(())
}

#[test]
fn selection_replaces_caret_and_precedes_text() {
    let mut tb = text_box();
    tb.focus_gained();
    type_text(&mut tb, "hello");
    let result = tb.key_down(KeyEvent::key(KeyCode::KeyA).with_modifiers(Modifiers::command()));
    assert!(result.is_handled());
    assert_eq!(tb.edit().selection(), IndexRange::new(0, 5));

    let list = render(&mut tb);
    assert_eq!(
        list.summary(),
        ["fill_path", "stroke_path", "push_clip", "fill_rect", "glyphs", "pop_clip"]
    );
}

#[test]
fn blink_hides_caret_between_edits() {
    let mut tb = text_box();
    tb.focus_gained();
    type_text(&mut tb, "x");
    tb.update(0.6);
    assert!(!render(&mut tb).summary().contains(&"fill_rect"));
    type_text(&mut tb, "y");
    assert!(render(&mut tb).summary().contains(&"fill_rect"));
}

#[test]
fn unfocused_box_ignores_keys_and_uses_thin_border() {
    let mut tb = text_box();
    assert_eq!(tb.key_down(KeyEvent::character('a')), EventResult::Ignored);
    assert_eq!(tb.text(), "");
    let list = render(&mut tb);
    match &list.commands[1] {
        Command::StrokePath { stroke, .. } => assert_eq!(stroke.width, 1.0),
        other => panic!("expected border, got {other:?}"),
    }
}

#[test]
fn shadow_is_drawn_first() {
    let style = TextBoxStyle {
        shadow: Some(TextBoxStyle::default_shadow()),
        ..TextBoxStyle::default()
    };
    let mut tb = TextBox::new(Rect::new(0.0, 0.0, 200.0, 30.0), mono(), style);
    let list = render(&mut tb);
    assert_eq!(list.summary()[0], "drop_shadow");
}

#[test]
fn enter_escape_and_tab_propagate() {
    let mut tb = text_box();
    tb.focus_gained();
    for key in [KeyCode::Enter, KeyCode::Escape, KeyCode::Tab] {
        assert_eq!(tb.key_down(KeyEvent::key(key)), EventResult::Ignored);
    }
}

#[test]
fn editing_keys() {
    let mut tb = text_box();
    tb.focus_gained();
    type_text(&mut tb, "one two");
    tb.key_down(KeyEvent::key(KeyCode::ArrowLeft).with_modifiers(Modifiers::alt()));
    assert_eq!(tb.edit().caret(), 4);
    tb.key_down(KeyEvent::key(KeyCode::Backspace));
    assert_eq!(tb.text(), "onetwo");
    tb.key_down(KeyEvent::key(KeyCode::ArrowUp));
    assert_eq!(tb.edit().caret(), 0);
    tb.key_down(KeyEvent::key(KeyCode::Delete));
    assert_eq!(tb.text(), "netwo");
    tb.key_down(KeyEvent::key(KeyCode::ArrowRight).with_modifiers(Modifiers::shift()));
    assert_eq!(tb.edit().selection(), IndexRange::new(0, 1));
    tb.key_down(KeyEvent::key(KeyCode::End));
    assert_eq!(tb.edit().caret(), 5);
    assert!(!tb.edit().has_selection());
}

#[test]
fn mouse_press_drag_release() {
    let mut tb = text_box();
    tb.set_text("abcdef");
    assert_eq!(tb.mouse_down(MouseEvent::new(250.0, 10.0)), EventResult::Ignored);

    // Frame starts at x = 8: local x 7 is nearest boundary 1.
    assert!(tb.mouse_down(MouseEvent::new(15.0, 10.0)).is_handled());
    assert!(tb.is_focused());
    assert_eq!(tb.edit().caret(), 1);

    assert!(tb.mouse_drag(MouseEvent::new(48.0, 10.0)).is_handled());
    assert!(tb.mouse_up(MouseEvent::new(48.0, 10.0)).is_handled());
    assert_eq!(tb.edit().selection(), IndexRange::new(1, 4));
    assert_eq!(tb.mouse_drag(MouseEvent::new(60.0, 10.0)), EventResult::Ignored);

    tb.mouse_down(MouseEvent::new(15.0, 10.0).with_clicks(3));
    assert_eq!(tb.edit().selection(), IndexRange::new(0, 6));
}

#[test]
fn clipboard_cut_and_paste() -> Result<()> {
    let clipboard = SharedClipboard::default();
    let mut tb = text_box().with_clipboard(Box::new(clipboard.clone()));
    tb.focus_gained();
    type_text(&mut tb, "hello world");
    tb.edit_mut().set_selection(IndexRange::new(6, 11));

    let cmd = Modifiers::command();
    tb.key_down(KeyEvent::key(KeyCode::KeyX).with_modifiers(cmd));
    assert_eq!(tb.text(), "hello ");
    assert_eq!(clipboard.0.borrow().as_deref(), Some("world"));

    tb.key_down(KeyEvent::key(KeyCode::ArrowUp));
    tb.key_down(KeyEvent::key(KeyCode::KeyV).with_modifiers(cmd));
    assert_eq!(tb.text(), "worldhello ");

    // Only the first line of multi-line clipboard text is pasted.
    let mut other = clipboard.clone();
    other.set_text("one\ttwo\nthree")?;
    tb.key_down(KeyEvent::key(KeyCode::KeyV).with_modifiers(cmd));
    assert_eq!(tb.text(), "worldone twohello ");
    Ok(())
}

#[test]
fn password_text_is_not_copied() {
    let clipboard = SharedClipboard::default();
    let mut config = QuillConfig::default();
    config.editing.password = true;
    config.editing.alignment = "right".into();
    let mut tb = TextBox::from_config(Rect::new(0.0, 0.0, 200.0, 30.0), mono(), &config)
        .with_clipboard(Box::new(clipboard.clone()));
    tb.focus_gained();
    type_text(&mut tb, "secret");
    tb.key_down(KeyEvent::key(KeyCode::KeyA).with_modifiers(Modifiers::command()));
    tb.key_down(KeyEvent::key(KeyCode::KeyC).with_modifiers(Modifiers::command()));

    assert!(clipboard.0.borrow().is_none());
    assert!(tb.edit().line().is_password());
    assert_eq!(tb.text(), "secret");
    assert_eq!(tb.edit().alignment().horizontal(), HAlign::Right);

    // Right aligned in the 184px frame: the line ends at the frame's right edge.
    let layout = tb.edit_mut().resolve();
    assert_eq!(layout.line_origin, Point::new(124.0, 14.0));
}
