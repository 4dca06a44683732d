//! Headless text box driver: types the command-line text into a text box,
//! replays a few edits and logs the recorded display list.
//!
//! Run with: RUST_LOG=debug cargo run -- hello world

use std::sync::Arc;

use anyhow::Result;
use quill_config::QuillConfig;
use quill_paint::{Painter, Viewport};
use quill_text::{
    Font, FontCache, MonospaceFont, Rect, ShapedFont, SystemClipboard, load_system_default_font,
};
use quill_widgets::{EventHandler, KeyCode, KeyEvent, Modifiers, TextBox};
use tracing::{debug, info, warn};

fn load_font(config: &QuillConfig, cache: &mut FontCache) -> Font {
    let size = config.text.text_size;
    if let Some(path) = &config.text.font {
        match cache.get_or_load(path, config.text.font_index as usize) {
            Ok(face) => return ShapedFont::new(face, size).into_font(),
            Err(err) => warn!(%err, path = %path.display(), "could not load configured font"),
        }
    }
    match load_system_default_font() {
        Ok(face) => ShapedFont::new(Arc::new(face), size).into_font(),
        Err(err) => {
            warn!(%err, "no system font, using fixed-advance metrics");
            MonospaceFont::for_size(size).into_font()
        }
    }
}

fn main() -> Result<()> {
    // tracing forwards to the `log` facade when no subscriber is installed.
    let _ = env_logger::try_init();

    let config = QuillConfig::load();
    debug!(?config, "configuration loaded");

    let mut fonts = FontCache::new();
    let font = load_font(&config, &mut fonts);

    let rect = Rect::new(20.0, 20.0, 240.0, 32.0);
    let mut text_box = TextBox::from_config(rect, font, &config);
    match SystemClipboard::new() {
        Ok(clipboard) => text_box = text_box.with_clipboard(Box::new(clipboard)),
        Err(err) => warn!(%err, "using an in-process clipboard"),
    }

    let text = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let text = if text.is_empty() { "The quick brown fox".to_string() } else { text };

    text_box.focus_gained();
    for ch in text.chars() {
        text_box.key_down(KeyEvent::character(ch));
    }
    // Select the last word, as a user would with shift+alt+left.
    text_box.key_down(
        KeyEvent::key(KeyCode::ArrowLeft).with_modifiers(Modifiers {
            shift: true,
            alt: true,
            ..Modifiers::NONE
        }),
    );
    info!(
        text = %text_box.text(),
        selected = %text_box.edit().selected_text(),
        scroll = text_box.edit().scroll_offset(),
        "edited"
    );

    let mut painter = Painter::begin_frame(Viewport {
        width: 280,
        height: 72,
    });
    text_box.render(&mut painter);
    let list = painter.finish();
    info!(commands = ?list.summary(), "focused frame");

    // Focus moves elsewhere; paint the resting state.
    text_box.focus_lost();
    let mut painter = Painter::begin_frame(Viewport {
        width: 280,
        height: 72,
    });
    text_box.render(&mut painter);
    info!(commands = ?painter.finish().summary(), "unfocused frame");

    Ok(())
}
