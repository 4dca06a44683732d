//! quill-widgets: the text box control.
//!
//! Turns toolkit input events into [`quill_text::TextEditState`] edits and
//! paints the result through a [`quill_paint::Painter`].

pub mod caret;
pub mod event;
pub mod selection_renderer;
pub mod style;
pub mod text_box;
#[cfg(feature = "winit")]
pub mod winit_input;

pub use caret::CaretBlink;
pub use event::{EventHandler, EventResult, KeyCode, KeyEvent, Modifiers, MouseEvent};
pub use selection_renderer::{SelectionRenderConfig, render_selection};
pub use style::TextBoxStyle;
pub use text_box::TextBox;
