//! quill-text: single-line text measurement and editing.
//!
//! - geometry: points, rects, index ranges and the nine-way alignment
//! - font: font faces, system font lookup and the `FontProvider` backend trait
//! - shaping: harfrust shaping into an owned `GlyphLine`
//! - line: `ShapedLine`, text bound to a font with measurement and hit testing
//! - edit: caret, selection and scroll state of an editable line

pub mod clipboard;
pub mod edit;
pub mod font;
pub mod geometry;
pub mod line;
pub mod shaping;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, SystemClipboard};
pub use edit::{ResolvedLayout, TextEditState, UpdateStatus};
pub use font::{
    Font, FontCache, FontError, FontFace, FontKey, FontMetrics, FontProvider, LineMetrics,
    MonospaceFont, ScaledFontMetrics, load_system_default_font,
};
pub use geometry::{Alignment, HAlign, IndexRange, Point, Rect, Size, VAlign};
pub use line::{LineCanvas, ShapedLine};
pub use shaping::{Glyph, GlyphLine, ShapedFont, TextShaper};
