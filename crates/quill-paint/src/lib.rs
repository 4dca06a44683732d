//! quill-paint: a recording paint context.
//!
//! Widgets draw through [`Painter`], which records an ordered
//! [`DisplayList`] instead of rasterizing. A backend (or a test) replays it.

mod color;
pub mod display_list;
pub mod painter;
pub mod scene;

pub use display_list::{Command, DisplayList, Viewport};
pub use painter::{ClipGuard, Painter};
pub use scene::{
    Color, ColorLinPremul, FillRule, LineCap, LineJoin, Path, PathCmd, Shadow, StrokeStyle,
};

pub use quill_text::{Point, Rect};
