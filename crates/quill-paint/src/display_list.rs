use quill_text::{Glyph, Point, Rect};

use crate::scene::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    FillPath { path: Path, color: Color },
    StrokePath { path: Path, stroke: StrokeStyle, color: Color },
    FillRect { rect: Rect, color: Color },
    /// Shadow cast by `path`, drawn beneath whatever follows.
    DropShadow { path: Path, shadow: Shadow },
    /// One shaped line; glyph positions are relative to `origin` (baseline).
    DrawGlyphs { glyphs: Vec<Glyph>, origin: Point, color: Color },
    PushClip(Rect),
    PopClip,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    pub viewport: Viewport,
    pub commands: Vec<Command>,
}

impl DisplayList {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every glyph run in paint order.
    pub fn glyph_runs(&self) -> impl Iterator<Item = (&[Glyph], Point, Color)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            Command::DrawGlyphs {
                glyphs,
                origin,
                color,
            } => Some((glyphs.as_slice(), *origin, *color)),
            _ => None,
        })
    }

    /// Short label per command, handy for logging and assertions.
    pub fn summary(&self) -> Vec<&'static str> {
        self.commands
            .iter()
            .map(|cmd| match cmd {
                Command::FillPath { .. } => "fill_path",
                Command::StrokePath { .. } => "stroke_path",
                Command::FillRect { .. } => "fill_rect",
                Command::DropShadow { .. } => "drop_shadow",
                Command::DrawGlyphs { .. } => "glyphs",
                Command::PushClip(_) => "push_clip",
                Command::PopClip => "pop_clip",
            })
            .collect()
    }
}
