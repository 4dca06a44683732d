use std::ops::{Deref, DerefMut};

use quill_text::{GlyphLine, LineCanvas, Point, Rect};

use crate::display_list::{Command, DisplayList, Viewport};
use crate::scene::*;

/// Current fill/stroke settings applied to every recorded command.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PaintState {
    fill: Color,
    stroke_color: Color,
    stroke: StrokeStyle,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            fill: Color::rgb(0, 0, 0),
            stroke_color: Color::rgb(0, 0, 0),
            stroke: StrokeStyle::default(),
        }
    }
}

/// Recording draw context.
pub struct Painter {
    list: DisplayList,
    state: PaintState,
    clip_stack: Vec<Rect>,
}

impl Painter {
    pub fn begin_frame(viewport: Viewport) -> Self {
        Self {
            list: DisplayList {
                viewport,
                commands: Vec::new(),
            },
            state: PaintState::default(),
            clip_stack: Vec::new(),
        }
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.state.fill = color;
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke_color = color;
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.state.stroke.width = width.max(0.0);
    }

    pub fn set_line_join(&mut self, join: LineJoin) {
        self.state.stroke.join = join;
    }

    pub fn set_line_cap(&mut self, cap: LineCap) {
        self.state.stroke.cap = cap;
    }

    pub fn fill_color(&self) -> Color {
        self.state.fill
    }

    pub fn stroke_style(&self) -> StrokeStyle {
        self.state.stroke
    }

    pub fn fill_path(&mut self, path: &Path) {
        self.list.commands.push(Command::FillPath {
            path: path.clone(),
            color: self.state.fill,
        });
    }

    pub fn stroke_path(&mut self, path: &Path) {
        self.list.commands.push(Command::StrokePath {
            path: path.clone(),
            stroke: self.state.stroke,
            color: self.state.stroke_color,
        });
    }

    pub fn fill_rect(&mut self, rect: Rect) {
        self.list.commands.push(Command::FillRect {
            rect,
            color: self.state.fill,
        });
    }

    pub fn drop_shadow(&mut self, path: &Path, shadow: Shadow) {
        self.list.commands.push(Command::DropShadow {
            path: path.clone(),
            shadow,
        });
    }

    pub fn push_clip_rect(&mut self, rect: Rect) {
        self.clip_stack.push(rect);
        self.list.commands.push(Command::PushClip(rect));
    }

    /// Unbalanced pops are ignored.
    pub fn pop_clip(&mut self) {
        if self.clip_stack.pop().is_some() {
            self.list.commands.push(Command::PopClip);
        }
    }

    /// Clip to `rect` until the returned guard is dropped.
    pub fn clip(&mut self, rect: Rect) -> ClipGuard<'_> {
        self.push_clip_rect(rect);
        ClipGuard { painter: self }
    }

    /// Intersection of all active clips, `None` when unclipped.
    pub fn current_clip(&self) -> Option<Rect> {
        let mut iter = self.clip_stack.iter();
        let first = *iter.next()?;
        Some(iter.fold(first, |acc, r| acc.intersection(r).unwrap_or_default()))
    }

    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Get a reference to the display list recorded so far.
    pub fn display_list(&self) -> &DisplayList {
        &self.list
    }

    /// Close any clips left open and hand back the list.
    pub fn finish(mut self) -> DisplayList {
        while !self.clip_stack.is_empty() {
            self.pop_clip();
        }
        self.list
    }
}

impl LineCanvas for Painter {
    fn draw_glyph_line(&mut self, line: &GlyphLine, origin: Point) {
        self.list.commands.push(Command::DrawGlyphs {
            glyphs: line.glyphs().to_vec(),
            origin,
            color: self.state.fill,
        });
    }
}

/// Scoped clip; pops on drop and otherwise behaves like the painter.
pub struct ClipGuard<'a> {
    painter: &'a mut Painter,
}

impl Deref for ClipGuard<'_> {
    type Target = Painter;

    fn deref(&self) -> &Painter {
        self.painter
    }
}

impl DerefMut for ClipGuard<'_> {
    fn deref_mut(&mut self) -> &mut Painter {
        self.painter
    }
}

impl Drop for ClipGuard<'_> {
    fn drop(&mut self) {
        self.painter.pop_clip();
    }
}

#[cfg(test)]
mod tests {
    use quill_text::{MonospaceFont, ShapedLine};

    use super::*;

    fn painter() -> Painter {
        Painter::begin_frame(Viewport {
            width: 200,
            height: 100,
        })
    }

    #[test]
    fn commands_use_current_state() {
        let mut p = painter();
        let red = Color::rgb(255, 0, 0);
        p.set_fill_color(red);
        p.set_stroke_color(Color::rgb(0, 0, 255));
        p.set_line_width(2.0);
        p.set_line_join(LineJoin::Round);
        p.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        p.stroke_path(&Path::rect(Rect::new(0.0, 0.0, 10.0, 10.0)));

        let list = p.finish();
        assert_eq!(
            list.commands[0],
            Command::FillRect {
                rect: Rect::new(0.0, 0.0, 10.0, 10.0),
                color: red
            }
        );
        match &list.commands[1] {
            Command::StrokePath { stroke, color, .. } => {
                assert_eq!(stroke.width, 2.0);
                assert_eq!(stroke.join, LineJoin::Round);
                assert_eq!(stroke.cap, LineCap::Butt);
                assert_eq!(*color, Color::rgb(0, 0, 255));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn clip_guard_pops_on_drop() {
        let mut p = painter();
        {
            let mut clipped = p.clip(Rect::new(0.0, 0.0, 50.0, 50.0));
            clipped.fill_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
            assert_eq!(clipped.clip_depth(), 1);
        }
        assert_eq!(p.clip_depth(), 0);
        assert_eq!(p.display_list().summary(), ["push_clip", "fill_rect", "pop_clip"]);
    }

    #[test]
    fn nested_clips_intersect_and_finish_closes_them() {
        let mut p = painter();
        assert_eq!(p.current_clip(), None);
        p.push_clip_rect(Rect::new(0.0, 0.0, 50.0, 50.0));
        p.push_clip_rect(Rect::new(25.0, 25.0, 50.0, 50.0));
        assert_eq!(p.current_clip(), Some(Rect::new(25.0, 25.0, 25.0, 25.0)));
        p.pop_clip();
        p.pop_clip();
        p.pop_clip();
        p.push_clip_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        let list = p.finish();
        assert_eq!(
            list.summary(),
            ["push_clip", "push_clip", "pop_clip", "pop_clip", "push_clip", "pop_clip"]
        );
    }

    #[test]
    fn shaped_lines_draw_with_fill_color() {
        let mut p = painter();
        let blue = Color::rgb(0, 0, 255);
        p.set_fill_color(blue);
        let font = MonospaceFont::new(10.0, 8.0, 2.0, 0.0).into_font();
        let line = ShapedLine::with_text(font, "hey");
        line.draw(&mut p, Point::new(5.0, 20.0));

        let list = p.finish();
        let runs: Vec<_> = list.glyph_runs().collect();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].0.len(), 3);
        assert_eq!(runs[0].1, Point::new(5.0, 20.0));
        assert_eq!(runs[0].2, blue);
    }
}
