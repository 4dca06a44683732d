use quill_paint::{Color, Painter, Point, Rect};

/// Where and how to draw a single-line selection highlight.
#[derive(Debug, Clone, Copy)]
pub struct SelectionRenderConfig {
    /// Visible text frame; the highlight never leaves it.
    pub frame: Rect,
    /// Baseline origin of the scrolled line.
    pub origin: Point,
    /// Selection edges in line coordinates.
    pub selection_x: (f32, f32),
    pub ascent: f32,
    pub descent: f32,
    pub color: Color,
}

/// Fill the selection highlight, clipped to the frame by hand so the
/// rectangle stays exact even when the painter's clip is coarse.
///
/// Returns the rectangle drawn, `None` when nothing was visible.
pub fn render_selection(painter: &mut Painter, config: &SelectionRenderConfig) -> Option<Rect> {
    let (start, end) = config.selection_x;
    if end <= start {
        return None;
    }
    let highlight = Rect::new(
        config.origin.x + start,
        config.origin.y - config.ascent,
        end - start,
        config.ascent + config.descent,
    );
    let clipped = highlight.intersection(&config.frame)?;
    if clipped.w <= 0.0 || clipped.h <= 0.0 {
        return None;
    }
    painter.set_fill_color(config.color);
    painter.fill_rect(clipped);
    Some(clipped)
}
