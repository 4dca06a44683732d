use quill_text::{Point, Rect};

/// Linear-light, premultiplied RGBA.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorLinPremul {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

pub type Color = ColorLinPremul;

// Constructors live in color.rs next to the palette conversions.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo([f32; 2]),
    LineTo([f32; 2]),
    QuadTo([f32; 2], [f32; 2]),
    CubicTo([f32; 2], [f32; 2], [f32; 2]),
    Close,
}

/// Vector outline made of path commands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub cmds: Vec<PathCmd>,
    pub fill_rule: FillRule,
}

/// Control-point factor approximating a quarter circle with one cubic.
const KAPPA: f32 = 0.552_284_8;

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.cmds.push(PathCmd::MoveTo([p.x, p.y]));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.cmds.push(PathCmd::LineTo([p.x, p.y]));
        self
    }

    pub fn quad_to(&mut self, c: Point, p: Point) -> &mut Self {
        self.cmds.push(PathCmd::QuadTo([c.x, c.y], [p.x, p.y]));
        self
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, p: Point) -> &mut Self {
        self.cmds
            .push(PathCmd::CubicTo([c1.x, c1.y], [c2.x, c2.y], [p.x, p.y]));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.cmds.push(PathCmd::Close);
        self
    }

    pub fn rect(rect: Rect) -> Self {
        let mut path = Self::new();
        path.move_to(Point::new(rect.x, rect.y))
            .line_to(Point::new(rect.right(), rect.y))
            .line_to(Point::new(rect.right(), rect.bottom()))
            .line_to(Point::new(rect.x, rect.bottom()))
            .close();
        path
    }

    /// Rectangle with circular corners. The radius is limited to half the
    /// shorter side; a zero radius gives a plain rectangle.
    pub fn rounded_rect(rect: Rect, radius: f32) -> Self {
        let r = radius.min(rect.w * 0.5).min(rect.h * 0.5).max(0.0);
        if r == 0.0 {
            return Self::rect(rect);
        }
        let k = r * KAPPA;
        let (l, t, rt, b) = (rect.x, rect.y, rect.right(), rect.bottom());

        let mut path = Self::new();
        path.move_to(Point::new(l + r, t))
            .line_to(Point::new(rt - r, t))
            .cubic_to(
                Point::new(rt - r + k, t),
                Point::new(rt, t + r - k),
                Point::new(rt, t + r),
            )
            .line_to(Point::new(rt, b - r))
            .cubic_to(
                Point::new(rt, b - r + k),
                Point::new(rt - r + k, b),
                Point::new(rt - r, b),
            )
            .line_to(Point::new(l + r, b))
            .cubic_to(
                Point::new(l + r - k, b),
                Point::new(l, b - r + k),
                Point::new(l, b - r),
            )
            .line_to(Point::new(l, t + r))
            .cubic_to(
                Point::new(l, t + r - k),
                Point::new(l + r - k, t),
                Point::new(l + r, t),
            )
            .close();
        path
    }

    /// Bounding box of all points, control points included.
    pub fn bounds(&self) -> Rect {
        let mut min = [f32::INFINITY; 2];
        let mut max = [f32::NEG_INFINITY; 2];
        let mut add = |p: &[f32; 2]| {
            for i in 0..2 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        };
        for cmd in &self.cmds {
            match cmd {
                PathCmd::MoveTo(p) | PathCmd::LineTo(p) => add(p),
                PathCmd::QuadTo(c, p) => {
                    add(c);
                    add(p);
                }
                PathCmd::CubicTo(c1, c2, p) => {
                    add(c1);
                    add(c2);
                    add(p);
                }
                PathCmd::Close => {}
            }
        }
        if min[0] > max[0] {
            return Rect::default();
        }
        Rect::new(min[0], min[1], max[0] - min[0], max[1] - min[1])
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub join: LineJoin,
    pub cap: LineCap,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            join: LineJoin::default(),
            cap: LineCap::default(),
        }
    }
}

/// Blurred shadow cast by a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub offset: [f32; 2],
    pub spread: f32,
    pub blur_radius: f32,
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_path_is_closed_quad() {
        let path = Path::rect(Rect::new(1.0, 2.0, 10.0, 5.0));
        assert_eq!(path.cmds.len(), 5);
        assert_eq!(path.cmds[2], PathCmd::LineTo([11.0, 7.0]));
        assert_eq!(path.bounds(), Rect::new(1.0, 2.0, 10.0, 5.0));
    }

    #[test]
    fn rounded_rect_stays_inside_its_rect() {
        let rect = Rect::new(0.0, 0.0, 100.0, 20.0);
        let path = Path::rounded_rect(rect, 50.0);
        // Radius limited to 10, four arcs, four edges.
        assert_eq!(path.cmds.len(), 10);
        assert_eq!(path.cmds[0], PathCmd::MoveTo([10.0, 0.0]));
        assert_eq!(path.bounds(), rect);
    }

    #[test]
    fn zero_radius_falls_back_to_rect() {
        let rect = Rect::new(0.0, 0.0, 4.0, 4.0);
        assert_eq!(Path::rounded_rect(rect, 0.0), Path::rect(rect));
        assert_eq!(Path::new().bounds(), Rect::default());
    }
}
