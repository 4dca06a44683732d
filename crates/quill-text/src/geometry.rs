//! Points, rectangles, index ranges and the packed alignment enum.
//!
//! These are plain value types; everything in the layout and editing code
//! takes and returns them by value.

use core::ops::{Add, Range, Sub};
use core::str::FromStr;

/// A 2D point in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point at the origin.
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Translate by the given deltas.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle with a top-left origin (y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Same size, moved to `origin`.
    pub fn with_origin(&self, origin: Point) -> Self {
        Self::new(origin.x, origin.y, self.w, self.h)
    }

    /// Same size, positioned at (0, 0).
    pub fn at_zero(&self) -> Self {
        self.with_origin(Point::zero())
    }

    /// Inclusive on the top/left edge, exclusive on the bottom/right edge.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        Some(Rect::new(x0, y0, x1 - x0, y1 - y0))
    }

    /// Shrink by `dx` on the left and right and `dy` on the top and bottom.
    /// The result never has a negative size.
    pub fn inset(&self, dx: f32, dy: f32) -> Self {
        let w = (self.w - dx * 2.0).max(0.0);
        let h = (self.h - dy * 2.0).max(0.0);
        Self::new(self.x + dx, self.y + dy, w, h)
    }

    /// Grow by `dx` on the left and right and `dy` on the top and bottom.
    pub fn outset(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x - dx, self.y - dy, self.w + dx * 2.0, self.h + dy * 2.0)
    }
}

/// Inclusive-exclusive range of character indices, always stored ordered.
///
/// An empty range (`min == max`) means "no selection".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IndexRange {
    pub min: usize,
    pub max: usize,
}

impl IndexRange {
    /// Build a range from two indices in any order.
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    pub fn collapsed(index: usize) -> Self {
        Self {
            min: index,
            max: index,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min == self.max
    }

    pub fn len(&self) -> usize {
        self.max - self.min
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.min && index < self.max
    }

    /// Grow the range so that it includes `index`.
    pub fn extend_to(&mut self, index: usize) {
        self.min = self.min.min(index);
        self.max = self.max.max(index);
    }

    /// Clamp both ends to `[0, len]`.
    pub fn clamp(self, len: usize) -> Self {
        Self::new(self.min.min(len), self.max.min(len))
    }

    pub fn as_range(&self) -> Range<usize> {
        self.min..self.max
    }

    /// The covered slice of `text`, clamped to its length.
    pub fn slice<'a>(&self, text: &'a [char]) -> &'a [char] {
        let r = self.clamp(text.len());
        &text[r.min..r.max]
    }
}

impl From<Range<usize>> for IndexRange {
    fn from(r: Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

impl FromStr for HAlign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(HAlign::Left),
            "center" | "centre" => Ok(HAlign::Center),
            "right" => Ok(HAlign::Right),
            other => Err(format!("unknown horizontal alignment `{other}`")),
        }
    }
}

/// One of the nine horizontal x vertical alignment combinations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    TopLeft,
    TopCenter,
    TopRight,
    #[default]
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Alignment {
    pub fn from_parts(h: HAlign, v: VAlign) -> Self {
        match (v, h) {
            (VAlign::Top, HAlign::Left) => Alignment::TopLeft,
            (VAlign::Top, HAlign::Center) => Alignment::TopCenter,
            (VAlign::Top, HAlign::Right) => Alignment::TopRight,
            (VAlign::Center, HAlign::Left) => Alignment::CenterLeft,
            (VAlign::Center, HAlign::Center) => Alignment::Center,
            (VAlign::Center, HAlign::Right) => Alignment::CenterRight,
            (VAlign::Bottom, HAlign::Left) => Alignment::BottomLeft,
            (VAlign::Bottom, HAlign::Center) => Alignment::BottomCenter,
            (VAlign::Bottom, HAlign::Right) => Alignment::BottomRight,
        }
    }

    pub fn horizontal(self) -> HAlign {
        match self {
            Alignment::TopLeft | Alignment::CenterLeft | Alignment::BottomLeft => HAlign::Left,
            Alignment::TopCenter | Alignment::Center | Alignment::BottomCenter => HAlign::Center,
            Alignment::TopRight | Alignment::CenterRight | Alignment::BottomRight => HAlign::Right,
        }
    }

    pub fn vertical(self) -> VAlign {
        match self {
            Alignment::TopLeft | Alignment::TopCenter | Alignment::TopRight => VAlign::Top,
            Alignment::CenterLeft | Alignment::Center | Alignment::CenterRight => VAlign::Center,
            Alignment::BottomLeft | Alignment::BottomCenter | Alignment::BottomRight => {
                VAlign::Bottom
            }
        }
    }

    /// Keep the vertical component, replace the horizontal one.
    pub fn with_horizontal(self, h: HAlign) -> Self {
        Self::from_parts(h, self.vertical())
    }
}
