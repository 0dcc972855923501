use crate::Span;

/// An axis-aligned rectangle with a top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
}

impl Rect {
    /// Construct a rectangle from its top-left corner and extents.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect { x, y, w, h }
    }

    /// The horizontal span covered by this rectangle.
    pub fn hspan(&self) -> Span {
        Span::new(self.x, self.w)
    }

    /// The vertical span covered by this rectangle.
    pub fn vspan(&self) -> Span {
        Span::new(self.y, self.h)
    }

    /// The bottom edge of the rectangle.
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Do the horizontal extents of the two rectangles overlap? Touching
    /// edges do not count as overlap.
    pub fn overlaps_horizontally(&self, other: &Self) -> bool {
        self.hspan().overlaps(&other.hspan())
    }

    /// Do the two rectangles overlap in area? Open-interval in both axes, so
    /// abutting rectangles do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.hspan().overlaps(&other.hspan()) && self.vspan().overlaps(&other.vspan())
    }

    /// Is this rectangle usable as geometry input? All coordinates must be
    /// finite and both extents non-negative.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.hspan().is_valid() && self.vspan().is_valid()
    }
}
