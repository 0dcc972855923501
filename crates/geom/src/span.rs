/// A span is a directionless one-dimensional segment on a real axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Span {
    /// The offset of this span.
    pub off: f64,
    /// The length of this span.
    pub len: f64,
}

impl Span {
    /// Construct a span from an offset and a length.
    pub fn new(off: f64, len: f64) -> Self {
        Span { off, len }
    }

    /// The far limit of the span.
    pub fn far(&self) -> f64 {
        self.off + self.len
    }

    /// Do these two spans overlap? Open-interval semantics: spans that
    /// exactly touch at an endpoint do not overlap, and zero-length spans
    /// overlap nothing.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.off < other.far() && self.far() > other.off
    }

    /// The gap between the end of this span and the start of `other`,
    /// clamped at zero if the spans touch or overlap.
    pub fn gap_to(&self, other: &Self) -> f64 {
        (other.off - self.far()).max(0.0)
    }

    /// Is this span usable as geometry input? Requires finite offset and a
    /// finite, non-negative length.
    pub fn is_valid(&self) -> bool {
        self.off.is_finite() && self.len.is_finite() && self.len >= 0.0
    }
}
