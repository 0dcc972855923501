//! Geometry primitives used by the reflow engine.
//!
//! Coordinates are real-valued canvas units. Overlap is open-interval
//! throughout: segments or rectangles that merely touch at an edge do not
//! overlap.

/// One-dimensional segments.
mod span;

/// Rectangle operations.
mod rect;

pub use rect::Rect;
pub use span::Span;
