use std::collections::HashSet;

use geom::Rect;

use crate::{Error, Result};

/// An axis-aligned rectangular widget on the canvas, the unit of layout.
///
/// The engine only ever rewrites `y` and `height`; `id`, `x`, `width` and
/// `hidden` pass through reflow unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    /// Unique, stable identifier.
    pub id: String,
    /// Left edge of the widget. Never modified by the engine.
    pub x: f64,
    /// Top edge of the widget.
    pub y: f64,
    /// Width. Never modified by the engine.
    pub width: f64,
    /// Height. Forced to zero in the output when the widget is hidden.
    pub height: f64,
    /// Hidden widgets occupy no vertical space after reflow.
    pub hidden: bool,
}

impl Widget {
    /// Construct a visible widget.
    pub fn new(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Widget {
            id: id.into(),
            x,
            y,
            width,
            height,
            hidden: false,
        }
    }

    /// Mark the widget hidden.
    pub fn hide(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// The rectangle this widget covers.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// The bottom edge of the widget.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check this widget's geometry, naming the defect if any.
    fn check_geometry(&self) -> std::result::Result<(), &'static str> {
        if self.rect().is_valid() {
            return Ok(());
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            Err("non-finite position")
        } else if !self.width.is_finite() || !self.height.is_finite() {
            Err("non-finite extent")
        } else if self.width < 0.0 {
            Err("negative width")
        } else {
            Err("negative height")
        }
    }
}

/// Validate a widget list before reflow: every widget must have finite
/// coordinates, non-negative extents, and a unique id.
pub fn validate(widgets: &[Widget]) -> Result<()> {
    let mut seen = HashSet::with_capacity(widgets.len());
    for w in widgets {
        if let Err(reason) = w.check_geometry() {
            return Err(Error::InvalidGeometry {
                id: w.id.clone(),
                reason: reason.into(),
            });
        }
        if !seen.insert(w.id.as_str()) {
            return Err(Error::DuplicateId { id: w.id.clone() });
        }
    }
    Ok(())
}
