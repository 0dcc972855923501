//! Reflow: an auto-collapse layout engine for rectangular widgets.
//!
//! Given a set of axis-aligned widgets on a 2D canvas, some of which are
//! marked hidden, [`reflow`] collapses the vertical space the hidden widgets
//! occupied and shifts the widgets below them upward to fill the gap,
//! without introducing overlaps among the remaining visible widgets.
//! Horizontal placement and size are never touched: only `y` and `height`
//! are renegotiated.
//!
//! The pipeline has three stages, all pure and synchronous:
//!
//! 1. A stable sort into reading order (top edge, then left edge).
//! 2. An adjacency pass that finds each widget's direct-above neighbors:
//!    the nearest horizontally-overlapping rectangles above it, with
//!    shadowed candidates reduced away.
//! 3. A linear constraint system over per-widget position and height
//!    unknowns, solved with a tiered simplex solver: hiding is a required
//!    `height == 0` equality, stacking is a soft lower bound against the
//!    neighbors above, and a required non-overlap backstop protects every
//!    horizontally-overlapping pair of visible widgets.
//!
//! ```
//! use reflow::{Options, Widget, reflow};
//!
//! let widgets = vec![
//!     Widget::new("top", 0.0, 0.0, 100.0, 40.0),
//!     Widget::new("mid", 0.0, 40.0, 100.0, 40.0).hide(),
//!     Widget::new("bot", 0.0, 80.0, 100.0, 40.0),
//! ];
//! let out = reflow(&widgets, Options::default()).unwrap();
//! let bot = out.iter().find(|w| w.id == "bot").unwrap();
//! assert_eq!(bot.y, 40.0);
//! ```

/// Direct-above neighbor computation.
mod adjacency;
/// Error taxonomy.
mod error;
/// Constraint model construction and solving.
mod model;
/// Per-invocation policy options.
mod options;
/// Reading-order sort.
mod order;
/// The widget record and input validation.
mod widget;

pub use error::{Error, Result};
pub use options::Options;
pub use widget::Widget;

use tracing::debug;

/// Reflow a widget list: collapse the vertical space of hidden widgets and
/// shift the widgets below upward, leaving `x` and `width` untouched.
///
/// The returned list has the same cardinality and id set as the input, in
/// reading order of the original geometry. `x`, `width`, `id` and `hidden`
/// pass through unchanged; `y` and `height` may change. The caller's input
/// is never mutated.
///
/// Fails atomically with [`Error::InvalidGeometry`] or
/// [`Error::DuplicateId`] if the input is malformed, and with
/// [`Error::Infeasible`] if the solver rejects the system (a construction
/// defect, not a user-correctable condition).
pub fn reflow(widgets: &[Widget], options: Options) -> Result<Vec<Widget>> {
    widget::validate(widgets)?;
    let mut sorted = widgets.to_vec();
    order::reading_order(&mut sorted);
    let out = model::solve(&sorted, options)?;
    debug!(widgets = out.len(), "reflow complete");
    Ok(out)
}
