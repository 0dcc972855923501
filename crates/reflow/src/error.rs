use thiserror::Error;

/// Result type used throughout the engine.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the reflow engine.
///
/// The engine is deterministic and pure, so none of these are retryable:
/// the same input yields the same failure.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// A widget has a negative extent or a non-finite coordinate. Rejected
    /// before any constraint is constructed; the operation fails atomically.
    #[error("invalid geometry for widget {id}: {reason}")]
    InvalidGeometry {
        /// Id of the offending widget.
        id: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Two input widgets share an id. The adjacency map and the solver
    /// variable set are keyed by id, so colliding entries would silently
    /// corrupt results.
    #[error("duplicate widget id {id}")]
    DuplicateId {
        /// The id that appears more than once.
        id: String,
    },

    /// The constraint solver reported that no solution exists. This can only
    /// arise from a construction defect, not from user input.
    #[error("constraint system infeasible: {0}")]
    Infeasible(String),
}
