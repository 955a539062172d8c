//! Error types for the animation engine
//!
//! All errors are reported synchronously to the caller of
//! [`Executor::run`](crate::engine::Executor::run) and leave the executor
//! state unchanged; none of them is fatal. An empty dataset is deliberately
//! not an error: searches report "not found" and sorts complete immediately,
//! so the edge inputs stay well-defined.

use std::fmt;

/// Errors a caller can receive when starting or configuring a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualizerError {
    /// A run was requested while another run is active on this executor
    AlreadyRunning,

    /// A search strategy was started without a target value
    NoTarget,

    /// The algorithm id is not in the strategy registry
    UnknownStrategy { id: String },
}

impl fmt::Display for VisualizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisualizerError::AlreadyRunning => {
                write!(f, "a run is already in progress on this executor")
            }
            VisualizerError::NoTarget => {
                write!(f, "search requires a target value; call set_target first")
            }
            VisualizerError::UnknownStrategy { id } => {
                write!(f, "unknown algorithm id '{}'", id)
            }
        }
    }
}

impl std::error::Error for VisualizerError {}
