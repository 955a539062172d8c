//! Step-wise algorithm animation engine
//!
//! This module provides the core of the visualizer:
//! - [`executor`]: the instrumented [`Executor`] with its counted, paced,
//!   cancellable primitives
//! - [`strategy`]: the id registry of sorting and searching algorithms
//! - [`sorts`] / [`searches`]: the strategy step patterns
//! - [`frame`]: frame snapshots and the [`FrameSink`] renderer port
//! - [`errors`]: the caller-facing error taxonomy
//!
//! # Execution model
//!
//! A run is a single logical thread of control: the strategy calls a
//! primitive, the primitive counts the operation, emits one frame, sleeps
//! for the pacing interval, checks for cancellation, and returns. Frames
//! and counter updates therefore arrive in strict program order, and
//! cancellation is observed only at these boundaries.

pub mod errors;
pub mod executor;
pub mod frame;
mod searches;
mod sorts;
pub mod strategy;

pub use errors::VisualizerError;
pub use executor::{ExecutionState, Executor, Outcome, RunControls, DEFAULT_PACING_MS};
pub use frame::{FrameSink, Highlight, Phase, Stats, StepFrame, Value};
pub use strategy::{SearchAlgorithm, SortAlgorithm, Strategy};
