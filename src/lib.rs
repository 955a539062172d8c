//! # Introduction
//!
//! algotty animates classic sorting and searching algorithms as a bar
//! chart in the terminal. An instrumented executor runs the algorithm
//! step by step, counting every comparison and swap and emitting a
//! time-paced frame after each one; a ratatui TUI renders the frames.
//!
//! ## Animation pipeline
//!
//! ```text
//! Dataset → Strategy → Executor primitives → StepFrames → FrameSink → TUI
//! ```
//!
//! 1. [`engine`] — the [`engine::Executor`] with its counted, paced,
//!    cancellable `compare`/`probe`/`swap` primitives, the strategy
//!    registry, and the [`engine::FrameSink`] renderer port.
//! 2. [`dataset`] — random dataset and target generation.
//! 3. [`catalog`] — static display metadata for the algorithm menu.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Sorting: bubble, insertion, selection, merge, quick, heap.
//! Searching: linear, binary, interpolation, jump, exponential.

pub mod catalog;
pub mod dataset;
pub mod engine;
pub mod ui;
