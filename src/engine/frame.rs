//! Frame snapshots and the renderer port
//!
//! The executor never draws anything itself. Each primitive call produces a
//! [`StepFrame`] — a self-contained snapshot of the dataset, the indices
//! touched by the step, and the operation counters — and hands it to a
//! [`FrameSink`]. The TUI renders frames as a bar chart; tests record them.

use std::sync::mpsc::Sender;

/// Element type of the dataset.
pub type Value = i64;

/// Color tag for the highlighted bars of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// No highlight (idle frames, not-found / cancelled terminal frames)
    Neutral,
    /// Elements being compared, or probed against the target
    Compare,
    /// Elements just swapped or written into place
    Swap,
    /// A position just eliminated from the search range
    Eliminate,
    /// Sorted region or found element
    Done,
}

/// Where in the run lifecycle a frame was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Emitted outside a run (after `load_data` / `set_target`)
    Idle,
    /// Emitted by a primitive during a run
    Running,
    /// Terminal frame of a successful sort
    Sorted,
    /// Terminal frame of a successful search
    Found,
    /// Terminal frame of a search that exhausted the dataset
    NotFound,
    /// Terminal frame of a cancelled run
    Cancelled,
}

/// Operation counters for a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub comparisons: u64,
    pub swaps: u64,
}

/// One rendered snapshot of the dataset plus highlights and counters.
///
/// Frames own their data so they can cross threads; datasets are small
/// (tens of elements) and cloned per step.
#[derive(Debug, Clone)]
pub struct StepFrame {
    pub data: Vec<Value>,
    pub highlights: Vec<usize>,
    pub highlight: Highlight,
    pub stats: Stats,
    pub target: Option<Value>,
    pub found: Option<usize>,
    pub phase: Phase,
}

impl StepFrame {
    /// Frame for a dataset at rest, before any run has started.
    pub fn idle(data: Vec<Value>, target: Option<Value>) -> Self {
        StepFrame {
            data,
            highlights: Vec::new(),
            highlight: Highlight::Neutral,
            stats: Stats::default(),
            target,
            found: None,
            phase: Phase::Idle,
        }
    }
}

/// Renderer port: receives one frame per executor step.
///
/// Implementations must be synchronous and must not call back into the
/// executor; the executor handles its own pacing after `render` returns.
pub trait FrameSink {
    fn render(&mut self, frame: &StepFrame);
}

/// Discards frames. Useful when only the algorithm result matters.
impl FrameSink for () {
    fn render(&mut self, _frame: &StepFrame) {}
}

/// Forwards frames to another thread; send failures are ignored so a run
/// can finish even after the receiver is gone.
impl FrameSink for Sender<StepFrame> {
    fn render(&mut self, frame: &StepFrame) {
        let _ = self.send(frame.clone());
    }
}
