//! Instrumented algorithm executor
//!
//! The [`Executor`] owns the dataset for the duration of a run and provides
//! the only sanctioned way to observe or mutate it: the `compare`, `probe`,
//! `swap` and `place` primitives. Every primitive updates the operation
//! counters, emits exactly one frame through the [`FrameSink`], sleeps for
//! the configured pacing interval, and then observes the cancellation flag.
//! Strategies therefore cannot mutate the dataset without the step being
//! counted and rendered first, and a cancelled run unwinds at the next
//! primitive boundary.
//!
//! Pacing and cancellation live behind a cloneable [`RunControls`] handle
//! (plain atomics), so a UI thread can steer a run that is executing on a
//! worker thread. Independent executors share no state.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::engine::errors::VisualizerError;
use crate::engine::frame::{FrameSink, Highlight, Phase, Stats, StepFrame, Value};
use crate::engine::strategy::Strategy;
use crate::engine::{searches, sorts};

/// Default inter-step delay in milliseconds.
pub const DEFAULT_PACING_MS: u64 = 100;

/// Marker error for a run interrupted by [`RunControls::cancel`].
///
/// Primitives return it after their suspension once the cancel flag is set;
/// strategies propagate it with `?` and never continue past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupted;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Sort strategy ran to completion; the dataset is ascending
    Sorted,
    /// Search strategy located the target at this index
    Found(usize),
    /// Search strategy exhausted the dataset without a match
    NotFound,
    /// The run was cancelled at a primitive boundary
    Cancelled,
}

/// Queryable snapshot of a run's progress.
///
/// Counters only increase during a run and are frozen once `running`
/// turns false; the next `run`/`load_data`/`set_target` resets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionState {
    pub comparisons: u64,
    pub swaps: u64,
    pub found: Option<usize>,
    pub running: bool,
}

/// Shared handle for steering an in-flight run from another thread.
///
/// `set_pacing` takes effect at the next suspension and never shortens an
/// in-flight sleep. `cancel` is cooperative: the current primitive still
/// completes its suspension before the run unwinds.
#[derive(Debug, Clone)]
pub struct RunControls {
    cancelled: Arc<AtomicBool>,
    pacing_ms: Arc<AtomicU64>,
}

impl RunControls {
    fn new(pacing_ms: u64) -> Self {
        RunControls {
            cancelled: Arc::new(AtomicBool::new(false)),
            pacing_ms: Arc::new(AtomicU64::new(pacing_ms)),
        }
    }

    /// Request early termination of the current run.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Change the inter-step delay for subsequent primitive calls.
    pub fn set_pacing(&self, ms: u64) {
        self.pacing_ms.store(ms, Ordering::Relaxed);
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms.load(Ordering::Relaxed))
    }

    /// Clear a stale cancel request before a new run starts.
    fn reset(&self) {
        self.cancelled.store(false, Ordering::Relaxed);
    }
}

/// The step-wise algorithm animation driver.
///
/// One executor animates one dataset; a sorting and a searching executor
/// can run concurrently without coordination. Exactly one run may be
/// active per instance.
pub struct Executor<S: FrameSink> {
    data: Vec<Value>,
    target: Option<Value>,
    stats: Stats,
    found: Option<usize>,
    running: bool,
    controls: RunControls,
    sink: S,
}

impl<S: FrameSink> Executor<S> {
    /// Create an executor over `data`, emitting frames into `sink`.
    pub fn new(data: Vec<Value>, sink: S) -> Self {
        Executor {
            data,
            target: None,
            stats: Stats::default(),
            found: None,
            running: false,
            controls: RunControls::new(DEFAULT_PACING_MS),
            sink,
        }
    }

    /// Replace the dataset and reset all run state. Emits an idle frame.
    /// No-op while a run is active.
    pub fn load_data(&mut self, values: Vec<Value>) {
        if self.running {
            return;
        }
        self.data = values;
        self.reset_run_state();
        self.emit(&[], Highlight::Neutral, Phase::Idle);
    }

    /// Set the value to search for and reset all run state. Emits an idle
    /// frame. No-op while a run is active.
    pub fn set_target(&mut self, value: Value) {
        if self.running {
            return;
        }
        self.target = Some(value);
        self.reset_run_state();
        self.emit(&[], Highlight::Neutral, Phase::Idle);
    }

    /// Change the inter-step delay for subsequent primitive calls.
    pub fn set_pacing(&self, ms: u64) {
        self.controls.set_pacing(ms);
    }

    /// Request cooperative cancellation of the current run.
    pub fn cancel(&self) {
        self.controls.cancel();
    }

    /// Handle for cancelling or re-pacing this executor from another thread.
    pub fn controls(&self) -> RunControls {
        self.controls.clone()
    }

    /// Snapshot of the run's progress record.
    pub fn state(&self) -> ExecutionState {
        ExecutionState {
            comparisons: self.stats.comparisons,
            swaps: self.stats.swaps,
            found: self.found,
            running: self.running,
        }
    }

    pub fn data(&self) -> &[Value] {
        &self.data
    }

    pub fn target(&self) -> Option<Value> {
        self.target
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Run the strategy registered under `strategy_id` to completion.
    ///
    /// Errors are reported synchronously and leave the state untouched:
    /// [`VisualizerError::UnknownStrategy`] for a bad id,
    /// [`VisualizerError::AlreadyRunning`] for an overlapping invocation,
    /// [`VisualizerError::NoTarget`] for a search without a target.
    ///
    /// On success the returned [`Outcome`] matches the terminal frame that
    /// was emitted: all bars green for a sort, the found index green or a
    /// not-found frame for a search, and a cancelled frame if the run was
    /// interrupted. An empty dataset is a trivial success, never an error.
    pub fn run(&mut self, strategy_id: &str) -> Result<Outcome, VisualizerError> {
        let strategy = Strategy::parse(strategy_id)?;
        if self.running {
            return Err(VisualizerError::AlreadyRunning);
        }
        if strategy.is_search() && self.target.is_none() {
            return Err(VisualizerError::NoTarget);
        }

        self.reset_run_state();
        self.running = true;
        let outcome = match self.dispatch(strategy) {
            Ok(outcome) => outcome,
            Err(Interrupted) => Outcome::Cancelled,
        };
        self.running = false;
        self.emit_terminal(outcome);
        Ok(outcome)
    }

    fn reset_run_state(&mut self) {
        self.stats = Stats::default();
        self.found = None;
        self.controls.reset();
    }

    fn dispatch(&mut self, strategy: Strategy) -> Result<Outcome, Interrupted> {
        match strategy {
            Strategy::Sort(algo) => {
                sorts::run(self, algo)?;
                Ok(Outcome::Sorted)
            }
            Strategy::Search(algo) => {
                // Validated in `run`; an unset target degrades to not-found.
                let Some(target) = self.target else {
                    return Ok(Outcome::NotFound);
                };
                match searches::run(self, algo, target)? {
                    Some(index) => {
                        self.found = Some(index);
                        Ok(Outcome::Found(index))
                    }
                    None => Ok(Outcome::NotFound),
                }
            }
        }
    }

    fn emit_terminal(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Sorted => {
                let all: Vec<usize> = (0..self.data.len()).collect();
                self.emit(&all, Highlight::Done, Phase::Sorted);
            }
            Outcome::Found(index) => self.emit(&[index], Highlight::Done, Phase::Found),
            Outcome::NotFound => self.emit(&[], Highlight::Neutral, Phase::NotFound),
            Outcome::Cancelled => self.emit(&[], Highlight::Neutral, Phase::Cancelled),
        }
    }

    // ---- primitives (crate-internal: only strategies may drive them) ----

    /// Compare `data[i]` and `data[j]`. Counts a comparison, renders both
    /// indices, paces, then returns whether `data[i] > data[j]`.
    pub(crate) fn compare(&mut self, i: usize, j: usize) -> Result<bool, Interrupted> {
        self.stats.comparisons += 1;
        self.emit(&[i, j], Highlight::Compare, Phase::Running);
        self.checkpoint()?;
        Ok(self.data[i] > self.data[j])
    }

    /// Probe `data[i]` against the target. Counts a comparison, renders the
    /// index, paces, then returns whether it matched.
    pub(crate) fn probe(&mut self, i: usize) -> Result<bool, Interrupted> {
        self.stats.comparisons += 1;
        self.emit(&[i], Highlight::Compare, Phase::Running);
        self.checkpoint()?;
        Ok(Some(self.data[i]) == self.target)
    }

    /// Swap two elements in place. Counts a swap, renders both indices,
    /// then paces.
    pub(crate) fn swap(&mut self, i: usize, j: usize) -> Result<(), Interrupted> {
        self.data.swap(i, j);
        self.stats.swaps += 1;
        self.emit(&[i, j], Highlight::Swap, Phase::Running);
        self.checkpoint()
    }

    /// Write `value` at index `k` (merge's direct assignment). Counts a
    /// swap, renders the index, then paces.
    pub(crate) fn place(&mut self, k: usize, value: Value) -> Result<(), Interrupted> {
        self.data[k] = value;
        self.stats.swaps += 1;
        self.emit(&[k], Highlight::Swap, Phase::Running);
        self.checkpoint()
    }

    /// Paced, uncounted step: renders one index (range eliminations, jump
    /// and doubling scans) and observes cancellation like a primitive.
    pub(crate) fn scan(&mut self, i: usize, highlight: Highlight) -> Result<(), Interrupted> {
        self.emit(&[i], highlight, Phase::Running);
        self.checkpoint()
    }

    /// Unpaced rendering hint piggybacking on the preceding primitive's
    /// suspension (the red flash after a missed probe).
    pub(crate) fn mark(&mut self, i: usize, highlight: Highlight) {
        self.emit(&[i], highlight, Phase::Running);
    }

    /// Count a comparison that happens against copied-out values (merge
    /// buffers) rather than dataset indices; renders no frame of its own.
    pub(crate) fn note_comparison(&mut self) {
        self.stats.comparisons += 1;
    }

    /// Read an element without counting a comparison. Used for direction
    /// decisions the probes have already paid for.
    pub(crate) fn value(&self, i: usize) -> Value {
        self.data[i]
    }

    fn emit(&mut self, highlights: &[usize], highlight: Highlight, phase: Phase) {
        self.sink.render(&StepFrame {
            data: self.data.clone(),
            highlights: highlights.to_vec(),
            highlight,
            stats: self.stats,
            target: self.target,
            found: self.found,
            phase,
        });
    }

    /// Suspend for the pacing interval, then surface a pending cancel.
    fn checkpoint(&self) -> Result<(), Interrupted> {
        let pacing = self.controls.pacing();
        if !pacing.is_zero() {
            thread::sleep(pacing);
        }
        if self.controls.is_cancelled() {
            Err(Interrupted)
        } else {
            Ok(())
        }
    }
}
