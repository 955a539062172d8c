//! Main TUI application state and logic
//!
//! The app owns one dataset per visualizer family and composes the
//! executors explicitly: starting a run spawns a worker thread with a
//! fresh [`Executor`] whose frames arrive over a channel, while the UI
//! thread keeps polling input and can cancel or re-pace the run through
//! its [`RunControls`] handle.

use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::catalog::{self, Family};
use crate::dataset;
use crate::engine::{Executor, Outcome, RunControls, StepFrame, Value, VisualizerError};

/// Lower and upper bounds for the pacing interval, in milliseconds.
const MIN_PACING_MS: u64 = 5;
const MAX_PACING_MS: u64 = 1600;

/// A run executing on a worker thread.
struct ActiveRun {
    controls: RunControls,
    frames: Receiver<StepFrame>,
    handle: Option<JoinHandle<Result<Outcome, VisualizerError>>>,
}

/// The main application state
pub struct App {
    /// Which visualizer family is active
    mode: Family,

    /// Selection index within the active family's menu
    selected: usize,

    /// Dataset for the sorting visualizer (kept across runs, so a sorted
    /// result stays sorted until regenerated)
    sort_data: Vec<Value>,

    /// Sorted unique dataset for the searching visualizer
    search_data: Vec<Value>,

    /// Current search target
    target: Value,

    /// Most recent frame, also the idle view between runs
    frame: StepFrame,

    /// Inter-step delay applied to new and in-flight runs
    pacing_ms: u64,

    data_size: usize,
    max_value: Value,

    /// The in-flight run, if any
    run: Option<ActiveRun>,

    status_message: String,
    should_quit: bool,
}

impl App {
    pub fn new(data_size: usize, max_value: Value, pacing_ms: u64) -> Self {
        let sort_data = dataset::random_values(data_size, max_value);
        let search_data = dataset::sorted_unique(data_size, max_value);
        let target = dataset::random_target(&search_data, max_value);
        let frame = StepFrame::idle(sort_data.clone(), None);

        App {
            mode: Family::Sorting,
            selected: 0,
            sort_data,
            search_data,
            target,
            frame,
            pacing_ms: pacing_ms.clamp(MIN_PACING_MS, MAX_PACING_MS),
            data_size,
            max_value,
            run: None,
            status_message: String::from("Ready!"),
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.drain_frames();

            // Poll with a timeout so frames keep flowing while idle on input
            if event::poll(Duration::from_millis(33))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
            .split(main_chunks[0]);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(8)])
            .split(columns[0]);

        super::panes::render_chart_pane(frame, left_rows[0], &self.frame);
        super::panes::render_stats_pane(frame, left_rows[1], &self.frame, self.pacing_ms);

        let title = match self.mode {
            Family::Sorting => "Sorting",
            Family::Searching => "Searching",
        };
        let entries = catalog::family(self.mode);
        super::panes::render_menu_pane(frame, columns[1], title, &entries, self.selected);

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.run.is_some(),
        );
    }

    /// Pull every frame the worker has produced since the last tick.
    fn drain_frames(&mut self) {
        let mut finished = false;
        if let Some(active) = &self.run {
            loop {
                match active.frames.try_recv() {
                    Ok(frame) => self.frame = frame,
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        finished = true;
                        break;
                    }
                }
            }
        }
        if finished {
            self.finish_run();
        }
    }

    /// Join the worker and report its outcome.
    fn finish_run(&mut self) {
        let Some(mut active) = self.run.take() else {
            return;
        };
        let Some(handle) = active.handle.take() else {
            return;
        };
        match handle.join() {
            Ok(Ok(outcome)) => {
                self.status_message = match outcome {
                    Outcome::Sorted => String::from("Sorted!"),
                    Outcome::Found(i) => format!("Found target at index {}", i),
                    Outcome::NotFound => String::from("Target not found"),
                    Outcome::Cancelled => String::from("Run cancelled"),
                };
                // The terminal frame carries the final dataset; keep it so
                // the next run starts from what is on screen.
                if self.mode == Family::Sorting {
                    self.sort_data = self.frame.data.clone();
                }
            }
            Ok(Err(e)) => self.status_message = format!("Error: {}", e),
            Err(_) => self.status_message = String::from("Run thread panicked"),
        }
    }

    /// Spawn the selected algorithm on a worker thread.
    fn start_run(&mut self) {
        if self.run.is_some() {
            self.status_message = String::from("A run is already in progress");
            return;
        }
        let entries = catalog::family(self.mode);
        let Some(info) = entries.get(self.selected).copied() else {
            return;
        };

        let data = match self.mode {
            Family::Sorting => self.sort_data.clone(),
            Family::Searching => self.search_data.clone(),
        };
        let (tx, rx) = mpsc::channel();
        let mut executor = Executor::new(data, tx);
        executor.set_pacing(self.pacing_ms);
        if self.mode == Family::Searching {
            executor.set_target(self.target);
        }
        let controls = executor.controls();
        let id = info.id;
        let handle = thread::spawn(move || executor.run(id));

        self.run = Some(ActiveRun {
            controls,
            frames: rx,
            handle: Some(handle),
        });
        self.status_message = format!("Running {}...", info.name);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                if let Some(active) = &self.run {
                    active.controls.cancel();
                }
                self.should_quit = true;
            }
            KeyCode::Tab => {
                if self.run.is_some() {
                    self.status_message = String::from("Finish or cancel the run first");
                    return;
                }
                self.mode = match self.mode {
                    Family::Sorting => Family::Searching,
                    Family::Searching => Family::Sorting,
                };
                self.selected = 0;
                self.show_idle();
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                let count = catalog::family(self.mode).len();
                if self.selected + 1 < count {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => {
                self.start_run();
            }
            KeyCode::Char('r') => {
                if self.run.is_some() {
                    self.status_message = String::from("Finish or cancel the run first");
                    return;
                }
                match self.mode {
                    Family::Sorting => {
                        self.sort_data = dataset::random_values(self.data_size, self.max_value);
                    }
                    Family::Searching => {
                        self.search_data = dataset::sorted_unique(self.data_size, self.max_value);
                        self.target = dataset::random_target(&self.search_data, self.max_value);
                    }
                }
                self.show_idle();
                self.status_message = String::from("New dataset generated");
            }
            KeyCode::Char('t') => {
                if self.mode != Family::Searching || self.run.is_some() {
                    return;
                }
                self.target = dataset::random_target(&self.search_data, self.max_value);
                self.show_idle();
                self.status_message = format!("New target: {}", self.target);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.set_pacing((self.pacing_ms / 2).max(MIN_PACING_MS));
            }
            KeyCode::Char('-') => {
                self.set_pacing((self.pacing_ms * 2).min(MAX_PACING_MS));
            }
            KeyCode::Char('c') => {
                if let Some(active) = &self.run {
                    active.controls.cancel();
                    self.status_message = String::from("Cancelling...");
                }
            }
            _ => {}
        }
    }

    /// Apply a new pacing interval, including to an in-flight run.
    fn set_pacing(&mut self, ms: u64) {
        self.pacing_ms = ms;
        if let Some(active) = &self.run {
            active.controls.set_pacing(ms);
        }
        self.status_message = format!("Pacing: {} ms", ms);
    }

    /// Reset the displayed frame to the active dataset at rest.
    fn show_idle(&mut self) {
        self.frame = match self.mode {
            Family::Sorting => StepFrame::idle(self.sort_data.clone(), None),
            Family::Searching => StepFrame::idle(self.search_data.clone(), Some(self.target)),
        };
    }
}
