//! TUI pane rendering modules
//!
//! - [`chart`]: the dataset as a bar chart with per-step highlights
//! - [`stats`]: operation counters, target and run outcome
//! - [`menu`]: algorithm selection list with complexity labels
//! - [`status`]: status bar with keybindings and run state

pub mod chart;
pub mod menu;
pub mod stats;
pub mod status;

pub use chart::render_chart_pane;
pub use menu::render_menu_pane;
pub use stats::render_stats_pane;
pub use status::render_status_bar;
