use ratatui::style::Color;

use crate::engine::Highlight;

pub struct Theme {
    pub fg: Color,
    pub bar: Color,       // Resting bars (blue)
    pub compare: Color,   // Comparison / probe highlight (orange)
    pub swap: Color,      // Swap / write highlight (red)
    pub eliminate: Color, // Discarded search range (red)
    pub success: Color,   // Sorted / found (green)
    pub error: Color,
    pub accent: Color, // Target marker and selected menu entry
    pub comment: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    bar: Color::Rgb(52, 152, 219),      // Blue
    compare: Color::Rgb(243, 156, 18),  // Orange
    swap: Color::Rgb(231, 76, 60),      // Red
    eliminate: Color::Rgb(231, 76, 60), // Red
    success: Color::Rgb(46, 204, 113),  // Green
    error: Color::Rgb(243, 139, 168),
    accent: Color::Rgb(249, 226, 175), // Yellow
    comment: Color::Rgb(108, 112, 134),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
};

impl Theme {
    /// Bar color for a frame's highlight tag.
    pub fn highlight_color(&self, highlight: Highlight) -> Color {
        match highlight {
            Highlight::Neutral => self.bar,
            Highlight::Compare => self.compare,
            Highlight::Swap => self.swap,
            Highlight::Eliminate => self.eliminate,
            Highlight::Done => self.success,
        }
    }
}
