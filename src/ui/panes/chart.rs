//! Bar chart pane
//!
//! Renders the current [`StepFrame`] as vertical bars: resting bars in
//! blue, the frame's highlight indices in its highlight color, and the
//! found index in green regardless of later frames, matching the engine's
//! color tags.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::engine::StepFrame;
use crate::ui::theme::DEFAULT_THEME;

pub fn render_chart_pane(frame: &mut Frame, area: Rect, step: &StepFrame) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Data ")
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if step.data.is_empty() {
        let empty = Paragraph::new(Line::from("no data loaded"))
            .style(Style::default().fg(DEFAULT_THEME.comment))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let n = step.data.len() as u16;
    let gap: u16 = 1;
    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width.saturating_sub(n.saturating_sub(1) * gap) / n).max(1);

    let bars: Vec<Bar> = step
        .data
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let color = if step.found == Some(i) {
                DEFAULT_THEME.success
            } else if step.highlights.contains(&i) {
                DEFAULT_THEME.highlight_color(step.highlight)
            } else {
                DEFAULT_THEME.bar
            };
            Bar::default()
                .value((*v).max(0) as u64)
                .text_value(v.to_string())
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(gap);

    frame.render_widget(chart, area);
}
