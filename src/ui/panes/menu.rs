//! Algorithm selection menu

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::catalog::AlgorithmInfo;
use crate::ui::theme::DEFAULT_THEME;

pub fn render_menu_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    entries: &[&AlgorithmInfo],
    selected: usize,
) {
    let lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .map(|(i, info)| {
            let (marker, style) = if i == selected {
                (
                    "> ",
                    Style::default()
                        .fg(DEFAULT_THEME.accent)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default().fg(DEFAULT_THEME.fg))
            };
            Line::from(vec![
                Span::styled(marker, style),
                Span::styled(info.name, style),
                Span::styled(
                    format!("  {}", info.time),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title))
            .border_style(Style::default().fg(DEFAULT_THEME.border_focused)),
    );
    frame.render_widget(paragraph, area);
}
