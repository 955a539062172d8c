//! Status bar rendering with keybindings and run state

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::DEFAULT_THEME;

pub fn render_status_bar(frame: &mut Frame, area: Rect, message: &str, running: bool) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // Left side: status message
    let left = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", message),
        Style::default()
            .bg(DEFAULT_THEME.status_bg)
            .fg(DEFAULT_THEME.fg),
    )))
    .style(Style::default().bg(DEFAULT_THEME.status_bg))
    .alignment(Alignment::Left);
    frame.render_widget(left, layout[0]);

    // Right side: keybinds
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let mut spans = vec![
        Span::styled(" ↑/↓ ", key_style),
        Span::styled(" select ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ↵ ", key_style),
        Span::styled(" run ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ⇥ ", key_style),
        Span::styled(" mode ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" r/t ", key_style),
        Span::styled(" data/target ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" +/- ", key_style),
        Span::styled(" speed ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" c ", key_style),
        Span::styled(" cancel ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    if running {
        spans.push(Span::styled("│", sep_style));
        spans.push(Span::styled(
            " ▶ RUNNING ",
            Style::default()
                .bg(DEFAULT_THEME.compare)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right, layout[1]);
}
