//! Stats pane: operation counters, target value and run outcome

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::engine::{Phase, StepFrame};
use crate::ui::theme::DEFAULT_THEME;

pub fn render_stats_pane(frame: &mut Frame, area: Rect, step: &StepFrame, pacing_ms: u64) {
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default().fg(DEFAULT_THEME.fg);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Comparisons: ", label),
            Span::styled(step.stats.comparisons.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Swaps:       ", label),
            Span::styled(step.stats.swaps.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Pacing:      ", label),
            Span::styled(format!("{} ms", pacing_ms), value),
        ]),
    ];

    if let Some(target) = step.target {
        lines.push(Line::from(vec![
            Span::styled("Target:      ", label),
            Span::styled(
                target.to_string(),
                Style::default().fg(DEFAULT_THEME.accent),
            ),
        ]));
    }

    let outcome = match step.phase {
        Phase::Sorted => Some(("Sorted!".to_string(), DEFAULT_THEME.success)),
        Phase::Found => match step.found {
            Some(i) => Some((format!("Found at index {}", i), DEFAULT_THEME.success)),
            None => None,
        },
        Phase::NotFound => Some(("Not found".to_string(), DEFAULT_THEME.error)),
        Phase::Cancelled => Some(("Cancelled".to_string(), DEFAULT_THEME.error)),
        Phase::Idle | Phase::Running => None,
    };
    if let Some((text, color)) = outcome {
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Stats ")
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
    );
    frame.render_widget(paragraph, area);
}
