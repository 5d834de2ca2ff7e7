//! Title bar and the animated counter row.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::theme::Palette;
use crate::app::App;

pub const APP_TITLE: &str = "Task Manager";

/// Title on the left, theme switch on the right.
pub fn render_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(palette.border_style(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(28)]).areas(inner);

    let title = Line::from(vec![
        Span::styled(
            format!(" {}", APP_TITLE),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} tasks max", app.manager.preferences().max_tasks),
            palette.dim_style(),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), left);

    let toggle = Line::from(vec![
        Span::styled("Ctrl+T ", palette.key_style()),
        Span::styled(
            format!("[{}] ", app.theme.toggle_label()),
            Style::default().fg(palette.text),
        ),
    ]);
    frame.render_widget(Paragraph::new(toggle).alignment(Alignment::Right), right);
}

/// Total, Completed, High Priority and the completion rate.
///
/// The first three show the animated values; the rate is read directly.
pub fn render_counters(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let rate = app.manager.stats().completion_rate;
    let cells = [
        ("Total", app.counters.total.displayed().to_string(), palette.accent),
        (
            "Completed",
            app.counters.completed.displayed().to_string(),
            palette.completed,
        ),
        (
            "High Priority",
            app.counters.high_priority.displayed().to_string(),
            palette.high_priority,
        ),
        ("Completion", format!("{}%", rate), palette.text),
    ];

    let areas = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
    for ((label, value, color), cell) in cells.into_iter().zip(areas.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.border_style(false));
        let line = Line::from(vec![
            Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", label), palette.dim_style()),
        ]);
        frame.render_widget(
            Paragraph::new(line).alignment(Alignment::Center).block(block),
            *cell,
        );
    }
}
