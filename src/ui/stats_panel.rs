//! Detailed statistics panel, toggled with `s` / Ctrl+S.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::task_list::priority_label;
use super::theme::Palette;
use crate::stats::StatsReport;

/// Lines of the panel, computed from `report`.
pub fn stats_lines(report: &StatsReport, palette: &Palette) -> Vec<Line<'static>> {
    let stats = &report.stats;
    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(
                format!(" {}: ", label),
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(value, Style::default().fg(palette.accent)),
        ])
    };

    let mut lines = vec![
        row("Total Tasks", stats.total.to_string()),
        row("Completed", stats.completed.to_string()),
        row("Pending", stats.pending.to_string()),
        row("High Priority", stats.high_priority.to_string()),
        row("Completion Rate", format!("{}%", stats.completion_rate)),
        Line::from(""),
        Line::from(Span::styled(
            " Tasks by Priority:",
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
    ];

    for entry in &report.by_priority {
        let level = entry.priority.level();
        lines.push(Line::from(Span::styled(
            format!(
                "  Priority {} ({}): {} tasks",
                level,
                priority_label(level as i64),
                entry.count
            ),
            Style::default().fg(if entry.priority.is_high() {
                palette.high_priority
            } else {
                palette.text
            }),
        )));
    }
    lines
}

pub fn render_stats_panel(frame: &mut Frame, area: Rect, report: &StatsReport, palette: &Palette) {
    let block = Block::default()
        .title(Span::styled(
            " Statistics ",
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style(false));
    frame.render_widget(Paragraph::new(stats_lines(report, palette)).block(block), area);
}
