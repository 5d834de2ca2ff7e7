//! Clear-all confirmation overlay.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::helpers::centered_rect;
use super::theme::Palette;

pub const CONFIRM_CLEAR_MESSAGE: &str = "Are you sure you want to delete all tasks?";
const DIALOG_WIDTH: u16 = 50;
const DIALOG_HEIGHT: u16 = 7;

/// Render the dialog centered over `area`.
pub fn render_confirm_dialog(frame: &mut Frame, area: Rect, task_count: usize, palette: &Palette) {
    let dialog_area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            " Clear All ",
            Style::default()
                .fg(palette.high_priority)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.high_priority))
        .style(Style::default().bg(palette.dialog_background).fg(palette.text));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            CONFIRM_CLEAR_MESSAGE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} tasks will be removed.", task_count),
            palette.dim_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", palette.key_style()),
            Span::styled(": yes   ", palette.dim_style()),
            Span::styled("n", palette.key_style()),
            Span::styled(": no", palette.dim_style()),
        ]),
    ];

    let content = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(content, dialog_area);
}
