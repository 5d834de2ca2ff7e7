//! Input bar, key hints and the notice line.

use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::helpers::truncate_to_width;
use super::theme::Palette;
use crate::app::{App, Focus, NoticeLevel};
use crate::input::InputField;

pub const TEXT_PLACEHOLDER: &str = "What needs doing?";
const PRIORITY_FIELD_WIDTH: u16 = 18;

/// Text field and priority field side by side.
pub fn render_input_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let [text_area, priority_area] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(PRIORITY_FIELD_WIDTH)])
            .areas(area);

    let default_priority = app.manager.preferences().default_priority;
    render_field(
        frame,
        text_area,
        " New Task ",
        &app.text_input,
        TEXT_PLACEHOLDER.to_string(),
        app.focus == Focus::TextField,
        palette,
    );
    render_field(
        frame,
        priority_area,
        " Priority 1-5 ",
        &app.priority_input,
        format!("{} (default)", default_priority.level()),
        app.focus == Focus::PriorityField,
        palette,
    );
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    field: &InputField,
    placeholder: String,
    focused: bool,
    palette: &Palette,
) {
    let block = Block::default()
        .title(Span::styled(title.to_string(), palette.dim_style()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style(focused));
    let inner = block.inner(area);
    let width = inner.width as usize;

    let content = if field.is_empty() {
        Span::styled(
            truncate_to_width(&placeholder, width),
            palette.dim_style().add_modifier(Modifier::ITALIC),
        )
    } else {
        // Keep the end of long input in view
        let value = field.value();
        let shown: String = if field.width() >= width {
            let skip = value.chars().count().saturating_sub(width.saturating_sub(1));
            value.chars().skip(skip).collect()
        } else {
            value.to_string()
        };
        Span::styled(shown, Style::default().fg(palette.text))
    };
    frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);

    if focused && inner.width > 0 {
        let offset = (field.width() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(inner.x + offset, inner.y));
    }
}

/// Key hints for whatever has focus.
pub fn build_contextual_keybinds(app: &App, palette: &Palette) -> Line<'static> {
    let pairs: &[(&str, &str)] = if app.confirming_clear {
        &[("y", "confirm"), ("n/Esc", "cancel")]
    } else if app.focus.is_field() {
        &[
            ("Enter", "add"),
            ("Tab", "next field"),
            ("Esc", "list"),
            ("Ctrl+S", "stats"),
            ("Ctrl+L", "clear all"),
            ("Ctrl+C", "quit"),
        ]
    } else {
        &[
            ("↑↓", "move"),
            ("Space", "complete"),
            ("d", "delete"),
            ("C", "clear all"),
            ("a", "add"),
            ("s", "stats"),
            ("t", "theme"),
            ("q", "quit"),
        ]
    };

    let mut spans = vec![Span::raw(" ")];
    for (key, action) in pairs {
        spans.push(Span::styled(key.to_string(), palette.key_style()));
        spans.push(Span::styled(format!(" {}  ", action), palette.dim_style()));
    }
    Line::from(spans)
}

pub fn render_keybinds(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    frame.render_widget(Paragraph::new(build_contextual_keybinds(app, palette)), area);
}

/// The notice for the last blocked action, if still showing.
pub fn render_notice(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(notice) = &app.notice else {
        return;
    };
    let color = match notice.level {
        NoticeLevel::Info => palette.info,
        NoticeLevel::Warning => palette.warning,
    };
    let line = Line::from(Span::styled(
        format!(" {}", notice.message),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
