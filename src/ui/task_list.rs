//! The task list.
//!
//! Each task takes two rows: checkbox and text, then the priority label and
//! creation date. The selected row also shows its actions.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::helpers::truncate_to_width;
use super::theme::Palette;
use crate::app::{App, Focus};
use crate::models::{format_priority_level, Task, UNKNOWN_PRIORITY_LABEL};

const SELECTED_MARKER: &str = "▶ ";
const SELECTED_MARKER_WIDTH: usize = 2;
/// Marker, checkbox and padding ahead of the task text
const TEXT_INDENT: usize = 6;

pub const EMPTY_LIST_MESSAGE: &str = "No tasks yet. Type one below and press Enter.";

/// Label for a priority level, "Unknown" outside 1..=5.
pub fn priority_label(level: i64) -> &'static str {
    format_priority_level(level).unwrap_or(UNKNOWN_PRIORITY_LABEL)
}

/// The metadata row: `Priority: High | Created: 3/14/2026`.
pub fn metadata_line(task: &Task) -> String {
    format!(
        "Priority: {} | Created: {}",
        priority_label(task.priority.level() as i64),
        task.date_created
    )
}

fn task_item<'a>(
    task: &'a Task,
    selected: bool,
    text_width: usize,
    palette: &Palette,
) -> ListItem<'a> {
    let checkbox = if task.completed { "[x] " } else { "[ ] " };

    let mut text_style = Style::default().fg(palette.text).add_modifier(Modifier::BOLD);
    if task.is_high_priority() {
        text_style = text_style.fg(palette.high_priority);
    }
    if task.completed {
        text_style = Style::default()
            .fg(palette.dim)
            .add_modifier(Modifier::CROSSED_OUT);
    }

    let marker = if task.is_high_priority() { "! " } else { "  " };
    let first = Line::from(vec![
        Span::styled(marker, Style::default().fg(palette.high_priority)),
        Span::styled(
            checkbox,
            Style::default().fg(if task.completed {
                palette.completed
            } else {
                palette.dim
            }),
        ),
        Span::styled(truncate_to_width(&task.text, text_width), text_style),
    ]);

    let mut second = vec![
        Span::raw(" ".repeat(TEXT_INDENT)),
        Span::styled(metadata_line(task), palette.dim_style()),
    ];
    if selected {
        let toggle = if task.completed { "Undo" } else { "Complete" };
        second.extend([
            Span::raw("   "),
            Span::styled("Space", palette.key_style()),
            Span::styled(format!(" {}  ", toggle), Style::default().fg(palette.text)),
            Span::styled("d", palette.key_style()),
            Span::styled(" Delete", Style::default().fg(palette.text)),
        ]);
    }

    ListItem::new(Text::from(vec![first, Line::from(second)]))
}

pub fn render_task_list(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let focused = app.focus == Focus::TaskList;
    let tasks = app.manager.tasks();

    let block = Block::default()
        .title(Span::styled(
            format!(" Tasks ({}) ", tasks.len()),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style(focused));

    if tasks.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            EMPTY_LIST_MESSAGE,
            palette.dim_style(),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let text_width = inner_width.saturating_sub(SELECTED_MARKER_WIDTH + TEXT_INDENT);

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| task_item(task, idx == app.selected, text_width, palette))
        .collect();

    let highlight = if focused {
        Style::default().bg(palette.selection)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol(SELECTED_MARKER);

    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, TaskId};

    #[test]
    fn test_priority_label_unknown_outside_range() {
        assert_eq!(priority_label(4), "High");
        assert_eq!(priority_label(0), "Unknown");
        assert_eq!(priority_label(9), "Unknown");
    }

    #[test]
    fn test_metadata_line() {
        let mut task = Task::new(TaskId(1), "Read", Priority::VERY_LOW);
        task.date_created = "3/14/2026".to_string();
        assert_eq!(metadata_line(&task), "Priority: Very Low | Created: 3/14/2026");
    }
}
