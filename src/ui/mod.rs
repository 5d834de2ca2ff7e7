//! UI rendering.
//!
//! The whole screen is redrawn from [`App`] state on every draw:
//! - Header with the title and theme switch
//! - Counter row (animated totals and completion rate)
//! - Task list, with the statistics panel beside it when toggled
//! - Input bar, key hints and the notice line
//! - Clear-all confirmation as a centered overlay
//!
//! Render functions only read the App.

mod dialog;
mod header;
mod helpers;
mod input;
mod stats_panel;
mod task_list;
mod theme;

pub use dialog::CONFIRM_CLEAR_MESSAGE;
pub use header::APP_TITLE;
pub use helpers::{centered_rect, truncate_to_width};
pub use input::{build_contextual_keybinds, TEXT_PLACEHOLDER};
pub use stats_panel::stats_lines;
pub use task_list::{metadata_line, priority_label, EMPTY_LIST_MESSAGE};
pub use theme::{Palette, DARK, LIGHT};

use ratatui::{
    layout::{Constraint, Layout},
    widgets::Block,
    Frame,
};

use crate::app::App;
use dialog::render_confirm_dialog;
use header::{render_counters, render_header};
use input::{render_input_bar, render_keybinds, render_notice};
use stats_panel::render_stats_panel;
use task_list::render_task_list;

/// Width of the statistics panel when shown
const STATS_PANEL_WIDTH: u16 = 38;

// ============================================================================
// Main UI Rendering
// ============================================================================

pub fn render(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme);
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let [header_area, counters_area, body_area, input_area, hints_area, notice_area] =
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

    render_header(frame, header_area, app, palette);
    render_counters(frame, counters_area, app, palette);

    if app.show_stats {
        let [list_area, stats_area] = Layout::horizontal([
            Constraint::Min(20),
            Constraint::Length(STATS_PANEL_WIDTH),
        ])
        .areas(body_area);
        render_task_list(frame, list_area, app, palette);
        // Computed from the store on every draw, never cached
        render_stats_panel(frame, stats_area, &app.manager.report(), palette);
    } else {
        render_task_list(frame, body_area, app, palette);
    }

    render_input_bar(frame, input_area, app, palette);
    render_keybinds(frame, hints_area, app, palette);
    render_notice(frame, notice_area, app, palette);

    if app.confirming_clear {
        render_confirm_dialog(frame, area, app.manager.len(), palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Preferences, Theme};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_render_shows_sample_tasks() {
        let app = App::default();
        let screen = draw(&app, 100, 30);
        assert!(screen.contains(APP_TITLE));
        assert!(screen.contains("Complete JavaScript assignment"));
        assert!(screen.contains("Priority: Very High"));
        assert!(screen.contains("Dark Mode"));
    }

    #[test]
    fn test_render_empty_list() {
        let app = App::new(Preferences::default().with_seed_samples(false));
        let screen = draw(&app, 80, 24);
        assert!(screen.contains(EMPTY_LIST_MESSAGE));
    }

    #[test]
    fn test_render_dark_theme_label() {
        let app = App::new(Preferences::default().with_theme(Theme::Dark));
        assert!(draw(&app, 80, 24).contains("Light Mode"));
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let mut app = App::default();
        app.show_stats = true;
        app.confirming_clear = true;
        draw(&app, 10, 5);
        draw(&app, 1, 1);
    }
}
