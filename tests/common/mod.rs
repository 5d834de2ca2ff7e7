//! Shared fixtures for integration tests.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use taskdeck::app::App;
use taskdeck::config::Preferences;
use taskdeck::input::Command;
use taskdeck::manager::TaskManager;
use taskdeck::ui;

/// Preferences with sample seeding turned off.
pub fn blank_prefs() -> Preferences {
    Preferences::default().with_seed_samples(false)
}

/// An App with no tasks.
pub fn empty_app() -> App {
    App::new(blank_prefs())
}

/// A manager holding tasks with the given priorities, named "Task 1", "Task 2", ...
pub fn manager_with(priorities: &[i64]) -> TaskManager {
    let mut manager = TaskManager::new(blank_prefs());
    for (idx, priority) in priorities.iter().enumerate() {
        manager
            .add_with_priority(&format!("Task {}", idx + 1), *priority)
            .unwrap();
    }
    manager
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key(key(code));
}

/// Type each character of `text` into whatever has focus.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Add a task through the keyboard: text, Tab, priority, Enter.
pub fn add_via_keys(app: &mut App, text: &str, priority: &str) {
    app.dispatch(Command::FocusInput);
    type_text(app, text);
    if !priority.is_empty() {
        press(app, KeyCode::Tab);
        type_text(app, priority);
    }
    press(app, KeyCode::Enter);
}

/// Render `app` into a test buffer and return it as text, one line per row.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();

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
