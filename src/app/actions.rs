//! User actions: key handling, command dispatch and task operations.

use crossterm::event::KeyEvent;

use super::{App, Focus, Notice, NoticeLevel};
use crate::error::TaskError;
use crate::input::Command;
use crate::models::TaskId;

impl App {
    /// Resolve a key press and run the resulting command.
    ///
    /// Returns the command that ran, if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        let command = self
            .keybindings
            .resolve(&key, self.focus, self.confirming_clear)?;
        // Typed characters stay out of the log
        if command.mutates_tasks() {
            tracing::debug!(?command, "Dispatching");
        } else if !command.is_editing() {
            tracing::trace!(?command, "Dispatching");
        }
        self.dispatch(command);
        Some(command)
    }

    /// Run a command, then pick up any store changes it caused.
    pub fn dispatch(&mut self, command: Command) {
        self.mark_dirty();
        match command {
            Command::Quit => self.quit(),
            Command::ToggleTheme => self.toggle_theme(),
            Command::ToggleStats => self.toggle_stats(),
            Command::RequestClearAll => self.request_clear_all(),

            Command::FocusNext => self.focus = self.focus.next(),
            Command::FocusPrevious => self.focus = self.focus.previous(),
            Command::FocusInput => self.focus = Focus::TextField,
            Command::FocusTaskList => self.focus = Focus::TaskList,

            Command::InsertChar(c) => {
                if let Some(field) = self.focused_field() {
                    field.insert(c);
                }
            }
            Command::Backspace => {
                if let Some(field) = self.focused_field() {
                    field.backspace();
                }
            }
            Command::ClearField => {
                if let Some(field) = self.focused_field() {
                    field.clear();
                }
            }
            Command::AddTask => {
                self.add_task();
            }

            Command::SelectPrevious => self.select_previous(),
            Command::SelectNext => self.select_next(),
            Command::SelectFirst => self.select_first(),
            Command::SelectLast => self.select_last(),
            Command::ToggleSelected => {
                if let Some(id) = self.selected_task_id() {
                    self.toggle_completion(id);
                }
            }
            Command::DeleteSelected => {
                if let Some(id) = self.selected_task_id() {
                    self.delete_task(id);
                }
            }

            Command::ConfirmClear => self.confirm_clear_all(),
            Command::CancelClear => self.cancel_clear_all(),
        }
        self.drain_messages();
    }

    /// Add a task from the input fields.
    ///
    /// On success both fields are emptied. On failure the notice shows why
    /// and the fields are left as typed.
    pub fn add_task(&mut self) -> Option<TaskId> {
        let result = self
            .manager
            .add(self.text_input.value(), self.priority_input.value());
        match result {
            Ok(id) => {
                self.text_input.clear();
                self.priority_input.clear();
                self.notice = None;
                self.focus = Focus::TextField;
                self.drain_messages();
                Some(id)
            }
            Err(err) => {
                self.report(err);
                None
            }
        }
    }

    /// Flip completion of `id`. Unknown ids are ignored.
    pub fn toggle_completion(&mut self, id: TaskId) {
        if let Err(err) = self.manager.toggle_completion(id) {
            self.report(err);
        }
        self.drain_messages();
    }

    /// Delete `id`. Unknown ids are ignored.
    pub fn delete_task(&mut self, id: TaskId) {
        if let Err(err) = self.manager.delete(id) {
            self.report(err);
        }
        self.drain_messages();
    }

    /// Open the clear-all confirmation, or say there is nothing to clear.
    pub fn request_clear_all(&mut self) {
        if self.manager.is_empty() {
            self.report(TaskError::EmptyClearRequest);
            return;
        }
        self.confirming_clear = true;
        self.mark_dirty();
    }

    /// Clear every task after confirmation.
    pub fn confirm_clear_all(&mut self) {
        self.confirming_clear = false;
        match self.manager.clear_all() {
            Ok(removed) => {
                self.selected = 0;
                self.set_notice(format!("Cleared {} tasks", removed), NoticeLevel::Info);
            }
            Err(err) => self.report(err),
        }
        self.drain_messages();
    }

    pub fn cancel_clear_all(&mut self) {
        self.confirming_clear = false;
        self.mark_dirty();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = %self.theme, "Theme toggled");
        self.mark_dirty();
    }

    pub fn toggle_stats(&mut self) {
        self.show_stats = !self.show_stats;
        self.mark_dirty();
    }

    /// Show a user-facing error, or log and drop a benign one.
    fn report(&mut self, err: TaskError) {
        if err.category().is_surfaced() {
            tracing::info!(code = err.error_code(), "Action blocked: {}", err);
            self.set_notice(err.user_message(), NoticeLevel::Warning);
        } else {
            tracing::debug!(code = err.error_code(), "Ignored: {}", err);
        }
    }

    fn set_notice(&mut self, message: String, level: NoticeLevel) {
        self.notice = Some(Notice {
            message,
            level,
            raised_at: self.tick_count,
        });
        self.mark_dirty();
    }
}
