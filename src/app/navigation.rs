//! Focus and list selection.

use super::{App, Focus};
use crate::input::InputField;
use crate::models::{Task, TaskId};

impl App {
    /// The input field under focus, if focus is on a field.
    pub(super) fn focused_field(&mut self) -> Option<&mut InputField> {
        match self.focus {
            Focus::TextField => Some(&mut self.text_input),
            Focus::PriorityField => Some(&mut self.priority_input),
            Focus::TaskList => None,
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let len = self.manager.len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.manager.len().saturating_sub(1);
    }

    /// Keep the selection inside the list after it shrinks.
    pub fn clamp_selection(&mut self) {
        let len = self.manager.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.manager.tasks().get(self.selected)
    }

    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task().map(|task| task.id)
    }
}
