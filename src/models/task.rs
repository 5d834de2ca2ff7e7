use std::fmt;

use chrono::{DateTime, Local};

use super::priority::Priority;

/// Date format used for `date_created`, e.g. "3/14/2026".
pub const DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Store-assigned task identifier. Never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry.
///
/// Only `completed` changes after construction; everything else is fixed
/// at creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub priority: Priority,
    pub completed: bool,
    /// Locale-style creation date, display only
    pub date_created: String,
}

impl Task {
    /// Build a task stamped with today's local date.
    ///
    /// The text is trimmed here; validation happens before this is called.
    pub fn new(id: TaskId, text: &str, priority: Priority) -> Self {
        Self::created_at(id, text, priority, Local::now())
    }

    /// Build a task with an explicit creation time.
    pub fn created_at(id: TaskId, text: &str, priority: Priority, at: DateTime<Local>) -> Self {
        Self {
            id,
            text: text.trim().to_string(),
            priority,
            completed: false,
            date_created: at.format(DATE_FORMAT).to_string(),
        }
    }

    /// Flip the completion flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    pub fn is_high_priority(&self) -> bool {
        self.priority.is_high()
    }
}
