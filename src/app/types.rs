//! Type definitions for the application state.
//!
//! - [`Focus`] - Which UI component receives typed keys
//! - [`Notice`] - The message shown after a blocked action

/// Which UI component has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    #[default]
    TextField,
    PriorityField,
    TaskList,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::TextField => Focus::PriorityField,
            Focus::PriorityField => Focus::TaskList,
            Focus::TaskList => Focus::TextField,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::TextField => Focus::TaskList,
            Focus::PriorityField => Focus::TextField,
            Focus::TaskList => Focus::PriorityField,
        }
    }

    pub fn is_field(self) -> bool {
        matches!(self, Focus::TextField | Focus::PriorityField)
    }
}

/// Severity of a notice, used for its color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// A transient message in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
    /// Tick at which the notice was raised
    pub raised_at: u64,
}

/// Ticks a notice stays visible (3 seconds at the animation cadence).
pub const NOTICE_TTL_TICKS: u64 = 60;

impl Notice {
    pub fn is_expired(&self, now: u64) -> bool {
        now.saturating_sub(self.raised_at) >= NOTICE_TTL_TICKS
    }
}
