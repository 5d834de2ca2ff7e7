//! Task data model.
//!
//! - [`Task`] - a single to-do entry
//! - [`TaskId`] - store-assigned identifier
//! - [`Priority`] - level 1..=5 with descriptive labels

mod priority;
mod task;

pub use priority::{
    format_priority_level, Priority, HIGH_PRIORITY_THRESHOLD, MAX_PRIORITY, MIN_PRIORITY,
    UNKNOWN_PRIORITY_LABEL,
};
pub use task::{Task, TaskId, DATE_FORMAT};
