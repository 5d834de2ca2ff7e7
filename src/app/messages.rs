//! AppMessage enum for communication into the application loop.

use crate::observer::TaskEvent;
use crate::stats::TaskStats;

/// Messages delivered to the App through its channel
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The task store changed; `stats` reflects the new contents
    TasksChanged { event: TaskEvent, stats: TaskStats },
}
