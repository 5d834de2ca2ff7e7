//! Change notification for task mutations.
//!
//! [`TaskManager`](crate::manager::TaskManager) calls every registered
//! [`TaskObserver`] after each successful mutation, with the event and
//! freshly computed statistics. Failed mutations notify nobody.

use tokio::sync::mpsc;

use crate::app::AppMessage;
use crate::models::TaskId;
use crate::stats::TaskStats;

/// What changed in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskEvent {
    Added { id: TaskId },
    Toggled { id: TaskId, completed: bool },
    Deleted { id: TaskId },
    Cleared { removed: usize },
}

/// Receives store changes.
pub trait TaskObserver {
    fn on_tasks_changed(&mut self, event: &TaskEvent, stats: &TaskStats);
}

impl<F> TaskObserver for F
where
    F: FnMut(&TaskEvent, &TaskStats),
{
    fn on_tasks_changed(&mut self, event: &TaskEvent, stats: &TaskStats) {
        self(event, stats)
    }
}

/// Records every change in the log.
#[derive(Debug, Default)]
pub struct LogObserver;

impl TaskObserver for LogObserver {
    fn on_tasks_changed(&mut self, event: &TaskEvent, stats: &TaskStats) {
        tracing::info!(
            ?event,
            total = stats.total,
            completed = stats.completed,
            high_priority = stats.high_priority,
            "tasks changed"
        );
    }
}

/// Forwards changes onto the App's message channel.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<AppMessage>,
}

impl ChannelObserver {
    pub fn new(tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self { tx }
    }
}

impl TaskObserver for ChannelObserver {
    fn on_tasks_changed(&mut self, event: &TaskEvent, stats: &TaskStats) {
        let msg = AppMessage::TasksChanged {
            event: *event,
            stats: *stats,
        };
        if self.tx.send(msg).is_err() {
            tracing::trace!("App message receiver dropped; change not forwarded");
        }
    }
}
