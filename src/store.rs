//! In-memory task store.
//!
//! Holds tasks in insertion order plus the id allocator. The store does
//! no validation and triggers no rendering; [`crate::manager::TaskManager`]
//! validates before calling in and notifies observers afterwards.

use crate::models::{Task, TaskId};

/// Ordered task collection with a monotonically increasing id counter.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    /// Last id handed out; 0 means none yet
    last_id: u64,
}

impl TaskStore {
    /// Create an empty store whose first id will be 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next id. Ids start at 1 and are never reused,
    /// including after [`TaskStore::clear`].
    pub fn allocate_id(&mut self) -> TaskId {
        self.last_id += 1;
        TaskId(self.last_id)
    }

    /// Append a fully constructed task.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Remove the task with `id`, keeping survivors in order.
    ///
    /// Returns `None` without touching the store when no task matches.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// Drop every task and return how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.tasks.len();
        self.tasks.clear();
        removed
    }

    /// Look up a task by id.
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.iter().find(|t| t.id == id)
    }

    /// Mutable lookup by id. Only the manager mutates tasks in place.
    pub fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// All tasks in insertion order, which is also display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Iterate tasks in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Number of stored tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
