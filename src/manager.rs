//! Validated task operations.
//!
//! [`TaskManager`] is the only writer of the [`TaskStore`]. Each operation
//! validates first, mutates second, then notifies observers. A failed
//! operation leaves the store untouched and notifies nobody.

use crate::config::Preferences;
use crate::error::{TaskError, TaskResult};
use crate::models::{Priority, Task, TaskId};
use crate::observer::{TaskEvent, TaskObserver};
use crate::stats::{compute_stats, detailed_report, StatsReport, TaskStats};
use crate::store::TaskStore;
use crate::validation::{coerce_priority, validate, within_limit};

/// Tasks added at start-up unless disabled.
pub const SAMPLE_TASKS: [(&str, Priority); 3] = [
    ("Complete JavaScript assignment", Priority::HIGH),
    ("Review DOM manipulation concepts", Priority::MEDIUM),
    ("Practice coding loops and functions", Priority::VERY_HIGH),
];

pub struct TaskManager {
    store: TaskStore,
    prefs: Preferences,
    observers: Vec<Box<dyn TaskObserver>>,
}

impl TaskManager {
    /// Create an empty manager with no observers.
    ///
    /// Sample tasks are not added here; see [`TaskManager::seed_samples`].
    pub fn new(prefs: Preferences) -> Self {
        Self {
            store: TaskStore::new(),
            prefs,
            observers: Vec::new(),
        }
    }

    /// Register an observer for all future changes.
    pub fn subscribe(&mut self, observer: impl TaskObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Add a task from raw field input.
    ///
    /// # Arguments
    /// * `text` - Task text as typed
    /// * `priority_raw` - Priority field contents; empty uses the configured default
    ///
    /// # Errors
    /// Returns [`TaskError::Invalid`] for empty text or a priority outside
    /// 1..=5 (including non-numeric input), and
    /// [`TaskError::CapacityExceeded`] when the store is full.
    pub fn add(&mut self, text: &str, priority_raw: &str) -> TaskResult<TaskId> {
        let priority = coerce_priority(priority_raw, self.prefs.default_priority)?;
        self.add_with_priority(text, priority)
    }

    /// Add a task with a numeric priority.
    ///
    /// Validation runs before the capacity check, so invalid input on a
    /// full store reports the validation error.
    pub fn add_with_priority(&mut self, text: &str, priority: i64) -> TaskResult<TaskId> {
        let priority = validate(text, priority)?;
        if !within_limit(self.store.len(), self.prefs.max_tasks) {
            return Err(TaskError::CapacityExceeded {
                max: self.prefs.max_tasks,
            });
        }

        let id = self.store.allocate_id();
        self.store.add(Task::new(id, text, priority));
        tracing::debug!(%id, %priority, "task added");

        self.notify(TaskEvent::Added { id });
        Ok(id)
    }

    /// Flip completion on `id` and return the new value.
    ///
    /// # Errors
    /// Returns [`TaskError::TaskNotFound`] when no task has `id`.
    pub fn toggle_completion(&mut self, id: TaskId) -> TaskResult<bool> {
        let task = self
            .store
            .find_mut(id)
            .ok_or(TaskError::TaskNotFound { id })?;
        let completed = task.toggle();

        self.notify(TaskEvent::Toggled { id, completed });
        Ok(completed)
    }

    /// Remove `id` and return the removed task.
    ///
    /// # Errors
    /// Returns [`TaskError::TaskNotFound`] when no task has `id`.
    pub fn delete(&mut self, id: TaskId) -> TaskResult<Task> {
        let task = self.store.remove(id).ok_or(TaskError::TaskNotFound { id })?;

        self.notify(TaskEvent::Deleted { id });
        Ok(task)
    }

    /// Empty the store and return how many tasks were removed.
    /// Confirmation is the caller's job.
    ///
    /// # Errors
    /// Returns [`TaskError::EmptyClearRequest`] when there is nothing to clear.
    pub fn clear_all(&mut self) -> TaskResult<usize> {
        if self.store.is_empty() {
            return Err(TaskError::EmptyClearRequest);
        }
        let removed = self.store.clear();

        self.notify(TaskEvent::Cleared { removed });
        Ok(removed)
    }

    /// Add the sample tasks through the normal creation path.
    ///
    /// Returns how many were added; stops early at the task limit.
    pub fn seed_samples(&mut self) -> usize {
        let mut added = 0;
        for (text, priority) in SAMPLE_TASKS {
            match self.add_with_priority(text, priority.level() as i64) {
                Ok(_) => added += 1,
                Err(err) => {
                    tracing::warn!("Sample task not added: {}", err);
                    break;
                }
            }
        }
        added
    }

    /// Summary counts for the current store.
    pub fn stats(&self) -> TaskStats {
        compute_stats(self.store.tasks())
    }

    /// Summary counts plus the per-priority breakdown.
    pub fn report(&self) -> StatsReport {
        detailed_report(self.store.tasks())
    }

    /// Tasks in display order.
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Look up a task by id.
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.store.find(id)
    }

    /// Preferences the manager was created with.
    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn notify(&mut self, event: TaskEvent) {
        let stats = compute_stats(self.store.tasks());
        for observer in self.observers.iter_mut() {
            observer.on_tasks_changed(&event, &stats);
        }
    }
}

impl std::fmt::Debug for TaskManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskManager")
            .field("store", &self.store)
            .field("prefs", &self.prefs)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidReason;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn manager() -> TaskManager {
        TaskManager::new(Preferences::default())
    }

    fn recording(manager: &mut TaskManager) -> Rc<RefCell<Vec<TaskEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        manager.subscribe(move |event: &TaskEvent, _: &TaskStats| sink.borrow_mut().push(*event));
        events
    }

    #[test]
    fn test_add_uses_default_priority_for_empty_field() {
        let mut m = TaskManager::new(Preferences::default().with_default_priority(Priority::LOW));
        let id = m.add("Buy milk", "").unwrap();
        assert_eq!(m.find(id).unwrap().priority, Priority::LOW);
    }

    #[test]
    fn test_add_rejects_bad_input_without_mutation() {
        let mut m = manager();
        let events = recording(&mut m);

        assert_eq!(
            m.add("   ", "3"),
            Err(TaskError::Invalid(InvalidReason::EmptyText))
        );
        assert!(m.add("Task", "0").is_err());
        assert!(m.add("Task", "6").is_err());
        assert!(m.add("Task", "high").is_err());

        assert!(m.is_empty());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_capacity_blocks_addition() {
        let mut m = TaskManager::new(Preferences::default().with_max_tasks(2));
        m.add_with_priority("Buy milk", 3).unwrap();
        m.add_with_priority("Walk dog", 5).unwrap();
        assert_eq!(
            m.add_with_priority("Third", 1),
            Err(TaskError::CapacityExceeded { max: 2 })
        );
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_validation_reported_before_capacity() {
        let mut m = TaskManager::new(Preferences::default().with_max_tasks(1));
        m.add_with_priority("Only", 3).unwrap();
        assert_eq!(
            m.add_with_priority("", 3),
            Err(TaskError::Invalid(InvalidReason::EmptyText))
        );
    }

    #[test]
    fn test_toggle_and_delete_notify() {
        let mut m = manager();
        let events = recording(&mut m);
        let id = m.add_with_priority("Read", 2).unwrap();

        assert_eq!(m.toggle_completion(id), Ok(true));
        assert_eq!(m.delete(id).unwrap().text, "Read");

        assert_eq!(
            *events.borrow(),
            vec![
                TaskEvent::Added { id },
                TaskEvent::Toggled { id, completed: true },
                TaskEvent::Deleted { id },
            ]
        );
    }

    #[test]
    fn test_missing_id_is_not_found() {
        let mut m = manager();
        let events = recording(&mut m);
        assert_eq!(
            m.toggle_completion(TaskId(4)),
            Err(TaskError::TaskNotFound { id: TaskId(4) })
        );
        assert!(m.delete(TaskId(4)).is_err());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_clear_all() {
        let mut m = manager();
        assert_eq!(m.clear_all(), Err(TaskError::EmptyClearRequest));

        m.add_with_priority("a", 1).unwrap();
        m.add_with_priority("b", 2).unwrap();
        assert_eq!(m.clear_all(), Ok(2));
        assert!(m.is_empty());

        let next = m.add_with_priority("c", 3).unwrap();
        assert_eq!(next, TaskId(3));
    }

    #[test]
    fn test_observer_receives_fresh_stats() {
        let mut m = manager();
        let totals = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&totals);
        m.subscribe(move |_: &TaskEvent, stats: &TaskStats| {
            sink.borrow_mut().push((stats.total, stats.completed))
        });

        let id = m.add_with_priority("a", 4).unwrap();
        m.toggle_completion(id).unwrap();
        assert_eq!(*totals.borrow(), vec![(1, 0), (1, 1)]);
    }

    #[test]
    fn test_seed_samples() {
        let mut m = manager();
        assert_eq!(m.seed_samples(), 3);
        let levels: Vec<u8> = m.tasks().iter().map(|t| t.priority.level()).collect();
        assert_eq!(levels, vec![4, 3, 5]);
        assert_eq!(m.stats().high_priority, 2);
    }

    #[test]
    fn test_seed_samples_respects_limit() {
        let mut m = TaskManager::new(Preferences::default().with_max_tasks(2));
        assert_eq!(m.seed_samples(), 2);
    }
}
