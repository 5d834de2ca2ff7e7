//! Task statistics.
//!
//! Everything here is a pure function of the task slice: same input,
//! same output, one linear pass.

use crate::models::{Priority, Task};

/// Aggregate counts over the current tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub high_priority: usize,
    /// Percentage of completed tasks, rounded; 0 when there are no tasks
    pub completion_rate: u8,
}

/// Task count at one priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityCount {
    pub priority: Priority,
    pub count: usize,
}

/// Everything the detailed statistics panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsReport {
    pub stats: TaskStats,
    /// One entry per level, lowest first
    pub by_priority: Vec<PriorityCount>,
}

pub fn compute_stats(tasks: &[Task]) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let high_priority = tasks.iter().filter(|t| t.is_high_priority()).count();

    TaskStats {
        total,
        completed,
        pending: total - completed,
        high_priority,
        completion_rate: completion_rate(completed, total),
    }
}

/// `round(completed / total * 100)`, or 0 for an empty list.
fn completion_rate(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

/// Tasks at exactly `level`, in store order.
pub fn tasks_by_priority(tasks: &[Task], level: Priority) -> Vec<&Task> {
    tasks.iter().filter(|t| t.priority == level).collect()
}

pub fn detailed_report(tasks: &[Task]) -> StatsReport {
    let by_priority = Priority::all()
        .map(|priority| PriorityCount {
            priority,
            count: tasks_by_priority(tasks, priority).len(),
        })
        .collect();

    StatsReport {
        stats: compute_stats(tasks),
        by_priority,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskId;

    fn tasks_with(priorities: &[i64]) -> Vec<Task> {
        priorities
            .iter()
            .enumerate()
            .map(|(i, p)| {
                Task::new(
                    TaskId(i as u64 + 1),
                    &format!("task {}", i + 1),
                    Priority::new(*p).unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_stats() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, TaskStats::default());
        assert_eq!(stats.completion_rate, 0);
    }

    #[test]
    fn test_counts() {
        let mut tasks = tasks_with(&[4, 2, 5, 1]);
        tasks[0].completed = true;

        let stats = compute_stats(&tasks);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 3);
        assert_eq!(stats.high_priority, 2);
        assert_eq!(stats.completion_rate, 25);
        assert_eq!(stats.completed + stats.pending, stats.total);
    }

    #[test]
    fn test_completion_rate_rounds() {
        let mut tasks = tasks_with(&[3, 3, 3]);
        tasks[0].completed = true;
        assert_eq!(compute_stats(&tasks).completion_rate, 33);

        tasks[1].completed = true;
        assert_eq!(compute_stats(&tasks).completion_rate, 67);
    }

    #[test]
    fn test_completion_rate_half_rounds_up() {
        let mut tasks = tasks_with(&[3; 8]);
        tasks[0].completed = true;
        // 1/8 = 12.5%
        assert_eq!(compute_stats(&tasks).completion_rate, 13);
    }

    #[test]
    fn test_stats_are_repeatable() {
        let tasks = tasks_with(&[1, 4, 5]);
        assert_eq!(compute_stats(&tasks), compute_stats(&tasks));
    }

    #[test]
    fn test_tasks_by_priority_keeps_order() {
        let tasks = tasks_with(&[4, 2, 4, 1]);
        let high = tasks_by_priority(&tasks, Priority::HIGH);
        let ids: Vec<TaskId> = high.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId(1), TaskId(3)]);
        assert!(tasks_by_priority(&tasks, Priority::VERY_HIGH).is_empty());
    }

    #[test]
    fn test_detailed_report_has_every_level() {
        let tasks = tasks_with(&[4, 2, 4, 1]);
        let report = detailed_report(&tasks);
        let counts: Vec<usize> = report.by_priority.iter().map(|c| c.count).collect();
        assert_eq!(counts, vec![1, 1, 0, 2, 0]);
        assert_eq!(report.stats.total, 4);
    }
}
