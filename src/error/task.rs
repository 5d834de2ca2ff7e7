//! Errors raised by task operations.

use thiserror::Error;

use super::category::ErrorCategory;
use crate::models::{TaskId, MAX_PRIORITY, MIN_PRIORITY};

/// Why task input was rejected by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidReason {
    /// Text was empty or whitespace only.
    #[error("task text is empty")]
    EmptyText,

    /// Priority was outside 1..=5. `value` is `None` when the input was
    /// not a number at all.
    #[error("priority {} is outside {}..={}", display_value(.value), MIN_PRIORITY, MAX_PRIORITY)]
    PriorityOutOfRange { value: Option<i64> },
}

fn display_value(value: &Option<i64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "(not a number)".to_string(),
    }
}

/// Failure of a task mutation. Every variant leaves the store unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("invalid task input: {0}")]
    Invalid(#[from] InvalidReason),

    /// The store already holds `max` tasks.
    #[error("task limit of {max} reached")]
    CapacityExceeded { max: usize },

    /// No task with this id. Expected when ids go stale; never shown.
    #[error("task {id} not found")]
    TaskNotFound { id: TaskId },

    /// Clear-all requested on an empty store.
    #[error("no tasks to clear")]
    EmptyClearRequest,
}

impl TaskError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TaskError::TaskNotFound { .. } => ErrorCategory::Benign,
            _ => ErrorCategory::User,
        }
    }

    /// Message shown in the notice line.
    pub fn user_message(&self) -> String {
        match self {
            TaskError::Invalid(InvalidReason::EmptyText) => "Please enter a valid task!".to_string(),
            TaskError::Invalid(InvalidReason::PriorityOutOfRange { .. }) => {
                format!("Priority must be between {} and {}!", MIN_PRIORITY, MAX_PRIORITY)
            }
            TaskError::CapacityExceeded { max } => {
                format!("You've reached the maximum of {} tasks!", max)
            }
            TaskError::TaskNotFound { id } => format!("Task {} no longer exists.", id),
            TaskError::EmptyClearRequest => "No tasks to clear!".to_string(),
        }
    }

    /// Short code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            TaskError::Invalid(InvalidReason::EmptyText) => "E_TASK_EMPTY_TEXT",
            TaskError::Invalid(InvalidReason::PriorityOutOfRange { .. }) => "E_TASK_PRIORITY",
            TaskError::CapacityExceeded { .. } => "E_TASK_CAPACITY",
            TaskError::TaskNotFound { .. } => "E_TASK_NOT_FOUND",
            TaskError::EmptyClearRequest => "E_TASK_EMPTY_CLEAR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_match_alerts() {
        assert_eq!(
            TaskError::from(InvalidReason::EmptyText).user_message(),
            "Please enter a valid task!"
        );
        assert_eq!(
            TaskError::from(InvalidReason::PriorityOutOfRange { value: Some(9) }).user_message(),
            "Priority must be between 1 and 5!"
        );
        assert_eq!(
            TaskError::CapacityExceeded { max: 50 }.user_message(),
            "You've reached the maximum of 50 tasks!"
        );
        assert_eq!(TaskError::EmptyClearRequest.user_message(), "No tasks to clear!");
    }

    #[test]
    fn test_not_found_is_benign() {
        let err = TaskError::TaskNotFound { id: TaskId(3) };
        assert_eq!(err.category(), ErrorCategory::Benign);
        assert!(!err.category().is_surfaced());
        assert_eq!(err.error_code(), "E_TASK_NOT_FOUND");
    }

    #[test]
    fn test_blocked_mutations_are_user_errors() {
        let errors = vec![
            TaskError::from(InvalidReason::EmptyText),
            TaskError::CapacityExceeded { max: 2 },
            TaskError::EmptyClearRequest,
        ];
        for err in errors {
            assert_eq!(err.category(), ErrorCategory::User, "{:?}", err);
        }
    }

    #[test]
    fn test_display_non_numeric_priority() {
        let err = InvalidReason::PriorityOutOfRange { value: None };
        assert!(err.to_string().contains("not a number"));
        let err = InvalidReason::PriorityOutOfRange { value: Some(0) };
        assert!(err.to_string().contains('0'));
    }
}
