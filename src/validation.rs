//! Input validation for new tasks.
//!
//! Pure predicates. Turning a failure into a message for the user is the
//! caller's job (see [`TaskError::user_message`](crate::error::TaskError::user_message)).

use crate::error::InvalidReason;
use crate::models::Priority;

/// Check task text and an already-coerced priority.
///
/// Text is checked first, so empty text with a bad priority reports
/// `EmptyText`.
pub fn validate(text: &str, priority: i64) -> Result<Priority, InvalidReason> {
    if text.trim().is_empty() {
        return Err(InvalidReason::EmptyText);
    }
    Priority::new(priority).ok_or(InvalidReason::PriorityOutOfRange {
        value: Some(priority),
    })
}

/// Coerce raw priority field input to a number.
///
/// - empty (or whitespace) input yields `default`
/// - integers parse as-is, so "0" and "6" come back for the range check
/// - finite decimals are truncated toward zero ("4.9" becomes 4)
/// - anything else is `PriorityOutOfRange { value: None }`
pub fn coerce_priority(raw: &str, default: Priority) -> Result<i64, InvalidReason> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default.level() as i64);
    }
    if let Ok(value) = raw.parse::<i64>() {
        return Ok(value);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value.trunc() as i64),
        _ => Err(InvalidReason::PriorityOutOfRange { value: None }),
    }
}

/// Whether another task fits under `max_tasks`.
pub fn within_limit(current_count: usize, max_tasks: usize) -> bool {
    current_count < max_tasks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_text_rejected() {
        assert_eq!(validate("", 3), Err(InvalidReason::EmptyText));
        assert_eq!(validate("   \t ", 3), Err(InvalidReason::EmptyText));
    }

    #[test]
    fn test_text_checked_before_priority() {
        assert_eq!(validate(" ", 9), Err(InvalidReason::EmptyText));
    }

    #[test]
    fn test_priority_bounds() {
        assert_eq!(
            validate("Task", 0),
            Err(InvalidReason::PriorityOutOfRange { value: Some(0) })
        );
        assert_eq!(
            validate("Task", 6),
            Err(InvalidReason::PriorityOutOfRange { value: Some(6) })
        );
        for level in 1..=5 {
            assert_eq!(validate("Task", level).unwrap().level() as i64, level);
        }
    }

    #[test]
    fn test_coerce_empty_uses_default() {
        assert_eq!(coerce_priority("", Priority::MEDIUM), Ok(3));
        assert_eq!(coerce_priority("  ", Priority::HIGH), Ok(4));
    }

    #[test]
    fn test_coerce_numbers() {
        assert_eq!(coerce_priority(" 4 ", Priority::MEDIUM), Ok(4));
        assert_eq!(coerce_priority("4.9", Priority::MEDIUM), Ok(4));
        assert_eq!(coerce_priority("-2", Priority::MEDIUM), Ok(-2));
        assert_eq!(coerce_priority("6", Priority::MEDIUM), Ok(6));
    }

    #[test]
    fn test_coerce_non_numeric_fails() {
        assert_eq!(
            coerce_priority("abc", Priority::MEDIUM),
            Err(InvalidReason::PriorityOutOfRange { value: None })
        );
        assert!(coerce_priority("NaN", Priority::MEDIUM).is_err());
        assert!(coerce_priority("inf", Priority::MEDIUM).is_err());
    }

    #[test]
    fn test_within_limit() {
        assert!(within_limit(0, 50));
        assert!(within_limit(49, 50));
        assert!(!within_limit(50, 50));
        assert!(!within_limit(0, 0));
    }
}
