//! Error category classification.
//!
//! Categories decide how a failure reaches the user: shown as a notice,
//! swallowed, or aborting start-up.

use std::fmt;

/// High-level classification used for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Bad input or a blocked action. Shown to the user, nothing changes.
    User,

    /// Expected no-op (e.g. toggling a task that was already deleted).
    /// Never shown.
    Benign,

    /// Invalid preferences file, environment or flags.
    /// Fatal at start-up.
    Configuration,

    /// OS or filesystem failure. Fatal at start-up.
    System,
}

impl ErrorCategory {
    /// Whether errors in this category should be shown to the user.
    pub fn is_surfaced(&self) -> bool {
        !matches!(self, ErrorCategory::Benign)
    }

    /// Short label for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::User => "user",
            ErrorCategory::Benign => "benign",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::System => "system",
        }
    }

    /// Suggested next step for the user.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::User => "Please check your input and try again",
            ErrorCategory::Benign => "",
            ErrorCategory::Configuration => "Check your preferences file, TASKDECK_* variables and flags",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
