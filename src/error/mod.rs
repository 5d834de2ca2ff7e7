//! Error handling for taskdeck.
//!
//! - **Error Categories**: decide whether a failure is shown, swallowed or fatal
//! - **Task Errors**: validation and mutation failures ([`TaskError`], [`InvalidReason`])
//! - **Config Errors**: preference loading failures ([`ConfigError`])
//!
//! | Error | Category | Shown |
//! |-------|----------|-------|
//! | EmptyText / PriorityOutOfRange | User | Yes |
//! | CapacityExceeded | User | Yes |
//! | EmptyClearRequest | User | Yes |
//! | TaskNotFound | Benign | No |
//! | ConfigError | Configuration / System | Fatal at start-up |

mod category;
mod config;
mod task;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use task::{InvalidReason, TaskError};

/// Result alias for task operations.
pub type TaskResult<T> = Result<T, TaskError>;
