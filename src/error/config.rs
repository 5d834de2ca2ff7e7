//! Errors raised while loading preferences.

use std::path::PathBuf;

use thiserror::Error;

use super::category::ErrorCategory;

/// Failure while building [`crate::config::Preferences`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The preferences file exists but could not be read.
    #[error("failed to read preferences from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preferences file is not valid JSON for the expected shape.
    #[error("failed to parse preferences in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A setting from any source had an unacceptable value.
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ConfigError::Io { .. } => ErrorCategory::System,
            ConfigError::Parse { .. } | ConfigError::InvalidValue { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "E_CONFIG_IO",
            ConfigError::Parse { .. } => "E_CONFIG_PARSE",
            ConfigError::InvalidValue { .. } => "E_CONFIG_VALUE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::invalid("max_tasks", "must be a number");
        assert_eq!(err.to_string(), "invalid value for max_tasks: must be a number");
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.error_code(), "E_CONFIG_VALUE");
    }

    #[test]
    fn test_io_is_system() {
        let err = ConfigError::Io {
            path: PathBuf::from("/nope/preferences.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.category(), ErrorCategory::System);
        assert!(err.to_string().contains("/nope/preferences.json"));
    }
}
