//! User preferences.
//!
//! Preferences come from, in increasing precedence: built-in defaults, an
//! optional JSON file, `TASKDECK_*` environment variables, and CLI flags
//! (applied by the caller through the `with_*` setters).
//!
//! # Example
//!
//! ```ignore
//! use taskdeck::config::{Preferences, Theme};
//!
//! let prefs = Preferences::default()
//!     .with_max_tasks(10)
//!     .with_theme(Theme::Dark);
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::models::Priority;

pub const DEFAULT_MAX_TASKS: usize = 50;

pub const ENV_MAX_TASKS: &str = "TASKDECK_MAX_TASKS";
pub const ENV_DEFAULT_PRIORITY: &str = "TASKDECK_DEFAULT_PRIORITY";
pub const ENV_THEME: &str = "TASKDECK_THEME";

/// Two-valued display mode. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label of the button that switches away from this theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark Mode",
            Theme::Dark => "Light Mode",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ConfigError::invalid(
                "theme",
                format!("expected `light` or `dark`, got `{}`", other),
            )),
        }
    }
}

/// Recognized options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Additions are blocked once this many tasks exist
    pub max_tasks: usize,
    /// Used when the priority field is left empty
    pub default_priority: Priority,
    /// Declared for compatibility; nothing reads it
    pub auto_save: bool,
    /// Initial display mode
    pub theme: Theme,
    /// Add the three sample tasks at start-up
    pub seed_samples: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            max_tasks: DEFAULT_MAX_TASKS,
            default_priority: Priority::MEDIUM,
            auto_save: true,
            theme: Theme::Light,
            seed_samples: true,
        }
    }
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_tasks(mut self, max_tasks: usize) -> Self {
        self.max_tasks = max_tasks;
        self
    }

    pub fn with_default_priority(mut self, priority: Priority) -> Self {
        self.default_priority = priority;
        self
    }

    pub fn with_auto_save(mut self, auto_save: bool) -> Self {
        self.auto_save = auto_save;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_seed_samples(mut self, seed: bool) -> Self {
        self.seed_samples = seed;
        self
    }

    /// `$CONFIG_DIR/taskdeck/preferences.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("taskdeck").join("preferences.json"))
    }

    /// Read a preferences file. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No preferences file at {}", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `TASKDECK_*` overrides from the process environment.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup.
    pub fn apply_vars<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_MAX_TASKS) {
            self.max_tasks = parse_max_tasks(&raw)?;
        }
        if let Some(raw) = lookup(ENV_DEFAULT_PRIORITY) {
            self.default_priority = parse_priority(&raw)?;
        }
        if let Some(raw) = lookup(ENV_THEME) {
            self.theme = raw.parse()?;
        }
        Ok(self)
    }

    /// Defaults, then `path` (or the default path), then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        let prefs = base.apply_env()?;
        prefs.validate()?;

        if prefs.auto_save {
            tracing::debug!("auto_save is set but tasks are kept in memory only");
        }
        Ok(prefs)
    }

    /// Reject settings that would make the app unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tasks == 0 {
            return Err(ConfigError::invalid("max_tasks", "must be at least 1"));
        }
        Ok(())
    }
}

/// Parse a `max_tasks` value from an env var or flag.
pub fn parse_max_tasks(raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(ConfigError::invalid("max_tasks", "must be at least 1")),
        Ok(value) => Ok(value),
        Err(_) => Err(ConfigError::invalid(
            "max_tasks",
            format!("`{}` is not a positive integer", raw.trim()),
        )),
    }
}

/// Parse a default priority value from an env var or flag.
pub fn parse_priority(raw: &str) -> Result<Priority, ConfigError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(Priority::new)
        .ok_or_else(|| {
            ConfigError::invalid(
                "default_priority",
                format!("`{}` is not an integer between 1 and 5", raw.trim()),
            )
        })
}
