//! Command-line argument parsing.

use std::path::PathBuf;

use crate::config::{parse_max_tasks, parse_priority, Preferences, Theme};
use crate::error::ConfigError;

/// Overrides given on the command line. `None` leaves the setting alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub config_path: Option<PathBuf>,
    pub max_tasks: Option<usize>,
    pub default_priority: Option<crate::models::Priority>,
    pub theme: Option<Theme>,
    pub no_samples: bool,
}

impl LaunchOptions {
    /// Apply the overrides on top of loaded preferences.
    pub fn apply(&self, mut prefs: Preferences) -> Preferences {
        if let Some(max) = self.max_tasks {
            prefs = prefs.with_max_tasks(max);
        }
        if let Some(priority) = self.default_priority {
            prefs = prefs.with_default_priority(priority);
        }
        if let Some(theme) = self.theme {
            prefs = prefs.with_theme(theme);
        }
        if self.no_samples {
            prefs = prefs.with_seed_samples(false);
        }
        prefs
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Version,
    Help,
    /// Run the TUI (default)
    RunTui(LaunchOptions),
}

/// Parse command-line arguments, program name first.
///
/// Unknown flags are ignored. A flag missing its value, or with a value
/// that does not parse, is an error.
///
/// ```
/// use taskdeck::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["taskdeck".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut options = LaunchOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--no-samples" => options.no_samples = true,
            "--max-tasks" => {
                let raw = value_for(&mut args, "max_tasks")?;
                options.max_tasks = Some(parse_max_tasks(&raw)?);
            }
            "--priority" => {
                let raw = value_for(&mut args, "default_priority")?;
                options.default_priority = Some(parse_priority(&raw)?);
            }
            "--theme" => {
                let raw = value_for(&mut args, "theme")?;
                options.theme = Some(raw.parse()?);
            }
            "--config" => {
                let raw = value_for(&mut args, "config")?;
                options.config_path = Some(PathBuf::from(raw));
            }
            _ => {}
        }
    }
    Ok(CliCommand::RunTui(options))
}

fn value_for<I>(args: &mut I, field: &'static str) -> Result<String, ConfigError>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| ConfigError::invalid(field, "missing value"))
}
