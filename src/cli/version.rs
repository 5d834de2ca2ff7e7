//! `--version` and `--help` output.

/// Crate version, from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: taskdeck [OPTIONS]

Options:
  --max-tasks <N>        Maximum number of tasks (default 50)
  --priority <1-5>       Priority used when the field is left empty (default 3)
  --theme <light|dark>   Initial theme
  --no-samples           Start with an empty list
  --config <PATH>        Preferences file to read
  -V, --version          Print version
  -h, --help             Print this help

Environment:
  TASKDECK_MAX_TASKS, TASKDECK_DEFAULT_PRIORITY, TASKDECK_THEME, TASKDECK_LOG";

pub fn version_line() -> String {
    format!("taskdeck {}", VERSION)
}

pub fn handle_version_command() {
    println!("{}", version_line());
}

pub fn handle_help_command() {
    println!("{}\n\n{}", version_line(), USAGE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        assert!(version_line().starts_with("taskdeck "));
    }

    #[test]
    fn test_usage_lists_every_flag() {
        for flag in ["--max-tasks", "--priority", "--theme", "--no-samples", "--config"] {
            assert!(USAGE.contains(flag), "missing {}", flag);
        }
    }
}
