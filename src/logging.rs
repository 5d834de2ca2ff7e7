//! File logging.
//!
//! The terminal belongs to the UI, so log lines go to
//! `$CACHE_DIR/taskdeck/taskdeck.log` through a non-blocking appender. The
//! level comes from `TASKDECK_LOG` (an `EnvFilter` directive, default `info`).

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

pub const ENV_LOG: &str = "TASKDECK_LOG";
pub const LOG_FILE_NAME: &str = "taskdeck.log";
const DEFAULT_DIRECTIVE: &str = "info";

/// `$CACHE_DIR/taskdeck`, if the platform has a cache dir.
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("taskdeck"))
}

/// Single-file appender in `dir`, created if missing. Never rotates.
pub fn file_appender(dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber writing into `dir`.
///
/// Returns the writer's guard; log lines still buffered are flushed when it
/// drops, so the caller keeps it until exit. `None` means logging stays off
/// (no cache dir, unwritable directory, or a subscriber already installed).
pub fn init(dir: Option<PathBuf>) -> Option<WorkerGuard> {
    let dir = dir.or_else(default_log_dir)?;
    let appender = match file_appender(&dir) {
        Ok(appender) => appender,
        Err(err) => {
            eprintln!("taskdeck: logging disabled, cannot write to {}: {}", dir.display(), err);
            return None;
        }
    };
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_target(false)
        .with_writer(writer)
        .try_init()
        .ok()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Logging to {}",
        dir.join(LOG_FILE_NAME).display()
    );
    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_appender_creates_dir_and_fixed_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("nested");
        let mut appender = file_appender(&log_dir).unwrap();
        appender.write_all(b"hello\n").unwrap();
        appender.flush().unwrap();

        let content = std::fs::read_to_string(log_dir.join(LOG_FILE_NAME)).unwrap();
        assert_eq!(content, "hello\n");
    }

    #[test]
    fn test_file_appender_appends_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        for line in ["one\n", "two\n"] {
            let mut appender = file_appender(dir.path()).unwrap();
            appender.write_all(line.as_bytes()).unwrap();
            appender.flush().unwrap();
        }

        let content = std::fs::read_to_string(dir.path().join(LOG_FILE_NAME)).unwrap();
        assert_eq!(content, "one\ntwo\n");
    }

    #[test]
    fn test_default_log_dir_name() {
        if let Some(dir) = default_log_dir() {
            assert!(dir.ends_with("taskdeck"));
        }
    }
}
