//! Command-line interface.
//!
//! Parse flags before touching the terminal:
//!
//! ```ignore
//! use taskdeck::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! match run_cli_command(command) {
//!     Some(options) => { /* start the TUI */ }
//!     None => return Ok(()),
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, LaunchOptions};
pub use version::{handle_help_command, handle_version_command, VERSION};

/// Handle print-and-exit commands.
///
/// Returns the launch options when the TUI should start, `None` otherwise.
pub fn run_cli_command(command: CliCommand) -> Option<LaunchOptions> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            None
        }
        CliCommand::Help => {
            handle_help_command();
            None
        }
        CliCommand::RunTui(options) => Some(options),
    }
}
