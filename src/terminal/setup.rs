//! Entering and leaving the alternate screen.

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Switch to raw mode on the alternate screen and hide the cursor.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(writer, EnterAlternateScreen, Hide)
}

/// Undo [`enter_tui_mode`].
///
/// Safe to call more than once and never fails; errors are dropped because
/// there is nothing left to do with them on the way out.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Restore stdout from a panic hook, where no writer is at hand.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
