//! Panic hook that puts the terminal back before the message prints.

use super::setup::emergency_restore;
use std::panic;

/// Install the hook. Call once, before [`TerminalManager::new`].
///
/// [`TerminalManager::new`]: super::TerminalManager::new
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!("Panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
