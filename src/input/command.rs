//! Command definitions for keyboard input handling.
//!
//! Key bindings resolve to a [`Command`]; [`App::dispatch`](crate::app::App::dispatch)
//! carries it out. This keeps key handling separate from its effects.

/// Every user action the application understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global
    // =========================================================================
    /// Quit the application (Ctrl+C, q)
    Quit,
    /// Switch between light and dark display mode
    ToggleTheme,
    /// Show or hide the detailed statistics panel
    ToggleStats,
    /// Ask to delete every task (opens the confirmation dialog)
    RequestClearAll,

    // =========================================================================
    // Focus
    // =========================================================================
    /// Text field → priority field → task list → text field
    FocusNext,
    /// Reverse of `FocusNext`
    FocusPrevious,
    /// Jump to the task text field
    FocusInput,
    /// Jump to the task list
    FocusTaskList,

    // =========================================================================
    // Input fields
    // =========================================================================
    /// Append a character to the focused field
    InsertChar(char),
    /// Delete the last character of the focused field
    Backspace,
    /// Empty the focused field
    ClearField,
    /// Submit the text and priority fields as a new task
    AddTask,

    // =========================================================================
    // Task list
    // =========================================================================
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Complete / undo the selected task
    ToggleSelected,
    /// Delete the selected task
    DeleteSelected,

    // =========================================================================
    // Confirmation dialog
    // =========================================================================
    ConfirmClear,
    CancelClear,
}

impl Command {
    /// Whether this command edits text in an input field.
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            Command::InsertChar(_) | Command::Backspace | Command::ClearField
        )
    }

    /// Whether this command may change the task store.
    pub fn mutates_tasks(&self) -> bool {
        matches!(
            self,
            Command::AddTask
                | Command::ToggleSelected
                | Command::DeleteSelected
                | Command::ConfirmClear
        )
    }
}
