//! Keyboard input: commands, keybindings and the editable input fields.

pub mod command;
pub mod field;
pub mod keybindings;

pub use command::Command;
pub use field::InputField;
pub use keybindings::{KeyCombo, KeybindingConfig};
