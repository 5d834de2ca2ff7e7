//! Default keybindings.
//!
//! Lookup order: the confirmation dialog's bindings while it is open
//! (nothing else gets through), then global bindings, then the bindings of
//! the focused component, then plain characters typed into a text field.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use crate::app::Focus;

/// A key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Normalize a key event for lookup.
    ///
    /// Terminals disagree on whether an uppercase letter carries SHIFT, so
    /// SHIFT is dropped for character keys; `'C'` alone identifies the key.
    pub fn from_event(key: &KeyEvent) -> Self {
        let mut modifiers = key.modifiers;
        if matches!(key.code, KeyCode::Char(_)) {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        // BackTab arrives with SHIFT on some terminals and without on others
        if key.code == KeyCode::BackTab {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        Self::new(key.code, modifiers)
    }
}

/// Keybinding tables.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Active everywhere except inside the confirmation dialog
    pub global: HashMap<KeyCombo, Command>,
    /// Per focused component
    pub focus: HashMap<Focus, HashMap<KeyCombo, Command>>,
    /// While the clear-all confirmation is open
    pub confirm: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            focus: HashMap::new(),
            confirm: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_field_bindings(Focus::TextField);
        config.setup_field_bindings(Focus::PriorityField);
        config.setup_task_list_bindings();
        config.setup_confirm_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('t')), Command::ToggleTheme);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('s')), Command::ToggleStats);
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('l')), Command::RequestClearAll);
    }

    /// Text and priority fields share one table.
    fn setup_field_bindings(&mut self, focus: Focus) {
        let mut map = HashMap::new();
        map.insert(KeyCombo::plain(KeyCode::Enter), Command::AddTask);
        map.insert(KeyCombo::plain(KeyCode::Tab), Command::FocusNext);
        map.insert(KeyCombo::plain(KeyCode::BackTab), Command::FocusPrevious);
        map.insert(KeyCombo::plain(KeyCode::Esc), Command::FocusTaskList);
        map.insert(KeyCombo::plain(KeyCode::Down), Command::FocusTaskList);
        map.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
        map.insert(KeyCombo::ctrl(KeyCode::Char('u')), Command::ClearField);
        self.focus.insert(focus, map);
    }

    fn setup_task_list_bindings(&mut self) {
        let mut map = HashMap::new();
        map.insert(KeyCombo::plain(KeyCode::Up), Command::SelectPrevious);
        map.insert(KeyCombo::plain(KeyCode::Char('k')), Command::SelectPrevious);
        map.insert(KeyCombo::plain(KeyCode::Down), Command::SelectNext);
        map.insert(KeyCombo::plain(KeyCode::Char('j')), Command::SelectNext);
        map.insert(KeyCombo::plain(KeyCode::Home), Command::SelectFirst);
        map.insert(KeyCombo::plain(KeyCode::Char('g')), Command::SelectFirst);
        map.insert(KeyCombo::plain(KeyCode::End), Command::SelectLast);
        map.insert(KeyCombo::plain(KeyCode::Char('G')), Command::SelectLast);

        map.insert(KeyCombo::plain(KeyCode::Char(' ')), Command::ToggleSelected);
        map.insert(KeyCombo::plain(KeyCode::Enter), Command::ToggleSelected);
        map.insert(KeyCombo::plain(KeyCode::Char('c')), Command::ToggleSelected);
        map.insert(KeyCombo::plain(KeyCode::Char('d')), Command::DeleteSelected);
        map.insert(KeyCombo::plain(KeyCode::Delete), Command::DeleteSelected);
        map.insert(KeyCombo::plain(KeyCode::Char('C')), Command::RequestClearAll);

        map.insert(KeyCombo::plain(KeyCode::Char('t')), Command::ToggleTheme);
        map.insert(KeyCombo::plain(KeyCode::Char('s')), Command::ToggleStats);
        map.insert(KeyCombo::plain(KeyCode::Char('a')), Command::FocusInput);
        map.insert(KeyCombo::plain(KeyCode::Char('i')), Command::FocusInput);
        map.insert(KeyCombo::plain(KeyCode::Tab), Command::FocusNext);
        map.insert(KeyCombo::plain(KeyCode::BackTab), Command::FocusPrevious);
        map.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        self.focus.insert(Focus::TaskList, map);
    }

    fn setup_confirm_bindings(&mut self) {
        for combo in [
            KeyCombo::plain(KeyCode::Char('y')),
            KeyCombo::plain(KeyCode::Char('Y')),
            KeyCombo::plain(KeyCode::Enter),
        ] {
            self.confirm.insert(combo, Command::ConfirmClear);
        }
        for combo in [
            KeyCombo::plain(KeyCode::Char('n')),
            KeyCombo::plain(KeyCode::Char('N')),
            KeyCombo::plain(KeyCode::Esc),
        ] {
            self.confirm.insert(combo, Command::CancelClear);
        }
        self.confirm
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
    }

    /// Resolve a key event to a command.
    ///
    /// Key releases and repeats other than presses are ignored.
    pub fn resolve(&self, key: &KeyEvent, focus: Focus, confirming: bool) -> Option<Command> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let combo = KeyCombo::from_event(key);

        if confirming {
            return self.confirm.get(&combo).copied();
        }
        if let Some(command) = self.global.get(&combo) {
            return Some(*command);
        }
        if let Some(command) = self.focus.get(&focus).and_then(|map| map.get(&combo)) {
            return Some(*command);
        }

        match (focus, combo.code) {
            (Focus::TextField | Focus::PriorityField, KeyCode::Char(c))
                if !combo
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                Some(Command::InsertChar(c))
            }
            _ => None,
        }
    }
}
