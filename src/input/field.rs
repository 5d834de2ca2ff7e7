//! Single-line input field.

use unicode_width::UnicodeWidthStr;

/// Editable single-line text with an optional character limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    value: String,
    max_chars: Option<usize>,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    /// A field that refuses input beyond `max_chars` characters.
    pub fn with_max_chars(max_chars: usize) -> Self {
        Self {
            value: String::new(),
            max_chars: Some(max_chars),
        }
    }

    /// Append a character. Returns false if the field is full.
    pub fn insert(&mut self, c: char) -> bool {
        if let Some(max) = self.max_chars {
            if self.value.chars().count() >= max {
                return false;
            }
        }
        self.value.push(c);
        true
    }

    pub fn backspace(&mut self) -> bool {
        self.value.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Display width in terminal columns, for cursor placement.
    pub fn width(&self) -> usize {
        self.value.width()
    }
}
