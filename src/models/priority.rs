//! Task priority levels and their display labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest accepted priority level.
pub const MIN_PRIORITY: u8 = 1;

/// Highest accepted priority level.
pub const MAX_PRIORITY: u8 = 5;

/// Levels at or above this count as high priority.
pub const HIGH_PRIORITY_THRESHOLD: u8 = 4;

/// Label shown when a value has no priority label.
pub const UNKNOWN_PRIORITY_LABEL: &str = "Unknown";

/// A priority level in the closed range 1..=5.
///
/// The only way to build one is through [`Priority::new`] or `TryFrom`,
/// both of which reject out-of-range values, so every stored task carries
/// a valid level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Priority(u8);

impl Priority {
    pub const VERY_LOW: Priority = Priority(1);
    pub const LOW: Priority = Priority(2);
    pub const MEDIUM: Priority = Priority(3);
    pub const HIGH: Priority = Priority(4);
    pub const VERY_HIGH: Priority = Priority(5);

    /// Create a priority, returning `None` outside 1..=5.
    pub fn new(level: i64) -> Option<Self> {
        if (MIN_PRIORITY as i64..=MAX_PRIORITY as i64).contains(&level) {
            Some(Self(level as u8))
        } else {
            None
        }
    }

    /// Numeric level (1..=5).
    pub fn level(self) -> u8 {
        self.0
    }

    /// Descriptive label, e.g. "Medium" for 3.
    pub fn label(self) -> &'static str {
        // Always Some: the constructor guarantees the range.
        format_priority_level(self.0 as i64).unwrap_or(UNKNOWN_PRIORITY_LABEL)
    }

    /// Whether this level counts towards the high-priority statistic.
    pub fn is_high(self) -> bool {
        self.0 >= HIGH_PRIORITY_THRESHOLD
    }

    /// All levels from lowest to highest.
    pub fn all() -> impl Iterator<Item = Priority> {
        (MIN_PRIORITY..=MAX_PRIORITY).map(Priority)
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::MEDIUM
    }
}

impl TryFrom<i64> for Priority {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Priority::new(value).ok_or_else(|| {
            format!(
                "priority must be between {} and {}, got {}",
                MIN_PRIORITY, MAX_PRIORITY, value
            )
        })
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Map a numeric level to its descriptive label.
///
/// Returns `None` for anything outside 1..=5; callers decide how to show
/// that (the renderer uses [`UNKNOWN_PRIORITY_LABEL`]).
pub fn format_priority_level(level: i64) -> Option<&'static str> {
    match level {
        1 => Some("Very Low"),
        2 => Some("Low"),
        3 => Some("Medium"),
        4 => Some("High"),
        5 => Some("Very High"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_for_every_level() {
        assert_eq!(format_priority_level(1), Some("Very Low"));
        assert_eq!(format_priority_level(2), Some("Low"));
        assert_eq!(format_priority_level(3), Some("Medium"));
        assert_eq!(format_priority_level(4), Some("High"));
        assert_eq!(format_priority_level(5), Some("Very High"));
    }

    #[test]
    fn test_out_of_range_label_is_none() {
        assert_eq!(format_priority_level(0), None);
        assert_eq!(format_priority_level(6), None);
        assert_eq!(format_priority_level(-3), None);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Priority::new(0).is_none());
        assert!(Priority::new(6).is_none());
        assert_eq!(Priority::new(5), Some(Priority::VERY_HIGH));
    }

    #[test]
    fn test_is_high() {
        assert!(!Priority::MEDIUM.is_high());
        assert!(Priority::HIGH.is_high());
        assert!(Priority::VERY_HIGH.is_high());
    }

    #[test]
    fn test_all_is_ordered() {
        let levels: Vec<u8> = Priority::all().map(Priority::level).collect();
        assert_eq!(levels, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert_eq!(serde_json::from_str::<Priority>("2").unwrap(), Priority::LOW);
        assert!(serde_json::from_str::<Priority>("9").is_err());
    }
}
