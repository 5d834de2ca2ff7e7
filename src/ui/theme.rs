//! Color palettes for the light and dark themes.

use ratatui::style::{Color, Modifier, Style};

use crate::config::Theme;

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    /// Secondary text: metadata lines, hints
    pub dim: Color,
    pub border: Color,
    /// Focused borders, key names, the title
    pub accent: Color,
    /// Marker and text color for priority 4 and 5 tasks
    pub high_priority: Color,
    pub completed: Color,
    pub warning: Color,
    pub info: Color,
    /// Row background of the selected task
    pub selection: Color,
    pub dialog_background: Color,
}

// ============================================================================
// Light
// ============================================================================

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(248, 249, 250),
    text: Color::Rgb(33, 37, 41),
    dim: Color::Rgb(108, 117, 125),
    border: Color::Rgb(206, 212, 218),
    accent: Color::Rgb(0, 122, 204),
    high_priority: Color::Rgb(220, 53, 69),
    completed: Color::Rgb(40, 167, 69),
    warning: Color::Rgb(200, 110, 0),
    info: Color::Rgb(0, 122, 204),
    selection: Color::Rgb(226, 236, 247),
    dialog_background: Color::Rgb(255, 255, 255),
};

// ============================================================================
// Dark
// ============================================================================

pub const DARK: Palette = Palette {
    background: Color::Rgb(26, 26, 46),
    text: Color::Rgb(230, 230, 230),
    dim: Color::Rgb(128, 128, 128),
    border: Color::DarkGray,
    accent: Color::Rgb(97, 175, 239),
    high_priority: Color::Rgb(255, 107, 107),
    completed: Color::Rgb(4, 181, 117),
    warning: Color::Rgb(255, 193, 7),
    info: Color::Cyan,
    selection: Color::Rgb(44, 44, 72),
    dialog_background: Color::Rgb(10, 15, 35),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    /// Base style for a whole region.
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn key_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Border style, highlighted when the region has focus.
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }
}
