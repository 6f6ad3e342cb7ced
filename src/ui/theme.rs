//! Color palettes for the light and dark themes.

use ratatui::style::{Color, Modifier, Style};

use crate::app::Theme;

/// Colors used by every widget, resolved from the active [`Theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub border: Color,
    pub accent: Color,
    pub heading: Color,
    pub code: Color,
    pub link: Color,
    pub error: Color,
    pub success: Color,
    /// Background of the selected tab and of modal panels.
    pub highlight_bg: Color,
}

// ============================================================================
// Dark
// ============================================================================

pub const DARK: Palette = Palette {
    background: Color::Reset,
    text: Color::Gray,
    dim: Color::DarkGray,
    border: Color::DarkGray,
    accent: Color::LightGreen,
    heading: Color::Cyan,
    code: Color::Rgb(128, 128, 128),
    link: Color::Rgb(0, 122, 204),
    error: Color::Red,
    success: Color::Rgb(4, 181, 117),
    highlight_bg: Color::Rgb(10, 15, 35),
};

// ============================================================================
// Light
// ============================================================================

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(250, 250, 245),
    text: Color::Rgb(40, 40, 40),
    dim: Color::Rgb(120, 120, 120),
    border: Color::Rgb(180, 180, 180),
    accent: Color::Rgb(0, 110, 60),
    heading: Color::Rgb(0, 90, 140),
    code: Color::Rgb(90, 90, 90),
    link: Color::Rgb(0, 80, 200),
    error: Color::Rgb(180, 20, 20),
    success: Color::Rgb(0, 130, 70),
    highlight_bg: Color::Rgb(225, 230, 240),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_differ() {
        assert_ne!(Palette::for_theme(Theme::Dark), Palette::for_theme(Theme::Light));
        assert_eq!(Palette::for_theme(Theme::Dark).error, Color::Red);
    }
}
