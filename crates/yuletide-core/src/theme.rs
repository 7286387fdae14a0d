//! Color themes for the card chrome.

use ratatui::style::Color;

/// Color theme for titles, countdown and help text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorTheme {
    #[default]
    Crimson,
    Gold,
    Pine,
    Frost,
    White,
}

impl ColorTheme {
    /// Cycle to the next color theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Crimson => ColorTheme::Gold,
            ColorTheme::Gold => ColorTheme::Pine,
            ColorTheme::Pine => ColorTheme::Frost,
            ColorTheme::Frost => ColorTheme::White,
            ColorTheme::White => ColorTheme::Crimson,
        }
    }

    /// Convert theme to Ratatui Color.
    pub fn color(self) -> Color {
        match self {
            ColorTheme::Crimson => Color::Rgb(212, 42, 58),
            ColorTheme::Gold => Color::Rgb(251, 191, 36),
            ColorTheme::Pine => Color::Rgb(34, 139, 84),
            ColorTheme::Frost => Color::Rgb(173, 216, 230),
            ColorTheme::White => Color::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_returns_to_start() {
        let mut theme = ColorTheme::default();
        for _ in 0..5 {
            theme = theme.next();
        }
        assert_eq!(theme, ColorTheme::default());
    }
}
