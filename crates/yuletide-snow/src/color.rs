//! Color utilities for drawing translucent flakes on a terminal.

use ratatui::style::Color;

/// Off-white flake fill.
pub const SNOW_WHITE: Rgba = Rgba::new(255, 255, 255, 1.0);

/// Dark backdrop the field is drawn on.
pub const BACKDROP: (u8, u8, u8) = (12, 10, 16);

/// An RGB color with a fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in 0.0-1.0.
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with another alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Composite `fg` over an opaque `bg`, terminals have no alpha channel.
pub fn blend(fg: Rgba, bg: (u8, u8, u8)) -> Color {
    let a = fg.a.clamp(0.0, 1.0);
    let mix = |f: u8, b: u8| (f as f32 * a + b as f32 * (1.0 - a)).round() as u8;
    Color::Rgb(mix(fg.r, bg.0), mix(fg.g, bg.1), mix(fg.b, bg.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_extremes() {
        assert_eq!(blend(SNOW_WHITE, (0, 0, 0)), Color::Rgb(255, 255, 255));
        assert_eq!(blend(SNOW_WHITE.with_alpha(0.0), (1, 2, 3)), Color::Rgb(1, 2, 3));
        assert_eq!(blend(SNOW_WHITE.with_alpha(2.0), (1, 2, 3)), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_blend_half() {
        assert_eq!(
            blend(SNOW_WHITE.with_alpha(0.5), (0, 0, 100)),
            Color::Rgb(128, 128, 178)
        );
    }
}
