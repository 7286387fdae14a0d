//! Flake glyphs.

/// Glyphs from the smallest flake to the largest.
pub const FLAKE_CHARS: &[char] = &['·', '•', '*', '❄', '❅'];

/// Pick a glyph for a flake radius (in surface pixels).
pub fn flake_char(radius: f32) -> char {
    let idx = if radius < 1.3 {
        0
    } else if radius < 1.9 {
        1
    } else if radius < 2.5 {
        2
    } else if radius < 3.0 {
        3
    } else {
        4
    };
    FLAKE_CHARS[idx]
}
