//! Per-year greeting cards.

use ratatui::style::Color;

/// Accent used when a card has none or an unparsable one.
pub const DEFAULT_ACCENT: Color = Color::Rgb(196, 30, 48);

/// The greeting shown for a single year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearCard {
    /// Year the card belongs to.
    pub year: i32,
    /// Headline greeting.
    pub greeting: String,
    /// Longer personal message.
    pub message: String,
    /// Optional link to a family video.
    pub video_url: Option<String>,
    /// Accent color for the revealed card.
    pub accent: Color,
}

/// The static set of cards, one per year, plus a fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct CardBook {
    years: Vec<YearCard>,
    /// Card used for years without an entry. Its `year` is overwritten on resolve.
    fallback: YearCard,
}

impl CardBook {
    /// Build a card book from explicit cards and a fallback.
    pub fn new(years: Vec<YearCard>, fallback: YearCard) -> Self {
        Self { years, fallback }
    }

    /// Card for `year`, or the fallback stamped with that year.
    pub fn resolve(&self, year: i32) -> YearCard {
        self.years
            .iter()
            .find(|card| card.year == year)
            .cloned()
            .unwrap_or_else(|| YearCard {
                year,
                ..self.fallback.clone()
            })
    }

    /// Years strictly before `current_year` that have a card, newest first.
    pub fn archive(&self, current_year: i32) -> Vec<i32> {
        let mut years: Vec<i32> = self
            .years
            .iter()
            .map(|card| card.year)
            .filter(|&year| year < current_year)
            .collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        years
    }
}

/// Parse a `#rrggbb` (or `rrggbb`) accent string.
pub fn parse_accent(value: &str) -> Option<Color> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(year: i32, greeting: &str) -> YearCard {
        YearCard {
            year,
            greeting: greeting.to_string(),
            message: String::new(),
            video_url: None,
            accent: DEFAULT_ACCENT,
        }
    }

    fn book() -> CardBook {
        CardBook::new(
            vec![card(2022, "Old"), card(2024, "Recent"), card(2023, "Middle")],
            card(0, "Fallback"),
        )
    }

    #[test]
    fn test_resolve_matching_year() {
        assert_eq!(book().resolve(2023).greeting, "Middle");
    }

    #[test]
    fn test_resolve_fallback_takes_requested_year() {
        let resolved = book().resolve(2030);
        assert_eq!(resolved.greeting, "Fallback");
        assert_eq!(resolved.year, 2030);
    }

    #[test]
    fn test_archive_excludes_current_and_future() {
        assert_eq!(book().archive(2024), vec![2023, 2022]);
        assert_eq!(book().archive(2022), Vec::<i32>::new());
        assert_eq!(book().archive(2031), vec![2024, 2023, 2022]);
    }

    #[test]
    fn test_parse_accent() {
        assert_eq!(parse_accent("#c41e30"), Some(Color::Rgb(196, 30, 48)));
        assert_eq!(parse_accent("FFFFFF"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_accent("#fff"), None);
        assert_eq!(parse_accent("#zzzzzz"), None);
        assert_eq!(parse_accent("#ééé"), None);
    }
}
