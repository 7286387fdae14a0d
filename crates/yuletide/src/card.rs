//! The revealed greeting card.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::Paragraph,
};
use yuletide_core::YearCard;

use crate::gift::spaced;

/// Widest the message is allowed to run.
const MAX_MESSAGE_WIDTH: u16 = 60;

/// Greedy word wrap to `width` columns. Words longer than a line are split.
///
/// The layout needs the wrapped height before rendering, which
/// `Paragraph::wrap` cannot report on stable ratatui.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let current_len = current.chars().count();
        if current_len > 0 && current_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Render a revealed card. `archived` adds the year above the greeting.
pub fn render(frame: &mut Frame, area: Rect, card: &YearCard, archived: bool) {
    let message_width = area.width.min(MAX_MESSAGE_WIDTH).saturating_sub(4).max(1);
    let message = wrap_words(&card.message, message_width as usize);
    let has_video = card.video_url.is_some();

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(if archived { 2 } else { 0 }), // Archived year
        Constraint::Length(1),                            // Decorative line
        Constraint::Length(1),
        Constraint::Length(1), // Greeting
        Constraint::Length(1),
        Constraint::Length(message.len() as u16), // Message
        Constraint::Length(3),                    // Star
        Constraint::Length(if has_video { 2 } else { 0 }),
        Constraint::Length(2),
        Constraint::Length(1), // Footer
        Constraint::Fill(1),
    ])
    .split(area);

    if archived {
        frame.render_widget(
            Paragraph::new(spaced(&card.year.to_string()))
                .dark_gray()
                .alignment(Alignment::Center),
            chunks[1],
        );
    }

    frame.render_widget(
        Paragraph::new("──────").fg(card.accent).alignment(Alignment::Center),
        chunks[2],
    );

    frame.render_widget(
        Paragraph::new(card.greeting.to_uppercase())
            .style(Style::new().fg(Color::White).bold())
            .alignment(Alignment::Center),
        chunks[4],
    );

    let message: Vec<Line> = message.into_iter().map(Line::from).collect();
    frame.render_widget(
        Paragraph::new(message).gray().alignment(Alignment::Center),
        chunks[6],
    );

    frame.render_widget(
        Paragraph::new("\n*").fg(card.accent).alignment(Alignment::Center),
        chunks[7],
    );

    if let Some(url) = &card.video_url {
        let link = Line::from(vec![
            "▶ ".fg(card.accent),
            "Watch our family video  ".white(),
            url.clone().dark_gray().underlined(),
        ]);
        frame.render_widget(Paragraph::new(link).alignment(Alignment::Center), chunks[8]);
    }

    frame.render_widget(
        Paragraph::new("WITH LOVE, ALWAYS")
            .dark_gray()
            .alignment(Alignment::Center),
        chunks[10],
    );
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};
    use yuletide_core::DEFAULT_ACCENT;

    use super::*;

    fn card(video_url: Option<&str>) -> YearCard {
        YearCard {
            year: 2023,
            greeting: "Merry Christmas".to_string(),
            message: "Thank you for a wonderful year together".to_string(),
            video_url: video_url.map(str::to_string),
            accent: DEFAULT_ACCENT,
        }
    }

    fn screen(card: &YearCard, archived: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), card, archived))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_wrap_words() {
        assert_eq!(
            wrap_words("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
        assert_eq!(wrap_words("abcdefghijkl mn", 5), vec!["abcde", "fghij", "kl mn"]);
        assert!(wrap_words("   ", 10).is_empty());
    }

    #[test]
    fn test_card_shows_greeting_message_and_footer() {
        let text = screen(&card(None), false);
        assert!(text.contains("MERRY CHRISTMAS"));
        assert!(text.contains("Thank you for a wonderful year together"));
        assert!(text.contains("WITH LOVE, ALWAYS"));
        assert!(!text.contains("Watch our family video"));
        assert!(!text.contains("2 0 2 3"));
    }

    #[test]
    fn test_card_with_video_and_archive_year() {
        let text = screen(&card(Some("https://example.com/v")), true);
        assert!(text.contains("Watch our family video"));
        assert!(text.contains("https://example.com/v"));
        assert!(text.contains("2 0 2 3"));
    }
}
