//! Bottom sheet listing past years' cards.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

/// Height of the sheet including its border.
const SHEET_HEIGHT: u16 = 9;

/// Size of one year tile.
const TILE_WIDTH: u16 = 14;
const TILE_HEIGHT: u16 = 5;
const TILE_GAP: u16 = 2;

const SHEET_BG: Color = Color::Rgb(26, 26, 26);
const TILE_BG: Color = Color::Rgb(80, 18, 22);
const TILE_BORDER: Color = Color::Rgb(150, 40, 50);

/// Selection state of the archive sheet.
#[derive(Debug, Clone, Default)]
pub struct ArchiveSheet {
    open: bool,
    selected: usize,
}

impl ArchiveSheet {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open with the newest year selected. Stays closed with nothing to show.
    pub fn open(&mut self, years: &[i32]) {
        if years.is_empty() {
            return;
        }
        self.open = true;
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn select_next(&mut self, years: &[i32]) {
        if self.selected + 1 < years.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_year(&self, years: &[i32]) -> Option<i32> {
        years.get(self.selected).copied()
    }

    /// First tile index to draw so the selection stays visible.
    fn first_visible(&self, visible: usize) -> usize {
        let visible = visible.max(1);
        (self.selected + 1).saturating_sub(visible)
    }

    /// Render the sheet over the bottom of `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect, years: &[i32], accent: Color) {
        if !self.open {
            return;
        }

        let height = SHEET_HEIGHT.min(area.height);
        let sheet = Rect::new(area.x, area.bottom() - height, area.width, height);
        frame.render_widget(Clear, sheet);

        let block = Block::new()
            .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
            .border_type(BorderType::Rounded)
            .border_style(Style::new().dark_gray())
            .title(Line::from(" Past Christmases ").white().bold())
            .title(Line::from(" ←/→ select  enter open  esc close ").dark_gray().right_aligned())
            .style(Style::new().bg(SHEET_BG));
        let inner = block.inner(sheet);
        frame.render_widget(block, sheet);

        let visible = ((inner.width + TILE_GAP) / (TILE_WIDTH + TILE_GAP)) as usize;
        let first = self.first_visible(visible);

        for (slot, (index, year)) in years.iter().enumerate().skip(first).take(visible).enumerate() {
            let x = inner.x + 1 + slot as u16 * (TILE_WIDTH + TILE_GAP);
            let tile = Rect::new(x, inner.y + 1, TILE_WIDTH, TILE_HEIGHT).intersection(inner);
            if tile.is_empty() {
                break;
            }

            let selected = index == self.selected;
            let border = if selected { accent } else { TILE_BORDER };
            let tile_block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::new().fg(border))
                .style(Style::new().bg(TILE_BG));

            let label = if selected { "▸ View card" } else { "View card" };
            let text = vec![
                Line::from(year.to_string()).white().bold(),
                Line::from(label).gray(),
            ];
            frame.render_widget(
                Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .block(tile_block),
                tile,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    const YEARS: [i32; 4] = [2024, 2023, 2022, 2021];

    #[test]
    fn test_open_requires_years() {
        let mut sheet = ArchiveSheet::default();
        sheet.open(&[]);
        assert!(!sheet.is_open());
        sheet.open(&YEARS);
        assert!(sheet.is_open());
        assert_eq!(sheet.selected_year(&YEARS), Some(2024));
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut sheet = ArchiveSheet::default();
        sheet.open(&YEARS);
        sheet.select_previous();
        assert_eq!(sheet.selected_year(&YEARS), Some(2024));
        for _ in 0..10 {
            sheet.select_next(&YEARS);
        }
        assert_eq!(sheet.selected_year(&YEARS), Some(2021));
    }

    #[test]
    fn test_reopen_resets_selection() {
        let mut sheet = ArchiveSheet::default();
        sheet.open(&YEARS);
        sheet.select_next(&YEARS);
        sheet.close();
        sheet.open(&YEARS);
        assert_eq!(sheet.selected_year(&YEARS), Some(2024));
    }

    #[test]
    fn test_scrolls_to_keep_selection_visible() {
        let mut sheet = ArchiveSheet::default();
        sheet.open(&YEARS);
        assert_eq!(sheet.first_visible(2), 0);
        sheet.select_next(&YEARS);
        sheet.select_next(&YEARS);
        assert_eq!(sheet.first_visible(2), 1);
        assert_eq!(sheet.first_visible(4), 0);
    }

    #[test]
    fn test_renders_tiles() {
        let mut sheet = ArchiveSheet::default();
        sheet.open(&YEARS);
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| sheet.render(frame, frame.area(), &YEARS, Color::Red))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Past Christmases"));
        assert!(text.contains("2024"));
        assert!(text.contains("2021"));
    }
}
