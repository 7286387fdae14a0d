//! Gift box screen: title, the box itself and the countdown.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use yuletide_core::Countdown;
use yuletide_fonts::{build_countdown_art, compact_countdown, countdown_art_width, countdown_labels};
use yuletide_snow::{BACKDROP, Rgba, blend};

/// Bow on top of the lid.
const BOW: &str = "        ╲╲ ◆ ╱╱        ";

/// Lid, drawn above the body and lifted while unwrapping.
const LID: [&str; 3] = [
    " ┌────────┬─┬────────┐ ",
    " │        │ │        │ ",
    " └────────┴─┴────────┘ ",
];

/// Box body with the ribbon crossing it.
const BODY: [&str; 6] = [
    "  │       │ │       │  ",
    "  │       │ │       │  ",
    "  ╞═══════╪═╪═══════╡  ",
    "  │       │ │       │  ",
    "  │       │ │       │  ",
    "  └───────┴─┴───────┘  ",
];

/// Ribbon row while the gift is locked.
const BODY_RIBBON_LOCKED: &str = "  ╞═════[LOCKED]════╡  ";

/// Row of [`BODY`] that carries the ribbon.
const RIBBON_ROW: usize = 2;

/// Width of every box row.
pub const BOX_WIDTH: u16 = 23;

/// Rows the lid rises by the end of unwrapping.
const LID_LIFT: u16 = 3;

/// Total rows reserved for the box, including room for the lid to rise.
pub const BOX_AREA_HEIGHT: u16 = LID_LIFT + 1 + LID.len() as u16 + BODY.len() as u16;

/// Columns of the vertical ribbon, relative to the row start.
const RIBBON_COLUMNS: std::ops::RangeInclusive<usize> = 10..=12;

const BOX_RED: (u8, u8, u8) = (196, 30, 48);
const LID_RED: (u8, u8, u8) = (212, 42, 58);
const RIBBON_GOLD: (u8, u8, u8) = (251, 191, 36);

/// Everything the gift screen needs for one frame.
#[derive(Debug, Clone)]
pub struct GiftView {
    pub year: i32,
    pub unlocked: bool,
    pub countdown: Countdown,
    /// Horizontal shake offset in cells.
    pub shake: i16,
    /// Unwrap progress 0.0-1.0.
    pub unwrap: f32,
    /// Chrome color.
    pub color: Color,
}

/// Fade an RGB color towards the backdrop.
fn faded((r, g, b): (u8, u8, u8), alpha: f32) -> Color {
    blend(Rgba::new(r, g, b, alpha), BACKDROP)
}

/// Color a box row: ribbon columns in gold, the rest in `base`.
fn box_line(row: &str, base: (u8, u8, u8), ribbon_row: bool, alpha: f32) -> Line<'static> {
    let spans: Vec<Span> = row
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            let rgb = if ribbon_row || RIBBON_COLUMNS.contains(&i) {
                RIBBON_GOLD
            } else {
                base
            };
            Span::styled(ch.to_string(), Style::new().fg(faded(rgb, alpha)))
        })
        .collect();
    Line::from(spans)
}

/// Lines of the lid including the bow.
fn lid_lines(alpha: f32) -> Vec<Line<'static>> {
    std::iter::once(box_line(BOW, RIBBON_GOLD, true, alpha))
        .chain(LID.iter().map(|row| box_line(row, LID_RED, false, alpha)))
        .collect()
}

/// Lines of the body, with the lock on the ribbon while locked.
fn body_lines(unlocked: bool, alpha: f32) -> Vec<Line<'static>> {
    BODY.iter()
        .enumerate()
        .map(|(i, row)| {
            if i == RIBBON_ROW && !unlocked {
                box_line(BODY_RIBBON_LOCKED, BOX_RED, true, alpha)
            } else {
                box_line(row, BOX_RED, i == RIBBON_ROW, alpha)
            }
        })
        .collect()
}

/// Box rectangle inside `area`, centered and shifted by `shake`.
fn box_rect(area: Rect, shake: i16) -> Rect {
    let width = BOX_WIDTH.min(area.width);
    let centered = area.x as i32 + (area.width.saturating_sub(width) / 2) as i32;
    let max_x = (area.x + area.width - width) as i32;
    let x = (centered + shake as i32).clamp(area.x as i32, max_x) as u16;
    Rect::new(x, area.y, width, area.height)
}

/// Render the gift box into `area` (at least [`BOX_AREA_HEIGHT`] rows).
fn render_box(frame: &mut Frame, area: Rect, view: &GiftView) {
    let rect = box_rect(area, view.shake);
    let alpha = 1.0 - view.unwrap.clamp(0.0, 1.0);
    let lift = (view.unwrap.clamp(0.0, 1.0) * LID_LIFT as f32).round() as u16;

    let lid = lid_lines(alpha);
    let lid_height = lid.len() as u16;
    let lid_rect = Rect::new(rect.x, rect.y + LID_LIFT - lift, rect.width, lid_height);
    let body_rect = Rect::new(
        rect.x,
        rect.y + LID_LIFT + lid_height,
        rect.width,
        BODY.len() as u16,
    );

    frame.render_widget(Paragraph::new(body_lines(view.unlocked, alpha)), body_rect.intersection(area));
    frame.render_widget(Paragraph::new(lid), lid_rect.intersection(area));
}

/// Countdown block: big digits when they fit, otherwise a single line.
fn countdown_lines(countdown: &Countdown, width: u16, color: Color) -> Vec<Line<'static>> {
    if countdown_art_width(countdown) <= width as usize {
        let mut lines: Vec<Line> = build_countdown_art(countdown)
            .into_iter()
            .map(|s| Line::from(s).style(Style::new().fg(color)))
            .collect();
        lines.push(Line::from(countdown_labels(countdown)).dark_gray());
        lines
    } else {
        vec![Line::from(compact_countdown(countdown)).fg(color)]
    }
}

/// Render the gift screen.
pub fn render(frame: &mut Frame, area: Rect, view: &GiftView) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),                 // Top padding
        Constraint::Length(1),               // Year
        Constraint::Length(1),               // Subtitle
        Constraint::Length(1),               // Spacing
        Constraint::Length(BOX_AREA_HEIGHT), // Gift box
        Constraint::Length(1),               // Spacing
        Constraint::Length(1),               // Opens in / instruction
        Constraint::Length(6),               // Countdown
        Constraint::Fill(1),                 // Bottom padding
    ])
    .split(area);

    let year = Paragraph::new(spaced(&view.year.to_string()))
        .style(Style::new().fg(view.color).bold())
        .alignment(Alignment::Center);
    frame.render_widget(year, chunks[1]);

    let subtitle = if view.unlocked {
        "PRESS ENTER TO UNWRAP YOUR GIFT"
    } else {
        "A GIFT AWAITS YOU"
    };
    frame.render_widget(
        Paragraph::new(subtitle).dark_gray().alignment(Alignment::Center),
        chunks[2],
    );

    render_box(frame, chunks[4], view);

    if view.unlocked {
        frame.render_widget(
            Paragraph::new("Press enter to open")
                .gray()
                .alignment(Alignment::Center),
            chunks[6],
        );
    } else {
        frame.render_widget(
            Paragraph::new("OPENS IN").dark_gray().alignment(Alignment::Center),
            chunks[6],
        );
        let lines = countdown_lines(&view.countdown, chunks[7].width, view.color);
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            chunks[7],
        );
    }
}

/// Letter-spaced text for titles.
pub fn spaced(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for (i, ch) in text.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
