//! Block digit fonts for the yuletide countdown.

use yuletide_core::Countdown;

/// Height of every glyph in rows.
pub const GLYPH_HEIGHT: usize = 5;

/// Width of a digit glyph in columns.
pub const DIGIT_WIDTH: usize = 6;

/// Block digits (5 lines tall, 6 chars wide)
pub const DIGITS: [[&str; GLYPH_HEIGHT]; 10] = [
    // 0
    ["██████", "██  ██", "██  ██", "██  ██", "██████"],
    // 1
    ["  ██  ", " ███  ", "  ██  ", "  ██  ", " ████ "],
    // 2
    ["██████", "    ██", "██████", "██    ", "██████"],
    // 3
    ["██████", "    ██", " █████", "    ██", "██████"],
    // 4
    ["██  ██", "██  ██", "██████", "    ██", "    ██"],
    // 5
    ["██████", "██    ", "██████", "    ██", "██████"],
    // 6
    ["██████", "██    ", "██████", "██  ██", "██████"],
    // 7
    ["██████", "    ██", "   ██ ", "  ██  ", "  ██  "],
    // 8
    ["██████", "██  ██", "██████", "██  ██", "██████"],
    // 9
    ["██████", "██  ██", "██████", "    ██", "██████"],
];

/// Colon separator (5 lines tall, 2 chars wide)
pub const COLON: [&str; GLYPH_HEIGHT] = ["  ", "██", "  ", "██", "  "];

/// Labels shown under each countdown group.
pub const LABELS: [&str; 4] = ["DAYS", "HOURS", "MIN", "SEC"];

/// Zero-padded digit groups for a countdown: days (at least two digits),
/// hours, minutes, seconds.
fn groups(countdown: &Countdown) -> [String; 4] {
    [
        format!("{:02}", countdown.days),
        format!("{:02}", countdown.hours),
        format!("{:02}", countdown.minutes),
        format!("{:02}", countdown.seconds),
    ]
}

/// Width in columns of one digit group rendered in block digits.
fn group_width(digits: &str) -> usize {
    let n = digits.len();
    n * DIGIT_WIDTH + n.saturating_sub(1)
}

/// Separator between groups: space, colon, space.
const SEPARATOR_WIDTH: usize = 4;

/// Build large ASCII art for a countdown (`DD : HH : MM : SS`).
///
/// Returns [`GLYPH_HEIGHT`] strings, one per row.
pub fn build_countdown_art(countdown: &Countdown) -> Vec<String> {
    let groups = groups(countdown);
    let mut lines = Vec::with_capacity(GLYPH_HEIGHT);

    for row in 0..GLYPH_HEIGHT {
        let mut line = String::new();
        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                line.push(' ');
                line.push_str(COLON[row]);
                line.push(' ');
            }
            for (j, digit) in group.bytes().enumerate() {
                if j > 0 {
                    line.push(' ');
                }
                line.push_str(DIGITS[(digit - b'0') as usize][row]);
            }
        }
        lines.push(line);
    }

    lines
}

/// Width in columns of [`build_countdown_art`] output.
pub fn countdown_art_width(countdown: &Countdown) -> usize {
    let groups = groups(countdown);
    let digits: usize = groups.iter().map(|g| group_width(g)).sum();
    digits + SEPARATOR_WIDTH * (groups.len() - 1)
}

/// Label row aligned under [`build_countdown_art`], each label centered on
/// its digit group.
pub fn countdown_labels(countdown: &Countdown) -> String {
    let groups = groups(countdown);
    let mut line = String::new();

    for (i, (group, label)) in groups.iter().zip(LABELS).enumerate() {
        if i > 0 {
            line.push_str(&" ".repeat(SEPARATOR_WIDTH));
        }
        let width = group_width(group);
        line.push_str(&format!("{label:^width$}"));
    }

    line
}

/// Single-line countdown for terminals too narrow for block digits.
pub fn compact_countdown(countdown: &Countdown) -> String {
    let [days, hours, minutes, seconds] = groups(countdown);
    format!("{days}d {hours}h {minutes}m {seconds}s")
}
