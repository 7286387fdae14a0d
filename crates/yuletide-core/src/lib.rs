//! Core types for the yuletide greeting card.
//!
//! Everything here is plain data and pure logic: the per-year card book,
//! the unlock date and countdown math, the gift box stage machine and the
//! chrome color themes. Nothing in this crate touches the terminal.

mod card;
mod gift;
mod theme;
mod unlock;

pub use card::{CardBook, DEFAULT_ACCENT, YearCard, parse_accent};
pub use gift::{GiftStage, GiftState, SHAKE_DURATION_MS, SHAKE_OFFSETS, UNWRAP_DURATION_MS};
pub use theme::ColorTheme;
pub use unlock::{Countdown, UnlockDate};
