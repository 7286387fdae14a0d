//! The date that unlocks the gift and the countdown towards it.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Any leap year works, it is only used to validate month/day pairs.
const LEAP_YEAR: i32 = 2024;

/// Month and day on which the gift unlocks, every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockDate {
    month: u32,
    day: u32,
}

impl Default for UnlockDate {
    fn default() -> Self {
        Self { month: 12, day: 25 }
    }
}

impl UnlockDate {
    /// Create an unlock date, `None` if the pair is not a calendar date.
    pub fn new(month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(LEAP_YEAR, month, day).map(|_| Self { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Whether the gift may be opened on `today`.
    ///
    /// Unlocked from the unlock day through the end of that month. Uses the
    /// same fallback as [`UnlockDate::instant_in`], so Feb 29 opens on Feb 28
    /// in common years.
    pub fn is_unlocked(&self, today: NaiveDate) -> bool {
        today.month() == self.month && today >= self.instant_in(today.year()).date()
    }

    /// Midnight of the unlock day in `year`.
    ///
    /// Feb 29 falls back to Feb 28 in common years.
    pub fn instant_in(&self, year: i32) -> NaiveDateTime {
        let date = (1..=self.day)
            .rev()
            .find_map(|day| NaiveDate::from_ymd_opt(year, self.month, day))
            .unwrap_or(NaiveDate::MIN);
        date.and_time(chrono::NaiveTime::MIN)
    }
}

/// Time remaining until the unlock instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Countdown {
    /// Countdown from `now` to the unlock instant of the same year.
    ///
    /// Once that instant has passed the countdown stays at zero.
    pub fn until(now: NaiveDateTime, unlock: UnlockDate) -> Self {
        let target = unlock.instant_in(now.year());
        let remaining = (target - now).num_seconds();
        if remaining <= 0 {
            return Self::default();
        }

        let remaining = remaining as u64;
        Self {
            days: (remaining / 86_400) as u32,
            hours: ((remaining / 3_600) % 24) as u32,
            minutes: ((remaining / 60) % 60) as u32,
            seconds: (remaining % 60) as u32,
        }
    }
}
