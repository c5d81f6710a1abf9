//! Streak tracking and calendar helpers
//!
//! A streak counts consecutive calendar days with at least one completed quiz.

use std::sync::{Arc, Mutex};

use chrono::{Local, NaiveDate};

/// Date format used in the persisted record
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Format written by older browser builds (`Date.toDateString()`)
const LEGACY_DAY_FORMAT: &str = "%a %b %d %Y";

/// Source of the current calendar date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a settable date. Clones share the same date.
#[derive(Debug, Clone)]
pub struct FixedClock {
    date: Arc<Mutex<NaiveDate>>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Arc::new(Mutex::new(date)),
        }
    }

    pub fn set(&self, date: NaiveDate) {
        *self.date.lock().expect("clock lock") = date;
    }

    pub fn advance_days(&self, days: u64) {
        let mut date = self.date.lock().expect("clock lock");
        *date = *date + chrono::Days::new(days);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.date.lock().expect("clock lock")
    }
}

/// Parse a stored day, accepting both the current and the legacy format
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DAY_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(s, LEGACY_DAY_FORMAT))
        .ok()
}

/// Streak after a quiz completed on `today`.
///
/// Same day keeps the streak, exactly one day later extends it, anything
/// else (first play, gaps, a last date in the future) starts over at 1.
pub fn next_streak(current: u32, last_play: Option<NaiveDate>, today: NaiveDate) -> u32 {
    let Some(last) = last_play else {
        return 1;
    };

    match (today - last).num_days() {
        0 => current.max(1),
        1 => current.saturating_add(1),
        _ => 1,
    }
}

/// Whether the streak is still alive (played today or yesterday)
pub fn is_active(last_play: Option<NaiveDate>, today: NaiveDate) -> bool {
    last_play.is_some_and(|last| (0..=1).contains(&(today - last).num_days()))
}
