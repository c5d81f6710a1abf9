//! Persisted player progress
//!
//! The record is stored as one JSON document with camelCase keys. Every
//! field has a default, so documents written by older builds (missing
//! fields, `npcXp`, browser-style dates) still load.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::levels::LevelInfo;
use super::ranks::Rank;
use super::rivals;

/// The sole persisted entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerRecord {
    pub xp: u32,
    pub total_quizzes: u32,
    pub total_correct: u32,
    pub total_answered: u32,
    /// Consecutive days with at least one quiz (always >= 1)
    pub streak: u32,
    #[serde(with = "play_date")]
    pub last_play_date: Option<NaiveDate>,
    pub subjects_played: BTreeSet<String>,
    pub today_quizzes: u32,
    /// Best percentage scored today
    pub today_best: u32,
    #[serde(alias = "npcXp")]
    pub rival_progress: BTreeMap<String, u32>,
    /// Longest streak ever reached
    pub best_streak: u32,
    /// Best percentage ever scored on a single quiz
    pub best_score: u32,
}

impl Default for PlayerRecord {
    fn default() -> Self {
        Self {
            xp: 0,
            total_quizzes: 0,
            total_correct: 0,
            total_answered: 0,
            streak: 1,
            last_play_date: None,
            subjects_played: BTreeSet::new(),
            today_quizzes: 0,
            today_best: 0,
            rival_progress: rivals::starting_progress(),
            best_streak: 0,
            best_score: 0,
        }
    }
}

impl PlayerRecord {
    pub fn played_on(&self, day: NaiveDate) -> bool {
        self.last_play_date == Some(day)
    }

    /// Zero the daily counters if the record was last touched on another day.
    /// Streak is left alone; it only changes when a quiz completes.
    pub fn normalize_for_day(&mut self, today: NaiveDate) {
        if !self.played_on(today) {
            self.today_quizzes = 0;
            self.today_best = 0;
        }
        self.streak = self.streak.max(1);
    }

    /// Longest streak seen, counting the current one
    pub fn longest_streak(&self) -> u32 {
        self.best_streak.max(self.streak)
    }

    /// Copy of the record as it reads on `today`
    pub fn as_of(&self, today: NaiveDate) -> PlayerRecord {
        let mut view = self.clone();
        view.normalize_for_day(today);
        view
    }

    pub fn level_info(&self) -> LevelInfo {
        LevelInfo::new(self.xp)
    }

    pub fn rank(&self) -> Rank {
        Rank::for_xp(self.xp)
    }

    /// Lifetime accuracy as a rounded percentage (0 when nothing answered)
    pub fn accuracy(&self) -> u32 {
        if self.total_answered == 0 {
            return 0;
        }
        round_percentage(self.total_correct, self.total_answered)
    }
}

/// `round(part / whole * 100)` with halves rounded up, in integer math.
/// `whole` must be non-zero.
pub fn round_percentage(part: u32, whole: u32) -> u32 {
    let (part, whole) = (part as u64, whole as u64);
    ((200 * part + whole) / (2 * whole)) as u32
}

mod play_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::game::streaks::{DAY_FORMAT, parse_day};

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => s.serialize_str(&d.format(DAY_FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    /// Unreadable dates are dropped rather than failing the whole record
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw.as_deref().and_then(parse_day))
    }
}
