//! Achievement definitions and unlock checks
//!
//! Achievements are permanent once earned. Each one is a predicate over the
//! record's lifetime fields (`best_streak`, `best_score`, totals, XP), so
//! nothing beyond the record itself needs to be stored.

use super::levels::level;
use super::record::PlayerRecord;

/// Streak length that lights the streak badge and unlocks On Fire
pub const HOT_STREAK_DAYS: u32 = 7;

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    FirstSteps,
    OnFire,
    Sharpshooter,
    Scholar,
    Guardian,
}

impl AchievementId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstSteps => "first_steps",
            Self::OnFire => "on_fire",
            Self::Sharpshooter => "sharpshooter",
            Self::Scholar => "scholar",
            Self::Guardian => "guardian",
        }
    }
}

/// Achievement definition
#[derive(Debug)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    check: fn(&PlayerRecord) -> bool,
}

impl Achievement {
    pub fn is_unlocked(&self, record: &PlayerRecord) -> bool {
        (self.check)(record)
    }
}

/// An achievement tagged with whether the player has it
#[derive(Debug, Clone, Copy)]
pub struct AchievementStatus {
    pub achievement: &'static Achievement,
    pub unlocked: bool,
}

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: AchievementId::FirstSteps,
        name: "First Steps",
        description: "Complete your first quiz",
        emoji: "⭐",
        check: |r| r.total_quizzes >= 1,
    },
    Achievement {
        id: AchievementId::OnFire,
        name: "On Fire",
        description: "7-day streak",
        emoji: "⚡",
        check: |r| r.longest_streak() >= HOT_STREAK_DAYS,
    },
    Achievement {
        id: AchievementId::Sharpshooter,
        name: "Sharpshooter",
        description: "100% on a quiz",
        emoji: "🎯",
        check: |r| r.best_score >= 100,
    },
    Achievement {
        id: AchievementId::Scholar,
        name: "Scholar",
        description: "Reach level 20",
        emoji: "👑",
        check: |r| level(r.xp) >= 20,
    },
    Achievement {
        id: AchievementId::Guardian,
        name: "Guardian",
        description: "30-day streak",
        emoji: "🛡",
        check: |r| r.longest_streak() >= 30,
    },
];

/// Every achievement with its unlock state
pub fn evaluate(record: &PlayerRecord) -> Vec<AchievementStatus> {
    ACHIEVEMENTS
        .iter()
        .map(|achievement| AchievementStatus {
            achievement,
            unlocked: achievement.is_unlocked(record),
        })
        .collect()
}

/// Achievements unlocked in `after` that were locked in `before`
pub fn newly_unlocked(before: &PlayerRecord, after: &PlayerRecord) -> Vec<AchievementId> {
    ACHIEVEMENTS
        .iter()
        .filter(|a| !a.is_unlocked(before) && a.is_unlocked(after))
        .map(|a| a.id)
        .collect()
}
