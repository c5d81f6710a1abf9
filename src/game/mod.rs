//! Gamification system: XP, Levels, Ranks, Streaks, Rivals, Daily Quests and Achievements
//!
//! The [`GameEngine`] owns the persisted [`PlayerRecord`] and is the only
//! place it changes. Everything else here is derived from the record.
//!
//! # Usage
//!
//! ```ignore
//! let mut engine = GameEngine::load(JsonFileStore::in_dir(&data_dir));
//!
//! let outcome = engine.complete_quiz("Math", 8, 10)?;
//! assert_eq!(outcome.xp_earned, 160);
//!
//! for status in engine.daily_quests() {
//!     println!("{} {}", status.quest.title, status.completed);
//! }
//! ```

mod achievements;
mod encouragement;
mod engine;
mod leaderboard;
mod levels;
mod quests;
mod ranks;
mod record;
mod rivals;
mod streaks;

pub use achievements::{
    ACHIEVEMENTS, Achievement, AchievementId, AchievementStatus, HOT_STREAK_DAYS,
};
pub use encouragement::ENCOURAGEMENTS;
pub use engine::{
    CompletionOutcome, GameEngine, GameEvent, PlayerIdentity, QuizResult, XP_PER_PERCENT,
    apply_completion, xp_for_percentage,
};
pub use leaderboard::{LeaderboardEntry, standings};
pub use levels::{LEVEL_SIZE, LevelInfo, level, xp_within_level};
pub use quests::{DAILY_QUESTS, DailyQuest, QuestIcon, QuestId, QuestStatus};
pub use ranks::{RANKS, Rank, RankTier};
pub use record::{PlayerRecord, round_percentage};
pub use rivals::{RIVALS, Rival, RivalProfile};
pub use streaks::{Clock, FixedClock, LocalClock, is_active, parse_day};

use crate::storage::StorageError;

/// Error type for game operations
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("A quiz needs at least one question")]
    NoQuestions,

    #[error("Correct answers ({correct}) exceed questions asked ({total})")]
    CorrectExceedsTotal { correct: u32, total: u32 },

    #[error("Subject name must not be empty")]
    EmptySubject,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Rank for a given XP total
pub fn rank(xp: u32) -> Rank {
    Rank::for_xp(xp)
}
