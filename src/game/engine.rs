//! Game engine - core progression logic
//!
//! Applies quiz completions to the player record (XP, streak, rivals,
//! subject history, daily counters) and persists the result. The state
//! transition itself is [`apply_completion`], a pure function of the
//! previous record, the quiz result, the date and a random source.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use super::GameError;
use super::achievements::{self, AchievementId, AchievementStatus};
use super::encouragement;
use super::leaderboard::{self, LeaderboardEntry};
use super::levels::level;
use super::quests::{self, QuestId, QuestStatus};
use super::ranks::Rank;
use super::record::{PlayerRecord, round_percentage};
use super::rivals::{self, Rival};
use super::streaks::{Clock, LocalClock, next_streak};
use crate::storage::RecordStore;

/// XP granted per percentage point scored
pub const XP_PER_PERCENT: u32 = 2;

/// A finished quiz as reported by the quiz flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub subject: String,
    pub correct: u32,
    pub total: u32,
}

impl QuizResult {
    /// Surrounding whitespace is stripped from `subject`
    pub fn new(subject: impl Into<String>, correct: u32, total: u32) -> Self {
        let subject: String = subject.into();
        Self {
            subject: subject.trim().to_string(),
            correct,
            total,
        }
    }

    /// Reject results the progression rules can't score
    pub fn validate(&self) -> Result<(), GameError> {
        if self.subject.trim().is_empty() {
            return Err(GameError::EmptySubject);
        }
        if self.total == 0 {
            return Err(GameError::NoQuestions);
        }
        if self.correct > self.total {
            return Err(GameError::CorrectExceedsTotal {
                correct: self.correct,
                total: self.total,
            });
        }
        Ok(())
    }

    /// Rounded score percentage (0-100). Requires a validated result.
    pub fn percentage(&self) -> u32 {
        round_percentage(self.correct, self.total)
    }

    /// XP this result is worth (0-200)
    pub fn xp(&self) -> u32 {
        xp_for_percentage(self.percentage())
    }
}

/// The only reward formula: accuracy alone decides XP
pub fn xp_for_percentage(percentage: u32) -> u32 {
    percentage * XP_PER_PERCENT
}

/// Things that happened during a completion, in the order they are reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    XpAwarded { amount: u32 },
    LevelUp { old_level: u32, new_level: u32 },
    RankUp { old_rank: Rank, new_rank: Rank },
    StreakExtended { count: u32 },
    StreakReset { previous: u32 },
    NewSubject { subject: String },
    QuestCompleted { quest: QuestId },
    AchievementUnlocked { achievement: AchievementId },
}

/// Result of a completed quiz
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOutcome {
    pub xp_earned: u32,
    pub percentage: u32,
    pub streak: u32,
    pub events: Vec<GameEvent>,
}

/// Apply one quiz completion to `prev` as of `today`.
///
/// Returns the next record and what changed; `prev` is not touched and
/// nothing is persisted. Invalid results are rejected before any change.
pub fn apply_completion(
    prev: &PlayerRecord,
    result: &QuizResult,
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Result<(PlayerRecord, CompletionOutcome), GameError> {
    result.validate()?;

    let percentage = result.percentage();
    let xp_earned = xp_for_percentage(percentage);

    // Daily counters from another day read as zero
    let before = prev.as_of(today);
    let mut next = before.clone();

    let is_new_day = !prev.played_on(today);
    next.streak = if is_new_day {
        next_streak(prev.streak, prev.last_play_date, today)
    } else {
        before.streak
    };

    rivals::grow_all(&mut next.rival_progress, rng);

    // Reuse the spelling already on record so "math" and "Math" are one subject
    let subject = next
        .subjects_played
        .iter()
        .find(|s| s.eq_ignore_ascii_case(&result.subject))
        .cloned()
        .unwrap_or_else(|| result.subject.clone());
    let new_subject = next.subjects_played.insert(subject.clone());

    next.xp = next.xp.saturating_add(xp_earned);
    next.total_quizzes = next.total_quizzes.saturating_add(1);
    next.total_correct = next.total_correct.saturating_add(result.correct);
    next.total_answered = next.total_answered.saturating_add(result.total);
    next.last_play_date = Some(today);
    next.today_quizzes = before.today_quizzes.saturating_add(1);
    next.today_best = before.today_best.max(percentage);
    next.best_score = before.best_score.max(percentage);
    next.best_streak = before.longest_streak().max(next.streak);

    let mut events = vec![GameEvent::XpAwarded { amount: xp_earned }];

    let (old_level, new_level) = (level(prev.xp), level(next.xp));
    if new_level > old_level {
        events.push(GameEvent::LevelUp {
            old_level,
            new_level,
        });
    }

    let (old_rank, new_rank) = (prev.rank(), next.rank());
    if new_rank > old_rank {
        events.push(GameEvent::RankUp { old_rank, new_rank });
    }

    if next.streak > before.streak {
        events.push(GameEvent::StreakExtended { count: next.streak });
    } else if is_new_day && next.streak < before.streak {
        events.push(GameEvent::StreakReset {
            previous: before.streak,
        });
    }

    if new_subject {
        events.push(GameEvent::NewSubject { subject });
    }

    events.extend(
        quests::newly_completed(&before, &next)
            .into_iter()
            .map(|quest| GameEvent::QuestCompleted { quest }),
    );

    events.extend(
        achievements::newly_unlocked(&before, &next)
            .into_iter()
            .map(|achievement| GameEvent::AchievementUnlocked { achievement }),
    );

    let outcome = CompletionOutcome {
        xp_earned,
        percentage,
        streak: next.streak,
        events,
    };

    Ok((next, outcome))
}

/// How the player appears on the leaderboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerIdentity {
    pub name: String,
    pub glyph: String,
}

impl Default for PlayerIdentity {
    fn default() -> Self {
        Self {
            name: "You".to_string(),
            glyph: "🦉".to_string(),
        }
    }
}

/// Owns the player record and routes every mutation through
/// [`complete_quiz`](Self::complete_quiz) or [`reset`](Self::reset),
/// saving after each one.
pub struct GameEngine {
    record: PlayerRecord,
    store: Box<dyn RecordStore>,
    rng: Box<dyn RngCore>,
    clock: Box<dyn Clock>,
    identity: PlayerIdentity,
}

impl GameEngine {
    /// Load from `store` using the local date and an entropy-seeded RNG
    pub fn load(store: impl RecordStore + 'static) -> Self {
        Self::load_with(store, StdRng::from_entropy(), LocalClock)
    }

    /// Load with an explicit random source and clock
    pub fn load_with(
        store: impl RecordStore + 'static,
        rng: impl RngCore + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        let mut record = match store.load() {
            Ok(Some(record)) => record,
            Ok(None) => {
                tracing::debug!("No saved progress, starting fresh");
                PlayerRecord::default()
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable progress, starting fresh: {}", e);
                PlayerRecord::default()
            }
        };
        record.normalize_for_day(clock.today());

        Self {
            record,
            store: Box::new(store),
            rng: Box::new(rng),
            clock: Box::new(clock),
            identity: PlayerIdentity::default(),
        }
    }

    pub fn with_identity(mut self, identity: PlayerIdentity) -> Self {
        self.identity = identity;
        self
    }

    /// The record as last written
    pub fn record(&self) -> &PlayerRecord {
        &self.record
    }

    /// The record as it reads today (stale daily counters zeroed)
    pub fn snapshot(&self) -> PlayerRecord {
        self.record.as_of(self.clock.today())
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Record a finished quiz and persist. Returns the XP earned with the events it caused.
    ///
    /// If saving fails the in-memory record keeps the update and the storage
    /// error is returned.
    pub fn complete_quiz(
        &mut self,
        subject: &str,
        correct: u32,
        total: u32,
    ) -> Result<CompletionOutcome, GameError> {
        let result = QuizResult::new(subject, correct, total);
        let today = self.clock.today();

        let (next, outcome) = apply_completion(&self.record, &result, today, &mut self.rng)?;
        self.record = next;

        tracing::info!(
            "Quiz completed: {} {}/{} -> +{} XP (total {}, streak {})",
            result.subject,
            result.correct,
            result.total,
            outcome.xp_earned,
            self.record.xp,
            self.record.streak
        );

        self.save()?;
        Ok(outcome)
    }

    /// Daily quests with their completion state for today
    pub fn daily_quests(&self) -> Vec<QuestStatus> {
        quests::evaluate(&self.snapshot())
    }

    /// Every achievement with its unlock state
    pub fn achievements(&self) -> Vec<AchievementStatus> {
        achievements::evaluate(&self.record)
    }

    /// Rival roster with current XP
    pub fn rivals(&self) -> Vec<Rival> {
        rivals::roster(&self.record.rival_progress)
    }

    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        leaderboard::standings(
            &self.identity.name,
            &self.identity.glyph,
            self.record.xp,
            &self.rivals(),
        )
    }

    /// Random post-quiz message
    pub fn encouragement(&mut self) -> &'static str {
        encouragement::pick(&mut self.rng)
    }

    /// Delete stored progress and restore the default record.
    /// If the store can't be cleared the in-memory record is kept.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.store.clear()?;
        self.record = PlayerRecord::default();
        tracing::info!("Progress reset");
        Ok(())
    }

    fn save(&self) -> Result<(), GameError> {
        self.store.save(&self.record)?;
        Ok(())
    }
}
