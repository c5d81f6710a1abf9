//! CLI command implementations

pub mod achievements;
pub mod init;
pub mod leaderboard;
pub mod play;
pub mod quests;
pub mod quiz;
pub mod reset;
pub mod status;
pub mod subjects;

use std::path::Path;

use anyhow::{Result, bail};

use readsmart::bank::{QuestionBank, Subject};
use readsmart::config::Config;
use readsmart::game::{ACHIEVEMENTS, AchievementId, GameEngine, GameEvent, QuestId};
use readsmart::storage::{JsonFileStore, MemoryStore};

/// Build the engine over the configured store
pub fn open_engine(config: &Config, data_dir: Option<&Path>, ephemeral: bool) -> GameEngine {
    let engine = if ephemeral {
        GameEngine::load(MemoryStore::new())
    } else {
        let data_dir = data_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| config.data_dir());
        GameEngine::load(JsonFileStore::in_dir(&data_dir))
    };
    engine.with_identity(config.identity())
}

/// Look up a bank subject by name, ignoring case and surrounding spaces
pub fn resolve_subject<'a>(bank: &'a QuestionBank, name: &str) -> Result<&'a Subject> {
    match bank.subject(name) {
        Some(subject) => Ok(subject),
        None => {
            let names: Vec<&str> = bank.subjects().iter().map(|s| s.name.as_str()).collect();
            bail!("Unknown subject: {} (available: {})", name.trim(), names.join(", "))
        }
    }
}

/// One-line description of a completion event
pub fn describe_event(event: &GameEvent) -> String {
    match event {
        GameEvent::XpAwarded { amount } => format!("+{} XP", amount),
        GameEvent::LevelUp {
            old_level,
            new_level,
        } => format!("Level up! {} → {}", old_level, new_level),
        GameEvent::RankUp { old_rank, new_rank } => format!(
            "Rank up! {} {} → {} {}",
            old_rank.tier().emoji,
            old_rank,
            new_rank.tier().emoji,
            new_rank
        ),
        GameEvent::StreakExtended { count } => format!("🔥 Streak extended to {} days", count),
        GameEvent::StreakReset { previous } => {
            format!("Streak of {} days ended, starting over", previous)
        }
        GameEvent::NewSubject { subject } => format!("New subject played: {}", subject),
        GameEvent::QuestCompleted { quest } => format!("Quest complete: {}", quest_title(*quest)),
        GameEvent::AchievementUnlocked { achievement } => {
            format!("🏆 Achievement unlocked: {}", achievement_name(*achievement))
        }
    }
}

fn achievement_name(id: AchievementId) -> &'static str {
    ACHIEVEMENTS
        .iter()
        .find(|a| a.id == id)
        .map(|a| a.name)
        .unwrap_or("unknown achievement")
}

fn quest_title(id: QuestId) -> &'static str {
    readsmart::game::DAILY_QUESTS
        .iter()
        .find(|q| q.id == id)
        .map(|q| q.title)
        .unwrap_or("unknown quest")
}
