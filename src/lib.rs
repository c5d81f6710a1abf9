//! ReadSmart - gamified quizzes
//!
//! Players finish quizzes and earn XP from their accuracy. XP drives levels
//! and ranks, consecutive days of play build a streak, daily quests track
//! today's activity, and a roster of rivals grows alongside the player for
//! the leaderboard.
//!
//! ## Modules
//!
//! - [`game`]: the progression engine and everything derived from the record
//! - [`storage`]: where the player record is persisted
//! - [`bank`]: the question bank and quiz sessions
//! - [`config`]: `~/.readsmart/config.toml`

pub mod bank;
pub mod config;
pub mod game;
pub mod storage;
