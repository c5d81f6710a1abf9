//! Configuration loading and management
//!
//! The global config lives in `~/.readsmart/config.toml` and is created
//! with defaults the first time it is needed.

mod io;

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::bank::QuestionBank;
use crate::game::PlayerIdentity;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory holding `progress.json` (defaults to ~/.readsmart)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Question bank TOML file; the built-in bank is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_bank: Option<PathBuf>,

    /// Name shown for the player on the leaderboard
    #[serde(default = "default_player_name")]
    pub player_name: String,

    #[serde(default = "default_player_glyph")]
    pub player_glyph: String,
}

fn default_player_name() -> String {
    "You".to_string()
}

fn default_player_glyph() -> String {
    "🦉".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            question_bank: None,
            player_name: default_player_name(),
            player_glyph: default_player_glyph(),
        }
    }
}

impl Config {
    /// Directory where progress is stored
    pub fn data_dir(&self) -> PathBuf {
        self.settings
            .data_dir
            .clone()
            .unwrap_or_else(Self::global_config_dir)
    }

    /// Load the configured question bank, or the built-in one
    pub fn question_bank(&self) -> Result<QuestionBank> {
        match &self.settings.question_bank {
            Some(path) => QuestionBank::from_file(path)
                .with_context(|| format!("Failed to load question bank: {}", path.display())),
            None => QuestionBank::builtin().context("Built-in question bank is invalid"),
        }
    }

    pub fn identity(&self) -> PlayerIdentity {
        PlayerIdentity {
            name: self.settings.player_name.clone(),
            glyph: self.settings.player_glyph.clone(),
        }
    }
}
