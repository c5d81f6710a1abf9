//! Init command implementation

use anyhow::{Result, bail};
use std::path::PathBuf;

use readsmart::config::Config;

/// Default configuration content for readsmart init
pub const DEFAULT_CONFIG: &str = r#"# ReadSmart Configuration
# =======================
#
# Available options:
#   data_dir       - Directory holding progress.json (default: ~/.readsmart)
#   question_bank  - TOML question bank to quiz from (default: built-in bank)
#   player_name    - Your name on the leaderboard (default: "You")
#   player_glyph   - Your avatar on the leaderboard (default: "🦉")
#
# Question bank format:
#
#   [[subject]]
#   name = "Math"
#
#   [[subject.question]]
#   text = "What is 7 × 8?"
#   options = ["54", "56", "64", "48"]
#   answer = 1            # 0-based index of the correct option

[settings]
# data_dir = "/path/to/progress"
# question_bank = "/path/to/questions.toml"
player_name = "You"
player_glyph = "🦉"
"#;

/// Initialize a new ReadSmart configuration
/// By default creates the global config at ~/.readsmart/config.toml
/// Use --config to specify a custom path
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
