//! Leaderboard command implementation

use readsmart::game::GameEngine;

/// Show standings against the rival roster
pub fn leaderboard_command(engine: &GameEngine) {
    println!("🏅 Leaderboard\n");
    for entry in engine.leaderboard() {
        let you = if entry.is_player { " ⭐" } else { "" };
        println!(
            "  {:>2}. {} {:<12} {:>7} XP{}",
            entry.position, entry.glyph, entry.name, entry.xp, you
        );
    }
}
