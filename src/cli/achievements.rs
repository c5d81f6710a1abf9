//! Achievements command implementation

use readsmart::game::GameEngine;

/// Show every achievement, unlocked ones first in definition order
pub fn achievements_command(engine: &GameEngine) {
    let achievements = engine.achievements();
    let unlocked = achievements.iter().filter(|a| a.unlocked).count();

    println!("🏆 Achievements ({}/{})\n", unlocked, achievements.len());
    for status in achievements.iter().filter(|a| a.unlocked) {
        let a = status.achievement;
        println!("  {} {:<14} {}", a.emoji, a.name, a.description);
    }
    for status in achievements.iter().filter(|a| !a.unlocked) {
        let a = status.achievement;
        println!("  🔒 {:<14} {}", a.name, a.description);
    }
}
