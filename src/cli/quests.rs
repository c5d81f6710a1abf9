//! Quests command implementation

use readsmart::game::{GameEngine, QuestIcon};

/// Show today's daily quests
pub fn quests_command(engine: &GameEngine) {
    let quests = engine.daily_quests();
    let done = quests.iter().filter(|q| q.completed).count();

    println!("⚔️ Daily Quests ({}/{})\n", done, quests.len());
    for status in quests {
        let mark = if status.completed { "✔" } else { " " };
        println!(
            "  [{}] {} {:<24} +{} XP",
            mark,
            icon(status.quest.icon),
            status.quest.title,
            status.quest.xp
        );
    }
}

fn icon(icon: QuestIcon) -> &'static str {
    match icon {
        QuestIcon::Sword => "🗡",
        QuestIcon::Book => "📖",
        QuestIcon::Brain => "🧠",
        QuestIcon::Zap => "⚡",
    }
}
