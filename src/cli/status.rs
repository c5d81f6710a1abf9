//! Status command implementation

use readsmart::game::{GameEngine, HOT_STREAK_DAYS, LEVEL_SIZE, is_active};

/// Show the player's progress
pub fn status_command(engine: &GameEngine) {
    let record = engine.snapshot();
    let level = record.level_info();
    let rank = record.rank();

    println!(
        "Level {} ({}/{} XP, {} to next)",
        level.level,
        level.xp_in_level,
        LEVEL_SIZE,
        level.xp_to_next()
    );
    println!("Total XP: {}", record.xp);

    match rank.next() {
        Some(next) => println!(
            "Rank: {} {} ({} XP to {})",
            rank.tier().emoji,
            rank,
            next.min_xp - record.xp,
            next.rank
        ),
        None => println!("Rank: {} {} (top rank)", rank.tier().emoji, rank),
    }

    if record.last_play_date.is_some() && !is_active(record.last_play_date, engine.today()) {
        println!("Streak: {} day(s), lapsed (next quiz starts over)", record.streak);
    } else if record.streak >= HOT_STREAK_DAYS {
        println!("Streak: {} day(s) 🔥", record.streak);
    } else {
        println!("Streak: {} day(s)", record.streak);
    }
    println!(
        "Quizzes: {} ({} / {} correct, {}% accuracy)",
        record.total_quizzes,
        record.total_correct,
        record.total_answered,
        record.accuracy()
    );
    println!(
        "Today: {} quiz(zes), best {}%",
        record.today_quizzes, record.today_best
    );

    if !record.subjects_played.is_empty() {
        let subjects: Vec<&str> = record.subjects_played.iter().map(String::as_str).collect();
        println!("Subjects played: {}", subjects.join(", "));
    }
}
