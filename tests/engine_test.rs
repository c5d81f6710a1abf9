//! Integration tests for the game engine: completions, streaks, quests and reset

mod common;

use readsmart::game::{
    AchievementId, FixedClock, GameError, GameEvent, PlayerRecord, QuestId, RIVALS, Rank, level,
    rank, xp_within_level,
};
use readsmart::storage::{MemoryStore, RecordStore};

use common::{day, test_engine};

#[test]
fn test_two_quizzes_same_day() {
    let store = MemoryStore::new();
    let clock = FixedClock::new(day(2026, 10, 18));
    let mut engine = test_engine(store.clone(), &clock);

    let first = engine.complete_quiz("Math", 8, 10).unwrap();
    assert_eq!(first.xp_earned, 160);
    let record = engine.record();
    assert_eq!(record.xp, 160);
    assert_eq!(record.total_quizzes, 1);
    assert_eq!(record.streak, 1);
    assert_eq!(record.today_best, 80);

    let second = engine.complete_quiz("Math", 10, 10).unwrap();
    assert_eq!(second.xp_earned, 200);
    let record = engine.record();
    assert_eq!(record.xp, 360);
    assert_eq!(record.total_quizzes, 2);
    assert_eq!(record.today_quizzes, 2);
    assert_eq!(record.today_best, 100);
    assert_eq!(record.total_correct, 18);
    assert_eq!(record.total_answered, 20);
    assert_eq!(record.subjects_played.len(), 1);
}

#[test]
fn test_streak_rules() {
    let clock = FixedClock::new(day(2026, 10, 18));
    let mut engine = test_engine(MemoryStore::new(), &clock);

    engine.complete_quiz("Math", 5, 10).unwrap();
    assert_eq!(engine.record().streak, 1);

    // Same day: unchanged
    engine.complete_quiz("Art", 5, 10).unwrap();
    assert_eq!(engine.record().streak, 1);

    // Next day: +1
    clock.advance_days(1);
    let outcome = engine.complete_quiz("Art", 5, 10).unwrap();
    assert_eq!(engine.record().streak, 2);
    assert!(outcome.events.contains(&GameEvent::StreakExtended { count: 2 }));

    clock.advance_days(1);
    engine.complete_quiz("Art", 5, 10).unwrap();
    assert_eq!(engine.record().streak, 3);

    // Two-day gap: back to 1
    clock.advance_days(2);
    engine.complete_quiz("Art", 5, 10).unwrap();
    assert_eq!(engine.record().streak, 1);
}

#[test]
fn test_new_day_resets_daily_counters_on_completion() {
    let clock = FixedClock::new(day(2026, 10, 18));
    let mut engine = test_engine(MemoryStore::new(), &clock);

    engine.complete_quiz("Math", 10, 10).unwrap();
    engine.complete_quiz("Math", 10, 10).unwrap();
    assert_eq!(engine.record().today_quizzes, 2);

    clock.advance_days(1);
    engine.complete_quiz("Math", 3, 10).unwrap();
    assert_eq!(engine.record().today_quizzes, 1);
    assert_eq!(engine.record().today_best, 30);
}

#[test]
fn test_counters_never_shrink() {
    let clock = FixedClock::new(day(2026, 1, 1));
    let mut engine = test_engine(MemoryStore::new(), &clock);
    let results = [(0, 5), (5, 5), (3, 7), (1, 1), (0, 1), (9, 12), (12, 12)];

    let mut prev = engine.record().clone();
    for (i, (correct, total)) in results.into_iter().enumerate() {
        if i % 3 == 0 {
            clock.advance_days(1);
        }
        engine.complete_quiz("Science", correct, total).unwrap();
        let now = engine.record();

        assert!(now.xp >= prev.xp);
        assert!(now.total_quizzes > prev.total_quizzes);
        assert!(now.total_correct >= prev.total_correct);
        assert!(now.total_answered > prev.total_answered);
        assert!(now.total_answered >= now.total_correct);
        prev = now.clone();
    }
}

#[test]
fn test_rivals_grow_within_range() {
    let clock = FixedClock::new(day(2026, 10, 18));
    let mut engine = test_engine(MemoryStore::new(), &clock);

    for _ in 0..20 {
        let before: Vec<u32> = engine.rivals().iter().map(|r| r.xp).collect();
        // Growth doesn't depend on the score
        engine.complete_quiz("Music", 0, 10).unwrap();
        let after = engine.rivals();

        for (rival, old) in after.iter().zip(before) {
            let (min, max) = rival.profile.growth;
            let gain = rival.xp - old;
            assert!(gain >= min && gain <= max, "{} grew {}", rival.profile.id, gain);
        }
    }
    assert_eq!(engine.record().rival_progress.len(), RIVALS.len());
}

#[test]
fn test_completion_is_persisted() {
    let store = MemoryStore::new();
    let clock = FixedClock::new(day(2026, 10, 18));
    let mut engine = test_engine(store.clone(), &clock);

    engine.complete_quiz("Geography", 4, 5).unwrap();

    let saved = store.load().unwrap().unwrap();
    assert_eq!(&saved, engine.record());

    let reloaded = test_engine(store, &clock);
    assert_eq!(reloaded.record(), &saved);
}

#[test]
fn test_rejected_completion_changes_nothing() {
    let store = MemoryStore::new();
    let clock = FixedClock::new(day(2026, 10, 18));
    let mut engine = test_engine(store.clone(), &clock);

    assert!(matches!(
        engine.complete_quiz("Math", 0, 0),
        Err(GameError::NoQuestions)
    ));
    assert!(matches!(
        engine.complete_quiz("Math", 11, 10),
        Err(GameError::CorrectExceedsTotal { .. })
    ));
    assert!(matches!(
        engine.complete_quiz("", 1, 10),
        Err(GameError::EmptySubject)
    ));

    assert_eq!(engine.record(), &PlayerRecord::default());
    assert!(store.contents().is_none());
}

#[test]
fn test_load_zeroes_stale_daily_counters() {
    let stale = PlayerRecord {
        xp: 700,
        streak: 5,
        today_quizzes: 3,
        today_best: 95,
        last_play_date: Some(day(2026, 10, 16)),
        ..Default::default()
    };
    let store = MemoryStore::new();
    store.save(&stale).unwrap();

    let clock = FixedClock::new(day(2026, 10, 18));
    let engine = test_engine(store, &clock);

    let record = engine.record();
    assert_eq!(record.today_quizzes, 0);
    assert_eq!(record.today_best, 0);
    // Streak only changes on completion
    assert_eq!(record.streak, 5);
    assert_eq!(record.xp, 700);
}

#[test]
fn test_corrupt_store_loads_default() {
    let store = MemoryStore::with_contents("{\"xp\": \"lots\"");
    let clock = FixedClock::new(day(2026, 10, 18));
    let engine = test_engine(store, &clock);
    assert_eq!(engine.record(), &PlayerRecord::default());
}

#[test]
fn test_daily_quests_progress() {
    let clock = FixedClock::new(day(2026, 10, 18));
    let mut engine = test_engine(MemoryStore::new(), &clock);

    let done = |engine: &readsmart::game::GameEngine| -> Vec<QuestId> {
        engine
            .daily_quests()
            .into_iter()
            .filter(|s| s.completed)
            .map(|s| s.quest.id)
            .collect()
    };

    assert!(done(&engine).is_empty());

    engine.complete_quiz("Math", 7, 10).unwrap();
    assert_eq!(done(&engine), vec![QuestId::FirstQuiz]);

    let outcome = engine.complete_quiz("Reading", 9, 10).unwrap();
    assert!(outcome.events.contains(&GameEvent::QuestCompleted {
        quest: QuestId::NewSubject
    }));
    assert_eq!(
        done(&engine),
        vec![QuestId::FirstQuiz, QuestId::HighScore, QuestId::NewSubject]
    );

    engine.complete_quiz("Reading", 1, 10).unwrap();
    assert_eq!(done(&engine).len(), 4);

    // Next morning only the lifetime quest is still done
    clock.advance_days(1);
    assert_eq!(done(&engine), vec![QuestId::NewSubject]);
}

#[test]
fn test_reset_clears_everything() {
    let store = MemoryStore::new();
    let clock = FixedClock::new(day(2026, 10, 18));
    let mut engine = test_engine(store.clone(), &clock);

    engine.complete_quiz("Math", 10, 10).unwrap();
    assert!(store.contents().is_some());

    engine.reset().unwrap();
    assert_eq!(engine.record(), &PlayerRecord::default());
    assert!(store.contents().is_none());

    let reloaded = test_engine(store, &clock);
    assert_eq!(reloaded.record(), &PlayerRecord::default());
}

#[test]
fn test_leaderboard_tracks_player() {
    let clock = FixedClock::new(day(2026, 10, 18));
    let mut engine = test_engine(MemoryStore::new(), &clock);

    let board = engine.leaderboard();
    assert_eq!(board.len(), RIVALS.len() + 1);
    assert_eq!(board.last().map(|e| e.is_player), Some(true));

    for _ in 0..10 {
        engine.complete_quiz("Math", 10, 10).unwrap();
    }
    let board = engine.leaderboard();
    let you = board.iter().find(|e| e.is_player).unwrap();
    assert_eq!(you.xp, 2000);
    assert!(board.windows(2).all(|w| w[0].xp >= w[1].xp));
    assert_eq!(
        board.iter().map(|e| e.position).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5]
    );
}

#[test]
fn test_level_and_rank_helpers() {
    assert_eq!(level(0), 1);
    assert_eq!(level(499), 1);
    assert_eq!(level(500), 2);
    assert_eq!(xp_within_level(1234), 234);
    assert_eq!(rank(999), Rank::Bronze);
    assert_eq!(rank(1000), Rank::Silver);
    assert_eq!(rank(20000), Rank::Elite);
}

#[test]
fn test_subject_case_and_spacing_count_once() {
    let clock = FixedClock::new(day(2026, 10, 18));
    let mut engine = test_engine(MemoryStore::new(), &clock);

    engine.complete_quiz("Math", 5, 10).unwrap();
    engine.complete_quiz("math ", 5, 10).unwrap();
    engine.complete_quiz("  MATH", 5, 10).unwrap();

    let played: Vec<&str> = engine
        .record()
        .subjects_played
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(played, vec!["Math"]);

    let new_subject_done = engine
        .daily_quests()
        .iter()
        .any(|s| s.quest.id == QuestId::NewSubject && s.completed);
    assert!(!new_subject_done);
}

#[test]
fn test_achievements_unlock_and_persist() {
    let store = MemoryStore::new();
    let clock = FixedClock::new(day(2026, 10, 1));
    let mut engine = test_engine(store.clone(), &clock);

    let unlocked = |engine: &readsmart::game::GameEngine| -> Vec<AchievementId> {
        engine
            .achievements()
            .into_iter()
            .filter(|s| s.unlocked)
            .map(|s| s.achievement.id)
            .collect()
    };
    assert!(unlocked(&engine).is_empty());

    let outcome = engine.complete_quiz("Art", 3, 10).unwrap();
    assert!(outcome.events.contains(&GameEvent::AchievementUnlocked {
        achievement: AchievementId::FirstSteps
    }));

    // Six more consecutive days makes a 7-day streak
    for _ in 0..6 {
        clock.advance_days(1);
        engine.complete_quiz("Art", 3, 10).unwrap();
    }
    assert_eq!(engine.record().streak, 7);
    assert_eq!(
        unlocked(&engine),
        vec![AchievementId::FirstSteps, AchievementId::OnFire]
    );

    // Let the streak lapse, then ace a quiz
    clock.advance_days(3);
    engine.complete_quiz("Art", 10, 10).unwrap();
    assert_eq!(engine.record().streak, 1);
    assert_eq!(
        unlocked(&engine),
        vec![
            AchievementId::FirstSteps,
            AchievementId::OnFire,
            AchievementId::Sharpshooter
        ]
    );

    let reloaded = test_engine(store, &clock);
    assert_eq!(reloaded.record().best_streak, 7);
    assert_eq!(reloaded.record().best_score, 100);
    assert_eq!(unlocked(&reloaded).len(), 3);
}
