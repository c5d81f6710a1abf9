//! Daily quest definitions
//!
//! Quests are predicates over the record, re-evaluated on every read and
//! never persisted. The XP shown on a quest is display-only.

use super::record::PlayerRecord;

/// Unique identifier for each quest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestId {
    FirstQuiz,
    HighScore,
    ThreeQuizzes,
    NewSubject,
}

/// Icon shown next to a quest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestIcon {
    Sword,
    Book,
    Brain,
    Zap,
}

/// Quest definition
#[derive(Debug)]
pub struct DailyQuest {
    pub id: QuestId,
    pub title: &'static str,
    pub xp: u32,
    pub icon: QuestIcon,
    check: fn(&PlayerRecord) -> bool,
}

/// A quest tagged with its completion state
#[derive(Debug, Clone, Copy)]
pub struct QuestStatus {
    pub quest: &'static DailyQuest,
    pub completed: bool,
}

pub static DAILY_QUESTS: &[DailyQuest] = &[
    DailyQuest {
        id: QuestId::FirstQuiz,
        title: "Complete a quiz",
        xp: 50,
        icon: QuestIcon::Brain,
        check: |r| r.today_quizzes >= 1,
    },
    DailyQuest {
        id: QuestId::HighScore,
        title: "Score 80%+ on a quiz",
        xp: 75,
        icon: QuestIcon::Zap,
        check: |r| r.today_best >= 80,
    },
    DailyQuest {
        id: QuestId::ThreeQuizzes,
        title: "Complete 3 quizzes",
        xp: 100,
        icon: QuestIcon::Sword,
        check: |r| r.today_quizzes >= 3,
    },
    DailyQuest {
        id: QuestId::NewSubject,
        title: "Try a new subject",
        xp: 60,
        icon: QuestIcon::Book,
        check: |r| r.subjects_played.len() >= 2,
    },
];

impl QuestId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstQuiz => "q1",
            Self::HighScore => "q2",
            Self::ThreeQuizzes => "q3",
            Self::NewSubject => "q4",
        }
    }
}

impl DailyQuest {
    pub fn is_complete(&self, record: &PlayerRecord) -> bool {
        (self.check)(record)
    }
}

/// Evaluate every quest against an already day-normalized record
pub fn evaluate(record: &PlayerRecord) -> Vec<QuestStatus> {
    DAILY_QUESTS
        .iter()
        .map(|quest| QuestStatus {
            quest,
            completed: quest.is_complete(record),
        })
        .collect()
}

/// Quests that are complete in `after` but were not in `before`
pub fn newly_completed(before: &PlayerRecord, after: &PlayerRecord) -> Vec<QuestId> {
    DAILY_QUESTS
        .iter()
        .filter(|q| !q.is_complete(before) && q.is_complete(after))
        .map(|q| q.id)
        .collect()
}
