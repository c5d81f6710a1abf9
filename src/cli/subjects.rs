//! Subjects command implementation

use readsmart::bank::QuestionBank;
use readsmart::game::PlayerRecord;

/// List subjects in the question bank
pub fn subjects_command(bank: &QuestionBank, record: &PlayerRecord) {
    println!("Subjects ({}):\n", bank.subjects().len());
    for subject in bank.subjects() {
        let played = if record.subjects_played.contains(&subject.name) {
            " (played)"
        } else {
            ""
        };
        println!(
            "  {:<12} {} questions{}",
            subject.name,
            subject.questions.len(),
            played
        );
    }
}
