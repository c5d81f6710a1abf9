//! Play command implementation

use anyhow::Result;

use readsmart::bank::QuestionBank;
use readsmart::game::{CompletionOutcome, GameEngine};

use super::{describe_event, resolve_subject};

/// Record a quiz finished elsewhere, under the bank's name for its subject
pub fn play_command(
    engine: &mut GameEngine,
    bank: &QuestionBank,
    subject: &str,
    correct: u32,
    total: u32,
) -> Result<()> {
    let subject = resolve_subject(bank, subject)?;
    let outcome = engine.complete_quiz(&subject.name, correct, total)?;
    print_outcome(engine, correct, total, &outcome);
    Ok(())
}

pub fn print_outcome(
    engine: &mut GameEngine,
    correct: u32,
    total: u32,
    outcome: &CompletionOutcome,
) {
    println!("{} / {} correct ({}%)", correct, total, outcome.percentage);
    for event in &outcome.events {
        println!("  {}", describe_event(event));
    }
    println!("{}", engine.encouragement());
}
