//! Quiz command implementation
//!
//! Asks a subject's questions on stdin/stdout, then records the score.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use readsmart::bank::{Question, QuestionBank, QuizSession};
use readsmart::game::GameEngine;

use super::play::print_outcome;
use super::resolve_subject;

/// Run an interactive quiz and record the result
pub fn quiz_command(engine: &mut GameEngine, bank: &QuestionBank, subject: &str) -> Result<()> {
    let subject = resolve_subject(bank, subject)?;
    let mut session = QuizSession::new(subject);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if !run_session(&mut session, &mut stdin.lock(), &mut stdout)? {
        println!("\nQuiz abandoned, nothing recorded.");
        return Ok(());
    }

    let (correct, total) = session.score();
    let outcome = engine.complete_quiz(session.subject_name(), correct, total)?;
    println!();
    print_outcome(engine, correct, total, &outcome);
    Ok(())
}

/// Ask every question. Returns false if input ended before the quiz did.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut QuizSession<'_>,
    input: &mut R,
    out: &mut W,
) -> io::Result<bool> {
    while let Some(question) = session.current() {
        writeln!(
            out,
            "\n[{}/{}] {}",
            session.position(),
            session.total(),
            question.text
        )?;
        for (i, option) in question.options.iter().enumerate() {
            writeln!(out, "  {}) {}", option_label(i), option)?;
        }

        let choice = loop {
            write!(out, "> ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(false);
            }
            match parse_choice(&line, question) {
                Some(choice) => break choice,
                None => writeln!(out, "Pick one of the listed options.")?,
            }
        };

        if let Some(feedback) = session.answer(choice) {
            if feedback.correct {
                writeln!(out, "✅ Correct!")?;
            } else {
                writeln!(
                    out,
                    "❌ The answer was {}) {}",
                    option_label(feedback.correct_index),
                    question.options[feedback.correct_index]
                )?;
            }
        }
    }

    Ok(true)
}

fn option_label(index: usize) -> char {
    (b'a' + (index % 26) as u8) as char
}

/// Accept a letter (`b`) or a 1-based number (`2`)
fn parse_choice(line: &str, question: &Question) -> Option<usize> {
    let line = line.trim().to_ascii_lowercase();
    let index = match line.parse::<usize>() {
        Ok(n) => n.checked_sub(1)?,
        Err(_) => {
            let mut chars = line.chars();
            let c = chars.next()?;
            if chars.next().is_some() || !c.is_ascii_lowercase() {
                return None;
            }
            (c as u8 - b'a') as usize
        }
    };
    (index < question.options.len()).then_some(index)
}
