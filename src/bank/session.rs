//! One pass through a subject's questions.

use super::{Question, Subject};

/// Result of answering the current question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub correct_index: usize,
}

/// Walks a subject's questions in order and keeps score
#[derive(Debug)]
pub struct QuizSession<'a> {
    subject: &'a Subject,
    index: usize,
    correct: u32,
}

impl<'a> QuizSession<'a> {
    pub fn new(subject: &'a Subject) -> Self {
        Self {
            subject,
            index: 0,
            correct: 0,
        }
    }

    pub fn subject_name(&self) -> &str {
        &self.subject.name
    }

    /// Question waiting for an answer (None once finished)
    pub fn current(&self) -> Option<&'a Question> {
        self.subject.questions.get(self.index)
    }

    /// 1-based number of the current question
    pub fn position(&self) -> usize {
        self.index + 1
    }

    pub fn total(&self) -> u32 {
        self.subject.questions.len() as u32
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.subject.questions.len()
    }

    /// Answer the current question and move on. None if the quiz is already over.
    pub fn answer(&mut self, choice: usize) -> Option<AnswerFeedback> {
        let question = self.current()?;
        let correct = choice == question.answer;
        if correct {
            self.correct += 1;
        }
        self.index += 1;

        Some(AnswerFeedback {
            correct,
            correct_index: question.answer,
        })
    }

    /// (correct, total) so far
    pub fn score(&self) -> (u32, u32) {
        (self.correct, self.total())
    }
}
