//! Question bank
//!
//! Read-only subject → questions lookup, loaded from TOML:
//! ```toml
//! [[subject]]
//! name = "Math"
//!
//! [[subject.question]]
//! text = "What is 7 × 8?"
//! options = ["54", "56", "64", "48"]
//! answer = 1
//! ```
//! `answer` is the 0-based index of the correct option.

mod session;

pub use session::{AnswerFeedback, QuizSession};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Embedded question bank (compile-time)
pub const BUILTIN_BANK_TOML: &str = include_str!("../../assets/questions.toml");

/// Error type for question bank loading
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("Failed to read question bank {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Subject listed twice: {0}")]
    DuplicateSubject(String),

    #[error("Subject has no questions: {0}")]
    NoQuestions(String),

    #[error("{subject} question {number} needs at least two options")]
    TooFewOptions { subject: String, number: usize },

    #[error("{subject} question {number} answer {answer} is not one of its {options} options")]
    AnswerOutOfRange {
        subject: String,
        number: usize,
        answer: usize,
        options: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    /// 0-based index into `options`
    pub answer: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Subject {
    pub name: String,
    #[serde(default, rename = "question")]
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionBank {
    #[serde(default, rename = "subject")]
    subjects: Vec<Subject>,
}

impl QuestionBank {
    /// Parse and validate a bank from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, BankError> {
        let bank: QuestionBank = toml::from_str(content)?;
        bank.validate()?;
        Ok(bank)
    }

    pub fn from_file(path: &Path) -> Result<Self, BankError> {
        let content = std::fs::read_to_string(path).map_err(|source| BankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// The bank shipped with the binary
    pub fn builtin() -> Result<Self, BankError> {
        Self::from_toml_str(BUILTIN_BANK_TOML)
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Case-insensitive subject lookup
    pub fn subject(&self, name: &str) -> Option<&Subject> {
        let name = name.trim();
        self.subjects
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    fn validate(&self) -> Result<(), BankError> {
        let mut seen = HashSet::new();

        for subject in &self.subjects {
            if !seen.insert(subject.name.to_lowercase()) {
                return Err(BankError::DuplicateSubject(subject.name.clone()));
            }
            if subject.questions.is_empty() {
                return Err(BankError::NoQuestions(subject.name.clone()));
            }

            for (i, q) in subject.questions.iter().enumerate() {
                if q.options.len() < 2 {
                    return Err(BankError::TooFewOptions {
                        subject: subject.name.clone(),
                        number: i + 1,
                    });
                }
                if q.answer >= q.options.len() {
                    return Err(BankError::AnswerOutOfRange {
                        subject: subject.name.clone(),
                        number: i + 1,
                        answer: q.answer,
                        options: q.options.len(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_bank_loads() {
        let bank = QuestionBank::builtin().unwrap();
        let names: Vec<&str> = bank.subjects().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Math", "Reading", "Science", "Geography", "Art", "Music"]
        );
        assert!(bank.subjects().iter().all(|s| !s.questions.is_empty()));
    }

    #[test]
    fn test_subject_lookup_ignores_case() {
        let bank = QuestionBank::builtin().unwrap();
        assert_eq!(bank.subject("science").map(|s| s.name.as_str()), Some("Science"));
        assert_eq!(bank.subject(" MATH ").map(|s| s.name.as_str()), Some("Math"));
        assert!(bank.subject("Chemistry").is_none());
    }

    #[test]
    fn test_answer_out_of_range() {
        let toml = r#"
            [[subject]]
            name = "Math"
            [[subject.question]]
            text = "1 + 1?"
            options = ["1", "2"]
            answer = 2
        "#;
        let err = QuestionBank::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, BankError::AnswerOutOfRange { number: 1, answer: 2, .. }));
    }

    #[test]
    fn test_duplicate_and_empty_subjects() {
        let dup = r#"
            [[subject]]
            name = "Art"
            [[subject.question]]
            text = "?"
            options = ["a", "b"]
            answer = 0
            [[subject]]
            name = "art"
            [[subject.question]]
            text = "?"
            options = ["a", "b"]
            answer = 0
        "#;
        assert!(matches!(
            QuestionBank::from_toml_str(dup),
            Err(BankError::DuplicateSubject(name)) if name == "art"
        ));

        let empty = "[[subject]]\nname = \"Music\"\n";
        assert!(matches!(
            QuestionBank::from_toml_str(empty),
            Err(BankError::NoQuestions(_))
        ));
    }

    #[test]
    fn test_too_few_options() {
        let toml = r#"
            [[subject]]
            name = "Math"
            [[subject.question]]
            text = "Only one?"
            options = ["yes"]
            answer = 0
        "#;
        assert!(matches!(
            QuestionBank::from_toml_str(toml),
            Err(BankError::TooFewOptions { number: 1, .. })
        ));
    }
}
