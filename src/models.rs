use std::collections::HashMap;

use serde::Deserialize;

/// Submitted answers keyed by question id.
pub type Answers = HashMap<u32, String>;

#[derive(Deserialize)]
pub struct QuizFile {
    pub quizzes: Vec<Quiz>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    /// Literal option text in a canonical quiz, a position letter ("A", "B", ...)
    /// in a shuffled copy.
    pub correct_answer: String,
}

impl Question {
    pub fn is_correct_answer(&self, answer: &str) -> bool {
        self.correct_answer.to_lowercase() == answer.to_lowercase()
    }
}
