use rand::Rng;

use crate::models::{Answers, Question, Quiz};

use super::engine::{self, QuizResult};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("quiz id must be positive, got {0}")]
    InvalidQuizId(u32),
    #[error("quiz {0} does not exist")]
    QuizNotFound(u32),
    #[error("quiz {0} has no questions")]
    EmptyQuiz(u32),
    #[error("no quiz attempt in progress")]
    SessionExpired,
    /// The current index points past the last question. Navigation never
    /// produces this; it guards a corrupted attempt.
    #[error("all questions have already been answered")]
    AlreadyCompleted,
    #[error("answer cannot be empty")]
    EmptyAnswer,
    #[error("question id must be positive, got {0}")]
    InvalidQuestionId(u32),
    #[error("question {0} is not part of this quiz")]
    UnknownQuestion(u32),
    #[error("already at the first question")]
    AtFirstQuestion,
    #[error("no answers were submitted")]
    NoAnswers,
}

/// One user's walk through a shuffled quiz.
#[derive(Debug, Clone)]
pub struct Attempt {
    quiz: Quiz,
    current_index: usize,
    answers: Answers,
}

/// The question an attempt is currently on.
pub struct CurrentQuestion<'a> {
    pub quiz: &'a Quiz,
    pub question: &'a Question,
    pub index: usize,
    pub total: usize,
    pub selected: Option<&'a str>,
}

impl CurrentQuestion<'_> {
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.total
    }
}

impl Attempt {
    pub fn start<R: Rng + ?Sized>(canonical: &Quiz, rng: &mut R) -> Result<Self, QuizError> {
        if canonical.questions.is_empty() {
            return Err(QuizError::EmptyQuiz(canonical.id));
        }

        Ok(Self {
            quiz: engine::shuffle(canonical, rng),
            current_index: 0,
            answers: Answers::new(),
        })
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn current(&self) -> Result<CurrentQuestion<'_>, QuizError> {
        let question = self
            .quiz
            .questions
            .get(self.current_index)
            .ok_or(QuizError::AlreadyCompleted)?;

        Ok(CurrentQuestion {
            quiz: &self.quiz,
            question,
            index: self.current_index,
            total: self.quiz.questions.len(),
            selected: self.answers.get(&question.id).map(String::as_str),
        })
    }

    /// Stores an answer and moves forward, staying put on the last question.
    pub fn record_answer(&mut self, question_id: u32, answer: &str) -> Result<(), QuizError> {
        validate_answer(question_id, answer)?;

        if !self.quiz.questions.iter().any(|q| q.id == question_id) {
            return Err(QuizError::UnknownQuestion(question_id));
        }

        self.answers.insert(question_id, answer.to_string());

        if self.current_index + 1 < self.quiz.questions.len() {
            self.current_index += 1;
        }
        Ok(())
    }

    pub fn go_back(&mut self) -> Result<(), QuizError> {
        if self.current_index == 0 {
            return Err(QuizError::AtFirstQuestion);
        }
        self.current_index -= 1;
        Ok(())
    }

    /// Grades the attempt, first storing `last` when the final form carried one.
    pub fn submit(&mut self, last: Option<(u32, &str)>) -> Result<QuizResult, QuizError> {
        if let Some((question_id, answer)) = last {
            validate_answer(question_id, answer)?;
            self.answers.insert(question_id, answer.to_string());
        }

        if self.answers.is_empty() {
            return Err(QuizError::NoAnswers);
        }

        Ok(engine::evaluate(&self.quiz, &self.answers))
    }
}

fn validate_answer(question_id: u32, answer: &str) -> Result<(), QuizError> {
    if answer.trim().is_empty() {
        return Err(QuizError::EmptyAnswer);
    }
    if question_id == 0 {
        return Err(QuizError::InvalidQuestionId(question_id));
    }
    Ok(())
}
