use rand::{seq::SliceRandom, Rng};

use crate::models::{Answers, Question, Quiz};

/// Letter stored when a question's correct answer is not among its own options.
/// It is the character just before `'A'`.
pub const MISSING_ANSWER_LETTER: char = '@';

const PASS_PERCENTAGE: f64 = 60.0;
const GREAT_PERCENTAGE: f64 = 75.0;
const EXCELLENT_PERCENTAGE: f64 = 90.0;

/// Letter for a zero-based option position: 0 → "A", 1 → "B", ...
pub fn position_letter(index: Option<usize>) -> String {
    index
        .and_then(|i| u32::try_from(i).ok())
        .and_then(|i| ('A' as u32).checked_add(i))
        .and_then(char::from_u32)
        .unwrap_or(MISSING_ANSWER_LETTER)
        .to_string()
}

/// Builds a presentation copy of `quiz` with questions and options in random
/// order. Each copied question stores the position letter of its correct option.
pub fn shuffle<R: Rng + ?Sized>(quiz: &Quiz, rng: &mut R) -> Quiz {
    let mut questions: Vec<Question> = quiz
        .questions
        .iter()
        .map(|question| shuffle_question(question, rng))
        .collect();
    questions.shuffle(rng);

    Quiz {
        id: quiz.id,
        title: quiz.title.clone(),
        description: quiz.description.clone(),
        questions,
    }
}

fn shuffle_question<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Question {
    let mut options = question.options.clone();
    options.shuffle(rng);

    let position = options
        .iter()
        .position(|option| *option == question.correct_answer);
    if position.is_none() {
        tracing::warn!(
            "question {} has correct answer {:?} outside its options",
            question.id,
            question.correct_answer
        );
    }

    Question {
        id: question.id,
        question: question.question.clone(),
        options,
        correct_answer: position_letter(position),
    }
}

/// Scores `answers` against the letters stored in a shuffled `quiz`.
pub fn evaluate(quiz: &Quiz, answers: &Answers) -> QuizResult {
    let score = quiz
        .questions
        .iter()
        .filter(|question| {
            answers
                .get(&question.id)
                .is_some_and(|answer| question.is_correct_answer(answer))
        })
        .count();

    QuizResult {
        quiz: quiz.clone(),
        answers: answers.clone(),
        score,
        total_questions: quiz.questions.len(),
    }
}

/// Message band of a result, by percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTier {
    Excellent,
    Great,
    Good,
    NeedsImprovement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizResult {
    pub quiz: Quiz,
    pub answers: Answers,
    pub score: usize,
    pub total_questions: usize,
}

impl QuizResult {
    pub fn percentage(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        self.score as f64 * 100.0 / self.total_questions as f64
    }

    pub fn passed(&self) -> bool {
        self.percentage() >= PASS_PERCENTAGE
    }

    pub fn tier(&self) -> ResultTier {
        let percentage = self.percentage();
        if percentage >= EXCELLENT_PERCENTAGE {
            ResultTier::Excellent
        } else if percentage >= GREAT_PERCENTAGE {
            ResultTier::Great
        } else if percentage >= PASS_PERCENTAGE {
            ResultTier::Good
        } else {
            ResultTier::NeedsImprovement
        }
    }

    pub fn is_correct(&self, question: &Question) -> bool {
        self.answers
            .get(&question.id)
            .is_some_and(|answer| question.is_correct_answer(answer))
    }
}
