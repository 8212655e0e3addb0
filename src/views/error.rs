use maud::{html, Markup};
use rust_i18n::t;

use crate::{names, services::QuizError};

pub fn quiz_error(err: &QuizError, locale: &str) -> Markup {
    let (title, message, details) = match err {
        QuizError::InvalidQuizId(id) => (
            t!("error.invalid_quiz_id.title", locale = locale),
            t!("error.invalid_quiz_id.message", locale = locale),
            t!("error.invalid_quiz_id.details", id = id, locale = locale),
        ),
        QuizError::QuizNotFound(id) => (
            t!("error.quiz_not_found.title", locale = locale),
            t!("error.quiz_not_found.message", locale = locale),
            t!("error.quiz_not_found.details", id = id, locale = locale),
        ),
        QuizError::EmptyQuiz(id) => (
            t!("error.empty_quiz.title", locale = locale),
            t!("error.empty_quiz.message", locale = locale),
            t!("error.empty_quiz.details", id = id, locale = locale),
        ),
        QuizError::SessionExpired => (
            t!("error.session_expired.title", locale = locale),
            t!("error.session_expired.message", locale = locale),
            t!("error.session_expired.details", locale = locale),
        ),
        QuizError::AlreadyCompleted => (
            t!("error.already_completed.title", locale = locale),
            t!("error.already_completed.message", locale = locale),
            t!("error.already_completed.details", locale = locale),
        ),
        QuizError::EmptyAnswer => (
            t!("error.empty_answer.title", locale = locale),
            t!("error.empty_answer.message", locale = locale),
            t!("error.empty_answer.details", locale = locale),
        ),
        QuizError::InvalidQuestionId(id) => (
            t!("error.invalid_question_id.title", locale = locale),
            t!("error.invalid_question_id.message", locale = locale),
            t!("error.invalid_question_id.details", id = id, locale = locale),
        ),
        QuizError::UnknownQuestion(id) => (
            t!("error.unknown_question.title", locale = locale),
            t!("error.unknown_question.message", locale = locale),
            t!("error.unknown_question.details", id = id, locale = locale),
        ),
        QuizError::AtFirstQuestion => (
            t!("error.at_first_question.title", locale = locale),
            t!("error.at_first_question.message", locale = locale),
            t!("error.at_first_question.details", locale = locale),
        ),
        QuizError::NoAnswers => (
            t!("error.no_answers.title", locale = locale),
            t!("error.no_answers.message", locale = locale),
            t!("error.no_answers.details", locale = locale),
        ),
    };

    html! {
        article.quiz-card {
            header {
                h2 { "\u{274C} " (title) }
            }
            p { (message) }
            p.error-details { (details) }
            footer {
                a role="button" href=(names::HOME_URL) {
                    (t!("error.back_home", locale = locale))
                }
            }
        }
    }
}
