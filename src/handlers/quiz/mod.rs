mod question;
mod session;

use axum::{
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::AppState;

#[derive(Deserialize)]
pub(crate) struct AnswerForm {
    #[serde(rename = "questionId")]
    question_id: u32,
    #[serde(default)]
    answer: String,
}

/// The last question's form. Both fields are optional so a quiz can be submitted
/// without re-answering it.
#[derive(Deserialize)]
pub(crate) struct SubmitForm {
    #[serde(rename = "questionId", default)]
    question_id: Option<u32>,
    #[serde(default)]
    answer: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/quiz/start/{quiz_id}", get(session::start_quiz))
        .route("/quiz/retake/{quiz_id}", get(session::retake_quiz))
        .route("/quiz/question", get(question::show_question))
        .route("/quiz/answer", post(question::save_answer))
        .route("/quiz/previous", post(question::previous_question))
        .route("/quiz/submit", post(question::submit_quiz))
}
