use axum::{
    extract::{rejection::FormRejection, State},
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
    Form,
};
use maud::Markup;

use super::{AnswerForm, SubmitForm};
use crate::{
    extractors::{AttemptToken, IsHtmx, Locale},
    names,
    rejections::{AppError, QuizResultExt, ResultExt},
    services::{Attempt, QuizError},
    utils, views,
    views::quiz as quiz_views,
    AppState,
};

pub(crate) async fn show_question(
    State(state): State<AppState>,
    AttemptToken(token): AttemptToken,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
) -> Result<Markup, AppError> {
    let token = token
        .ok_or(QuizError::SessionExpired)
        .or_error_page(is_htmx, &locale)?;

    let (title, page) = state
        .attempts
        .with(&token, |attempt| question_page(attempt, &locale))
        .await
        .or_error_page(is_htmx, &locale)?;

    Ok(views::render(is_htmx, &title, page, &locale))
}

pub(crate) async fn save_answer(
    State(state): State<AppState>,
    AttemptToken(token): AttemptToken,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
    form: Result<Form<AnswerForm>, FormRejection>,
) -> Result<Markup, AppError> {
    let Form(body) = form.reject_input("malformed answer form")?;
    let token = token
        .ok_or(QuizError::SessionExpired)
        .or_error_page(is_htmx, &locale)?;

    let (title, page) = state
        .attempts
        .with(&token, |attempt| {
            attempt.record_answer(body.question_id, &body.answer)?;
            question_page(attempt, &locale)
        })
        .await
        .or_error_page(is_htmx, &locale)?;

    Ok(views::render(is_htmx, &title, page, &locale))
}

pub(crate) async fn previous_question(
    State(state): State<AppState>,
    AttemptToken(token): AttemptToken,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
) -> Result<Markup, AppError> {
    let token = token
        .ok_or(QuizError::SessionExpired)
        .or_error_page(is_htmx, &locale)?;

    let (title, page) = state
        .attempts
        .with(&token, |attempt| {
            attempt.go_back()?;
            question_page(attempt, &locale)
        })
        .await
        .or_error_page(is_htmx, &locale)?;

    Ok(views::render(is_htmx, &title, page, &locale))
}

pub(crate) async fn submit_quiz(
    State(state): State<AppState>,
    AttemptToken(token): AttemptToken,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
    form: Result<Form<SubmitForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(body) = form.reject_input("malformed submit form")?;
    let token = token
        .ok_or(QuizError::SessionExpired)
        .or_error_page(is_htmx, &locale)?;

    let last = body.question_id.zip(body.answer.as_deref());
    let result = state
        .attempts
        .with(&token, |attempt| attempt.submit(last))
        .await
        .or_error_page(is_htmx, &locale)?;

    state.attempts.remove(&token).await;
    tracing::info!(
        "quiz={} submitted: {}/{} correct",
        result.quiz.id,
        result.score,
        result.total_questions
    );

    let cookie = utils::clear_cookie(names::ATTEMPT_COOKIE_NAME, state.secure_cookies)
        .reject("could not build clear-attempt cookie")?;
    let page = views::render(
        is_htmx,
        &result.quiz.title,
        quiz_views::result(&result, &locale),
        &locale,
    );

    Ok(([(SET_COOKIE, cookie)], page).into_response())
}

fn question_page(attempt: &Attempt, locale: &str) -> Result<(String, Markup), QuizError> {
    let current = attempt.current()?;
    Ok((
        current.quiz.title.clone(),
        quiz_views::question(&current, locale),
    ))
}
