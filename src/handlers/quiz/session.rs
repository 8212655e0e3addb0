use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect, Response},
};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    extractors::{AttemptToken, IsHtmx, Locale},
    names,
    rejections::{AppError, QuizResultExt, ResultExt},
    services::{Attempt, QuizError},
    utils, AppState,
};

pub(crate) async fn start_quiz(
    State(state): State<AppState>,
    path: Result<Path<u32>, PathRejection>,
    AttemptToken(previous): AttemptToken,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
) -> Result<Response, AppError> {
    let Path(quiz_id) = path.reject_input("quiz id is not a number")?;
    if quiz_id == 0 {
        return Err(QuizError::InvalidQuizId(quiz_id)).or_error_page(is_htmx, &locale);
    }

    let quiz = state
        .catalog
        .get(quiz_id)
        .ok_or(QuizError::QuizNotFound(quiz_id))
        .or_error_page(is_htmx, &locale)?;

    let shuffle_seed = rand::random::<u64>();
    let mut rng = StdRng::seed_from_u64(shuffle_seed);
    let attempt = Attempt::start(quiz, &mut rng).or_error_page(is_htmx, &locale)?;

    if let Some(previous) = previous {
        state.attempts.remove(&previous).await;
    }
    let token = state.attempts.insert(attempt).await;
    tracing::debug!("quiz={quiz_id} shuffled with seed {shuffle_seed}");

    let cookie = utils::cookie(names::ATTEMPT_COOKIE_NAME, &token, state.secure_cookies)
        .reject("could not build attempt cookie")?;

    Ok(([(SET_COOKIE, cookie)], Redirect::to(names::QUESTION_URL)).into_response())
}

pub(crate) async fn retake_quiz(
    State(state): State<AppState>,
    path: Result<Path<u32>, PathRejection>,
    AttemptToken(previous): AttemptToken,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
) -> Result<Response, AppError> {
    let Path(quiz_id) = path.reject_input("quiz id is not a number")?;
    if quiz_id == 0 {
        return Err(QuizError::InvalidQuizId(quiz_id)).or_error_page(is_htmx, &locale);
    }

    if let Some(previous) = previous {
        if state.attempts.remove(&previous).await.is_some() {
            tracing::info!("attempt abandoned for retake of quiz={quiz_id}");
        }
    }

    let cookie = utils::clear_cookie(names::ATTEMPT_COOKIE_NAME, state.secure_cookies)
        .reject("could not build clear-attempt cookie")?;

    Ok((
        [(SET_COOKIE, cookie)],
        Redirect::to(&names::start_quiz_url(quiz_id)),
    )
        .into_response())
}
