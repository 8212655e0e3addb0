use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{names, services::QuizError, views};

#[derive(Debug)]
pub enum AppError {
    /// A quiz flow rule was broken. Rendered in the requester's locale, as a
    /// fragment when the request came from htmx.
    Quiz {
        error: QuizError,
        locale: String,
        is_htmx: bool,
    },
    NotFound,
    Input(&'static str),
    Internal(&'static str),
}

impl QuizError {
    pub fn status(&self) -> StatusCode {
        match self {
            QuizError::SessionExpired => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Quiz {
                error,
                locale,
                is_htmx,
            } => {
                tracing::warn!("quiz request rejected: {error}");
                let page = views::render(
                    is_htmx,
                    "Error",
                    views::error::quiz_error(&error, &locale),
                    &locale,
                );
                (error.status(), page).into_response()
            }
            AppError::NotFound => error_page(StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Input(msg) => {
                tracing::warn!("input error: {msg}");
                error_page(StatusCode::BAD_REQUEST, "INPUT_ERROR")
            }
            AppError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                error_page(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR")
            }
        }
    }
}

fn error_page(code: StatusCode, message: &str) -> Response {
    let page = views::page(
        "Error",
        html! {
            h1 { (message) }
        },
        names::DEFAULT_LOCALE,
    );
    (code, page).into_response()
}

pub trait ResultExt<T> {
    /// Logs the underlying error and turns it into an internal error.
    fn reject(self, msg: &'static str) -> Result<T, AppError>;

    /// Logs the underlying error and turns it into an input error.
    fn reject_input(self, msg: &'static str) -> Result<T, AppError>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn reject(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::Internal(msg)
        })
    }

    fn reject_input(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::warn!("{msg}: {e}");
            AppError::Input(msg)
        })
    }
}

pub trait QuizResultExt<T> {
    /// Renders a quiz error as the error page for this request.
    fn or_error_page(self, is_htmx: bool, locale: &str) -> Result<T, AppError>;
}

impl<T> QuizResultExt<T> for Result<T, QuizError> {
    fn or_error_page(self, is_htmx: bool, locale: &str) -> Result<T, AppError> {
        self.map_err(|error| AppError::Quiz {
            error,
            locale: locale.to_string(),
            is_htmx,
        })
    }
}
