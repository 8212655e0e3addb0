rust_i18n::i18n!("locales", fallback = "en");

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod services;
pub mod statics;
pub mod store;
pub mod utils;
pub mod views;

use std::sync::Arc;

use axum::{middleware, Router};

use crate::{rejections::AppError, services::Catalog, store::AttemptStore};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub attempts: AttemptStore,
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(catalog: Catalog, secure_cookies: bool) -> Self {
        Self {
            catalog: Arc::new(catalog),
            attempts: AttemptStore::new(),
            secure_cookies,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::quiz::routes())
        .layer(middleware::from_fn(csrf_check))
        .nest("/static", statics::routes())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}

async fn csrf_check(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    use axum::http::{Method, StatusCode};
    use axum::response::IntoResponse;

    let state_changing = [Method::POST, Method::PUT, Method::PATCH, Method::DELETE];

    if state_changing.contains(req.method()) {
        let has_hx_request = req
            .headers()
            .get("HX-Request")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");

        if !has_hx_request {
            return (StatusCode::FORBIDDEN, "CSRF check failed").into_response();
        }
    }

    next.run(req).await
}
