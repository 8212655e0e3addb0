#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, Response},
};
use quizroom::{
    models::{Question, Quiz},
    names, router,
    services::Catalog,
    AppState,
};
use tower::ServiceExt;

pub fn question(id: u32, prompt: &str, options: &[&str], correct: &str) -> Question {
    Question {
        id,
        question: prompt.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer: correct.to_string(),
    }
}

pub fn sample_quizzes() -> Vec<Quiz> {
    vec![
        Quiz {
            id: 101,
            title: "General Knowledge".to_string(),
            description: "Simple quiz for testing".to_string(),
            questions: vec![
                question(
                    1,
                    "What is the capital of France?",
                    &["Paris", "London", "Berlin", "Madrid"],
                    "Paris",
                ),
                question(2, "What is 2 + 2?", &["3", "4", "5", "6"], "4"),
            ],
        },
        Quiz {
            id: 102,
            title: "Empty".to_string(),
            description: String::new(),
            questions: Vec::new(),
        },
    ]
}

pub fn test_state(quizzes: Vec<Quiz>) -> AppState {
    AppState::new(Catalog::new(quizzes), false)
}

pub fn app(state: AppState) -> axum::Router {
    router(state)
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

/// Value of the attempt cookie set by a response, if any.
pub fn attempt_cookie(resp: &Response<Body>) -> Option<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|v| v.strip_prefix(&format!("{}=", names::ATTEMPT_COOKIE_NAME)))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

pub async fn get(app: &axum::Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut req = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = token {
        req = req.header(
            header::COOKIE,
            format!("{}={}", names::ATTEMPT_COOKIE_NAME, token),
        );
    }
    app.clone()
        .oneshot(req.body(Body::empty()).expect("request build should succeed"))
        .await
        .expect("router should respond")
}

pub async fn htmx_post(
    app: &axum::Router,
    uri: &str,
    token: Option<&str>,
    form: &str,
) -> Response<Body> {
    let mut req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("HX-Request", "true")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(token) = token {
        req = req.header(
            header::COOKIE,
            format!("{}={}", names::ATTEMPT_COOKIE_NAME, token),
        );
    }
    app.clone()
        .oneshot(
            req.body(Body::from(form.to_string()))
                .expect("request build should succeed"),
        )
        .await
        .expect("router should respond")
}
