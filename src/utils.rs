use axum::http::HeaderValue;

use crate::names;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn cookie(
    name: &str,
    value: &str,
    secure: bool,
) -> Result<HeaderValue, axum::http::header::InvalidHeaderValue> {
    let secure = if secure { " Secure;" } else { "" };
    HeaderValue::from_str(&format!(
        "{name}={value}; HttpOnly; Max-Age={};{secure} Path=/; SameSite=Strict",
        names::ATTEMPT_MAX_AGE_SECS
    ))
}

pub fn clear_cookie(
    name: &str,
    secure: bool,
) -> Result<HeaderValue, axum::http::header::InvalidHeaderValue> {
    let secure = if secure { " Secure;" } else { "" };
    HeaderValue::from_str(&format!(
        "{name}=; HttpOnly; Max-Age=0;{secure} Path=/; SameSite=Strict"
    ))
}
