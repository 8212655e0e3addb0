use axum::{extract::State, routing::get, Router};
use maud::Markup;
use rust_i18n::t;

use crate::{
    extractors::{IsHtmx, Locale},
    views,
    views::homepage as homepage_views,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(homepage))
}

async fn homepage(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
) -> Markup {
    views::render(
        is_htmx,
        &t!("homepage.title", locale = &locale),
        homepage_views::quiz_list(state.catalog.all(), &locale),
        &locale,
    )
}
