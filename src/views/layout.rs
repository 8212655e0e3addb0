use maud::{html, Markup, DOCTYPE};
use rust_i18n::t;

use crate::{names, utils};

// Error pages are swapped into `main` like any other response.
const HTMX_CONFIG: &str = r#"{"responseHandling":[{"code":"204","swap":false},{"code":"[23]..","swap":true},{"code":"[45]..","swap":true,"error":true}]}"#;

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src="https://unpkg.com/htmx.org@2.0.4" {}
    }
}

fn header(locale: &str) -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."secondary" {
                        a href=(names::HOME_URL) {
                            strong { (t!("app.name", locale = locale)) }
                        }
                    }
                }
                ul {
                    li."secondary" { (utils::VERSION) }
                }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup, locale: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(locale) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="light dark";
                meta name="htmx-config" content=(HTMX_CONFIG);

                (css())
                (js())

                title { (format!("{title} - {}", t!("app.name", locale = locale))) }
            }

            body."container" hx-target="main" hx-swap="innerHTML" {
                (header(locale))
                (main(body))
            }
        }
    }
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) }
        (body)
    }
}

/// Full page for direct navigation, bare fragment for htmx swaps.
pub fn render(is_htmx: bool, title: &str, body: Markup, locale: &str) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body, locale)
    }
}
