use maud::{html, Markup};
use rust_i18n::t;

use crate::{models::Quiz, names};

pub fn quiz_list(quizzes: &[Quiz], locale: &str) -> Markup {
    html! {
        h1 { (t!("homepage.title", locale = locale)) }
        p { (t!("homepage.intro", locale = locale)) }

        @if quizzes.is_empty() {
            article {
                p { (t!("homepage.no_quizzes", locale = locale)) }
            }
        }

        @for quiz in quizzes {
            article.quiz-card {
                header {
                    h3 { (quiz.title) }
                }
                @if !quiz.description.is_empty() {
                    p { (quiz.description) }
                }
                footer style="display: flex; align-items: center;" {
                    small.quiz-progress {
                        (t!("homepage.question_count", count = quiz.questions.len(), locale = locale))
                    }
                    a role="button"
                      href=(names::start_quiz_url(quiz.id))
                      style="margin-left: auto;" {
                        (t!("homepage.start", locale = locale))
                    }
                }
            }
        }
    }
}
