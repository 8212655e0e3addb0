use maud::{html, Markup};
use rust_i18n::t;

use super::option_for_letter;
use crate::{
    names,
    services::{QuizResult, ResultTier},
};

pub fn result(result: &QuizResult, locale: &str) -> Markup {
    let quiz = &result.quiz;
    let status_class = if result.passed() {
        "result-passed"
    } else {
        "result-failed"
    };

    html! {
        h1 { (t!("result.title", locale = locale)) }
        p { mark { (quiz.title) } }

        article.quiz-card {
            p.result-score {
                (result.score) " / " (result.total_questions)
            }
            p {
                (t!("result.percentage", locale = locale))
                strong { (format!("{:.1}%", result.percentage())) }
            }
            p class=(status_class) {
                strong {
                    @if result.passed() {
                        (t!("result.passed", locale = locale))
                    } @else {
                        (t!("result.failed", locale = locale))
                    }
                }
            }
            p { (tier_message(result.tier(), locale)) }
        }

        article {
            h4 { (t!("result.review", locale = locale)) }
            table {
                thead { tr {
                    th { "#" }
                    th { (t!("result.question", locale = locale)) }
                    th { (t!("result.your_answer", locale = locale)) }
                    th { (t!("result.correct_answer", locale = locale)) }
                } }
                tbody {
                    @for (idx, question) in quiz.questions.iter().enumerate() {
                        @let given = result.answers.get(&question.id);
                        @let class = if result.is_correct(question) {
                            "option-correct"
                        } else {
                            "option-incorrect"
                        };
                        tr class=(class) {
                            td { (idx + 1) }
                            td { (question.question) }
                            td {
                                @match given {
                                    Some(letter) => {
                                        (letter.to_uppercase())
                                        @if let Some(text) = option_for_letter(question, letter) {
                                            ". " (text)
                                        }
                                    }
                                    None => {
                                        em { (t!("result.unanswered", locale = locale)) }
                                    }
                                }
                            }
                            td {
                                (question.correct_answer)
                                @if let Some(text) = option_for_letter(question, &question.correct_answer) {
                                    ". " (text)
                                }
                            }
                        }
                    }
                }
            }
        }

        div.quiz-nav {
            a role="button" href=(names::retake_quiz_url(quiz.id)) {
                (t!("result.retake", locale = locale))
            }
            a role="button" class="secondary" href=(names::HOME_URL) {
                (t!("result.home", locale = locale))
            }
        }
    }
}

fn tier_message(tier: ResultTier, locale: &str) -> String {
    match tier {
        ResultTier::Excellent => t!("result.excellent", locale = locale),
        ResultTier::Great => t!("result.great", locale = locale),
        ResultTier::Good => t!("result.good", locale = locale),
        ResultTier::NeedsImprovement => t!("result.needs_improvement", locale = locale),
    }
    .to_string()
}
