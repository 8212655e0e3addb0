use maud::{html, Markup};
use rust_i18n::t;

use crate::{names, services::engine::position_letter, services::CurrentQuestion};

pub fn question(data: &CurrentQuestion<'_>, locale: &str) -> Markup {
    let is_last = data.is_last();
    let action = if is_last {
        names::SUBMIT_URL
    } else {
        names::ANSWER_URL
    };

    html! {
        p { (t!("quiz.doing_quiz", locale = locale)) mark { (data.quiz.title) } "." }
        article.quiz-card {
            p.quiz-progress {
                (t!("quiz.question_prefix", locale = locale))
                strong { (data.index + 1) }
                (t!("quiz.question_of", locale = locale))
                (data.total)
            }

            h3 { (data.question.question) }

            form hx-post=(action) id="question-form" {
                input type="hidden" name="questionId" value=(data.question.id);
                fieldset {
                    @for (idx, option) in data.question.options.iter().enumerate() {
                        @let letter = position_letter(Some(idx));
                        @let checked = data
                            .selected
                            .is_some_and(|s| s.eq_ignore_ascii_case(&letter));
                        label {
                            input type="radio"
                                  name="answer"
                                  value=(letter)
                                  checked[checked]
                                  required[!is_last];
                            span.option-letter { (letter) "." }
                            (option)
                        }
                    }
                }
                div.quiz-nav {
                    @if !data.is_first() {
                        button type="button"
                               class="secondary"
                               hx-post=(names::PREVIOUS_URL) {
                            (t!("quiz.previous", locale = locale))
                        }
                    }
                    span.push-right {
                        @if is_last {
                            input type="submit" value=(t!("quiz.submit_quiz", locale = locale));
                        } @else {
                            input type="submit" value=(t!("quiz.next", locale = locale));
                        }
                    }
                }
            }
        }
        p style="margin-top: 0.5rem; font-size: 0.8rem;" {
            a href=(names::retake_quiz_url(data.quiz.id)) style="color: #888;" {
                (t!("quiz.restart", locale = locale))
            }
        }
    }
}
