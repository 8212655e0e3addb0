pub const HOME_URL: &str = "/";
pub const QUESTION_URL: &str = "/quiz/question";
pub const ANSWER_URL: &str = "/quiz/answer";
pub const PREVIOUS_URL: &str = "/quiz/previous";
pub const SUBMIT_URL: &str = "/quiz/submit";

pub const ATTEMPT_COOKIE_NAME: &str = "quiz_attempt";
/// Cookie lifetime and server-side idle limit of an attempt.
pub const ATTEMPT_MAX_AGE_SECS: u64 = 3600;

pub fn start_quiz_url(quiz_id: u32) -> String {
    format!("/quiz/start/{quiz_id}")
}

pub fn retake_quiz_url(quiz_id: u32) -> String {
    format!("/quiz/retake/{quiz_id}")
}

// i18n
pub const LOCALE_COOKIE_NAME: &str = "lang";
pub const DEFAULT_LOCALE: &str = "en";
