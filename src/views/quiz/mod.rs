mod question;
mod result;

pub use question::question;
pub use result::result;

use crate::models::Question;

/// Option text behind a position letter, compared case-insensitively.
pub(crate) fn option_for_letter<'a>(question: &'a Question, letter: &str) -> Option<&'a str> {
    let mut chars = letter.chars();
    let c = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() || !c.is_ascii_uppercase() {
        return None;
    }
    let idx = (c as u8 - b'A') as usize;
    question.options.get(idx).map(String::as_str)
}
