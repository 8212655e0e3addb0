pub mod attempt;
pub mod catalog;
pub mod engine;

pub use attempt::{Attempt, CurrentQuestion, QuizError};
pub use catalog::{Catalog, JsonFileSource, QuizSource};
pub use engine::{evaluate, shuffle, QuizResult, ResultTier};
