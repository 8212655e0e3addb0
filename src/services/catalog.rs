use std::path::PathBuf;

use color_eyre::{eyre::WrapErr, Result};

use crate::models::{Quiz, QuizFile};

// ---------------------------------------------------------------------------
// QuizSource trait (the catalog only needs something that yields quizzes)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait QuizSource {
    fn load(&self) -> Result<Vec<Quiz>>;
}

/// Reads a `{"quizzes": [...]}` document from disk.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl QuizSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Quiz>> {
        let raw = std::fs::read_to_string(&self.path)
            .wrap_err_with(|| format!("could not read {}", self.path.display()))?;
        let file: QuizFile = serde_json::from_str(&raw)
            .wrap_err_with(|| format!("could not parse {}", self.path.display()))?;
        Ok(file.quizzes)
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Read-only set of canonical quizzes, in load order.
#[derive(Debug, Default)]
pub struct Catalog {
    quizzes: Vec<Quiz>,
}

impl Catalog {
    pub fn new(quizzes: Vec<Quiz>) -> Self {
        Self { quizzes }
    }

    /// Loads every quiz from `source`. A failing source leaves the catalog empty.
    pub fn load(source: &impl QuizSource) -> Self {
        match source.load() {
            Ok(quizzes) => {
                tracing::info!("catalog loaded with {} quizzes", quizzes.len());
                Self::new(quizzes)
            }
            Err(e) => {
                tracing::error!("could not load quizzes, serving an empty catalog: {e:?}");
                Self::default()
            }
        }
    }

    pub fn all(&self) -> &[Quiz] {
        &self.quizzes
    }

    /// First quiz with a matching id. Duplicate ids resolve to the earliest loaded.
    pub fn get(&self, id: u32) -> Option<&Quiz> {
        self.quizzes.iter().find(|quiz| quiz.id == id)
    }
}
