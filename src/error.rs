use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between listing notes and saving a quiz document.
///
/// Only [`QuizError::EmptyCatalog`] ends a session; every other variant is
/// reported to the user and the current prompt is retried.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("no files found in '{}'", dir.display())]
    EmptyCatalog { dir: PathBuf },

    #[error("'{input}' is not a valid choice, enter a number between 1 and {max}")]
    InvalidSelection { input: String, max: usize },

    #[error("'{name}' is not a supported note file")]
    UnsupportedType { name: String },

    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("'{}' is not valid UTF-8 text", path.display())]
    Decode { path: PathBuf },

    #[error("could not read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to save quiz document '{}': {source}", path.display())]
    ExportFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{name}' is not a plain file name, leave out '/', '\\' and '..'")]
    InvalidFileName { name: String },

    #[error("please answer Y or N (got '{input}')")]
    InvalidYesNo { input: String },
}

impl QuizError {
    /// Returns `true` when the session can keep going after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, QuizError::EmptyCatalog { .. })
    }
}
