use crate::error::QuizError;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

/// Reads a whole note file as UTF-8 text.
pub fn load_text(path: &Path) -> Result<String, QuizError> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => QuizError::NotFound {
            path: path.to_path_buf(),
        },
        _ => QuizError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    String::from_utf8(bytes).map_err(|_| QuizError::Decode {
        path: path.to_path_buf(),
    })
}

/// Creates `dir` if it is missing. Returns `true` when it had to be created.
pub fn ensure_dir(dir: &Path) -> io::Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir)?;
    Ok(true)
}
