use crate::error::QuizError;
use crate::models::SourceFile;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Lists the regular files directly inside `dir`, sorted by name.
///
/// A missing or empty directory is reported as [`QuizError::EmptyCatalog`].
/// Subdirectories are skipped and file contents are never read.
pub fn list_source_files(dir: &Path) -> Result<Vec<SourceFile>, QuizError> {
    let mut files = Vec::new();

    match fs::read_dir(dir) {
        Ok(entries) => {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_file() {
                    files.push(SourceFile::from_path(path));
                }
            }
        }
        Err(e) => {
            warn!("cannot list {}: {}", dir.display(), e);
        }
    }

    if files.is_empty() {
        return Err(QuizError::EmptyCatalog {
            dir: dir.to_path_buf(),
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    info!("listed {} files in {}", files.len(), dir.display());
    Ok(files)
}
