use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const CONFIG_FILE: &str = "ox_quiz.json";
pub const DEFAULT_SOURCE_DIR: &str = "study_files";
pub const DEFAULT_OUTPUT_DIR: &str = "quiz_exports";
pub const DEFAULT_FONT_FAMILY: &str = "Malgun Gothic";
pub const DEFAULT_FONT_SIZE_PT: usize = 11;

/// Fixed settings for one run. Read once at startup and never changed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub extensions: Vec<String>,
    pub font_family: String,
    pub font_size_pt: usize,
    /// Append the source file stem to user-supplied export names.
    pub label_with_source: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            extensions: vec!["txt".to_string(), "md".to_string()],
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size_pt: DEFAULT_FONT_SIZE_PT,
            label_with_source: false,
        }
    }
}

impl AppConfig {
    /// Loads settings from `path`, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };

        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring malformed config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
