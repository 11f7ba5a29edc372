use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;

/// Answer prompt appended to every quiz stem.
pub const QUIZ_MARKER: &str = ". (O/X)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub path: PathBuf,
    /// Lowercased extension without the dot, if the file has one.
    pub extension: Option<String>,
}

impl SourceFile {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase());
        Self {
            name,
            path,
            extension,
        }
    }

    pub fn is_supported(&self, accepted: &[String]) -> bool {
        match &self.extension {
            Some(ext) => accepted.iter().any(|a| a.eq_ignore_ascii_case(ext)),
            None => false,
        }
    }

    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.name.clone())
    }
}

/// A declarative statement followed by the O/X marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizItem {
    stem: String,
}

impl QuizItem {
    /// Builds an item from a stem, trimming it. Blank stems yield `None`.
    pub fn new(stem: &str) -> Option<Self> {
        let stem = stem.trim();
        if stem.is_empty() {
            None
        } else {
            Some(Self {
                stem: stem.to_string(),
            })
        }
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn text(&self) -> String {
        format!("{}{}", self.stem, QUIZ_MARKER)
    }
}

impl fmt::Display for QuizItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, QUIZ_MARKER)
    }
}

/// Ordered quiz items produced from one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSet {
    items: Vec<QuizItem>,
}

impl QuizSet {
    pub fn new(items: Vec<QuizItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items paired with their 1-based display number.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &QuizItem)> {
        self.items.iter().enumerate().map(|(i, item)| (i + 1, item))
    }

    pub fn texts(&self) -> Vec<String> {
        self.items.iter().map(QuizItem::text).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub file_name: String,
    pub output_dir: PathBuf,
    pub font_family: String,
    pub font_size_pt: usize,
}

impl ExportRequest {
    pub fn new(config: &AppConfig, file_name: String) -> Self {
        Self {
            file_name,
            output_dir: config.output_dir.clone(),
            font_family: config.font_family.clone(),
            font_size_pt: config.font_size_pt,
        }
    }

    pub fn target_path(&self) -> PathBuf {
        Path::new(&self.output_dir).join(&self.file_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    SelectingFile,
    Loaded,
    Displayed,
    ExportPrompted,
    RepeatPrompted,
    Terminated,
}

/// Per-cycle data owned by the session controller.
///
/// `catalog` is filled when the controller enters file selection and kept
/// across re-prompts; everything is cleared when a new cycle starts.
#[derive(Debug)]
pub struct SessionState {
    pub catalog: Option<Vec<SourceFile>>,
    pub source: Option<SourceFile>,
    pub text: String,
    pub quiz: QuizSet,
    pub keep_running: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            catalog: None,
            source: None,
            text: String::new(),
            quiz: QuizSet::default(),
            keep_running: true,
        }
    }

    /// Drops everything from the finished cycle except the continue flag.
    pub fn reset_cycle(&mut self) {
        let keep_running = self.keep_running;
        *self = Self::new();
        self.keep_running = keep_running;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
