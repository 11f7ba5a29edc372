pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod file_io;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod session;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use catalog::list_source_files;
pub use config::AppConfig;
pub use error::QuizError;
pub use export::{export_quiz, resolve_file_name, DocumentSink, DocxSink};
pub use file_io::load_text;
pub use models::{AppState, ExportRequest, QuizItem, QuizSet, SessionState, SourceFile};
pub use quiz::{build_quiz_items, generate_quiz, segment_sentences};
pub use session::SessionController;
