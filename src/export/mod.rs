mod docx;

pub use docx::DocxSink;

use crate::error::QuizError;
use crate::file_io::ensure_dir;
use crate::models::{ExportRequest, QuizSet};
use crate::utils::collapse_newlines;
use chrono::NaiveDateTime;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DOCUMENT_EXTENSION: &str = "docx";
pub const DOCUMENT_HEADING: &str = "O/X 퀴즈 목록";

/// The handful of document operations the exporter needs.
pub trait DocumentSink {
    /// `size_pt` is in whole points.
    fn set_default_font(&mut self, family: &str, size_pt: usize);
    fn add_heading(&mut self, text: &str);
    fn add_numbered_paragraph(&mut self, number: usize, text: &str);
    fn save(&mut self, path: &Path) -> io::Result<()>;
}

/// Picks the export file name.
///
/// Without a base name the current time is used (`quiz_YYYYMMDD_HHMMSS`).
/// Otherwise the base is used verbatim, with `_label` appended when a label
/// is supplied. Names that could leave the output directory are rejected.
pub fn resolve_file_name(
    base: Option<&str>,
    label: Option<&str>,
    now: NaiveDateTime,
) -> Result<String, QuizError> {
    let base = base.filter(|b| !b.is_empty());
    let label = label.filter(|l| !l.is_empty());

    for part in base.iter().chain(label.iter()) {
        if !is_plain_name(part) {
            return Err(QuizError::InvalidFileName {
                name: part.to_string(),
            });
        }
    }

    Ok(match (base, label) {
        (None, _) => format!(
            "quiz_{}.{}",
            now.format("%Y%m%d_%H%M%S"),
            DOCUMENT_EXTENSION
        ),
        (Some(base), Some(label)) => format!("{}_{}.{}", base, label, DOCUMENT_EXTENSION),
        (Some(base), None) => format!("{}.{}", base, DOCUMENT_EXTENSION),
    })
}

// a single path component that is not `.` or `..`
fn is_plain_name(name: &str) -> bool {
    !name.contains(['/', '\\']) && name != "." && name != ".."
}

/// Writes `quiz` through `sink` to the request's output directory.
///
/// The directory is created first if needed. Returns the path written.
pub fn export_quiz(
    quiz: &QuizSet,
    request: &ExportRequest,
    sink: &mut dyn DocumentSink,
) -> Result<PathBuf, QuizError> {
    let path = request.target_path();
    let failed = |source: io::Error| QuizError::ExportFailed {
        path: path.clone(),
        source,
    };

    if ensure_dir(&request.output_dir).map_err(failed)? {
        info!("created output directory {}", request.output_dir.display());
    }

    sink.set_default_font(&request.font_family, request.font_size_pt);
    sink.add_heading(DOCUMENT_HEADING);
    for (number, item) in quiz.numbered() {
        sink.add_numbered_paragraph(number, &collapse_newlines(&item.text()));
    }
    sink.save(&path).map_err(failed)?;

    info!("exported {} quiz items to {}", quiz.len(), path.display());
    Ok(path)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::DocumentSink;
    use std::cell::RefCell;
    use std::io;
    use std::path::{Path, PathBuf};
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    pub enum SinkCall {
        Font(String, usize),
        Heading(String),
        Paragraph(usize, String),
        Save(PathBuf),
    }

    /// Records calls instead of producing a document. Clones share the log.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingSink {
        pub calls: Rc<RefCell<Vec<SinkCall>>>,
        pub fail_save: bool,
    }

    impl RecordingSink {
        pub fn calls(&self) -> Vec<SinkCall> {
            self.calls.borrow().clone()
        }
    }

    impl DocumentSink for RecordingSink {
        fn set_default_font(&mut self, family: &str, size_pt: usize) {
            self.calls
                .borrow_mut()
                .push(SinkCall::Font(family.to_string(), size_pt));
        }

        fn add_heading(&mut self, text: &str) {
            self.calls
                .borrow_mut()
                .push(SinkCall::Heading(text.to_string()));
        }

        fn add_numbered_paragraph(&mut self, number: usize, text: &str) {
            self.calls
                .borrow_mut()
                .push(SinkCall::Paragraph(number, text.to_string()));
        }

        fn save(&mut self, path: &Path) -> io::Result<()> {
            if self.fail_save {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "permission denied",
                ));
            }
            std::fs::write(path, b"recorded")?;
            self.calls
                .borrow_mut()
                .push(SinkCall::Save(path.to_path_buf()));
            Ok(())
        }
    }
}
