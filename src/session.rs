use crate::catalog::list_source_files;
use crate::config::AppConfig;
use crate::error::QuizError;
use crate::export::{export_quiz, resolve_file_name, DocumentSink};
use crate::file_io::load_text;
use crate::models::{AppState, ExportRequest, SessionState, SourceFile};
use crate::quiz::generate_quiz;
use crate::ui::prompt::{ask, ask_yes_no, parse_selection, print_error, print_info, print_warning};
use crate::ui::{draw_banner, draw_catalog, draw_quiz_set, Selection};
use crate::utils::terminal_width;
use std::io::{self, BufRead, Write};
use tracing::{debug, error, info, warn};

const SELECT_PROMPT: &str = "\nEnter the number of the file to load ('exit' to quit): ";
const EXPORT_QUESTION: &str = "\nSave this quiz as a Word (.docx) file?";
const NAME_PROMPT: &str = "File name without extension (leave blank for a timestamp): ";
const REPEAT_QUESTION: &str = "\nMake another quiz?";
const FAREWELL: &str = "Exiting. Thanks for studying!";

/// Drives the select → load → display → export → repeat cycle.
///
/// Reads answers line by line from `input` and writes everything meant for
/// the user to `output`. A fresh document sink is requested from
/// `make_sink` for each export.
pub struct SessionController<R, W, F> {
    config: AppConfig,
    input: R,
    output: W,
    make_sink: F,
    width: usize,
    state: AppState,
    session: SessionState,
}

impl<R, W, F> SessionController<R, W, F> {
    pub fn new(config: AppConfig, input: R, output: W, make_sink: F) -> Self {
        Self {
            config,
            input,
            output,
            make_sink,
            width: terminal_width(),
            state: AppState::SelectingFile,
            session: SessionState::new(),
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R, W, F, S> SessionController<R, W, F>
where
    R: BufRead,
    W: Write,
    F: FnMut() -> S,
    S: DocumentSink,
{
    /// Runs cycles until the user exits or there is nothing to load.
    pub fn run(&mut self) -> io::Result<()> {
        draw_banner(&mut self.output)?;
        while self.session.keep_running {
            self.step()?;
        }
        Ok(())
    }

    /// Performs one state transition and returns the new state.
    pub fn step(&mut self) -> io::Result<AppState> {
        let next = match self.state {
            AppState::SelectingFile => self.select_file()?,
            AppState::Loaded => self.build_quiz()?,
            AppState::Displayed => self.offer_export()?,
            AppState::ExportPrompted => self.export()?,
            AppState::RepeatPrompted => self.offer_repeat()?,
            AppState::Terminated => AppState::Terminated,
        };

        if next != self.state {
            debug!("session state {:?} -> {:?}", self.state, next);
        }
        self.state = next;
        Ok(next)
    }

    fn select_file(&mut self) -> io::Result<AppState> {
        if self.session.catalog.is_none() {
            match list_source_files(&self.config.source_dir) {
                Ok(files) => self.session.catalog = Some(files),
                Err(e) => {
                    info!("{}", e);
                    print_info(&mut self.output, &e.to_string())?;
                    return self.terminate();
                }
            }
        }
        let files = self.session.catalog.clone().unwrap_or_default();

        draw_catalog(&mut self.output, &files, self.width)?;
        let Some(answer) = ask(&mut self.input, &mut self.output, SELECT_PROMPT)? else {
            writeln!(self.output)?;
            return self.terminate();
        };

        let index = match parse_selection(&answer, files.len()) {
            Ok(Selection::Exit) => return self.terminate(),
            Ok(Selection::Index(index)) => index,
            Err(e) => return self.retry_selection(&e),
        };

        let file = files[index].clone();
        if !file.is_supported(&self.config.extensions) {
            let e = QuizError::UnsupportedType {
                name: file.name.clone(),
            };
            return self.retry_selection(&e);
        }

        self.load(file)
    }

    fn load(&mut self, file: SourceFile) -> io::Result<AppState> {
        match load_text(&file.path) {
            Ok(text) => {
                info!("loaded {} ({} bytes)", file.path.display(), text.len());
                self.session.text = text;
                self.session.source = Some(file);
                Ok(AppState::Loaded)
            }
            Err(e) => {
                warn!("{}", e);
                print_error(&mut self.output, &e.to_string())?;
                Ok(AppState::SelectingFile)
            }
        }
    }

    fn retry_selection(&mut self, e: &QuizError) -> io::Result<AppState> {
        warn!("{}", e);
        print_warning(&mut self.output, &e.to_string())?;
        Ok(AppState::SelectingFile)
    }

    fn build_quiz(&mut self) -> io::Result<AppState> {
        let quiz = generate_quiz(&self.session.text);
        info!("generated {} quiz items", quiz.len());
        self.session.quiz = quiz;

        if self.session.quiz.is_empty() {
            print_info(&mut self.output, "The file has no sentences, so there are no quiz items.")?;
            return Ok(AppState::RepeatPrompted);
        }

        draw_quiz_set(&mut self.output, &self.session.quiz, self.width)?;
        Ok(AppState::Displayed)
    }

    fn offer_export(&mut self) -> io::Result<AppState> {
        if ask_yes_no(&mut self.input, &mut self.output, EXPORT_QUESTION)? {
            Ok(AppState::ExportPrompted)
        } else {
            Ok(AppState::RepeatPrompted)
        }
    }

    fn export(&mut self) -> io::Result<AppState> {
        let Some(name) = ask(&mut self.input, &mut self.output, NAME_PROMPT)? else {
            writeln!(self.output)?;
            return Ok(AppState::RepeatPrompted);
        };

        let label = match (&self.session.source, self.config.label_with_source) {
            (Some(source), true) => Some(source.stem()),
            _ => None,
        };
        let file_name = match resolve_file_name(
            Some(&name),
            label.as_deref(),
            chrono::Local::now().naive_local(),
        ) {
            Ok(file_name) => file_name,
            Err(e) => {
                warn!("{}", e);
                print_warning(&mut self.output, &e.to_string())?;
                return Ok(AppState::ExportPrompted);
            }
        };
        let request = ExportRequest::new(&self.config, file_name);

        let mut sink = (self.make_sink)();
        match export_quiz(&self.session.quiz, &request, &mut sink) {
            Ok(path) => {
                print_info(
                    &mut self.output,
                    &format!("Quiz saved to {}", path.display()),
                )?;
            }
            Err(e) => {
                error!("{}", e);
                print_error(&mut self.output, &e.to_string())?;
            }
        }
        Ok(AppState::RepeatPrompted)
    }

    fn offer_repeat(&mut self) -> io::Result<AppState> {
        if ask_yes_no(&mut self.input, &mut self.output, REPEAT_QUESTION)? {
            self.session.reset_cycle();
            Ok(AppState::SelectingFile)
        } else {
            self.terminate()
        }
    }

    fn terminate(&mut self) -> io::Result<AppState> {
        writeln!(self.output, "{}", FAREWELL)?;
        self.session.keep_running = false;
        Ok(AppState::Terminated)
    }
}
