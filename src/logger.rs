use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

/// Debug log written next to the program; stdout belongs to the prompts.
pub const LOG_FILE: &str = "ox_quiz_debug.log";

pub fn init() {
    init_with_path(Path::new(LOG_FILE));
}

/// Installs the global subscriber appending to `path`.
///
/// Returns `false` when the file cannot be opened or a subscriber is already
/// installed; logging is then skipped rather than treated as an error.
pub fn init_with_path(path: &Path) -> bool {
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return false;
    };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .is_ok()
}
