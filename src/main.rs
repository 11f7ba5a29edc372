use ox_quiz::config::{AppConfig, CONFIG_FILE};
use ox_quiz::{logger, DocxSink, SessionController};
use std::io;
use std::path::Path;

fn main() -> io::Result<()> {
    logger::init();
    tracing::info!("starting ox-quiz");

    let config = AppConfig::load(Path::new(CONFIG_FILE));
    let stdin = io::stdin();
    let mut controller = SessionController::new(config, stdin.lock(), io::stdout(), DocxSink::new);
    controller.run()?;

    tracing::info!("session finished");
    Ok(())
}
