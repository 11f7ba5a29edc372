use crate::error::QuizError;
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};
use tracing::warn;

pub const EXIT_WORDS: [&str; 3] = ["exit", "q", "quit"];
const YES_WORDS: [&str; 2] = ["y", "yes"];
const NO_WORDS: [&str; 2] = ["n", "no"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Exit,
    /// Zero-based catalog index.
    Index(usize),
}

/// Reads one line, trimmed. `None` means the input is closed.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", question)?;
    output.flush()?;
    read_line(input)
}

pub fn parse_yes_no(answer: &str) -> Result<bool, QuizError> {
    let answer = answer.trim().to_lowercase();
    if YES_WORDS.contains(&answer.as_str()) {
        Ok(true)
    } else if NO_WORDS.contains(&answer.as_str()) {
        Ok(false)
    } else {
        Err(QuizError::InvalidYesNo { input: answer })
    }
}

/// Parses a 1-based file number or one of the exit words.
pub fn parse_selection(answer: &str, count: usize) -> Result<Selection, QuizError> {
    let answer = answer.trim();
    if EXIT_WORDS.iter().any(|w| w.eq_ignore_ascii_case(answer)) {
        return Ok(Selection::Exit);
    }

    match answer.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(Selection::Index(n - 1)),
        _ => Err(QuizError::InvalidSelection {
            input: answer.to_string(),
            max: count,
        }),
    }
}

/// Asks until the answer is yes or no. A closed input counts as no.
pub fn ask_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<bool> {
    loop {
        let Some(answer) = ask(input, output, &format!("{} (Y/N): ", question))? else {
            writeln!(output)?;
            return Ok(false);
        };
        match parse_yes_no(&answer) {
            Ok(yes) => return Ok(yes),
            Err(e) => {
                warn!("{}", e);
                print_warning(output, &e.to_string())?;
            }
        }
    }
}

pub fn print_warning<W: Write>(output: &mut W, message: &str) -> io::Result<()> {
    writeln!(output, "{} {}", "[warning]".yellow().bold(), message)
}

pub fn print_error<W: Write>(output: &mut W, message: &str) -> io::Result<()> {
    writeln!(output, "{} {}", "[error]".red().bold(), message)
}

pub fn print_info<W: Write>(output: &mut W, message: &str) -> io::Result<()> {
    writeln!(output, "{} {}", "[info]".cyan(), message)
}
