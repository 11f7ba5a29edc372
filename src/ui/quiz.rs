use crate::models::QuizSet;
use crate::utils::wrap_text;
use crossterm::style::Stylize;
use std::io::{self, Write};

pub const QUIZ_LIST_TITLE: &str = "O/X Quiz List";

/// Prints the quiz as `N. item`, wrapping long items under a hanging indent.
pub fn draw_quiz_set<W: Write>(output: &mut W, quiz: &QuizSet, width: usize) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", QUIZ_LIST_TITLE.green().bold())?;
    writeln!(output)?;

    for (number, item) in quiz.numbered() {
        let prefix = format!("{}. ", number);
        let indent = " ".repeat(prefix.len());
        let lines = wrap_text(&item.text(), width.saturating_sub(prefix.len()));
        for (i, line) in lines.iter().enumerate() {
            if i == 0 {
                writeln!(output, "{}{}", prefix, line)?;
            } else {
                writeln!(output, "{}{}", indent, line)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::generate_quiz;

    #[test]
    fn test_draw_quiz_set_numbers_items() {
        let quiz = generate_quiz("Hello world. Goodbye.");
        let mut output = Vec::new();
        draw_quiz_set(&mut output, &quiz, 80).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains(QUIZ_LIST_TITLE));
        assert!(text.contains("1. Hello world. (O/X)\n"));
        assert!(text.contains("2. Goodbye. (O/X)\n"));
    }

    #[test]
    fn test_draw_quiz_set_hanging_indent() {
        let quiz = generate_quiz("alpha beta gamma delta");
        let mut output = Vec::new();
        draw_quiz_set(&mut output, &quiz, 15).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("1. alpha beta\n   gamma delta.\n   (O/X)\n"));
    }
}
