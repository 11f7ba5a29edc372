use lazy_static::lazy_static;
use regex::Regex;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

lazy_static! {
    static ref NEWLINE_RUN: Regex = Regex::new(r"\s*[\r\n]+\s*").expect("valid regex");
}

/// Replaces every run of line breaks (and the blanks around it) with one space.
pub fn collapse_newlines(text: &str) -> String {
    NEWLINE_RUN.replace_all(text, " ").into_owned()
}

/// Current terminal width in columns, or 80 when stdout is not a terminal.
pub fn terminal_width() -> usize {
    match crossterm::terminal::size() {
        Ok((cols, _)) if cols > 0 => cols as usize,
        _ => DEFAULT_TERMINAL_WIDTH,
    }
}

/// Shortens `s` to at most `max_width` display columns, ending in `...`
/// (or as many dots as fit when the limit is below three columns).
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width < 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str("...");
    out
}

/// Word-wraps `text` into lines of at most `max_width` display columns.
///
/// Words wider than a whole line are broken between characters. Hangul and
/// other double-width characters count as two columns.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if current_width > 0 && current_width + 1 + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for ch in word.chars() {
            let w = ch.width().unwrap_or(0);
            if current_width + w > max_width && current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += w;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_newlines() {
        assert_eq!(collapse_newlines("line one\nline two"), "line one line two");
        assert_eq!(collapse_newlines("a \r\n\r\n  b"), "a b");
        assert_eq!(collapse_newlines("no breaks"), "no breaks");
    }

    #[test]
    fn test_truncate_string_no_truncation() {
        assert_eq!(truncate_string("Short string", 20), "Short string");
        assert_eq!(truncate_string("", 20), "");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let result = truncate_string("This is a very long string that should be truncated", 20);
        assert_eq!(result, "This is a very lo...");
        assert_eq!(result.width(), 20);
    }

    #[test]
    fn test_truncate_string_tiny_limit() {
        assert_eq!(truncate_string("notes.txt", 2), "..");
        assert_eq!(truncate_string("notes.txt", 0), "");
        assert_eq!(truncate_string("notes.txt", 3), "...");
        for width in 0..6 {
            assert!(truncate_string("가나다라", width).width() <= width);
        }
    }

    #[test]
    fn test_truncate_string_wide_chars() {
        // each syllable is two columns wide
        let result = truncate_string("가나다라마바사", 9);
        assert_eq!(result, "가나다...");
        assert!(result.width() <= 9);
    }

    #[test]
    fn test_wrap_text_fits_on_one_line() {
        assert_eq!(wrap_text("Hello world", 20), vec!["Hello world"]);
    }

    #[test]
    fn test_wrap_text_breaks_between_words() {
        let lines = wrap_text("This is a long line that should wrap", 10);
        assert_eq!(lines, vec!["This is a", "long line", "that", "should", "wrap"]);
        assert!(lines.iter().all(|l| l.width() <= 10));
    }

    #[test]
    fn test_wrap_text_splits_oversized_word() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_text_counts_wide_chars() {
        let lines = wrap_text("지구는 둥글다 물은 끓는다", 8);
        assert_eq!(lines, vec!["지구는", "둥글다", "물은", "끓는다"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text("", 10).is_empty());
        assert!(wrap_text("   ", 10).is_empty());
    }
}
