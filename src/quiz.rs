use crate::models::{QuizItem, QuizSet};

pub const SENTENCE_DELIMITER: char = '.';

/// Splits text on every literal `.` and keeps the trimmed, non-empty pieces.
///
/// No attempt is made to recognise abbreviations, decimals or ellipses:
/// `"v1.2"` becomes `["v1", "2"]`.
pub fn segment_sentences(text: &str) -> Vec<String> {
    text.split(SENTENCE_DELIMITER)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn build_quiz_items<I, S>(stems: I) -> QuizSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    QuizSet::new(
        stems
            .into_iter()
            .filter_map(|stem| QuizItem::new(stem.as_ref()))
            .collect(),
    )
}

pub fn generate_quiz(text: &str) -> QuizSet {
    build_quiz_items(segment_sentences(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sentences() {
        let quiz = generate_quiz("Hello world. Goodbye.");
        assert_eq!(quiz.texts(), vec!["Hello world. (O/X)", "Goodbye. (O/X)"]);
    }

    #[test]
    fn test_whitespace_only_text() {
        assert!(generate_quiz("   ").is_empty());
        assert!(generate_quiz("\n\t \n").is_empty());
    }

    #[test]
    fn test_empty_text() {
        assert!(segment_sentences("").is_empty());
        assert!(generate_quiz("").is_empty());
    }

    #[test]
    fn test_no_delimiter_gives_single_item() {
        let quiz = generate_quiz("  The mitochondria is the powerhouse of the cell  ");
        assert_eq!(
            quiz.texts(),
            vec!["The mitochondria is the powerhouse of the cell. (O/X)"]
        );
    }

    #[test]
    fn test_trailing_delimiter_adds_nothing() {
        assert_eq!(segment_sentences("One. Two."), vec!["One", "Two"]);
        assert_eq!(segment_sentences("One... Two.  .  "), vec!["One", "Two"]);
    }

    #[test]
    fn test_naive_split_on_decimals_and_abbreviations() {
        assert_eq!(
            segment_sentences("Pi is 3.14. Dr. Kim agrees."),
            vec!["Pi is 3", "14", "Dr", "Kim agrees"]
        );
    }

    #[test]
    fn test_newlines_inside_fragment_are_kept() {
        assert_eq!(
            segment_sentences("line one\nline two. next"),
            vec!["line one\nline two", "next"]
        );
    }

    #[test]
    fn test_hangul_sentences() {
        let quiz = generate_quiz("지구는 둥글다. 물은 100도에서 끓는다.");
        assert_eq!(
            quiz.texts(),
            vec!["지구는 둥글다. (O/X)", "물은 100도에서 끓는다. (O/X)"]
        );
    }

    #[test]
    fn test_item_count_matches_fragment_count() {
        let samples = [
            "a.b.c",
            "...",
            " x . . y .",
            "no delimiter here",
            "",
            "trailing.\n\n",
        ];
        for text in samples {
            let expected = text.split('.').filter(|s| !s.trim().is_empty()).count();
            assert_eq!(generate_quiz(text).len(), expected, "input {:?}", text);
        }
    }

    #[test]
    fn test_pipeline_is_repeatable() {
        let text = "Rust is safe. Rust is fast. ";
        assert_eq!(generate_quiz(text), generate_quiz(text));
    }

    #[test]
    fn test_builder_is_order_preserving() {
        let quiz = build_quiz_items(["third", "first", "second"]);
        let stems: Vec<&str> = quiz.items().iter().map(|i| i.stem()).collect();
        assert_eq!(stems, vec!["third", "first", "second"]);
    }
}
