//! Line-oriented fallback: `Q: ... A: ...` on one line, or `question:::answer`.

use super::tags::{non_empty, parse_hash_tags};
use crate::types::Card;
use once_cell::sync::Lazy;
use regex::Regex;

/// Delimiter of the bare `question:::answer` form.
pub const INLINE_DELIMITER: &str = ":::";

static INLINE_CARD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)Q:\s*(.*?)\s*A:\s*(.*?)\s*(?:annotation:|tags:|$)")
        .expect("inline card pattern is valid")
});

static INLINE_ANNOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)annotation:\s*(.*?)\s*(?:tags:|$)").expect("inline annotation pattern is valid")
});

static INLINE_TAGS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)tags:(.*)$").expect("inline tags pattern is valid"));

/// Parse each non-empty line on its own.
///
/// Unlike the block and table layouts, an inline `Q: A:` match is kept even
/// when the question or answer is empty, and only `#tag` lists are read.
pub fn parse_fallback(text: &str) -> Vec<Card> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| parse_inline(line).or_else(|| parse_delimited(line)))
        .collect()
}

fn parse_inline(line: &str) -> Option<Card> {
    let captures = INLINE_CARD.captures(line)?;

    let annotation = INLINE_ANNOTATION
        .captures(line)
        .map(|c| c[1].to_string())
        .filter(|text| !text.is_empty());
    let tags = INLINE_TAGS
        .captures(line)
        .and_then(|c| non_empty(parse_hash_tags(&c[1])));

    Some(Card {
        question: captures[1].to_string(),
        answer: captures[2].to_string(),
        annotation,
        tags,
    })
}

fn parse_delimited(line: &str) -> Option<Card> {
    let mut pieces = line.split(INLINE_DELIMITER);
    let question = pieces.next()?;
    let answer = pieces.next()?;
    Some(Card::new(question.trim(), answer.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_inline_card() {
        assert_eq!(
            parse_fallback("Q: What is Rust? A: A language."),
            vec![Card::new("What is Rust?", "A language.")]
        );
    }

    #[test]
    fn parse_inline_card_with_metadata() {
        let input = "q: What is Rust? a: A language. Annotation: from Mozilla tags: #rust #lang";
        assert_eq!(
            parse_fallback(input),
            vec![Card::new("What is Rust?", "A language.")
                .with_annotation("from Mozilla")
                .with_tags(["rust", "lang"])]
        );
    }

    #[test]
    fn inline_tags_only_accept_hash_style() {
        let cards = parse_fallback("Q: one A: two tags: a, b");
        assert_eq!(cards, vec![Card::new("one", "two")]);
    }

    #[test]
    fn inline_card_keeps_empty_fields() {
        assert_eq!(parse_fallback("Q: A: answer"), vec![Card::new("", "answer")]);
        assert_eq!(parse_fallback("Q: question A:"), vec![Card::new("question", "")]);
    }

    #[test]
    fn parse_delimited_card() {
        assert_eq!(
            parse_fallback("capital of France:::Paris"),
            vec![Card::new("capital of France", "Paris")]
        );
    }

    #[test]
    fn delimited_extra_pieces_are_ignored() {
        assert_eq!(parse_fallback(" a ::: b ::: c "), vec![Card::new("a", "b")]);
    }

    #[test]
    fn mixed_lines_keep_order() {
        let input = "intro text\nQ: one A: two\n\nthree:::four\nclosing remark";
        assert_eq!(
            parse_fallback(input),
            vec![Card::new("one", "two"), Card::new("three", "four")]
        );
    }

    #[test]
    fn unmatched_lines_contribute_nothing() {
        assert!(parse_fallback("just prose\nQ: dangling question").is_empty());
    }
}
