//! Tab or space aligned table with a `Q A annotation tags` header.

use super::tags::{non_empty, parse_tags};
use crate::types::Card;
use once_cell::sync::Lazy;
use regex::Regex;

static HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*Q\s+A\s+annotation\s+tags\s*$").expect("table header pattern is valid")
});

static COLUMN_GAP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" {2,}").expect("column gap pattern is valid"));

/// Non-blank lines, untrimmed so a leading empty column keeps its position.
fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|line| !line.trim().is_empty())
}

/// Whether the first non-empty line is the table header.
pub(crate) fn has_header(text: &str) -> bool {
    non_empty_lines(text)
        .next()
        .is_some_and(|line| HEADER.is_match(line))
}

/// Parse the rows of a headed table. Text without the header yields nothing.
pub fn parse_table(text: &str) -> Vec<Card> {
    let mut lines = non_empty_lines(text);
    match lines.next() {
        Some(header) if HEADER.is_match(header) => {}
        _ => return Vec::new(),
    }

    lines.filter_map(parse_row).collect()
}

fn split_columns(line: &str) -> Vec<&str> {
    if line.contains('\t') {
        line.split('\t').map(str::trim).collect()
    } else {
        // Space-aligned rows cannot express an empty first column.
        COLUMN_GAP.split(line.trim()).map(str::trim).collect()
    }
}

fn parse_row(line: &str) -> Option<Card> {
    let columns = split_columns(line);
    if columns.len() < 2 || columns[0].is_empty() || columns[1].is_empty() {
        tracing::trace!(row = line, "dropping incomplete table row");
        return None;
    }

    let annotation = columns
        .get(2)
        .filter(|text| !text.is_empty())
        .map(|text| text.to_string());
    let tags = columns
        .get(3)
        .filter(|text| !text.is_empty())
        .and_then(|text| non_empty(parse_tags(text)));

    Some(Card {
        question: columns[0].to_string(),
        answer: columns[1].to_string(),
        annotation,
        tags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_tab_separated_row() {
        let input = "Q\tA\tannotation\ttags\nfoo\tbar\tnote\t#x #y";
        assert_eq!(
            parse_table(input),
            vec![Card::new("foo", "bar")
                .with_annotation("note")
                .with_tags(["x", "y"])]
        );
    }

    #[test]
    fn parse_space_aligned_rows() {
        let input = "Q    A        annotation   tags\n\
                     What is 2+2  Four  basic math  math, arithmetic\n\
                     Largest planet  Jupiter";
        assert_eq!(
            parse_table(input),
            vec![
                Card::new("What is 2+2", "Four")
                    .with_annotation("basic math")
                    .with_tags(["math", "arithmetic"]),
                Card::new("Largest planet", "Jupiter"),
            ]
        );
    }

    #[test]
    fn single_spaces_do_not_split_columns() {
        let input = "Q A annotation tags\nonly one column here";
        assert!(parse_table(input).is_empty());
    }

    #[test]
    fn header_is_case_insensitive() {
        assert!(has_header("\n  q\ta\tANNOTATION\tTags\n"));
        assert!(!has_header("Q\tA\tnotes\ttags"));
        assert!(!has_header("intro\nQ\tA\tannotation\ttags"));
    }

    #[test]
    fn rows_with_empty_question_or_answer_are_dropped() {
        let input = "Q\tA\tannotation\ttags\n\tbar\nfoo\t\nfoo\tbar";
        assert_eq!(parse_table(input), vec![Card::new("foo", "bar")]);
    }

    #[test]
    fn leading_tab_keeps_empty_question_in_place() {
        let input = "Q\tA\tannotation\ttags\n\tParis\tcapital note\t#geo";
        assert!(parse_table(input).is_empty());
    }

    #[test]
    fn indented_space_aligned_row() {
        let input = "Q  A  annotation  tags\n   foo  bar";
        assert_eq!(parse_table(input), vec![Card::new("foo", "bar")]);
    }

    #[test]
    fn blank_optional_columns_stay_absent() {
        let input = "Q\tA\tannotation\ttags\nfoo\tbar\t \t";
        assert_eq!(parse_table(input), vec![Card::new("foo", "bar")]);
    }

    #[test]
    fn missing_header_yields_nothing() {
        assert!(parse_table("foo\tbar").is_empty());
    }
}
