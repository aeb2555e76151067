//! Blank-line separated `Q:`/`A:` blocks.

use super::tags::{non_empty, parse_tags};
use crate::types::Card;

/// Parse text made of blocks separated by one or more blank lines.
///
/// Each block contributes at most one card; blocks missing a question or an
/// answer are dropped.
pub fn parse_multiline(text: &str) -> Vec<Card> {
    blocks(text)
        .into_iter()
        .filter_map(|block| {
            let mut builder = CardBuilder::default();
            for line in block {
                builder.process_line(line);
            }
            builder.build()
        })
        .collect()
}

/// Group trimmed, non-empty lines into blocks split at whitespace-only lines.
fn blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(trimmed);
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

enum LineType<'a> {
    Question(&'a str),
    Answer(&'a str),
    Annotation(&'a str),
    Tags(&'a str),
    Text,
}

impl<'a> LineType<'a> {
    fn classify(line: &'a str) -> Self {
        if let Some(rest) = strip_prefix_ignore_case(line, "Q:") {
            Self::Question(rest)
        } else if let Some(rest) = strip_prefix_ignore_case(line, "A:") {
            Self::Answer(rest)
        } else if let Some(rest) = strip_prefix_ignore_case(line, "annotation:") {
            Self::Annotation(rest)
        } else if let Some(rest) = strip_prefix_ignore_case(line, "tags:") {
            Self::Tags(rest)
        } else {
            Self::Text
        }
    }
}

fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(line[prefix.len()..].trim())
    } else {
        None
    }
}

#[derive(Default)]
struct CardBuilder {
    question: String,
    answer: String,
    annotation: Option<String>,
    tags: Option<Vec<String>>,
}

impl CardBuilder {
    fn process_line(&mut self, line: &str) {
        match LineType::classify(line) {
            LineType::Question(text) => self.question = text.to_string(),
            LineType::Answer(text) => self.answer = text.to_string(),
            LineType::Annotation(text) => {
                self.annotation = (!text.is_empty()).then(|| text.to_string());
            }
            LineType::Tags(text) => self.tags = non_empty(parse_tags(text)),
            LineType::Text => {}
        }
    }

    fn build(self) -> Option<Card> {
        if self.question.is_empty() || self.answer.is_empty() {
            tracing::trace!(question = %self.question, "dropping incomplete block");
            return None;
        }

        Some(Card {
            question: self.question,
            answer: self.answer,
            annotation: self.annotation,
            tags: self.tags,
        })
    }
}
