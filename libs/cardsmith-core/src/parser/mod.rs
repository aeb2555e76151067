//! Parser for flashcards embedded in free-form model replies.
//!
//! Model output rarely follows one layout, so the text is first classified
//! as a whole and then handed to exactly one strategy.
//!
//! # Multi-line blocks
//! ```text
//! Q: What is Rust?
//! A: A systems programming language.
//! annotation: Started at Mozilla.
//! tags: #rust #languages
//!
//! Q: Explain borrowing
//! A: References without ownership.
//! ```
//!
//! # Table
//! ```text
//! Q	A	annotation	tags
//! What is Rust?	A language	Mozilla	#rust
//! ```
//!
//! # Fallback (one card per line)
//! ```text
//! Q: What is Rust? A: A language. tags: #rust
//! capital of France:::Paris
//! ```

mod fallback;
mod multiline;
mod table;
mod tags;

pub use fallback::parse_fallback;
pub use multiline::parse_multiline;
pub use table::parse_table;
pub use tags::{parse_hash_tags, parse_tags};

use crate::types::Card;
use once_cell::sync::Lazy;
use regex::Regex;

/// A `Q:` line followed, possibly after `annotation:`/`tags:` lines, by an `A:` line.
static MULTILINE_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)^Q:.*\r?\n(?:(?:annotation:|tags:).*\r?\n)*A:")
        .expect("multi-line marker pattern is valid")
});

/// Layout of a model reply, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFormat {
    MultiLine,
    Table,
    Fallback,
}

impl CardFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultiLine => "multi_line",
            Self::Table => "table",
            Self::Fallback => "fallback",
        }
    }
}

/// Classify the whole text. Runs once per reply, never per line.
pub fn detect_format(text: &str) -> CardFormat {
    if MULTILINE_MARKER.is_match(text) {
        CardFormat::MultiLine
    } else if table::has_header(text) {
        CardFormat::Table
    } else {
        CardFormat::Fallback
    }
}

/// Parse a model reply into cards, in order of appearance.
///
/// Never fails: text without recognizable cards yields an empty list.
pub fn parse(text: &str) -> Vec<Card> {
    let format = detect_format(text);
    let cards = match format {
        CardFormat::MultiLine => parse_multiline(text),
        CardFormat::Table => parse_table(text),
        CardFormat::Fallback => parse_fallback(text),
    };

    tracing::debug!(format = format.as_str(), count = cards.len(), "parsed cards");
    cards
}
