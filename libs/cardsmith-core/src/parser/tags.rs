//! Tag list parsing.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s,]+").expect("tag separator pattern is valid"));

/// Split raw tag text into tags.
///
/// Text containing `#` is read as `#tag` tokens; anything else is split on
/// runs of whitespace or commas. Empty tokens are dropped.
pub fn parse_tags(raw: &str) -> Vec<String> {
    if raw.contains('#') {
        return parse_hash_tags(raw);
    }

    TAG_SEPARATOR
        .split(raw)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split raw tag text on `#`, keeping the trimmed token after each marker.
pub fn parse_hash_tags(raw: &str) -> Vec<String> {
    raw.split('#')
        .skip(1)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// `Some` only when at least one tag survives.
pub(crate) fn non_empty(tags: Vec<String>) -> Option<Vec<String>> {
    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}
