//! Mapping parsed cards onto the fields of an external note schema.

use crate::error::{MappingError, Result};
use crate::types::{Card, FieldMapping};

/// Placed between the answer and its annotation on the back side.
pub const ANNOTATION_SEPARATOR: &str = "<hr>";

/// Known schema templates: a named front field and a named back field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingRule {
    pub name: &'static str,
    pub front: &'static str,
    pub back: &'static str,
}

impl MappingRule {
    /// Exact, case-sensitive containment of both field names.
    pub fn matches(&self, field_names: &[String]) -> bool {
        let has = |wanted: &str| field_names.iter().any(|name| name == wanted);
        has(self.front) && has(self.back)
    }
}

/// Named templates in priority order. The positional fallback applies after these.
pub const MAPPING_RULES: &[MappingRule] = &[
    MappingRule {
        name: "basic",
        front: "Front",
        back: "Back",
    },
    MappingRule {
        name: "basic_localized",
        front: "正面",
        back: "背面",
    },
    MappingRule {
        name: "cloze",
        front: "Text",
        back: "Extra",
    },
];

/// Answer text with the annotation appended after a thematic break.
pub fn answer_with_annotation(card: &Card) -> String {
    match card.annotation.as_deref().map(str::trim) {
        Some(annotation) if !annotation.is_empty() => format!(
            "{}{}<span style=\"color: gray; font-size: 0.9em;\">{}</span>",
            card.answer, ANNOTATION_SEPARATOR, annotation
        ),
        _ => card.answer.clone(),
    }
}

/// Pick the front and back field names for a schema.
fn select_fields(field_names: &[String]) -> Result<(&str, &str)> {
    if let Some(rule) = MAPPING_RULES.iter().find(|rule| rule.matches(field_names)) {
        tracing::debug!(rule = rule.name, "matched schema template");
        return Ok((rule.front, rule.back));
    }

    match field_names {
        [front, back, ..] if front == back => Err(MappingError::DuplicateField {
            field: front.clone(),
        }),
        [front, back, ..] => {
            tracing::debug!(front = %front, back = %back, "using positional field mapping");
            Ok((front.as_str(), back.as_str()))
        }
        _ => Err(MappingError::TooFewFields {
            count: field_names.len(),
        }),
    }
}

/// Map a card onto a schema's declared field names.
///
/// Fails when the schema declares fewer than two fields, when the positional
/// fallback would put both sides in one field, or when a mapped field would
/// be empty.
pub fn map_fields(card: &Card, field_names: &[String]) -> Result<FieldMapping> {
    let (front, back) = select_fields(field_names)?;

    let back_content = answer_with_annotation(card);

    for (field, content) in [(front, card.question.as_str()), (back, back_content.as_str())] {
        if content.trim().is_empty() {
            return Err(MappingError::EmptyField {
                field: field.to_string(),
            });
        }
    }

    let mut mapping = FieldMapping::new();
    mapping.insert(front, card.question.as_str());
    mapping.insert(back, back_content);
    Ok(mapping)
}
