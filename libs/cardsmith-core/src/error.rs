//! Error types for cardsmith-core.

use thiserror::Error;

/// Result type alias using MappingError.
pub type Result<T> = std::result::Result<T, MappingError>;

/// Errors that can occur while mapping a card onto a note schema.
///
/// Parsing has no error type: text without recognizable cards yields an
/// empty list instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("cannot determine field mapping for schema (declares {count} field(s))")]
    TooFewFields { count: usize },

    #[error("field '{field}' would be empty")]
    EmptyField { field: String },

    #[error("field '{field}' cannot hold both question and answer")]
    DuplicateField { field: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_too_few_fields() {
        let error = MappingError::TooFewFields { count: 1 };
        assert_eq!(
            error.to_string(),
            "cannot determine field mapping for schema (declares 1 field(s))"
        );
    }

    #[test]
    fn display_empty_field() {
        let error = MappingError::EmptyField {
            field: "Back".to_string(),
        };
        assert_eq!(error.to_string(), "field 'Back' would be empty");
    }

    #[test]
    fn display_duplicate_field() {
        let error = MappingError::DuplicateField {
            field: "Notes".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "field 'Notes' cannot hold both question and answer"
        );
    }
}
