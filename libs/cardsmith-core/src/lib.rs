//! Core library turning model replies into importable flashcards.
//!
//! Provides:
//! - Format-tolerant parser for question/answer cards in free-form text
//! - Field mapping of cards onto external note schemas
//! - Per-card note payloads and bulk submission tallies
//! - Shared types (Card, FieldMapping)

pub mod error;
pub mod mapping;
pub mod parser;
pub mod submission;
pub mod types;

pub use error::{MappingError, Result};
pub use mapping::{answer_with_annotation, map_fields, MappingRule, ANNOTATION_SEPARATOR, MAPPING_RULES};
pub use parser::{detect_format, parse, parse_tags, CardFormat};
pub use submission::{build_payloads, BatchOutcome, NotePayload, PayloadResult};
pub use types::{Card, FieldMapping};
