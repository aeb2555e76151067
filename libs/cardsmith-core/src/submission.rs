//! Per-card note payloads and bulk result tallies.

use crate::error::{MappingError, Result};
use crate::mapping::map_fields;
use crate::types::{Card, FieldMapping};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields and tags for one note-creation request item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePayload {
    pub fields: FieldMapping,
    pub tags: Vec<String>,
}

impl NotePayload {
    pub fn from_card(card: &Card, field_names: &[String]) -> Result<Self> {
        Ok(Self {
            fields: map_fields(card, field_names)?,
            tags: card.tag_list().to_vec(),
        })
    }
}

/// Mapping outcome for one card of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadResult {
    /// Position of the card in the input slice.
    pub index: usize,
    pub payload: std::result::Result<NotePayload, MappingError>,
}

/// Map every card independently; one card's failure never affects another.
pub fn build_payloads(cards: &[Card], field_names: &[String]) -> Vec<PayloadResult> {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let payload = NotePayload::from_card(card, field_names);
            if let Err(ref error) = payload {
                tracing::debug!(index, %error, "card cannot be mapped");
            }
            PayloadResult { index, payload }
        })
        .collect()
}

/// Success count of a bulk submission, kept apart from the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub succeeded: usize,
    pub total: usize,
}

impl BatchOutcome {
    /// Count items from a bulk API that reports `None` for each failed item.
    pub fn from_results<T>(results: &[Option<T>]) -> Self {
        Self {
            succeeded: results.iter().filter(|result| result.is_some()).count(),
            total: results.len(),
        }
    }

    pub fn failed(&self) -> usize {
        self.total - self.succeeded
    }

    pub fn all_succeeded(&self) -> bool {
        self.succeeded == self.total
    }
}

impl fmt::Display for BatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} notes added", self.succeeded, self.total)
    }
}
