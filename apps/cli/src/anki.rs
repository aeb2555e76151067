//! Request and response shapes of the note-creation bulk API.

use cardsmith_core::{BatchOutcome, FieldMapping, NotePayload};
use serde::{Deserialize, Serialize};

const API_VERSION: u32 = 6;

#[derive(Debug, Serialize)]
pub struct AddNotesRequest {
    action: &'static str,
    version: u32,
    params: AddNotesParams,
}

#[derive(Debug, Serialize)]
struct AddNotesParams {
    notes: Vec<Note>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Note {
    deck_name: String,
    model_name: String,
    fields: FieldMapping,
    tags: Vec<String>,
    options: NoteOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NoteOptions {
    allow_duplicate: bool,
}

impl AddNotesRequest {
    pub fn new(deck: &str, model: &str, allow_duplicates: bool, payloads: Vec<NotePayload>) -> Self {
        let notes = payloads
            .into_iter()
            .map(|payload| Note {
                deck_name: deck.to_string(),
                model_name: model.to_string(),
                fields: payload.fields,
                tags: payload.tags,
                options: NoteOptions {
                    allow_duplicate: allow_duplicates,
                },
            })
            .collect();

        Self {
            action: "addNotes",
            version: API_VERSION,
            params: AddNotesParams { notes },
        }
    }

    pub fn note_count(&self) -> usize {
        self.params.notes.len()
    }
}

/// Bulk API reply: either the bare result array or the full envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AddNotesResponse {
    Bare(Vec<Option<i64>>),
    Envelope {
        result: Option<Vec<Option<i64>>>,
        error: Option<String>,
    },
}

impl AddNotesResponse {
    /// Tally per-item results; a top-level error is returned as-is.
    pub fn outcome(&self) -> Result<BatchOutcome, String> {
        match self {
            Self::Envelope {
                error: Some(error), ..
            } => Err(error.clone()),
            Self::Envelope { result, .. } => {
                Ok(BatchOutcome::from_results(result.as_deref().unwrap_or_default()))
            }
            Self::Bare(result) => Ok(BatchOutcome::from_results(result)),
        }
    }
}
