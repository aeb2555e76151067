//! Runtime configuration from the environment.

const DEFAULT_DECK: &str = "Default";
const DEFAULT_MODEL: &str = "Basic";
const DEFAULT_FIELDS: &str = "Front,Back";

/// Note-creation defaults, overridable per command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub deck: String,
    pub model: String,
    pub fields: Vec<String>,
    pub allow_duplicates: bool,
}

impl Config {
    /// Load from `.env` (if present) and process environment variables.
    ///
    /// Recognized variables:
    /// - CARDSMITH_DECK: Target deck name
    /// - CARDSMITH_MODEL: Note type name
    /// - CARDSMITH_FIELDS: Comma-separated field names of the note type
    /// - CARDSMITH_ALLOW_DUPLICATES: true/1/yes to allow duplicate notes
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let deck = lookup("CARDSMITH_DECK").unwrap_or_else(|| DEFAULT_DECK.to_string());
        let model = lookup("CARDSMITH_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let fields = split_fields(
            lookup("CARDSMITH_FIELDS")
                .as_deref()
                .unwrap_or(DEFAULT_FIELDS),
        );
        let allow_duplicates = lookup("CARDSMITH_ALLOW_DUPLICATES")
            .is_some_and(|value| parse_flag(&value));

        Self {
            deck,
            model,
            fields,
            allow_duplicates,
        }
    }
}

/// Split a comma-separated field list, dropping blanks.
pub fn split_fields(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
