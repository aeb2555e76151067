//! Fixture builders shared by the integration tests.

/// Generate a multi-line reply with `num_cards` blank-line separated blocks.
///
/// # Arguments
/// * `num_cards` - Number of blocks to generate
/// * `with_metadata` - Whether each block carries annotation and tags lines
pub fn sample_reply(num_cards: usize, with_metadata: bool) -> String {
    (0..num_cards)
        .map(|i| {
            let n = i + 1;
            if with_metadata {
                format!("Q: Question {n}?\nA: Answer {n}.\nannotation: Note {n}\ntags: #deck{n} #generated\n")
            } else {
                format!("Q: Question {n}?\nA: Answer {n}.\n")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Schema field names from string literals.
#[allow(dead_code)]
pub fn schema(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
