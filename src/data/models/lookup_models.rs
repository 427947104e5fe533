use serde::Serialize;

use crate::data::models::DictionaryEntry;

/// Outcome of a single lookup. `found` tells which of `data`/`error` is set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResult {
    pub word: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<DictionaryEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LookupResult {
    pub fn found(word: impl Into<String>, data: Vec<DictionaryEntry>) -> Self {
        LookupResult {
            word: word.into(),
            found: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(word: impl Into<String>, error: impl ToString) -> Self {
        LookupResult {
            word: word.into(),
            found: false,
            data: None,
            error: Some(error.to_string()),
        }
    }
}
