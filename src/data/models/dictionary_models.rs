use std::collections::BTreeMap;

use serde::Serialize;

/// One entry returned by the upstream dictionary, flattened so that every
/// list is present even when the upstream omitted it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    pub phonetics: Vec<Phonetic>,
    pub meanings: Vec<Meaning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<BTreeMap<String, String>>,
    pub source_urls: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Phonetic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Definition {
    pub definition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

impl DictionaryEntry {
    /// The entry's own phonetic spelling, falling back to the first phonetic
    /// variant that carries text.
    pub fn primary_phonetic(&self) -> Option<&str> {
        self.phonetic
            .as_deref()
            .filter(|p| !p.is_empty())
            .or_else(|| {
                self.phonetics
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .find(|t| !t.is_empty())
            })
    }

    pub fn audio_url(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .filter_map(|p| p.audio.as_deref())
            .find(|a| !a.is_empty())
    }
}
