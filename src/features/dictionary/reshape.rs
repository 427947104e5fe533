//! Flattens the upstream JSON into [`DictionaryEntry`] values.
//!
//! Missing strings become empty, missing lists become empty and nested
//! values of the wrong shape are skipped instead of failing the lookup.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::data::models::{Definition, DictionaryEntry, Meaning, Phonetic};
use crate::features::dictionary::LookupError;

pub fn reshape_entries(body: &Value) -> Result<Vec<DictionaryEntry>, LookupError> {
    let entries = body.as_array().ok_or_else(|| {
        LookupError::Unexpected("dictionary API did not return a list of entries".into())
    })?;

    Ok(entries
        .iter()
        .filter_map(Value::as_object)
        .map(reshape_entry)
        .collect())
}

fn reshape_entry(entry: &Map<String, Value>) -> DictionaryEntry {
    DictionaryEntry {
        word: string_or_empty(entry, "word"),
        phonetic: optional_string(entry, "phonetic"),
        phonetics: objects(entry, "phonetics")
            .map(|p| Phonetic {
                text: optional_string(p, "text"),
                audio: optional_string(p, "audio"),
            })
            .collect(),
        meanings: objects(entry, "meanings").map(reshape_meaning).collect(),
        license: entry.get("license").and_then(Value::as_object).map(string_map),
        source_urls: string_list(entry, "sourceUrls"),
    }
}

fn reshape_meaning(meaning: &Map<String, Value>) -> Meaning {
    Meaning {
        part_of_speech: string_or_empty(meaning, "partOfSpeech"),
        definitions: objects(meaning, "definitions")
            .map(|d| Definition {
                definition: string_or_empty(d, "definition"),
                example: optional_string(d, "example"),
                synonyms: string_list(d, "synonyms"),
                antonyms: string_list(d, "antonyms"),
            })
            .collect(),
        synonyms: string_list(meaning, "synonyms"),
        antonyms: string_list(meaning, "antonyms"),
    }
}

fn optional_string(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn string_or_empty(obj: &Map<String, Value>, key: &str) -> String {
    optional_string(obj, key).unwrap_or_default()
}

fn string_list(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn objects<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
) -> impl Iterator<Item = &'a Map<String, Value>> {
    obj.get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_object)
}

fn string_map(obj: &Map<String, Value>) -> BTreeMap<String, String> {
    obj.iter()
        .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reshapes_a_full_entry() {
        let body = json!([{
            "word": "hello",
            "phonetic": "həˈləʊ",
            "phonetics": [
                { "text": "həˈləʊ", "audio": "//ssl.gstatic.com/hello.mp3" },
                { "text": "hɛˈləʊ" }
            ],
            "origin": "early 19th century",
            "meanings": [{
                "partOfSpeech": "exclamation",
                "definitions": [{
                    "definition": "used as a greeting",
                    "example": "hello there, Katie!",
                    "synonyms": [],
                    "antonyms": []
                }],
                "synonyms": ["hi"],
                "antonyms": ["bye"]
            }],
            "license": { "name": "CC BY-SA 3.0", "url": "https://creativecommons.org/licenses/by-sa/3.0" },
            "sourceUrls": ["https://en.wiktionary.org/wiki/hello"]
        }]);

        let entries = reshape_entries(&body).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.word, "hello");
        assert_eq!(entry.phonetic.as_deref(), Some("həˈləʊ"));
        assert_eq!(entry.phonetics.len(), 2);
        assert_eq!(entry.phonetics[1].audio, None);
        assert_eq!(entry.meanings[0].part_of_speech, "exclamation");
        assert_eq!(entry.meanings[0].synonyms, vec!["hi"]);
        assert_eq!(
            entry.meanings[0].definitions[0].example.as_deref(),
            Some("hello there, Katie!")
        );
        assert_eq!(
            entry.license.as_ref().and_then(|l| l.get("name")).map(String::as_str),
            Some("CC BY-SA 3.0")
        );
        assert_eq!(entry.source_urls, vec!["https://en.wiktionary.org/wiki/hello"]);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let body = json!([{
            "meanings": [{ "definitions": [{}] }]
        }]);

        let entry = &reshape_entries(&body).unwrap()[0];
        assert_eq!(entry.word, "");
        assert!(entry.phonetic.is_none());
        assert!(entry.phonetics.is_empty());
        assert!(entry.source_urls.is_empty());
        assert!(entry.license.is_none());

        let meaning = &entry.meanings[0];
        assert_eq!(meaning.part_of_speech, "");
        assert!(meaning.synonyms.is_empty());
        let definition = &meaning.definitions[0];
        assert_eq!(definition.definition, "");
        assert!(definition.example.is_none());
        assert!(definition.synonyms.is_empty());
        assert!(definition.antonyms.is_empty());
    }

    #[test]
    fn malformed_nested_values_are_skipped() {
        let body = json!([
            "not an entry",
            {
                "word": "odd",
                "phonetics": [null, 3, { "text": "ɒd" }],
                "meanings": { "partOfSpeech": "adjective" },
                "sourceUrls": ["https://example.org", 7],
                "license": { "name": "MIT", "year": 2020 }
            }
        ]);

        let entries = reshape_entries(&body).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.phonetics.len(), 1);
        assert!(entry.meanings.is_empty());
        assert_eq!(entry.source_urls, vec!["https://example.org"]);
        assert_eq!(entry.license.as_ref().map(|l| l.len()), Some(1));
    }

    #[test]
    fn non_array_body_is_unexpected() {
        let err = reshape_entries(&json!({ "title": "No Definitions Found" })).unwrap_err();
        assert!(matches!(err, LookupError::Unexpected(_)));
    }
}
