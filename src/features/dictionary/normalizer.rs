use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref NORMALIZE_RE: Regex = Regex::new(r"[^a-zA-Z\-']").unwrap();
    static ref WORD_RE: Regex = Regex::new(r"\b[a-zA-Z]+\b").unwrap();
}

// Checked in order; the first one that fits wins.
const SUFFIXES: [&str; 7] = ["ing", "ed", "er", "est", "ly", "s", "es"];

/// Trims, lowercases and drops everything but ASCII letters, `-` and `'`.
pub fn clean_word(word: &str) -> String {
    let lower = word.trim().to_lowercase();
    NORMALIZE_RE.replace_all(&lower, "").into_owned()
}

/// Crude stemmer: strips one suffix when the remaining stem is longer than
/// the suffix plus two characters.
pub fn root_word(word: &str) -> String {
    let cleaned = clean_word(word);

    for suffix in SUFFIXES {
        if let Some(stem) = cleaned.strip_suffix(suffix) {
            if stem.len() > suffix.len() + 2 {
                return stem.to_string();
            }
        }
    }

    cleaned
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordStats {
    pub total_words: usize,
    pub unique_words: usize,
    pub average_length: f64,
}

pub fn word_stats(text: &str) -> WordStats {
    let lower = text.to_lowercase();
    let words: Vec<&str> = WORD_RE.find_iter(&lower).map(|m| m.as_str()).collect();
    let unique: HashSet<&str> = words.iter().copied().collect();

    let average_length = if words.is_empty() {
        0.0
    } else {
        words.iter().map(|w| w.len()).sum::<usize>() as f64 / words.len() as f64
    };

    WordStats {
        total_words: words.len(),
        unique_words: unique.len(),
        average_length,
    }
}
