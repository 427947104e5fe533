use std::{fs, io, path::Path};

use crate::features::suggestions::words::COMMON_WORDS;

pub const MAX_SUGGESTIONS: usize = 10;

/// Prefix autocomplete over a fixed vocabulary. Built once at startup and
/// shared read-only between handlers.
#[derive(Debug, Clone)]
pub struct SuggestionProvider {
    words: Vec<String>,
}

impl Default for SuggestionProvider {
    fn default() -> Self {
        Self::new(COMMON_WORDS.iter().copied())
    }
}

impl SuggestionProvider {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Loads a newline separated word list. Blank lines and `#` comments are skipped.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::new(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        ))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn suggest(&self, partial: &str) -> Vec<String> {
        if partial.is_empty() {
            return Vec::new();
        }

        let prefix = partial.to_lowercase();
        self.words
            .iter()
            .filter(|word| word.to_lowercase().starts_with(&prefix))
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect()
    }
}
