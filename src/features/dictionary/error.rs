use std::error::Error as _;

use thiserror::Error;

/// Rejections raised before any request leaves the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a word to search")]
    Empty,
    #[error("Word is too long")]
    TooLong,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

// Every variant is reported to callers only through its message.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Word not found in dictionary")]
    NotFound,
    #[error("API request failed with status {0}")]
    UpstreamStatus(u16),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

// reqwest's Display stops at "error sending request"; the cause lives in the source chain.
impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !message.contains(&cause_text) {
                message.push_str(": ");
                message.push_str(&cause_text);
            }
            source = cause.source();
        }
        LookupError::Network(message)
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Unexpected(format!("invalid JSON from dictionary API: {}", err))
    }
}

/// Startup failures while building the dictionary client.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid dictionary API url `{0}`")]
    InvalidBaseUrl(String),
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_public_wording() {
        assert_eq!(
            LookupError::from(ValidationError::Empty).to_string(),
            "Please enter a word to search"
        );
        assert_eq!(LookupError::NotFound.to_string(), "Word not found in dictionary");
        assert_eq!(
            LookupError::UpstreamStatus(503).to_string(),
            "API request failed with status 503"
        );
        assert!(LookupError::Unexpected("boom".into())
            .to_string()
            .starts_with("Unexpected error: "));
    }
}
