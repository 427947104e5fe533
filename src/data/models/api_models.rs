use serde::{Deserialize, Serialize};

// Missing query parameters decode as empty strings.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub word: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SuggestionParams {
    #[serde(default)]
    pub partial: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        HealthResponse {
            status: "healthy",
            service: "Dictionary API",
        }
    }
}

/// Body of every error response produced by the server.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
