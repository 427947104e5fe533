pub mod api_models;
pub mod dictionary_models;
pub mod lookup_models;

pub use api_models::{ErrorBody, HealthResponse, SearchParams, SuggestionParams, SuggestionsResponse};
pub use dictionary_models::{Definition, DictionaryEntry, Meaning, Phonetic};
pub use lookup_models::LookupResult;
