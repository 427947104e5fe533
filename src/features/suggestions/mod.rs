pub mod provider;
pub mod words;

pub use provider::SuggestionProvider;
