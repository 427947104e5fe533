pub mod dictionary;
pub mod suggestions;
