pub mod client;
pub mod error;
pub mod normalizer;
pub mod reshape;
pub mod validator;

pub use client::{DictionaryApi, DEFAULT_API_URL};
pub use error::{ClientError, LookupError, ValidationError};
pub use normalizer::{clean_word, root_word, word_stats};
pub use validator::validate_word;
