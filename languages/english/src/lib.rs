pub mod dictionary_api;
pub mod words;

pub use dictionary_api::FreeDictionaryClient;
pub use words::{ENGLISH_WORDS, english_catalog};
