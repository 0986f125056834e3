pub mod config;
pub mod dictionary;
pub mod error;
pub mod menu;
pub mod word_type;

// Re-export error types for convenience
pub use error::{DictionaryError, Error, Result};

pub use dictionary::{Dictionary, WordEntry};
pub use menu::{Command, MenuState, Session};
pub use word_type::{type_abbreviation, WordType};
