use miette::Diagnostic;
use std::io;
use thiserror::Error;

/// Primary error type for the wordbook application
#[derive(Error, Debug, Diagnostic)]
pub enum WordbookError {
    #[error("Dictionary error: {0}")]
    #[diagnostic(code(wordbook::dictionary_error))]
    Dictionary(#[from] DictionaryError),

    #[error("Console I/O error: {0}")]
    #[diagnostic(code(wordbook::io_error))]
    Io(#[from] io::Error),
}

/// Dictionary-specific errors
#[derive(Error, Debug, Diagnostic)]
pub enum DictionaryError {
    #[error("Failed to open dictionary file: {0}")]
    #[diagnostic(
        code(wordbook::dictionary::load_error),
        help("set DICTIONARY_FILE_PATH to a readable dictionary file")
    )]
    LoadError(#[source] io::Error),

    #[error("Dictionary is empty")]
    #[diagnostic(code(wordbook::dictionary::empty))]
    EmptyDictionary,
}

pub use WordbookError as Error;

/// Create a result type that uses our error type
pub type Result<T> = std::result::Result<T, Error>;
