//! Error types for flashdoc-core.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting, persisting, or searching
/// flashcards.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a valid .docx document: {0}")]
    Docx(#[from] docx_rs::ReaderError),

    #[error("invalid flashcard JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("search keyword is empty")]
    EmptyKeyword,
}
