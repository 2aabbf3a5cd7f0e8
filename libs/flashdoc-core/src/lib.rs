//! Core library for extracting flashcards from Word documents.
//!
//! Provides:
//! - Parser turning heading/body sections of a `.docx` file into flashcards
//! - In-memory store with JSON persistence and keyword search
//! - Shared types and errors

pub mod error;
pub mod parser;
pub mod store;
pub mod types;

pub use error::{Error, Result};
pub use parser::{extract_bytes, extract_file};
pub use store::FlashcardStore;
pub use types::Flashcard;
