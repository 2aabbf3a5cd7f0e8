//! Core types for flashcard extraction.

use serde::{Deserialize, Serialize};

/// A question/answer pair extracted from one document section.
///
/// The heading text is the question; the paragraphs below it, joined with
/// newlines, are the answer. Cards are immutable once created and duplicate
/// questions across files are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}
