//! Word document parser for flashcard extraction.
//!
//! # Format
//!
//! Each paragraph styled with a `Heading*` style starts a new flashcard; its
//! text is the question. The non-blank paragraphs below it become the answer,
//! one line per paragraph:
//!
//! ```text
//! Capital of France        <- Heading 1
//! Paris                    <- body
//! Capital of Italy         <- Heading 1
//! Rome                     <- body
//! ```
//!
//! A heading with no body text below it yields no flashcard, and body text
//! before the first heading is discarded.

use std::fs;
use std::path::Path;

use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};

use crate::error::Result;
use crate::types::Flashcard;

/// Read a `.docx` file and extract its flashcards.
pub fn extract_file(path: &Path) -> Result<Vec<Flashcard>> {
    let bytes = fs::read(path)?;
    extract_bytes(&bytes)
}

/// Extract flashcards from in-memory `.docx` bytes.
pub fn extract_bytes(bytes: &[u8]) -> Result<Vec<Flashcard>> {
    let docx = read_docx(bytes)?;

    let mut cards = Vec::new();
    let mut current: Option<CardBuilder> = None;

    for child in &docx.document.children {
        let DocumentChild::Paragraph(para) = child else {
            continue;
        };
        let text = paragraph_text(para);
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        if is_heading(para) {
            if let Some(card) = current.take().and_then(CardBuilder::build) {
                cards.push(card);
            }
            current = Some(CardBuilder::new(text));
        } else if let Some(builder) = current.as_mut() {
            builder.push_line(text);
        }
    }

    if let Some(card) = current.and_then(CardBuilder::build) {
        cards.push(card);
    }

    Ok(cards)
}

struct CardBuilder {
    question: String,
    answer_lines: Vec<String>,
}

impl CardBuilder {
    fn new(question: &str) -> Self {
        Self {
            question: question.to_string(),
            answer_lines: Vec::new(),
        }
    }

    fn push_line(&mut self, line: &str) {
        self.answer_lines.push(line.to_string());
    }

    /// A heading that accumulated no answer lines yields no card.
    fn build(self) -> Option<Flashcard> {
        if self.answer_lines.is_empty() {
            return None;
        }
        Some(Flashcard {
            question: self.question,
            answer: self.answer_lines.join("\n"),
        })
    }
}

fn is_heading(para: &Paragraph) -> bool {
    para.property
        .style
        .as_ref()
        .map(|style| style.val.starts_with("Heading"))
        .unwrap_or(false)
}

/// Concatenated run text of a paragraph.
fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            for node in &run.children {
                if let RunChild::Text(t) = node {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}
