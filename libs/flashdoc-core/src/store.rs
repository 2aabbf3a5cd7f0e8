//! In-memory flashcard store with JSON persistence and keyword search.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{Error, Result};
use crate::parser;
use crate::types::Flashcard;

/// The flashcard set of the current session.
///
/// Extraction and JSON load replace the whole set; nothing is ever merged.
#[derive(Debug, Default)]
pub struct FlashcardStore {
    cards: Vec<Flashcard>,
}

impl FlashcardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards in extraction order.
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Extract flashcards from every `.docx` file in `folder`, replacing the
    /// current set. A file that fails to open or parse is skipped with a
    /// warning; the rest of the batch still runs.
    ///
    /// Returns the number of cards extracted.
    pub fn extract_from_folder(&mut self, folder: &Path) -> Result<usize> {
        let mut cards = Vec::new();
        for path in docx_files(folder)? {
            match parser::extract_file(&path) {
                Ok(found) => cards.extend(found),
                Err(err) => warn!("skipping {}: {}", path.display(), err),
            }
        }
        self.cards = cards;
        Ok(self.cards.len())
    }

    /// Serialize the current set as a JSON array of `{question, answer}`
    /// objects, pretty-printed with 2-space indentation. Non-ASCII text is
    /// written literally, not escaped.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.cards)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Replace the current set with the contents of a JSON file and return
    /// the number of cards loaded. On failure the set resets to empty.
    pub fn load_json(&mut self, path: &Path) -> Result<usize> {
        match read_cards(path) {
            Ok(cards) => {
                self.cards = cards;
                Ok(self.cards.len())
            }
            Err(err) => {
                self.cards.clear();
                Err(err)
            }
        }
    }

    /// Case-insensitive substring search over question and answer fields.
    ///
    /// The keyword is trimmed first; an empty keyword is rejected as
    /// [`Error::EmptyKeyword`] rather than matching nothing. Matches keep
    /// their original order.
    pub fn search(&self, keyword: &str) -> Result<Vec<&Flashcard>> {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return Err(Error::EmptyKeyword);
        }
        Ok(self
            .cards
            .iter()
            .filter(|card| {
                card.question.to_lowercase().contains(&keyword)
                    || card.answer.to_lowercase().contains(&keyword)
            })
            .collect())
    }
}

/// `.docx` files in `folder`, sorted by file name for a stable extraction
/// order across platforms.
fn docx_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == "docx") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn read_cards(path: &Path) -> Result<Vec<Flashcard>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
