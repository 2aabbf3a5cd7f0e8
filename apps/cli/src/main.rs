//! Command-line interface for flashdoc.
//!
//! Thin presentation layer over [`flashdoc_core`]: extract flashcards from a
//! folder of Word documents, inspect a previously saved JSON file, and search
//! the collected set by keyword.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use flashdoc_core::{Error, Flashcard, FlashcardStore};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "flashdoc", version, about = "Extract flashcards from Word documents and search them")]
struct Cli {
    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract flashcards from every .docx file in a folder and save them as JSON
    Extract {
        /// Folder containing .docx files
        folder: PathBuf,

        /// Output file (defaults to flashcards.json inside the folder)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Load a flashcards JSON file and report how many cards it holds
    Load {
        /// Flashcards JSON file
        file: PathBuf,
    },
    /// Search flashcards by keyword (case-insensitive, question and answer)
    Search {
        /// Keyword to search for
        keyword: String,

        /// Flashcards JSON file to search
        #[arg(short, long, default_value = "flashcards.json")]
        file: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Extract { folder, output } => extract(&folder, output),
        Command::Load { file } => load(&file),
        Command::Search { keyword, file } => search(&keyword, &file),
    }
}

fn extract(folder: &Path, output: Option<PathBuf>) -> anyhow::Result<()> {
    let mut store = FlashcardStore::new();
    let count = store
        .extract_from_folder(folder)
        .with_context(|| format!("failed to read folder {}", folder.display()))?;

    if count == 0 {
        println!("No flashcards found in .docx files.");
        return Ok(());
    }

    let output = output.unwrap_or_else(|| folder.join("flashcards.json"));
    store
        .save_json(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!("{} flashcards saved to {}", count, output.display());
    Ok(())
}

fn load(file: &Path) -> anyhow::Result<()> {
    let mut store = FlashcardStore::new();
    let count = store
        .load_json(file)
        .with_context(|| format!("failed to load {}", file.display()))?;
    println!("Loaded {} flashcards from {}", count, file.display());
    Ok(())
}

fn search(keyword: &str, file: &Path) -> anyhow::Result<()> {
    let mut store = FlashcardStore::new();
    store
        .load_json(file)
        .with_context(|| format!("failed to load {}", file.display()))?;

    match store.search(keyword) {
        Ok(matches) if matches.is_empty() => println!("No results found."),
        Ok(matches) => print!("{}", render_matches(&matches)),
        Err(Error::EmptyKeyword) => warn!("enter a keyword to search"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

/// Render matched cards as numbered question/answer blocks.
fn render_matches(cards: &[&Flashcard]) -> String {
    let mut out = String::new();
    for (index, card) in cards.iter().enumerate() {
        out.push_str(&format!("{}. {}\n{}\n\n", index + 1, card.question, card.answer));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn card(question: &str, answer: &str) -> Flashcard {
        Flashcard {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    #[test]
    fn renders_numbered_blocks() {
        let first = card("Capital of France", "Paris");
        let second = card("Capital of Italy", "Rome");
        let rendered = render_matches(&[&first, &second]);
        assert_eq!(
            rendered,
            "1. Capital of France\nParis\n\n2. Capital of Italy\nRome\n\n"
        );
    }

    #[test]
    fn renders_multiline_answers() {
        let only = card("Explain", "Line 1\nLine 2");
        let rendered = render_matches(&[&only]);
        assert_eq!(rendered, "1. Explain\nLine 1\nLine 2\n\n");
    }

    #[test]
    fn renders_nothing_for_no_matches() {
        assert_eq!(render_matches(&[]), "");
    }

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::parse_from(["flashdoc", "extract", "notes", "--output", "out.json"]);
        match cli.command {
            Command::Extract { folder, output } => {
                assert_eq!(folder, PathBuf::from("notes"));
                assert_eq!(output, Some(PathBuf::from("out.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::parse_from(["flashdoc", "search", "paris"]);
        match cli.command {
            Command::Search { keyword, file } => {
                assert_eq!(keyword, "paris");
                assert_eq!(file, PathBuf::from("flashcards.json"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
