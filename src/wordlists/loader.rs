//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.

use super::{WordList, WordListError};
use crate::core::Word;
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Load a word list from a newline-delimited file
///
/// Entries are trimmed and uppercased. Blank lines are ignored and invalid
/// entries are skipped with a warning.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read, or
/// `WordListError::Empty` if it contains no valid word.
///
/// # Examples
/// ```no_run
/// use terminal_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content);
    info!("loaded {} words from {}", words.len(), path.display());
    WordList::new(words)
}

/// Parse newline-delimited text into words, skipping invalid lines
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::from_input(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!("skipping word list line {}: {trimmed:?} ({e})", index + 1);
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use terminal_wordle::wordlists::loader::words_from_slice;
/// use terminal_wordle::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::from_input(s).ok())
        .collect()
}
