//! Word lists for picking targets
//!
//! Provides the embedded default list, a file loader, and `WordList` for
//! membership checks and random target selection.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when building a word list
#[derive(Debug, Error)]
pub enum WordListError {
    /// The list file could not be read
    #[error("failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No valid word was found
    #[error("no valid words found in the word list")]
    Empty,
}

/// A non-empty list of candidate target words
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl WordList {
    /// Build a list from already-validated words
    ///
    /// Duplicates are kept in selection order but only counted once for lookups.
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        let lookup = words.iter().cloned().collect();
        Ok(Self { words, lookup })
    }

    /// The list compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if the embedded data had no valid word.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(loader::words_from_slice(WORDS))
    }

    /// Pick a target uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
