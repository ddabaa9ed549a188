//! Core domain types for the game
//!
//! Words, per-letter feedback, and the scorer. Everything here is pure and
//! performs no I/O.

mod feedback;
mod scorer;
mod word;

pub use feedback::{Feedback, MatchState};
pub use scorer::{is_full_match, score};
pub use word::{WORD_LENGTH, Word, WordError, is_valid_word, normalize};
