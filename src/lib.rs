//! Terminal Wordle
//!
//! A word-guessing game: a random 5-letter target is drawn from a word list and
//! the player has six tries to find it, with per-letter feedback after each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use terminal_wordle::core::{Word, MatchState, score, is_full_match};
//!
//! let target = Word::new("ABCDE").unwrap();
//! let guess = Word::new("AXYBZ").unwrap();
//!
//! let feedback = score(&target, &guess);
//! assert_eq!(feedback.state(0), MatchState::ExactMatch);
//! assert!(!is_full_match(&target, &guess));
//! ```

// Core domain types
pub mod core;

// Game session
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
