//! Game session
//!
//! A session owns the target word and the bounded list of attempts made
//! against it.

use crate::core::{Feedback, Word, is_full_match, score};
use log::debug;
use thiserror::Error;

/// Number of guesses allowed per game
pub const MAX_TRIES: usize = 6;

/// One guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the game is already over")]
    Finished,
}

/// A single game against one target word
#[derive(Debug, Clone)]
pub struct Game {
    target: Word,
    attempts: Vec<Attempt>,
    max_tries: usize,
    status: GameStatus,
}

impl Game {
    /// Start a new game
    ///
    /// `max_tries` is clamped to at least one.
    #[must_use]
    pub fn new(target: Word, max_tries: usize) -> Self {
        let max_tries = max_tries.max(1);
        Self {
            target,
            attempts: Vec::with_capacity(max_tries),
            max_tries,
            status: GameStatus::InProgress,
        }
    }

    /// Score a guess and record it
    ///
    /// # Errors
    ///
    /// Returns `GameError::Finished` if the game was already won or lost.
    /// The session is left untouched in that case.
    pub fn submit(&mut self, guess: Word) -> Result<&Attempt, GameError> {
        if self.is_over() {
            return Err(GameError::Finished);
        }

        let feedback = score(&self.target, &guess);
        let won = is_full_match(&self.target, &guess);
        debug!(
            "attempt {}/{}: {} -> {}",
            self.attempts.len() + 1,
            self.max_tries,
            guess,
            feedback.to_code()
        );

        let index = self.attempts.len();
        self.attempts.push(Attempt { guess, feedback });

        if won {
            self.status = GameStatus::Won;
        } else if self.attempts.len() >= self.max_tries {
            self.status = GameStatus::Lost;
        }

        Ok(&self.attempts[index])
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub const fn max_tries(&self) -> usize {
        self.max_tries
    }

    /// Guesses left before the game is lost
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.max_tries - self.attempts.len()
    }
}
