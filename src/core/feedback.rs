//! Per-letter feedback for a guess
//!
//! Each position of a guess is classified as one of:
//! - `NoMatch` (letter not in the target)
//! - `PartialMatch` (letter in the target, different position)
//! - `ExactMatch` (letter in the target at this position)

use super::WORD_LENGTH;
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum MatchState {
    /// Gray
    #[default]
    NoMatch,
    /// Yellow
    PartialMatch,
    /// Green
    ExactMatch,
}

impl MatchState {
    /// Single-character code: `G`, `Y` or `-`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::ExactMatch => 'G',
            Self::PartialMatch => 'Y',
            Self::NoMatch => '-',
        }
    }

    /// Emoji square for sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::ExactMatch => '🟩',
            Self::PartialMatch => '🟨',
            Self::NoMatch => '⬜',
        }
    }
}

impl fmt::Display for MatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NoMatch => "NoMatch",
            Self::PartialMatch => "PartialMatch",
            Self::ExactMatch => "ExactMatch",
        };
        f.write_str(name)
    }
}

/// Feedback for a whole guess, one state per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback([MatchState; WORD_LENGTH]);

impl Feedback {
    /// All greens
    pub const PERFECT: Self = Self([MatchState::ExactMatch; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(states: [MatchState; WORD_LENGTH]) -> Self {
        Self(states)
    }

    /// Get the states in position order
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[MatchState; WORD_LENGTH] {
        &self.0
    }

    /// Get the state at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn state(&self, position: usize) -> MatchState {
        self.0[position]
    }

    /// Check if every position is an exact match
    #[must_use]
    pub fn is_all_exact(&self) -> bool {
        self.0.iter().all(|&s| s == MatchState::ExactMatch)
    }

    /// Count the number of green positions
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.count(MatchState::ExactMatch)
    }

    /// Count the number of yellow positions
    #[must_use]
    pub fn count_partial(&self) -> usize {
        self.count(MatchState::PartialMatch)
    }

    fn count(&self, state: MatchState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use terminal_wordle::core::{Feedback, MatchState};
    ///
    /// let feedback = Feedback::new([MatchState::ExactMatch, MatchState::PartialMatch,
    ///     MatchState::NoMatch, MatchState::NoMatch, MatchState::ExactMatch]);
    /// assert_eq!(feedback.to_emoji(), "🟩🟨⬜⬜🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }

    /// Convert to a code string like "GY--G"
    #[must_use]
    pub fn to_code(&self) -> String {
        self.0.iter().map(|s| s.code()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::MatchState::{ExactMatch as E, NoMatch as N, PartialMatch as P};
    use super::*;

    #[test]
    fn perfect_constant() {
        assert!(Feedback::PERFECT.is_all_exact());
        assert_eq!(Feedback::PERFECT.count_exact(), 5);
        assert_eq!(Feedback::PERFECT.count_partial(), 0);
    }

    #[test]
    fn default_is_all_gray() {
        let feedback = Feedback::default();
        assert_eq!(feedback.states(), &[N; 5]);
        assert!(!feedback.is_all_exact());
    }

    #[test]
    fn counts() {
        let feedback = Feedback::new([P, E, E, P, P]);
        assert_eq!(feedback.count_exact(), 2);
        assert_eq!(feedback.count_partial(), 3);
        assert_eq!(feedback.state(1), E);
    }

    #[test]
    fn emoji_and_code() {
        let feedback = Feedback::new([E, P, N, E, P]);
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(feedback.to_code(), "GY-GY");
    }

    #[test]
    fn state_display_names() {
        assert_eq!(N.to_string(), "NoMatch");
        assert_eq!(P.to_string(), "PartialMatch");
        assert_eq!(E.to_string(), "ExactMatch");
    }
}
