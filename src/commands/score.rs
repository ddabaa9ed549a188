//! One-shot scoring command
//!
//! Scores a single guess against a given target without starting a game.

use crate::core::{Word, WordError, is_full_match, score};
use crate::game::Attempt;

/// Result of scoring one guess
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub target: Word,
    pub attempt: Attempt,
    pub full_match: bool,
}

/// Score `guess` against `target`, normalising both first
///
/// # Errors
///
/// Returns `WordError` if either word is not five letters A-Z after
/// trimming and uppercasing.
pub fn score_words(target: &str, guess: &str) -> Result<ScoreResult, WordError> {
    let target = Word::from_input(target)?;
    let guess = Word::from_input(guess)?;

    let feedback = score(&target, &guess);
    let full_match = is_full_match(&target, &guess);

    Ok(ScoreResult {
        target,
        attempt: Attempt { guess, feedback },
        full_match,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchState::{ExactMatch as E, NoMatch as N, PartialMatch as P};
    use crate::output::{PlainRenderer, write_score_result};

    #[test]
    fn scores_normalized_words() {
        let result = score_words("abcde", " axybz ").unwrap();
        assert_eq!(result.target.text(), "ABCDE");
        assert_eq!(result.attempt.guess.text(), "AXYBZ");
        assert_eq!(result.attempt.feedback.states(), &[E, N, N, P, N]);
        assert!(!result.full_match);
    }

    #[test]
    fn full_match_reported() {
        let result = score_words("ABCDE", "abcde").unwrap();
        assert!(result.full_match);
    }

    #[test]
    fn invalid_words_are_rejected() {
        assert_eq!(
            score_words("ABCD", "ABCDE").unwrap_err(),
            WordError::InvalidLength(4)
        );
        assert_eq!(
            score_words("ABCDE", "ABCD1").unwrap_err(),
            WordError::InvalidCharacters
        );
    }

    #[test]
    fn display_lists_states() {
        let result = score_words("ABCDE", "ABCDD").unwrap();
        let mut out = Vec::new();
        write_score_result(&mut out, &result, &PlainRenderer).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("| [A] | [B] | [C] | [D] | (D) |"));
        assert!(text.contains("🟩🟩🟩🟩🟨"));
        assert!(text.contains("ExactMatch ExactMatch ExactMatch ExactMatch PartialMatch"));
        assert!(text.contains("Not a full match"));
    }
}
