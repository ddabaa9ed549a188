//! Guess scoring
//!
//! Scoring is a letter-existence check with an alignment tie-break. It does
//! not consume target letters: a letter that appears once in the target can
//! mark several guess positions. This differs from the official game's
//! duplicate-letter rule and is kept as-is.

use super::{Feedback, MatchState, WORD_LENGTH, Word};

/// Score `guess` against `target`, one state per guess position
///
/// # Algorithm
/// For each guess position `j`, scan the target positions `i` in order:
/// - same letter at `i == j`: `ExactMatch`, stop scanning
/// - same letter at `i != j`: `PartialMatch`, keep scanning
/// - letter never seen: stays `NoMatch`
///
/// # Examples
/// ```
/// use terminal_wordle::core::{score, MatchState, Word};
///
/// let target = Word::new("ABCDE").unwrap();
/// let guess = Word::new("AXYBZ").unwrap();
/// let feedback = score(&target, &guess);
///
/// assert_eq!(feedback.state(0), MatchState::ExactMatch);
/// assert_eq!(feedback.state(3), MatchState::PartialMatch);
/// assert_eq!(feedback.state(4), MatchState::NoMatch);
/// ```
#[must_use]
pub fn score(target: &Word, guess: &Word) -> Feedback {
    let mut states = [MatchState::NoMatch; WORD_LENGTH];

    for (j, (&letter, state)) in guess.chars().iter().zip(states.iter_mut()).enumerate() {
        for (i, &candidate) in target.chars().iter().enumerate() {
            if candidate != letter {
                continue;
            }
            if i == j {
                *state = MatchState::ExactMatch;
                break;
            }
            *state = MatchState::PartialMatch;
        }
    }

    Feedback::new(states)
}

/// Check whether every guess letter equals the target letter at the same position
///
/// Independent of [`score`]; a plain equality scan.
#[must_use]
pub fn is_full_match(target: &Word, guess: &Word) -> bool {
    target
        .chars()
        .iter()
        .zip(guess.chars())
        .all(|(t, g)| t == g)
}
