//! Board layout
//!
//! Draws the attempt history as a grid of boxed tiles:
//!
//! ```text
//! -------------------------------
//! |     |     |     |     |     |
//! | [A] |  X  |  Y  | (B) |  Z  |
//! |     |     |     |     |     |
//! -------------------------------
//! ```

use super::renderer::Renderer;
use crate::core::WORD_LENGTH;
use crate::game::Attempt;
use std::fmt::Write;

/// Render every attempt as a boxed row, separated by dashed lines
///
/// Returns an empty string when there are no attempts.
#[must_use]
pub fn render_board<R: Renderer + ?Sized>(attempts: &[Attempt], renderer: &R) -> String {
    let separator = format!("-{}", "------".repeat(WORD_LENGTH));
    let padding = format!("|{}", "     |".repeat(WORD_LENGTH));

    let mut board = String::new();
    for (i, attempt) in attempts.iter().enumerate() {
        if i == 0 {
            board.push_str(&separator);
            board.push('\n');
        }

        let mut text = String::from("|");
        for (&letter, &state) in attempt.guess.chars().iter().zip(attempt.feedback.states()) {
            let _ = write!(text, " {} |", renderer.paint(char::from(letter), state));
        }

        for line in [&padding, &text, &padding, &separator] {
            board.push_str(line);
            board.push('\n');
        }
    }
    board
}

/// One emoji row per attempt, for sharing a finished game
///
/// # Examples
/// ```
/// use terminal_wordle::core::{score, Word};
/// use terminal_wordle::game::Attempt;
/// use terminal_wordle::output::share_grid;
///
/// let target = Word::new("ABCDE").unwrap();
/// let guess = Word::new("AXYBZ").unwrap();
/// let feedback = score(&target, &guess);
///
/// assert_eq!(share_grid(&[Attempt { guess, feedback }]), "🟩⬜⬜🟨⬜\n");
/// ```
#[must_use]
pub fn share_grid(attempts: &[Attempt]) -> String {
    attempts
        .iter()
        .map(|attempt| format!("{}\n", attempt.feedback.to_emoji()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, score};
    use crate::output::PlainRenderer;

    fn attempt(target: &str, guess: &str) -> Attempt {
        let target = Word::new(target).unwrap();
        let guess = Word::new(guess).unwrap();
        let feedback = score(&target, &guess);
        Attempt { guess, feedback }
    }

    #[test]
    fn empty_board_renders_nothing() {
        assert_eq!(render_board(&[], &PlainRenderer), "");
        assert_eq!(share_grid(&[]), "");
    }

    #[test]
    fn single_row_layout() {
        let board = render_board(&[attempt("ABCDE", "AXYBZ")], &PlainRenderer);
        let expected = "\
-------------------------------
|     |     |     |     |     |
| [A] |  X  |  Y  | (B) |  Z  |
|     |     |     |     |     |
-------------------------------
";
        assert_eq!(board, expected);
    }

    #[test]
    fn top_separator_only_once() {
        let attempts = [attempt("ABCDE", "FGHIJ"), attempt("ABCDE", "ABCDE")];
        let board = render_board(&attempts, &PlainRenderer);
        let lines: Vec<&str> = board.lines().collect();

        // 1 top separator + 4 lines per row
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[2], "|  F  |  G  |  H  |  I  |  J  |");
        assert_eq!(lines[6], "| [A] | [B] | [C] | [D] | [E] |");
        assert!(lines.iter().all(|line| line.chars().count() == 31));
    }

    #[test]
    fn share_grid_rows() {
        let attempts = [attempt("ABCDE", "ABCDD"), attempt("ABCDE", "ABCDE")];
        assert_eq!(share_grid(&attempts), "🟩🟩🟩🟩🟨\n🟩🟩🟩🟩🟩\n");
    }
}
