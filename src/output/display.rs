//! Display functions for command results

use super::board::render_board;
use super::renderer::Renderer;
use crate::commands::ScoreResult;
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of scoring one guess against a target
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_score_result<W: Write, R: Renderer>(
    out: &mut W,
    result: &ScoreResult,
    renderer: &R,
) -> io::Result<()> {
    writeln!(
        out,
        "Target: {}  Guess: {}",
        result.target.text().bold(),
        result.attempt.guess.text().bold()
    )?;
    write!(out, "{}", render_board(std::slice::from_ref(&result.attempt), renderer))?;
    writeln!(out, "{}", result.attempt.feedback.to_emoji())?;

    let states: Vec<String> = result
        .attempt
        .feedback
        .states()
        .iter()
        .map(ToString::to_string)
        .collect();
    writeln!(out, "{}", states.join(" "))?;

    if result.full_match {
        writeln!(out, "{}", "✅ Full match".green().bold())?;
    } else {
        writeln!(
            out,
            "{} ({} exact, {} partial)",
            "❌ Not a full match".red(),
            result.attempt.feedback.count_exact(),
            result.attempt.feedback.count_partial()
        )?;
    }
    Ok(())
}
