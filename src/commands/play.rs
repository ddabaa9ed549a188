//! Line-oriented game loop
//!
//! Reads guesses from any `BufRead`, writes prompts and the board to any
//! `Write`. The terminal binary passes stdin and stdout; tests pass buffers.

use crate::core::{WORD_LENGTH, Word, normalize};
use crate::game::{Game, GameStatus, MAX_TRIES};
use crate::output::{Renderer, render_board, share_grid};
use crate::wordlists::WordList;
use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use std::io::{BufRead, Write};

/// Configuration for a line-mode game
pub struct PlayConfig<'a> {
    pub target: Word,
    pub max_tries: usize,
    /// When set, guesses must appear in this list
    pub dictionary: Option<&'a WordList>,
}

impl PlayConfig<'_> {
    #[must_use]
    pub const fn new(target: Word) -> Self {
        Self {
            target,
            max_tries: MAX_TRIES,
            dictionary: None,
        }
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { attempts: usize },
    Lost,
    Quit,
}

/// Play one game
///
/// End of input counts as quitting.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<I, O, R>(
    config: PlayConfig<'_>,
    input: &mut I,
    out: &mut O,
    renderer: &R,
) -> Result<Outcome>
where
    I: BufRead,
    O: Write,
    R: Renderer,
{
    let mut game = Game::new(config.target, config.max_tries);

    loop {
        let Some(guess) = read_guess(input, out, config.dictionary)? else {
            writeln!(out, "Quit game")?;
            info!("game quit after {} attempts", game.attempts().len());
            return Ok(Outcome::Quit);
        };

        game.submit(guess)?;
        write!(out, "{}", render_board(game.attempts(), renderer))?;

        match game.status() {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                let attempts = game.attempts().len();
                writeln!(out, "{}", "Found the word".green().bold())?;
                write_summary(out, &game)?;
                info!("game won in {attempts} attempts");
                return Ok(Outcome::Won { attempts });
            }
            GameStatus::Lost => {
                writeln!(out, "{}", "You didn't find the word".red().bold())?;
                writeln!(out, "The word was: {}", game.target())?;
                write_summary(out, &game)?;
                info!("game lost");
                return Ok(Outcome::Lost);
            }
        }
    }
}

/// Prompt until a usable guess is entered
///
/// Returns `None` when the player types `Q` or input ends.
fn read_guess<I: BufRead, O: Write>(
    input: &mut I,
    out: &mut O,
    dictionary: Option<&WordList>,
) -> Result<Option<Word>> {
    loop {
        write!(
            out,
            "Please enter your guess (word length must be {WORD_LENGTH}) or type Q to quit: "
        )?;
        out.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("failed to read guess")?;
        if read == 0 {
            writeln!(out)?;
            return Ok(None);
        }

        let line = normalize(&line);
        if line == "Q" {
            return Ok(None);
        }

        match Word::new(line) {
            Ok(word) if dictionary.is_some_and(|list| !list.contains(&word)) => {
                writeln!(out, "{}", "Not in word list".yellow())?;
            }
            Ok(word) => return Ok(Some(word)),
            Err(e) => writeln!(out, "{}", e.to_string().yellow())?,
        }
    }
}

fn write_summary<O: Write>(out: &mut O, game: &Game) -> Result<()> {
    writeln!(out, "\n{}/{}", game.attempts().len(), game.max_tries())?;
    write!(out, "{}", share_grid(game.attempts()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::PlainRenderer;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn play(target: &str, script: &str) -> (Outcome, String) {
        play_with(PlayConfig::new(Word::new(target).unwrap()), script)
    }

    fn play_with(config: PlayConfig<'_>, script: &str) -> (Outcome, String) {
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();
        let outcome = run_play(config, &mut input, &mut out, &PlainRenderer).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn win_on_second_guess() {
        let (outcome, out) = play("ABCDE", "axybz\nabcde\n");

        assert_eq!(outcome, Outcome::Won { attempts: 2 });
        assert!(out.contains("| [A] |  X  |  Y  | (B) |  Z  |"));
        assert!(out.contains("| [A] | [B] | [C] | [D] | [E] |"));
        assert!(out.contains("Found the word"));
        assert!(out.contains("2/6"));
        assert!(out.contains("🟩⬜⬜🟨⬜\n🟩🟩🟩🟩🟩\n"));
    }

    #[test]
    fn quit_with_q() {
        let (outcome, out) = play("ABCDE", "q\n");
        assert_eq!(outcome, Outcome::Quit);
        assert!(out.contains("Quit game"));
        assert!(!out.contains("-------"));
    }

    #[test]
    fn end_of_input_quits() {
        let (outcome, out) = play("ABCDE", "axybz\n");
        assert_eq!(outcome, Outcome::Quit);
        assert!(out.contains("Quit game"));
    }

    #[test]
    fn invalid_input_reprompts_without_using_a_try() {
        let (outcome, out) = play("ABCDE", "abc\nab1de\nabcde\n");

        assert_eq!(outcome, Outcome::Won { attempts: 1 });
        assert_eq!(out.matches("Please enter your guess").count(), 3);
        assert!(out.contains("Word must be exactly 5 letters, got 3"));
        assert!(out.contains("Word must contain only the letters A-Z"));
    }

    #[test]
    fn loss_reveals_target() {
        let script = "fghij\n".repeat(MAX_TRIES);
        let (outcome, out) = play("ABCDE", &script);

        assert_eq!(outcome, Outcome::Lost);
        assert!(out.contains("You didn't find the word"));
        assert!(out.contains("The word was: ABCDE"));
        assert!(out.contains("6/6"));
    }

    #[test]
    fn no_prompt_after_game_ends() {
        let (outcome, out) = play("ABCDE", "abcde\nfghij\n");
        assert_eq!(outcome, Outcome::Won { attempts: 1 });
        assert_eq!(out.matches("Please enter your guess").count(), 1);
    }

    #[test]
    fn strict_mode_rejects_unknown_words() {
        let list = WordList::new(words_from_slice(&["abcde", "crane"])).unwrap();
        let config = PlayConfig {
            dictionary: Some(&list),
            ..PlayConfig::new(Word::new("ABCDE").unwrap())
        };

        let (outcome, out) = play_with(config, "fghij\ncrane\nabcde\n");

        assert_eq!(outcome, Outcome::Won { attempts: 2 });
        assert!(out.contains("Not in word list"));
    }

    #[test]
    fn custom_try_limit() {
        let config = PlayConfig {
            max_tries: 2,
            ..PlayConfig::new(Word::new("ABCDE").unwrap())
        };
        let (outcome, out) = play_with(config, "fghij\nfghij\n");
        assert_eq!(outcome, Outcome::Lost);
        assert!(out.contains("2/2"));
    }
}
