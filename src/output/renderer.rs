//! Tile painting
//!
//! A renderer turns one letter and its match state into a three-column cell
//! body. Board layout lives in `board`; renderers only decide how a state
//! looks.

use crate::core::MatchState;
use colored::Colorize;

/// Paints a single board tile
pub trait Renderer {
    /// Paint `letter` in `state`, three visible columns wide
    fn paint(&self, letter: char, state: MatchState) -> String;
}

/// Text-only tiles: ` A ` none, `(A)` partial, `[A]` exact
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn paint(&self, letter: char, state: MatchState) -> String {
        match state {
            MatchState::NoMatch => format!(" {letter} "),
            MatchState::PartialMatch => format!("({letter})"),
            MatchState::ExactMatch => format!("[{letter}]"),
        }
    }
}

/// ANSI colored tiles: yellow partial, green exact, default otherwise
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiRenderer;

impl Renderer for AnsiRenderer {
    fn paint(&self, letter: char, state: MatchState) -> String {
        let text = letter.to_string();
        let painted = match state {
            MatchState::NoMatch => text,
            MatchState::PartialMatch => text.yellow().to_string(),
            MatchState::ExactMatch => text.green().to_string(),
        };
        format!(" {painted} ")
    }
}

/// Enum wrapper for the renderer variants
///
/// Allows runtime selection of the renderer while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum BoardStyle {
    Plain(PlainRenderer),
    Ansi(AnsiRenderer),
}

impl Renderer for BoardStyle {
    fn paint(&self, letter: char, state: MatchState) -> String {
        match self {
            Self::Plain(r) => r.paint(letter, state),
            Self::Ansi(r) => r.paint(letter, state),
        }
    }
}

/// When to use color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color when writing to a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl BoardStyle {
    /// Pick a renderer for the given color choice
    ///
    /// `is_terminal` reports whether output goes to a terminal; it only
    /// matters for `ColorChoice::Auto`.
    #[must_use]
    pub fn for_choice(choice: ColorChoice, is_terminal: bool) -> Self {
        let use_color = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => is_terminal && std::env::var_os("NO_COLOR").is_none(),
        };

        // Applies to every colored string written after this, not just tiles
        colored::control::set_override(use_color);

        if use_color {
            Self::Ansi(AnsiRenderer)
        } else {
            Self::Plain(PlainRenderer)
        }
    }
}
