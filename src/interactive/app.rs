//! TUI application state and logic

use crate::core::{MatchState, WORD_LENGTH, Word};
use crate::game::{Game, GameStatus, MAX_TRIES};
use crate::wordlists::WordList;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;

/// Application state
pub struct App<'a, R: Rng> {
    pub words: &'a WordList,
    pub strict: bool,
    rng: R,
    pub game: Game,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    /// Best state seen so far for each guessed letter
    pub keyboard: FxHashMap<u8, MatchState>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub guess_distribution: [usize; MAX_TRIES + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a, R: Rng> App<'a, R> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if no target can be drawn from `words`.
    pub fn new(words: &'a WordList, mut rng: R, strict: bool) -> Result<Self> {
        let target = pick_target(words, &mut rng)?;

        Ok(Self {
            words,
            strict,
            rng,
            game: Game::new(target, MAX_TRIES),
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!("Guess the {WORD_LENGTH}-letter word in {MAX_TRIES} tries."),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            keyboard: FxHashMap::default(),
        })
    }

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// Returns an error if a new game cannot be started.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.new_game()?,
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < WORD_LENGTH {
                        self.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input(),
                _ => {}
            },
        }
        Ok(())
    }

    /// Submit the typed word as a guess
    pub fn submit_input(&mut self) {
        let word = match Word::new(self.input_buffer.clone()) {
            Ok(word) => word,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        if self.strict && !self.words.contains(&word) {
            self.add_message(
                &format!("'{word}' is not in the word list"),
                MessageStyle::Error,
            );
            return;
        }

        let letters = *word.chars();
        let feedback = match self.game.submit(word) {
            Ok(attempt) => attempt.feedback,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };
        self.input_buffer.clear();

        for (&letter, &state) in letters.iter().zip(feedback.states()) {
            let best = self.keyboard.entry(letter).or_insert(state);
            *best = (*best).max(state);
        }

        match self.game.status() {
            GameStatus::InProgress => {}
            GameStatus::Won => self.finish_game(true),
            GameStatus::Lost => self.finish_game(false),
        }
    }

    fn finish_game(&mut self, won: bool) {
        let attempts = self.game.attempts().len();
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;

        if won {
            self.stats.games_won += 1;
            self.stats.current_streak += 1;
            self.stats.guess_distribution[attempts] += 1;

            let celebration = match attempts {
                1 => "🎯 HOLE IN ONE!",
                2 => "🔥 MAGNIFICENT!",
                3 => "✨ SPLENDID!",
                4 => "👏 GREAT JOB!",
                5 => "🎉 NICE WORK!",
                _ => "😅 PHEW!",
            };
            self.add_message(
                &format!("{celebration} Found the word in {attempts}/{MAX_TRIES}"),
                MessageStyle::Success,
            );
        } else {
            self.stats.current_streak = 0;
            self.add_message(
                &format!("You didn't find the word. It was {}", self.game.target()),
                MessageStyle::Error,
            );
        }
        info!("tui game finished: won={won} attempts={attempts}");
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    /// Start a new game with a fresh target
    ///
    /// # Errors
    ///
    /// Returns an error if no target can be drawn.
    pub fn new_game(&mut self) -> Result<()> {
        let target = pick_target(self.words, &mut self.rng)?;
        self.game = Game::new(target, MAX_TRIES);
        self.input_buffer.clear();
        self.keyboard.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn letter_state(&self, letter: u8) -> Option<MatchState> {
        self.keyboard.get(&letter).copied()
    }
}

fn pick_target<R: Rng>(words: &WordList, rng: &mut R) -> Result<Word> {
    words
        .choose(rng)
        .cloned()
        .context("word list has no words to choose from")
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<'_, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
