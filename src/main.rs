//! Terminal Wordle - CLI
//!
//! Word-guessing game with a line mode and a full-screen TUI mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use terminal_wordle::{
    commands::{PlayConfig, run_play, score_words},
    output::{BoardStyle, ColorChoice, write_score_result},
    wordlists::{WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "terminal_wordle",
    about = "Guess the 5-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Seed for target selection, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// When to color the board
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Only accept guesses that appear in the word list
    #[arg(long, global = true)]
    strict: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in line mode (default)
    Play,

    /// Play in the full-screen terminal interface
    Tui,

    /// Score one guess against a target and exit
    Score {
        /// The target word
        target: String,

        /// The guessed word
        guess: String,
    },
}

/// Load the word list given by `-w`, or the built-in list
fn load_wordlist(path: Option<&Path>) -> Result<WordList> {
    match path {
        Some(path) => Ok(load_from_file(path)?),
        None => {
            let list = WordList::embedded().context("built-in word list is empty")?;
            debug!("using built-in word list ({} words)", list.len());
            Ok(list)
        }
    }
}

/// Build the one RNG the session owns
fn make_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        info!("seeding target selection with {seed}");
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_os_rng()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let style = BoardStyle::for_choice(cli.color, io::stdout().is_terminal());

    // Default to line mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.words.as_deref(), cli.seed, cli.strict, &style),
        Commands::Tui => run_tui_command(cli.words.as_deref(), cli.seed, cli.strict),
        Commands::Score { target, guess } => run_score_command(&target, &guess, &style),
    }
}

fn run_play_command(
    words: Option<&Path>,
    seed: Option<u64>,
    strict: bool,
    style: &BoardStyle,
) -> Result<()> {
    let list = load_wordlist(words)?;
    let mut rng = make_rng(seed);
    let target = list
        .choose(&mut rng)
        .cloned()
        .context("word list has no words to choose from")?;

    let config = PlayConfig {
        dictionary: strict.then_some(&list),
        ..PlayConfig::new(target)
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    run_play(config, &mut input, &mut out, style)?;
    Ok(())
}

fn run_tui_command(words: Option<&Path>, seed: Option<u64>, strict: bool) -> Result<()> {
    use terminal_wordle::interactive::{App, run_tui};

    let list = load_wordlist(words)?;
    let app = App::new(&list, make_rng(seed), strict)?;
    run_tui(app)
}

fn run_score_command(target: &str, guess: &str, style: &BoardStyle) -> Result<()> {
    let result = score_words(target, guess).context("invalid word")?;
    write_score_result(&mut io::stdout().lock(), &result, style)?;
    Ok(())
}
