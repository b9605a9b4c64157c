//! Word Scramble - CLI
//!
//! Anagram word game with TUI and line-based modes.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use word_scramble::{
    commands::{analyze_root, run_simple},
    game::Game,
    interactive::{App, run_tui},
    logging::{LogConfig, init_logging},
    output::print_analysis_result,
    rules::{DEFAULT_LANGUAGE, DEFAULT_MIN_LENGTH, Rules, WordListDictionary},
    wordlists::{START_WORDS, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list: newline-delimited file (default: bundled list)
    #[arg(short = 's', long, global = true)]
    start_words: Option<PathBuf>,

    /// Dictionary: newline-delimited file (default: bundled English list)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Words must be longer than this many letters
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Dictionary language tag
    #[arg(short = 'l', long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// List every playable word for a root word
    Analyze {
        /// Root word to analyze
        root: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so it only logs to a file
    let is_tui = matches!(command, Commands::Play);
    if !is_tui || cli.log_file.is_some() {
        let config = LogConfig::from_verbosity(cli.verbose).with_log_file(cli.log_file.clone());
        init_logging(&config)?;
    }

    let rules = Rules::default()
        .with_min_length(cli.min_length)
        .with_language(cli.language.clone());
    let dictionary = load_dictionary(cli.dictionary.as_ref(), &rules.language)?;

    match command {
        Commands::Play => {
            let game = new_game(dictionary, cli.start_words.as_ref(), rules)?;
            run_tui(App::new(game))
        }
        Commands::Simple => {
            let mut game = new_game(dictionary, cli.start_words.as_ref(), rules)?;
            run_simple(&mut game)
        }
        Commands::Analyze { root } => {
            let result =
                analyze_root(&root, &dictionary, &rules).map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}

/// Load the dictionary from a file, or use the bundled one
fn load_dictionary(path: Option<&PathBuf>, language: &str) -> Result<WordListDictionary> {
    let dictionary = match path {
        Some(path) => WordListDictionary::from_file(language, path)?,
        None => WordListDictionary::embedded(language),
    };
    tracing::debug!(words = dictionary.len(), language, "dictionary ready");
    Ok(dictionary)
}

/// Create a game with root words from a file, or the bundled list
fn new_game(
    dictionary: WordListDictionary,
    start_words: Option<&PathBuf>,
    rules: Rules,
) -> Result<Game<WordListDictionary, rand::rngs::ThreadRng>> {
    let words = match start_words {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(START_WORDS),
    };

    Ok(Game::new(dictionary, words, rules, rand::rng())?)
}
