//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI

use crate::game::{Game, Outcome};
use crate::output::{print_outcome, print_session};
use crate::rules::Dictionary;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What the player typed on one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Word(String),
    NewGame,
    Show,
    Quit,
}

impl Command {
    /// Parse a line of input; anything that is not a command is a word
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":new" | ":n" | ":restart" => Self::NewGame,
            ":show" | ":s" => Self::Show,
            ":quit" | ":q" | ":exit" => Self::Quit,
            _ => Self::Word(line.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if a new
/// game cannot be started.
pub fn run_simple<D: Dictionary, R: Rng>(game: &mut Game<D, R>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Scramble - Simple Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Make words from the letters of the root word (more than {} letters).",
        game.rules().min_length
    );
    println!("Commands: ':new' to start over, ':show' for your words, ':quit' to exit\n");

    let stdin = io::stdin();
    play_lines(game, stdin.lock())
}

/// Drive a game from any line source
///
/// Stops at end of input or on `:quit`.
///
/// # Errors
///
/// Returns an error on I/O failure or if a new game cannot be started.
pub fn play_lines<D, R, B>(game: &mut Game<D, R>, input: B) -> Result<()>
where
    D: Dictionary,
    R: Rng,
    B: BufRead,
{
    print_session(game.session());
    let mut lines = input.lines();

    loop {
        prompt(game.session().root().text())?;

        let Some(line) = lines.next() else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match Command::parse(&line?) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::NewGame => {
                game.start_game()?;
                println!("\n🔄 New game started!\n");
                print_session(game.session());
            }
            Command::Show => print_session(game.session()),
            Command::Word(text) => {
                let outcome = game.submit(&text);
                if outcome != Outcome::Ignored {
                    print_outcome(&outcome, game.session().root().text());
                }
            }
        }
    }
}

fn prompt(root: &str) -> io::Result<()> {
    print!("{} › ", root.to_uppercase().bright_cyan().bold());
    io::stdout().flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Rules, WordListDictionary};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn game() -> Game<WordListDictionary, StdRng> {
        Game::new(
            WordListDictionary::new("en", ["listen", "silent", "tinsel"]),
            vec!["listen".to_string()],
            Rules::default(),
            StdRng::seed_from_u64(11),
        )
        .unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse(":new"), Command::NewGame);
        assert_eq!(Command::parse(" :q "), Command::Quit);
        assert_eq!(Command::parse(":show"), Command::Show);
        assert_eq!(Command::parse("Silent"), Command::Word("Silent".to_string()));
    }

    #[test]
    fn lines_are_submitted_until_end_of_input() {
        let mut game = game();
        play_lines(&mut game, Cursor::new("silent\n\nsilent\ntinsel\n")).unwrap();

        assert_eq!(game.session().used_words(), ["tinsel", "silent"]);
        assert_eq!(game.session().total_score(), 24);
    }

    #[test]
    fn quit_stops_reading() {
        let mut game = game();
        play_lines(&mut game, Cursor::new("silent\n:quit\ntinsel\n")).unwrap();

        assert_eq!(game.session().used_words(), ["silent"]);
    }

    #[test]
    fn new_game_resets_session() {
        let mut game = game();
        play_lines(&mut game, Cursor::new("silent\n:new\n")).unwrap();

        assert!(game.session().used_words().is_empty());
        assert_eq!(game.session().total_score(), 0);
    }
}
