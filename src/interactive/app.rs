//! TUI application state and logic

use crate::game::{Game, Outcome};
use crate::rules::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<D: Dictionary, R: Rng> {
    pub game: Game<D, R>,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

/// Modal dialog explaining a rejected word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<D: Dictionary, R: Rng> App<D, R> {
    #[must_use]
    pub fn new(game: Game<D, R>) -> Self {
        Self {
            game,
            input_buffer: String::new(),
            alert: None,
            messages: vec![Message {
                text: "Make words from the letters of the root word.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Submit the text field and clear it on success
    pub fn submit_input(&mut self) {
        let outcome = self.game.submit(&self.input_buffer);

        match outcome {
            Outcome::Accepted {
                word,
                points,
                total,
            } => {
                self.input_buffer.clear();
                self.add_message(
                    &format!("{word} +{points} (total {total})"),
                    MessageStyle::Success,
                );
            }
            Outcome::Rejected(reason) => {
                let root = self.game.session().root().text().to_string();
                self.alert = Some(Alert {
                    title: reason.title().to_string(),
                    message: reason.message(&root),
                });
                self.add_message(reason.title(), MessageStyle::Error);
            }
            Outcome::Ignored => {}
        }
    }

    /// Start over with a new root word
    pub fn restart(&mut self) {
        self.input_buffer.clear();
        self.alert = None;
        self.messages.clear();

        let (text, style) = match self.game.start_game() {
            Ok(session) => (
                format!("New game: {}", session.root().text().to_uppercase()),
                MessageStyle::Info,
            ),
            Err(err) => (err.to_string(), MessageStyle::Error),
        };
        self.add_message(&text, style);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
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

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.alert.is_some() {
            // The alert only has an OK button
            if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dismiss_alert();
            }
            return;
        }

        match code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.restart();
            }
            KeyCode::Char(c) if modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                self.input_buffer.push(c);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                self.submit_input();
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary, R: Rng>(app: App<D, R>) -> Result<()> {
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, D, R>(terminal: &mut Terminal<B>, mut app: App<D, R>) -> Result<()>
where
    B: ratatui::backend::Backend,
    D: Dictionary,
    R: Rng,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Rules, WordListDictionary};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn new_app() -> App<WordListDictionary, StdRng> {
        let game = Game::new(
            WordListDictionary::new("en", ["listen", "silent", "tinsel"]),
            vec!["listen".to_string()],
            Rules::default(),
            StdRng::seed_from_u64(5),
        )
        .unwrap();
        App::new(game)
    }

    fn type_text(app: &mut App<WordListDictionary, StdRng>, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn typing_and_enter_submits() {
        let mut app = new_app();
        type_text(&mut app, "Silent");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert!(app.input_buffer.is_empty());
        assert!(app.alert.is_none());
        assert_eq!(app.game.session().used_words(), ["silent"]);
        assert_eq!(app.game.session().total_score(), 6);
    }

    #[test]
    fn rejection_opens_alert_and_keeps_input() {
        let mut app = new_app();
        type_text(&mut app, "listen");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(
            app.alert,
            Some(Alert {
                title: "Duplicate".to_string(),
                message: "This is the word you were given".to_string(),
            })
        );
        assert_eq!(app.input_buffer, "listen");
    }

    #[test]
    fn alert_swallows_keys_until_dismissed() {
        let mut app = new_app();
        type_text(&mut app, "xyz");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.alert.is_some());

        app.handle_key(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(app.input_buffer, "xyz");

        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.alert.is_none());
    }

    #[test]
    fn empty_submission_shows_nothing() {
        let mut app = new_app();
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert!(app.alert.is_none());
        assert_eq!(app.messages.len(), 1);
    }

    #[test]
    fn backspace_edits_input() {
        let mut app = new_app();
        type_text(&mut app, "cats");
        app.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.input_buffer, "cat");
    }

    #[test]
    fn modified_keys_do_not_type() {
        let mut app = new_app();
        app.handle_key(KeyCode::Char('a'), KeyModifiers::CONTROL);
        app.handle_key(KeyCode::Char('x'), KeyModifiers::ALT);
        app.handle_key(KeyCode::Char('s'), KeyModifiers::SHIFT | KeyModifiers::ALT);
        assert!(app.input_buffer.is_empty());

        app.handle_key(KeyCode::Char('S'), KeyModifiers::SHIFT);
        app.handle_key(KeyCode::Char('i'), KeyModifiers::NONE);
        assert_eq!(app.input_buffer, "Si");
    }

    #[test]
    fn ctrl_n_restarts() {
        let mut app = new_app();
        type_text(&mut app, "silent");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        app.handle_key(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert!(app.game.session().used_words().is_empty());
        assert_eq!(app.game.session().total_score(), 0);
    }

    #[test]
    fn quit_keys() {
        let mut app = new_app();
        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.should_quit);

        let mut app = new_app();
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = new_app();
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "9");
    }
}
