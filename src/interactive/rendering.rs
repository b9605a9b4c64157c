//! TUI rendering with ratatui
//!
//! Root word title, score, entry field, accepted words and the rejection alert.

use super::app::{Alert, App, MessageStyle};
use crate::output::formatters::{length_badge, spaced_letters};
use crate::rules::Dictionary;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<D: Dictionary, R: Rng>(f: &mut Frame, app: &App<D, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Length(3), // Score
            Constraint::Length(3), // Input
            Constraint::Min(6),    // Words and messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_score(f, app, chunks[1]);
    render_input(f, app, chunks[2]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Used words
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[3]);

    render_used_words(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_status(f, app, chunks[4]);

    if let Some(alert) = &app.alert {
        render_alert(f, alert);
    }
}

fn render_header<D: Dictionary, R: Rng>(f: &mut Frame, app: &App<D, R>, area: Rect) {
    let root = spaced_letters(app.game.session().root().text());
    let header = Paragraph::new(root)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" 🔤 WORD SCRAMBLE ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_score<D: Dictionary, R: Rng>(f: &mut Frame, app: &App<D, R>, area: Rect) {
    let session = app.game.session();
    let content = Line::from(vec![
        Span::raw("Total Score "),
        Span::styled(
            session.total_score().to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   ({} words)", session.word_score()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let score = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(score, area);
}

fn render_input<D: Dictionary, R: Rng>(f: &mut Frame, app: &App<D, R>, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Enter your word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, area);
}

fn render_used_words<D: Dictionary, R: Rng>(f: &mut Frame, app: &App<D, R>, area: Rect) {
    let items: Vec<ListItem> = app
        .game
        .session()
        .used_words()
        .iter()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    length_badge(word.chars().count()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(" "),
                Span::raw(word.clone()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Your Words ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_messages<D: Dictionary, R: Rng>(f: &mut Frame, app: &App<D, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_status<D: Dictionary, R: Rng>(f: &mut Frame, app: &App<D, R>, area: Rect) {
    let help_text = if app.alert.is_some() {
        "Enter: OK"
    } else {
        "Enter: Submit | Ctrl-N: Start Over | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_alert(f: &mut Frame, alert: &Alert) {
    let area = centered_rect(50, 7, f.area());

    let content = vec![
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", alert.title))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rectangle of `percent_x` width and `height` rows centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
