//! Display functions for game state and command results

use super::formatters::{badged_word, spaced_letters};
use crate::commands::AnalysisResult;
use crate::game::{GameSession, Outcome};
use colored::Colorize;

/// Print the root word, score and accepted words
pub fn print_session(session: &GameSession) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Root word:   {}",
        spaced_letters(session.root().text()).bright_yellow().bold()
    );
    println!(
        "Total Score: {}",
        session.total_score().to_string().bright_green().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if session.used_words().is_empty() {
        println!("  {}", "No words yet".bright_black());
    } else {
        for word in session.used_words() {
            println!("  {}", badged_word(word));
        }
    }
    println!();
}

/// Print the result of one submission
///
/// Ignored (blank) submissions print nothing.
pub fn print_outcome(outcome: &Outcome, root: &str) {
    match outcome {
        Outcome::Accepted {
            word,
            points,
            total,
        } => {
            println!(
                "{} {} {}",
                "✅".green(),
                badged_word(word).bright_white().bold(),
                format!("+{points} → Total Score {total}").green()
            );
        }
        Outcome::Rejected(reason) => {
            println!(
                "{} {}: {}",
                "❌".red(),
                reason.title().red().bold(),
                reason.message(root)
            );
        }
        Outcome::Ignored => {}
    }
}

/// Print the result of root word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ROOT WORD ANALYSIS:".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Against {} dictionary words:",
        result.dictionary_size
    );
    println!(
        "   Playable words: {}",
        result.words.len().to_string().bright_yellow().bold()
    );
    println!(
        "   Best total:     {} (longest words first)",
        result.best_total.to_string().bright_green().bold()
    );

    if result.words.is_empty() {
        return;
    }

    println!("\n📖 {}", "Words:".bright_cyan().bold());
    for word in &result.words {
        println!("   {}", badged_word(word));
    }
}
