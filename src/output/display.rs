//! Display functions for game state

use super::formatters::{create_progress_bar, empty_row, format_attempt, format_keyboard};
use crate::game::{GameMode, GameStatus, PuzzleSession, meaning_url, win_message};
use crate::persistence::Statistics;
use colored::Colorize;
use std::io::{self, Write};

/// Print the title banner for a new session
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_header(out: &mut impl Write, session: &PuzzleSession<'_>) -> io::Result<()> {
    let config = session.config();
    let subtitle = match (session.mode(), session.day_index()) {
        (GameMode::Daily, Some(day)) => format!("Neno la Leo (Daily) #{day}"),
        _ => "Bila Kikomo (Unlimited)".to_string(),
    };

    writeln!(out, "\n{}", "═".repeat(40).cyan())?;
    writeln!(
        out,
        " {}  {}",
        config.title.to_uppercase().bright_cyan().bold(),
        subtitle.bright_white()
    )?;
    writeln!(out, "{}", "═".repeat(40).cyan())?;
    writeln!(
        out,
        "Guess the {}-letter word in {} tries. Type 'quit' to stop.\n",
        config.word_length, config.max_attempts
    )
}

/// Print played rows and placeholders for the rest of the board
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_board(out: &mut impl Write, session: &PuzzleSession<'_>) -> io::Result<()> {
    for attempt in session.history() {
        writeln!(out, "  {}", format_attempt(attempt))?;
    }
    for _ in 0..session.attempts_remaining() {
        writeln!(out, "  {}", empty_row(session.config().word_length))?;
    }
    writeln!(out)
}

/// Print the keyboard hint panel
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_keyboard(out: &mut impl Write, session: &PuzzleSession<'_>) -> io::Result<()> {
    writeln!(out, "{}\n", format_keyboard(&session.keyboard_hints()))
}

/// Print the result, the revealed solution and the share text
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_game_over(out: &mut impl Write, session: &PuzzleSession<'_>) -> io::Result<()> {
    let headline = match session.status() {
        GameStatus::Won => win_message(session.attempts_used()).green().bold(),
        _ => "Pole! (Game Over)".red().bold(),
    };

    writeln!(out, "\n{headline}")?;
    if let Some(solution) = session.revealed_solution() {
        writeln!(
            out,
            "Neno lilikuwa: {}",
            solution.text().to_uppercase().bright_yellow().bold()
        )?;
        writeln!(out, "Maana (Meaning): {}", meaning_url(solution).underline())?;
    }
    writeln!(out, "\n{}\n", session.render_share_text())
}

/// Print lifetime statistics with the guess distribution
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_statistics(
    out: &mut impl Write,
    stats: &Statistics,
    max_attempts: usize,
) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(40).cyan())?;
    writeln!(out, " {} ", "TAKWIMU (STATISTICS)".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(40).cyan())?;

    writeln!(out, "   Played:          {}", stats.games_played)?;
    writeln!(out, "   Win %:           {}", stats.win_percentage())?;
    writeln!(out, "   Current streak:  {}", stats.current_streak)?;
    writeln!(out, "   Max streak:      {}", stats.max_streak)?;

    writeln!(out, "\n📈 {}", "Distribution:".bright_cyan().bold())?;
    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for guess_count in 1..=max_attempts {
        let count = stats
            .guess_distribution
            .get(guess_count - 1)
            .copied()
            .unwrap_or(0);
        let bar = create_progress_bar(count, most, 20);
        writeln!(out, "   {guess_count}: {} {count}", bar.green())?;
    }
    writeln!(out)
}
