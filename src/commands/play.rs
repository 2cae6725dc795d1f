//! Interactive play loop
//!
//! Line-based: one guess per line, feedback printed after each accepted guess.

use super::GameContext;
use crate::game::{GameMode, GameStatus, PuzzleSession};
use crate::output::formatters::{format_attempt, guess_error_message};
use crate::output::{print_board, print_game_over, print_header, print_keyboard};
use crate::persistence::Statistics;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

enum RoundEnd {
    Finished,
    Quit,
}

/// Play until the player quits or declines another game
///
/// A finished daily game offers to continue in unlimited mode; a finished
/// unlimited game offers another one.
///
/// # Errors
///
/// Returns an error on I/O failure or if a session cannot be created.
pub fn run_play<R: BufRead, W: Write>(
    ctx: &GameContext<'_>,
    mode: GameMode,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let mut mode = mode;

    loop {
        let mut session = match mode {
            GameMode::Daily => PuzzleSession::resume_daily(
                ctx.config.clone(),
                ctx.dictionary,
                ctx.clock,
                ctx.store,
            ),
            GameMode::Unlimited => PuzzleSession::start(
                ctx.config.clone(),
                GameMode::Unlimited,
                ctx.dictionary,
                ctx.clock,
                Some(ctx.store),
            ),
        }
        .context("Failed to start a game")?;

        print_header(out, &session)?;

        if session.is_over() {
            writeln!(out, "Umeshacheza leo! (You already played today)")?;
            print_board(out, &session)?;
        } else {
            if !session.history().is_empty() {
                writeln!(out, "Karibu tena! (Welcome back)")?;
                print_board(out, &session)?;
            }
            match play_rounds(&mut session, input, out)? {
                RoundEnd::Quit => {
                    writeln!(out, "\nKwaheri! (Goodbye)")?;
                    return Ok(());
                }
                RoundEnd::Finished => record_statistics(ctx, &session),
            }
        }

        print_game_over(out, &session)?;

        let prompt = match mode {
            GameMode::Daily => "Cheza Bila Kikomo? (Play unlimited) [y/N]",
            GameMode::Unlimited => "Cheza Tena? (Play again) [y/N]",
        };
        if !confirm(input, out, prompt)? {
            writeln!(out, "Kwaheri! (Goodbye)")?;
            return Ok(());
        }
        mode = GameMode::Unlimited;
    }
}

fn play_rounds<R: BufRead, W: Write>(
    session: &mut PuzzleSession<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<RoundEnd> {
    loop {
        let prompt = format!(
            "Guess {}/{}",
            session.attempts_used() + 1,
            session.config().max_attempts
        );
        let Some(line) = read_line(input, out, &prompt)? else {
            return Ok(RoundEnd::Quit);
        };

        if matches!(line.to_lowercase().as_str(), "quit" | "exit" | "q") {
            return Ok(RoundEnd::Quit);
        }

        match session.submit(&line) {
            Ok(outcome) => {
                if let Some(attempt) = session.history().last() {
                    writeln!(out, "  {}\n", format_attempt(attempt))?;
                }
                if outcome.status.is_terminal() {
                    return Ok(RoundEnd::Finished);
                }
                print_keyboard(out, session)?;
            }
            Err(e) => {
                log::debug!("Rejected guess '{line}': {e}");
                writeln!(out, "  ❌ {}", guess_error_message(&e))?;
            }
        }
    }
}

fn record_statistics(ctx: &GameContext<'_>, session: &PuzzleSession<'_>) {
    let mut stats = Statistics::load(ctx.store, &ctx.config.stats_key);
    stats.record_game(session.status() == GameStatus::Won, session.attempts_used());
    if let Err(e) = stats.save(ctx.store, &ctx.config.stats_key) {
        log::warn!("Failed to save statistics: {e}");
    }
}

/// Read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<bool> {
    Ok(read_line(input, out, prompt)?.is_some_and(|answer| {
        matches!(answer.to_lowercase().as_str(), "y" | "yes" | "ndiyo")
    }))
}
