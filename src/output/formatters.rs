//! Formatting utilities for terminal output

use crate::core::LetterState;
use crate::game::{Attempt, GuessError, KEYBOARD_ROWS, KeyboardHints};
use colored::{ColoredString, Colorize};

/// A single letter tile, shaded by its state
#[must_use]
pub fn tile(letter: char, state: Option<LetterState>) -> ColoredString {
    let face = format!(" {} ", letter.to_ascii_uppercase());
    match state {
        Some(LetterState::Correct) => face.black().on_green().bold(),
        Some(LetterState::Present) => face.black().on_yellow().bold(),
        Some(LetterState::Absent) => face.white().on_bright_black(),
        None => face.normal(),
    }
}

/// One board row: colored tiles followed by the emoji row
#[must_use]
pub fn format_attempt(attempt: &Attempt) -> String {
    let tiles: String = attempt
        .guess
        .text()
        .chars()
        .zip(attempt.result.states())
        .map(|(letter, &state)| tile(letter, Some(state)).to_string())
        .collect();
    format!("{tiles}  {}", attempt.result.to_emoji())
}

/// Placeholder for a row not yet played
#[must_use]
pub fn empty_row(word_length: usize) -> String {
    " _ ".repeat(word_length).bright_black().to_string()
}

/// Three-row keyboard shaded with what is known about each letter
#[must_use]
pub fn format_keyboard(hints: &KeyboardHints) -> String {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|b| tile(char::from(b), hints.state(b)).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Player-facing text for a rejected guess
#[must_use]
pub fn guess_error_message(error: &GuessError) -> String {
    match error {
        GuessError::WrongLength { expected, found } if found < expected => {
            "Haitoshi (Not enough letters)".to_string()
        }
        GuessError::WrongLength { .. } => "Herufi nyingi mno (Too many letters)".to_string(),
        GuessError::NotInDictionary(_) => "Si neno (Not in dictionary)".to_string(),
        GuessError::GameOver(_) => "Mchezo umekwisha (Game over)".to_string(),
        GuessError::Evaluation(e) => e.to_string(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value as usize * width / max as usize).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
