//! Puzzle sessions
//!
//! A [`PuzzleSession`] owns one game: its solution, attempt history and status.
//! Time and storage are injected so sessions stay deterministic under test.

mod clock;
mod config;
pub mod daily;
mod keyboard;
mod session;
mod share;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::GameConfig;
pub use keyboard::{KEYBOARD_ROWS, KeyboardHints};
pub use session::{Attempt, GuessError, PuzzleSession, SessionError, SubmitOutcome};
pub use share::{meaning_url, render_share_text, win_message};

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the solution is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// One deterministic puzzle per day, progress persisted
    Daily,
    /// Random puzzle, replayable, nothing persisted
    Unlimited,
}

/// Session lifecycle; `Won` and `Lost` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
    #[serde(rename = "WIN")]
    Won,
    #[serde(rename = "LOSS")]
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}
