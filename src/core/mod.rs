//! Core domain types for the game
//!
//! Words and guess evaluation. Everything here is pure: no clock, no storage.

mod feedback;
mod word;

pub use feedback::{EvaluationError, GuessResult, LetterState};
pub use word::{Word, WordError};
