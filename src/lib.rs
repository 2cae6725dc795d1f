//! Neno
//!
//! A daily five-letter word puzzle: six guesses, per-letter feedback, one shared
//! puzzle per day plus an unlimited practice mode.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use neno::core::{GuessResult, Word};
//!
//! let guess = Word::new("mbuzi").unwrap();
//! let solution = Word::new("simba").unwrap();
//!
//! let result = GuessResult::evaluate(&guess, &solution).unwrap();
//! println!("{}", result.to_emoji());
//! ```

// Core domain types
pub mod core;

// Word lists and dictionary lookup
pub mod wordlists;

// Puzzle sessions
pub mod game;

// Saved progress and statistics
pub mod persistence;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
