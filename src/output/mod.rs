//! Terminal output formatting
//!
//! Display utilities for the game board, results and statistics.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_over, print_header, print_keyboard, print_statistics};
