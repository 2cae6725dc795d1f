//! Word lists for the game
//!
//! Provides the embedded word list and the [`Dictionary`] built on top of it.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, DictionaryError};
pub use embedded::{WORDS, WORDS_COUNT};
