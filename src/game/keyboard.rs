//! Keyboard hints
//!
//! Tracks the most informative state seen for each guessed letter, so an on-screen
//! keyboard can shade its keys. A letter never moves down once it is known
//! to be Correct or Present.

use super::Attempt;
use crate::core::LetterState;
use rustc_hash::FxHashMap;

/// QWERTY layout used by the on-screen keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best known state per letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    states: FxHashMap<u8, LetterState>,
}

impl KeyboardHints {
    #[must_use]
    pub fn from_attempts(attempts: &[Attempt]) -> Self {
        let mut hints = Self::default();
        for attempt in attempts {
            for (&letter, &state) in attempt.guess.letters().iter().zip(attempt.result.states()) {
                hints.record(letter, state);
            }
        }
        hints
    }

    /// Merge one observation, keeping the strongest state
    pub fn record(&mut self, letter: u8, state: LetterState) {
        self.states
            .entry(letter)
            .and_modify(|known| *known = (*known).max(state))
            .or_insert(state);
    }

    /// State for `letter`, `None` if it was never guessed
    #[must_use]
    pub fn state(&self, letter: u8) -> Option<LetterState> {
        self.states.get(&letter).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterState::{Absent, Correct, Present};

    #[test]
    fn strongest_state_wins_regardless_of_order() {
        let mut hints = KeyboardHints::default();
        hints.record(b'a', Absent);
        hints.record(b'a', Correct);
        hints.record(b'a', Present);
        assert_eq!(hints.state(b'a'), Some(Correct));

        hints.record(b'b', Present);
        hints.record(b'b', Absent);
        assert_eq!(hints.state(b'b'), Some(Present));
    }

    #[test]
    fn unseen_letters_have_no_state() {
        assert_eq!(KeyboardHints::default().state(b'z'), None);
    }

    #[test]
    fn layout_covers_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|row| row.chars()).collect();
        letters.sort_unstable();
        let alphabet: Vec<char> = ('a'..='z').collect();
        assert_eq!(letters, alphabet);
    }
}
