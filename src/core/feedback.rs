//! Guess evaluation
//!
//! Maps a guess against a solution into one [`LetterState`] per position,
//! following the usual duplicate-letter rules:
//! - Exact position matches are claimed first
//! - Displaced matches are granted only while unclaimed copies of the letter remain
//!
//! A guess letter is therefore never marked more times than it occurs in the solution.

use super::Word;
use std::fmt;
use thiserror::Error;

/// Feedback for a single position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterState {
    /// Letter is not in the solution (or all its copies are already claimed)
    Absent,
    /// Letter is in the solution, but not at this position
    Present,
    /// Letter is in the solution at this position
    Correct,
}

impl LetterState {
    /// Emoji used in share text
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error raised when the evaluator is called with inconsistent inputs
///
/// This is a caller bug: sessions validate guesses before evaluating them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("guess has {guess} letters but solution has {solution}")]
    LengthMismatch { guess: usize, solution: usize },
}

/// Per-position feedback for one guess against one solution
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult(Vec<LetterState>);

impl GuessResult {
    /// Wrap an explicit state sequence
    #[must_use]
    pub const fn new(states: Vec<LetterState>) -> Self {
        Self(states)
    }

    /// Evaluate `guess` against `solution`
    ///
    /// # Algorithm
    /// 1. Every position starts as Absent
    /// 2. Exact-match pass: equal letters become Correct and are removed from the pool
    /// 3. Displaced-match pass: remaining letters become Present while the pool still
    ///    holds an unclaimed copy, consuming one copy each
    ///
    /// # Errors
    /// Returns `EvaluationError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use neno::core::{GuessResult, LetterState::*, Word};
    ///
    /// let guess = Word::new("lolly").unwrap();
    /// let solution = Word::new("allot").unwrap();
    /// let result = GuessResult::evaluate(&guess, &solution).unwrap();
    ///
    /// // Only two 'l's exist in the solution, so the third one is Absent
    /// assert_eq!(result.states(), &[Present, Present, Correct, Absent, Absent]);
    /// ```
    pub fn evaluate(guess: &Word, solution: &Word) -> Result<Self, EvaluationError> {
        if guess.len() != solution.len() {
            return Err(EvaluationError::LengthMismatch {
                guess: guess.len(),
                solution: solution.len(),
            });
        }

        let guess_letters = guess.letters();
        let solution_letters = solution.letters();
        let mut states = vec![LetterState::Absent; guess.len()];
        let mut pool = solution.letter_counts();

        // First pass: exact matches claim their solution letter
        for (i, (g, s)) in guess_letters.iter().zip(solution_letters).enumerate() {
            if g == s {
                states[i] = LetterState::Correct;
                if let Some(count) = pool.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: displaced matches draw from what is left
        for (state, letter) in states.iter_mut().zip(guess_letters) {
            if *state == LetterState::Correct {
                continue;
            }
            if let Some(count) = pool.get_mut(letter)
                && *count > 0
            {
                *state = LetterState::Present;
                *count -= 1;
            }
        }

        Ok(Self(states))
    }

    /// The per-position states
    #[inline]
    #[must_use]
    pub fn states(&self) -> &[LetterState] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterState::Correct)
    }

    /// Count positions with the given state
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Render as an emoji row like "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
