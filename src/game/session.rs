//! Puzzle session state machine
//!
//! `InProgress` → `Won` | `Lost`. A rejected guess never changes the session.

use super::daily::{daily_solution, day_index};
use super::keyboard::KeyboardHints;
use super::share::render_share_text;
use super::{Clock, GameConfig, GameMode, GameStatus};
use crate::core::{EvaluationError, GuessResult, Word};
use crate::persistence::{PersistedProgress, PersistenceStore, ProgressError};
use crate::wordlists::Dictionary;
use rand::Rng;
use thiserror::Error;

/// Errors creating a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("invalid game configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("dictionary words have {dictionary} letters but the game expects {configured}")]
    WordLengthMismatch { configured: usize, dictionary: usize },
    #[error("dictionary has no words to choose from")]
    EmptyDictionary,
}

/// Recoverable rejections of a submitted guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("guess must be {expected} letters, got {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("'{0}' is not in the dictionary")]
    NotInDictionary(String),
    #[error("the game is already over ({0})")]
    GameOver(GameStatus),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

/// One submitted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub result: GuessResult,
}

/// What an accepted guess produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub result: GuessResult,
    pub status: GameStatus,
}

/// One running game
pub struct PuzzleSession<'a> {
    config: GameConfig,
    dictionary: &'a Dictionary,
    store: Option<&'a dyn PersistenceStore>,
    mode: GameMode,
    day_index: Option<u64>,
    solution: Word,
    history: Vec<Attempt>,
    status: GameStatus,
}

impl<'a> PuzzleSession<'a> {
    /// Start a fresh session
    ///
    /// Daily mode derives the puzzle from `clock`; unlimited mode picks one at random.
    /// `store` only receives writes in daily mode.
    ///
    /// # Errors
    /// Returns `SessionError` if the configuration is invalid or does not match the dictionary.
    pub fn start(
        config: GameConfig,
        mode: GameMode,
        dictionary: &'a Dictionary,
        clock: &dyn Clock,
        store: Option<&'a dyn PersistenceStore>,
    ) -> Result<Self, SessionError> {
        Self::start_with_rng(config, mode, dictionary, clock, store, &mut rand::rng())
    }

    /// Like [`PuzzleSession::start`], drawing unlimited puzzles from `rng`
    ///
    /// # Errors
    /// Returns `SessionError` if the configuration is invalid or does not match the dictionary.
    pub fn start_with_rng<R: Rng + ?Sized>(
        config: GameConfig,
        mode: GameMode,
        dictionary: &'a Dictionary,
        clock: &dyn Clock,
        store: Option<&'a dyn PersistenceStore>,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        if dictionary.is_empty() {
            return Err(SessionError::EmptyDictionary);
        }
        if dictionary.word_length() != config.word_length {
            return Err(SessionError::WordLengthMismatch {
                configured: config.word_length,
                dictionary: dictionary.word_length(),
            });
        }

        let (day, solution) = match mode {
            GameMode::Daily => {
                let day = day_index(clock.now(), config.seconds_per_day);
                let solution =
                    daily_solution(dictionary, day).ok_or(SessionError::EmptyDictionary)?;
                (Some(day), solution.clone())
            }
            GameMode::Unlimited => {
                let index = rng.random_range(0..dictionary.len());
                let solution = dictionary.get(index).ok_or(SessionError::EmptyDictionary)?;
                (None, solution.clone())
            }
        };

        log::debug!("Started {mode:?} session (day {day:?})");

        Ok(Self {
            config,
            dictionary,
            store,
            mode,
            day_index: day,
            solution,
            history: Vec::new(),
            status: GameStatus::InProgress,
        })
    }

    /// Start today's daily puzzle and restore any progress saved for it
    ///
    /// # Errors
    /// Returns `SessionError` under the same conditions as [`PuzzleSession::start`].
    pub fn resume_daily(
        config: GameConfig,
        dictionary: &'a Dictionary,
        clock: &dyn Clock,
        store: &'a dyn PersistenceStore,
    ) -> Result<Self, SessionError> {
        let mut session = Self::start(config, GameMode::Daily, dictionary, clock, Some(store))?;
        let saved = session.load_progress();
        session.restore(saved);
        Ok(session)
    }

    /// Read today's saved progress from the store
    ///
    /// Missing, malformed, or stale records all come back as `None`.
    #[must_use]
    pub fn load_progress(&self) -> Option<PersistedProgress> {
        let (Some(store), Some(today)) = (self.store, self.day_index) else {
            return None;
        };

        match PersistedProgress::load(store, &self.config.progress_key) {
            Ok(Some(progress)) if progress.day_index == today => Some(progress),
            Ok(Some(progress)) => {
                log::info!(
                    "Discarding progress for day {} (today is {today})",
                    progress.day_index
                );
                None
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("Ignoring saved progress: {e}");
                None
            }
        }
    }

    /// Replay saved progress into this session
    ///
    /// Returns whether the record was applied. A record for another day, or one that
    /// does not replay cleanly, is ignored and the session is left untouched.
    pub fn restore(&mut self, persisted: Option<PersistedProgress>) -> bool {
        let Some(progress) = persisted else {
            return false;
        };

        match self.replay(&progress) {
            Ok(history) => {
                log::info!(
                    "Restored {} guesses for day {} ({})",
                    history.len(),
                    progress.day_index,
                    progress.status
                );
                self.history = history;
                self.status = progress.status;
                true
            }
            Err(e) => {
                log::warn!("Ignoring saved progress: {e}");
                false
            }
        }
    }

    fn replay(&self, progress: &PersistedProgress) -> Result<Vec<Attempt>, ProgressError> {
        if self.day_index != Some(progress.day_index) {
            return Err(ProgressError::InvalidRecord(format!(
                "record is for day {}, session is for {:?}",
                progress.day_index, self.day_index
            )));
        }
        if progress.guesses.len() > self.config.max_attempts {
            return Err(ProgressError::InvalidRecord(format!(
                "{} guesses exceed the limit of {}",
                progress.guesses.len(),
                self.config.max_attempts
            )));
        }

        let mut history = Vec::with_capacity(progress.guesses.len());
        let mut status = GameStatus::InProgress;
        for text in &progress.guesses {
            if status.is_terminal() {
                return Err(ProgressError::InvalidRecord(
                    "guesses continue after the game ended".to_string(),
                ));
            }
            let guess = Word::with_length(text, self.config.word_length)
                .map_err(|e| ProgressError::InvalidRecord(format!("'{text}': {e}")))?;
            let result = GuessResult::evaluate(&guess, &self.solution)
                .map_err(|e| ProgressError::InvalidRecord(e.to_string()))?;
            history.push(Attempt { guess, result });
            status = self.status_after(&history);
        }

        if status != progress.status {
            return Err(ProgressError::InvalidRecord(format!(
                "stored status {} does not match replayed status {status}",
                progress.status
            )));
        }

        Ok(history)
    }

    /// Submit a guess
    ///
    /// Input is trimmed and lowercased before validation.
    ///
    /// # Errors
    /// - `GuessError::GameOver` once the session is won or lost
    /// - `GuessError::WrongLength` if the guess has the wrong number of letters
    /// - `GuessError::NotInDictionary` if it is not an accepted word
    ///
    /// None of these change the session.
    pub fn submit(&mut self, guess: &str) -> Result<SubmitOutcome, GuessError> {
        if self.status.is_terminal() {
            return Err(GuessError::GameOver(self.status));
        }

        let normalized = guess.trim().to_lowercase();
        let found = normalized.chars().count();
        if found != self.config.word_length {
            return Err(GuessError::WrongLength {
                expected: self.config.word_length,
                found,
            });
        }

        let word = match Word::new(&normalized) {
            Ok(word) if self.dictionary.contains(word.text()) => word,
            _ => return Err(GuessError::NotInDictionary(normalized)),
        };

        let result = GuessResult::evaluate(&word, &self.solution)?;
        self.history.push(Attempt {
            guess: word,
            result: result.clone(),
        });
        self.status = self.status_after(&self.history);

        log::debug!(
            "Guess {}/{}: {} -> {} ({})",
            self.history.len(),
            self.config.max_attempts,
            normalized,
            result,
            self.status
        );

        self.persist();

        Ok(SubmitOutcome {
            result,
            status: self.status,
        })
    }

    fn status_after(&self, history: &[Attempt]) -> GameStatus {
        match history.last() {
            Some(last) if last.guess == self.solution => GameStatus::Won,
            _ if history.len() >= self.config.max_attempts => GameStatus::Lost,
            _ => GameStatus::InProgress,
        }
    }

    fn persist(&self) {
        let (GameMode::Daily, Some(day), Some(store)) = (self.mode, self.day_index, self.store)
        else {
            return;
        };

        let progress = PersistedProgress {
            day_index: day,
            guesses: self
                .history
                .iter()
                .map(|a| a.guess.text().to_string())
                .collect(),
            status: self.status,
        };

        // The guess is already accepted; a failed write only costs resumability
        if let Err(e) = progress.save(store, &self.config.progress_key) {
            log::warn!("Failed to save daily progress: {e}");
        }
    }

    /// Emoji summary of the attempts so far
    #[must_use]
    pub fn render_share_text(&self) -> String {
        render_share_text(&self.config, &self.history)
    }

    /// Best known state of every guessed letter
    #[must_use]
    pub fn keyboard_hints(&self) -> KeyboardHints {
        KeyboardHints::from_attempts(&self.history)
    }

    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// Day number, only set in daily mode
    #[must_use]
    pub const fn day_index(&self) -> Option<u64> {
        self.day_index
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.history.len())
    }

    /// The solution, once the game has ended
    #[must_use]
    pub fn revealed_solution(&self) -> Option<&Word> {
        self.is_over().then_some(&self.solution)
    }

    #[cfg(test)]
    pub(crate) const fn solution(&self) -> &Word {
        &self.solution
    }
}
