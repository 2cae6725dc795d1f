//! Player statistics
//!
//! Kept in its own record so it survives the daily progress being replaced.

use super::{PersistenceStore, ProgressError};
use serde::{Deserialize, Serialize};

/// Lifetime results for one player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins by attempt count; index 0 is a first-guess win
    pub guess_distribution: Vec<u32>,
}

impl Statistics {
    /// Record a finished game
    ///
    /// `attempts` is ignored for losses.
    pub fn record_game(&mut self, won: bool, attempts: usize) {
        self.games_played += 1;

        if won {
            self.games_won += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);

            if attempts > 0 {
                let slot = attempts - 1;
                if self.guess_distribution.len() <= slot {
                    self.guess_distribution.resize(slot + 1, 0);
                }
                self.guess_distribution[slot] += 1;
            }
        } else {
            self.current_streak = 0;
        }
    }

    /// Share of games won, 0-100
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        (u64::from(self.games_won) * 100 / u64::from(self.games_played)) as u32
    }

    /// Load statistics, falling back to empty ones when absent or unreadable
    #[must_use]
    pub fn load(store: &dyn PersistenceStore, key: &str) -> Self {
        match store.get(key) {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(stats) => stats,
                Err(e) => {
                    log::warn!("Ignoring unreadable statistics record: {e}");
                    Self::default()
                }
            },
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Could not read statistics: {e}");
                Self::default()
            }
        }
    }

    /// Save statistics
    ///
    /// # Errors
    /// Returns an error if encoding or the store write fails.
    pub fn save(&self, store: &dyn PersistenceStore, key: &str) -> Result<(), ProgressError> {
        store.set(key, &serde_json::to_vec(self)?)?;
        log::debug!("Statistics saved ({} games)", self.games_played);
        Ok(())
    }
}
