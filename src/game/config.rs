//! Game configuration

use super::SessionError;
use super::daily::SECONDS_PER_DAY;

/// Default storage key for the daily progress record
pub const DEFAULT_PROGRESS_KEY: &str = "neno_daily_progress";
/// Default storage key for statistics
pub const DEFAULT_STATS_KEY: &str = "neno_stats";

/// Tunable game rules and storage keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_attempts: usize,
    pub seconds_per_day: u64,
    pub progress_key: String,
    pub stats_key: String,
    /// Game name printed at the top of share text
    pub title: String,
    /// Last line of share text
    pub share_reference: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            max_attempts: 6,
            seconds_per_day: SECONDS_PER_DAY,
            progress_key: DEFAULT_PROGRESS_KEY.to_string(),
            stats_key: DEFAULT_STATS_KEY.to_string(),
            title: "Neno".to_string(),
            share_reference: "#Neno".to_string(),
        }
    }
}

impl GameConfig {
    /// Check the rules describe a playable game
    ///
    /// # Errors
    /// Returns `SessionError::InvalidConfig` naming the offending field.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.word_length == 0 {
            return Err(SessionError::InvalidConfig("word_length must be at least 1"));
        }
        if self.max_attempts == 0 {
            return Err(SessionError::InvalidConfig("max_attempts must be at least 1"));
        }
        if self.seconds_per_day == 0 {
            return Err(SessionError::InvalidConfig("seconds_per_day must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.word_length, 5);
        assert_eq!(config.max_attempts, 6);
    }

    #[test]
    fn zero_values_are_rejected() {
        for config in [
            GameConfig {
                word_length: 0,
                ..GameConfig::default()
            },
            GameConfig {
                max_attempts: 0,
                ..GameConfig::default()
            },
            GameConfig {
                seconds_per_day: 0,
                ..GameConfig::default()
            },
        ] {
            assert!(matches!(
                config.validate(),
                Err(SessionError::InvalidConfig(_))
            ));
        }
    }
}
