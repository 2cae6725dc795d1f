//! Daily progress record
//!
//! Stored as JSON under the session key:
//! `{"dayIndex": 20379, "guesses": ["simba", "tembo"], "status": "IN_PROGRESS"}`.
//! Only guess words are stored; their feedback is re-derived on restore.

use super::{PersistenceStore, StoreError};
use crate::game::GameStatus;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reading or writing a progress record
#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("invalid persisted record: {0}")]
    InvalidRecord(String),
    #[error("failed to encode progress: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Snapshot of a daily game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedProgress {
    pub day_index: u64,
    pub guesses: Vec<String>,
    pub status: GameStatus,
}

impl PersistedProgress {
    /// Serialize to the stored JSON form
    ///
    /// # Errors
    /// Returns `ProgressError::Encode` if serialization fails.
    pub fn encode(&self) -> Result<Vec<u8>, ProgressError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Parse the stored JSON form
    ///
    /// # Errors
    /// Returns `ProgressError::InvalidRecord` for malformed input.
    pub fn decode(bytes: &[u8]) -> Result<Self, ProgressError> {
        serde_json::from_slice(bytes).map_err(|e| ProgressError::InvalidRecord(e.to_string()))
    }

    /// Write this record under `key`
    ///
    /// # Errors
    /// Returns an error if encoding or the store write fails.
    pub fn save(&self, store: &dyn PersistenceStore, key: &str) -> Result<(), ProgressError> {
        store.set(key, &self.encode()?)?;
        Ok(())
    }

    /// Read the record stored under `key`
    ///
    /// Returns `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    /// Returns an error if the store read fails or the record is malformed.
    pub fn load(store: &dyn PersistenceStore, key: &str) -> Result<Option<Self>, ProgressError> {
        store.get(key)?.map(|bytes| Self::decode(&bytes)).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    fn sample() -> PersistedProgress {
        PersistedProgress {
            day_index: 20_379,
            guesses: vec!["simba".to_string(), "tembo".to_string()],
            status: GameStatus::InProgress,
        }
    }

    #[test]
    fn encodes_stable_field_names() {
        let json = String::from_utf8(sample().encode().unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"dayIndex":20379,"guesses":["simba","tembo"],"status":"IN_PROGRESS"}"#
        );
    }

    #[test]
    fn decodes_terminal_statuses() {
        let won = br#"{"dayIndex":1,"guesses":["simba"],"status":"WIN"}"#;
        let won = PersistedProgress::decode(won).unwrap();
        assert_eq!(won.status, GameStatus::Won);

        let lost = br#"{"dayIndex":1,"guesses":[],"status":"LOSS"}"#;
        let lost = PersistedProgress::decode(lost).unwrap();
        assert_eq!(lost.status, GameStatus::Lost);
    }

    #[test]
    fn malformed_records_are_invalid() {
        let records: [&[u8]; 4] = [
            b"not json",
            br#"{"dayIndex":1,"guesses":[]}"#,
            br#"{"dayIndex":-4,"guesses":[],"status":"WIN"}"#,
            br#"{"dayIndex":1,"guesses":[],"status":"DRAW"}"#,
        ];
        for bad in records {
            assert!(matches!(
                PersistedProgress::decode(bad),
                Err(ProgressError::InvalidRecord(_))
            ));
        }
    }

    #[test]
    fn save_then_load() {
        let store = MemoryStore::new();
        assert!(PersistedProgress::load(&store, "p").unwrap().is_none());

        sample().save(&store, "p").unwrap();
        assert_eq!(PersistedProgress::load(&store, "p").unwrap(), Some(sample()));
    }
}
