//! Bridge between the in-memory board and the storage adapter.
//!
//! The stored blob is JSON of the form
//! `{"lists": [{"id", "title", "cards": [{"id", "title", "desc"}]}]}`.
//! Loading never fails: anything unreadable is reported as absent so the
//! caller can fall back to the seed board.

use crate::{
    domain::Board,
    error::{Result, TrackerError},
    storage::Storage,
};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Serializes a board into the stored blob format
pub fn encode(board: &Board) -> Result<String> {
    Ok(serde_json::to_string(board)?)
}

/// Parses and validates a stored blob
pub fn decode(raw: &str) -> Result<Board> {
    let value: Value = serde_json::from_str(raw)?;

    match value.get("lists") {
        Some(Value::Array(_)) => {}
        Some(_) => {
            return Err(TrackerError::InvalidState(
                "`lists` is not an array".to_string(),
            ))
        }
        None if value.is_object() => {
            return Err(TrackerError::InvalidState("missing `lists`".to_string()))
        }
        None => {
            return Err(TrackerError::InvalidState(
                "blob is not an object".to_string(),
            ))
        }
    }

    let board: Board = serde_json::from_value(value)?;
    board.validate()?;
    Ok(board)
}

/// Loads and saves the board under one storage key
pub struct Persistence<S: Storage> {
    storage: S,
    key: String,
}

impl<S: Storage> Persistence<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Writes the board. Failures are logged and otherwise ignored.
    pub async fn save(&self, board: &Board) {
        if let Err(e) = self.try_save(board).await {
            warn!(key = %self.key, error = %e, "Failed to persist board");
        }
    }

    /// Writes the board, reporting failures to the caller
    pub async fn try_save(&self, board: &Board) -> Result<()> {
        let blob = encode(board)?;
        self.storage.write_blob(&self.key, &blob).await?;
        debug!(
            key = %self.key,
            lists = board.lists.len(),
            cards = board.card_count(),
            "Board persisted"
        );
        Ok(())
    }

    /// Reads the stored board, or `None` if it is missing or invalid
    pub async fn load(&self) -> Option<Board> {
        let raw = match self.storage.read_blob(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "No stored board");
                return None;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read stored board");
                return None;
            }
        };

        match decode(&raw) {
            Ok(board) => {
                debug!(key = %self.key, lists = board.lists.len(), "Board loaded");
                Some(board)
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Stored board is invalid, discarding");
                None
            }
        }
    }

    /// Replaces the stored board with the seed board and returns it
    pub async fn reset(&self) -> Board {
        let board = Board::seed();
        self.save(&board).await;
        info!(key = %self.key, "Board reset to seed data");
        board
    }
}
