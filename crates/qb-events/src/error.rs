//! Error types for board events.

use thiserror::Error;

/// Result type for event operations.
pub type EventResult<T> = Result<T, EventError>;

/// Errors that can occur while running board events.
#[derive(Debug, Error)]
pub enum EventError {
    /// No player record at this index.
    #[error("no player at index {0}")]
    InvalidPlayer(usize),

    /// The event needs more players than the session has.
    #[error("not enough players for this event")]
    NotEnoughPlayers,

    /// Invalid configuration value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Core data error.
    #[error("{0}")]
    Core(#[from] qb_core::QbError),

    /// Mechanics error.
    #[error("{0}")]
    Mechanics(#[from] qb_mechanics::MechError),

    /// Reading or writing a state file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A state or config file could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
