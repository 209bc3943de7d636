//! Error types for game and storage operations.

use thiserror::Error;

/// Errors returned when a game operation does not apply to the player's session.
///
/// None of these are fatal; the caller is expected to tell the player and
/// carry on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The player already has a game in progress.
    #[error("player already has an active game")]
    AlreadyActive,
    /// The player has no game in progress.
    #[error("player has no active game")]
    NoActiveGame,
    /// The game has already been decided.
    #[error("game is already over")]
    GameOver,
    /// The game has not been decided yet.
    #[error("game is still being played")]
    StillPlaying,
}

/// Errors raised by a [`StatsStore`](crate::store::StatsStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[cfg(feature = "std")]
    #[error("stats storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The stored data could not be decoded or encoded.
    #[cfg(feature = "std")]
    #[error("stats data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    /// The store refused the operation.
    #[error("stats store unavailable: {0}")]
    Unavailable(&'static str),
}

/// Errors that can occur while reading configuration.
#[cfg(feature = "std")]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable was set to a value that could not be parsed.
    #[error("invalid value {value:?} for {key}")]
    Invalid {
        /// The variable name.
        key: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },
}

/// Returned when input does not name a player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown action, expected hit or stand")]
pub struct ParseActionError;
