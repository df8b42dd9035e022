//! Error types

use std::path::PathBuf;

use thiserror::Error;

use crate::board::Pos;

/// Reasons a move is rejected
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// A winning line already exists, the board is frozen
    #[error("game is already over")]
    GameOver,

    #[error("({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("cell {0} is already occupied")]
    Occupied(Pos),
}

/// Errors while loading a [`GomokuConfig`](crate::config::GomokuConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
