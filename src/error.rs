//! Error types surfaced by the board, its views, and rules loading.

use crate::board::{Action, Coord, PieceId};

/// Errors returned by board queries and state transitions.
///
/// Every variant except `InconsistentState` describes a condition the caller
/// can recover from (typically by rejecting the user's input).
/// `InconsistentState` means an internal invariant is broken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("coordinates {0} fall outside the board")]
    OutOfBounds(Coord),

    #[error("unknown piece id {0}")]
    UnknownPieceId(PieceId),

    #[error("access to piece {0} is restricted")]
    AccessDenied(PieceId),

    #[error("illegal move {0}")]
    IllegalMove(Action),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),

    #[error("inconsistent board state: {0}")]
    InconsistentState(String),
}

/// Errors that can occur while loading a rules configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read rules file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse rules JSON: {0}")]
    Json(#[from] serde_json::Error),
}
