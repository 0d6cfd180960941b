//! Stratego match state.
//!
//! Exposes the authoritative board, move generation, battle resolution, and
//! player-restricted views, plus an engine that ties them together for a
//! single match.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod movegen;
pub mod observer;
pub mod resolve;
pub mod view;

pub use board::{
    Action, ApplyMode, Board, BoardBuilder, Cell, Coord, GameStatus, Grid, Piece, PieceId,
    PieceValue, PlayerId,
};
pub use config::{RulesConfig, StalemateRule};
pub use engine::Engine;
pub use error::{BoardError, ConfigError};
pub use resolve::{resolve, BattleOutcome, GameEvent};
pub use view::{BoardView, GlobalView, RestrictedView};
