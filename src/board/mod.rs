//! Board representation and game-state types.
//!
//! Contains coordinates, pieces, actions, the ground-truth `Board`, and a
//! builder for initial placements.

pub mod action;
pub mod builder;
pub mod coord;
pub mod piece;
pub mod state;

pub use action::Action;
pub use builder::{BoardBuilder, CLASSIC_LAKES, CLASSIC_SIZE};
pub use coord::{Coord, DIRECTIONS};
pub use piece::{
    Piece, PieceId, PieceValue, PlayerId, ALL_PIECE_VALUES, ALL_PLAYERS, PIECE_VALUE_COUNT,
    UNBOUNDED_MOBILITY,
};
pub use state::{ApplyMode, Board, Cell, GameStatus, Grid};
