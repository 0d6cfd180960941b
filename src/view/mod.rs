//! Read access to a board from a point of view.
//!
//! `BoardView` is implemented by the authoritative `Board` itself (the global
//! view used by the engine) and by `RestrictedView`, a filtering decorator
//! that hides the identity of pieces a player is not entitled to see.

pub mod global;
pub mod restricted;

use std::borrow::Cow;

use crate::board::{Action, ApplyMode, Board, Cell, Coord, GameStatus, Grid, Piece, PieceId, PlayerId};
use crate::error::BoardError;
use crate::movegen;

pub use global::GlobalView;
pub use restricted::RestrictedView;

/// A capability to query, and possibly advance, a game state.
pub trait BoardView {
    fn rows(&self) -> usize;

    fn cols(&self) -> usize;

    fn is_in_bounds(&self, c: Coord) -> bool {
        c.x >= 0 && c.y >= 0 && (c.x as usize) < self.cols() && (c.y as usize) < self.rows()
    }

    /// Returns an independent copy of the grid as seen through this view.
    fn snapshot(&self) -> Grid;

    /// Returns the content of a square, or `OutOfBounds`.
    fn cell_at(&self, c: Coord) -> Result<Cell, BoardError>;

    /// Returns the owner of the piece on a square. Piece colours are public
    /// even when ranks are hidden.
    fn owner_at(&self, c: Coord) -> Result<Option<PlayerId>, BoardError>;

    fn piece_at(&self, id: PieceId) -> Result<Piece, BoardError>;

    fn current_player(&self) -> PlayerId;

    fn legal_destinations(&self, from: Coord) -> Result<Vec<Action>, BoardError> {
        movegen::legal_destinations(self, from)
    }

    fn is_legal(&self, action: Action) -> Result<bool, BoardError> {
        Ok(self.legal_destinations(action.from)?.contains(&action))
    }

    /// Applies a legal action in place or to a copy. Read-only views refuse
    /// with `UnsupportedOperation`.
    fn apply(&mut self, action: Action, mode: ApplyMode) -> Result<Cow<'_, Board>, BoardError>;

    fn has_ended(&self) -> Result<GameStatus, BoardError>;
}
