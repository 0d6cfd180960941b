//! The omniscient view: the board itself.

use std::borrow::Cow;

use super::BoardView;
use crate::board::{Action, ApplyMode, Board, Cell, Coord, GameStatus, Grid, Piece, PieceId, PlayerId};
use crate::error::BoardError;

/// Full access to the game state, reserved for the engine.
pub type GlobalView = Board;

impl BoardView for Board {
    fn rows(&self) -> usize {
        Board::rows(self)
    }

    fn cols(&self) -> usize {
        Board::cols(self)
    }

    fn is_in_bounds(&self, c: Coord) -> bool {
        Board::is_in_bounds(self, c)
    }

    fn snapshot(&self) -> Grid {
        Board::snapshot(self)
    }

    fn cell_at(&self, c: Coord) -> Result<Cell, BoardError> {
        Board::cell_at(self, c)
    }

    fn owner_at(&self, c: Coord) -> Result<Option<PlayerId>, BoardError> {
        Board::owner_at(self, c)
    }

    fn piece_at(&self, id: PieceId) -> Result<Piece, BoardError> {
        Board::piece_at(self, id)
    }

    fn current_player(&self) -> PlayerId {
        Board::current_player(self)
    }

    fn apply(&mut self, action: Action, mode: ApplyMode) -> Result<Cow<'_, Board>, BoardError> {
        Board::apply(self, action, mode)
    }

    fn has_ended(&self) -> Result<GameStatus, BoardError> {
        Board::has_ended(self)
    }
}
