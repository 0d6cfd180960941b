//! Player-facing projection of a board.
//!
//! A `RestrictedView` borrows another view and filters every read through an
//! explicit set of accessible piece ids. Pieces outside the set show up as
//! `Cell::Hidden`, cannot be looked up, and move as if they had the longest
//! reach in the game, so no accessor distinguishes one hidden rank from
//! another.

use std::borrow::Cow;
use std::collections::HashSet;

use super::BoardView;
use crate::board::{Action, ApplyMode, Board, Cell, Coord, GameStatus, Grid, Piece, PieceId, PlayerId};
use crate::error::BoardError;

/// A read-only, filtered view over another `BoardView`.
pub struct RestrictedView<'a, V: BoardView + ?Sized = Board> {
    inner: &'a V,
    accessible: HashSet<PieceId>,
}

impl<'a, V: BoardView + ?Sized> RestrictedView<'a, V> {
    pub fn new(inner: &'a V, accessible: impl IntoIterator<Item = PieceId>) -> Self {
        RestrictedView {
            inner,
            accessible: accessible.into_iter().collect(),
        }
    }

    pub fn accessible_ids(&self) -> &HashSet<PieceId> {
        &self.accessible
    }

    pub fn can_see(&self, id: PieceId) -> bool {
        self.accessible.contains(&id)
    }

    fn mask(&self, cell: Cell) -> Cell {
        match cell {
            Cell::Piece(id) if !self.can_see(id) => Cell::Hidden,
            other => other,
        }
    }
}

impl<V: BoardView + ?Sized> BoardView for RestrictedView<'_, V> {
    fn rows(&self) -> usize {
        self.inner.rows()
    }

    fn cols(&self) -> usize {
        self.inner.cols()
    }

    fn is_in_bounds(&self, c: Coord) -> bool {
        self.inner.is_in_bounds(c)
    }

    fn snapshot(&self) -> Grid {
        let mut grid = self.inner.snapshot();
        for cell in grid.iter_mut().flatten() {
            *cell = self.mask(*cell);
        }
        grid
    }

    fn cell_at(&self, c: Coord) -> Result<Cell, BoardError> {
        self.inner.cell_at(c).map(|cell| self.mask(cell))
    }

    fn owner_at(&self, c: Coord) -> Result<Option<PlayerId>, BoardError> {
        self.inner.owner_at(c)
    }

    /// Ids outside the accessible set fail with `AccessDenied` whether or not
    /// they exist, so the registry cannot be probed through a view.
    fn piece_at(&self, id: PieceId) -> Result<Piece, BoardError> {
        if !self.can_see(id) {
            return Err(BoardError::AccessDenied(id));
        }
        self.inner.piece_at(id)
    }

    fn current_player(&self) -> PlayerId {
        self.inner.current_player()
    }

    fn apply(&mut self, _action: Action, _mode: ApplyMode) -> Result<Cow<'_, Board>, BoardError> {
        Err(BoardError::UnsupportedOperation(
            "a restricted view is read-only",
        ))
    }

    fn has_ended(&self) -> Result<GameStatus, BoardError> {
        self.inner.has_ended()
    }
}
