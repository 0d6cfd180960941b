//! Incremental board construction.
//!
//! Pieces receive ids in placement order, starting at zero.

use super::coord::Coord;
use super::piece::{Piece, PieceId, PieceValue, PlayerId};
use super::state::{Board, Cell, Grid};
use crate::config::RulesConfig;
use crate::error::BoardError;

/// Side length of the classic board.
pub const CLASSIC_SIZE: usize = 10;

/// The eight lake squares of the classic board.
pub const CLASSIC_LAKES: [Coord; 8] = [
    Coord::new(2, 4),
    Coord::new(3, 4),
    Coord::new(6, 4),
    Coord::new(7, 4),
    Coord::new(2, 5),
    Coord::new(3, 5),
    Coord::new(6, 5),
    Coord::new(7, 5),
];

/// Builds a `Board` one square at a time.
///
/// Placement errors are remembered and reported by `build`.
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    grid: Grid,
    pieces: Vec<Piece>,
    starting: PlayerId,
    rules: RulesConfig,
    error: Option<BoardError>,
}

impl BoardBuilder {
    /// Starts from an empty `rows` x `cols` grid with Red to move.
    pub fn new(rows: usize, cols: usize) -> Self {
        BoardBuilder {
            grid: vec![vec![Cell::Empty; cols]; rows],
            pieces: Vec::new(),
            starting: PlayerId::Red,
            rules: RulesConfig::default(),
            error: None,
        }
    }

    /// Starts from the classic 10x10 board with its lakes in place.
    pub fn classic() -> Self {
        CLASSIC_LAKES
            .iter()
            .fold(BoardBuilder::new(CLASSIC_SIZE, CLASSIC_SIZE), |b, &c| b.lake(c))
    }

    /// The id the next placed piece will receive.
    pub fn next_id(&self) -> PieceId {
        PieceId(self.pieces.len() as u16)
    }

    pub fn lake(mut self, c: Coord) -> Self {
        self.fill(c, Cell::Lake);
        self
    }

    pub fn piece(mut self, c: Coord, owner: PlayerId, value: PieceValue) -> Self {
        let id = self.next_id();
        if self.fill(c, Cell::Piece(id)) {
            self.pieces.push(Piece::new(owner, value));
        }
        self
    }

    pub fn starting(mut self, player: PlayerId) -> Self {
        self.starting = player;
        self
    }

    pub fn rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    pub fn build(self) -> Result<Board, BoardError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Ok(Board::new(self.grid, self.pieces, self.starting)?.with_rules(self.rules))
    }

    /// Writes `cell` onto an empty in-bounds square. Returns false and
    /// records an error otherwise.
    fn fill(&mut self, c: Coord, cell: Cell) -> bool {
        if self.error.is_some() {
            return false;
        }
        let slot = match (usize::try_from(c.y), usize::try_from(c.x)) {
            (Ok(y), Ok(x)) => self.grid.get_mut(y).and_then(|row| row.get_mut(x)),
            _ => None,
        };
        match slot {
            None => {
                self.error = Some(BoardError::OutOfBounds(c));
                false
            }
            Some(slot) if *slot != Cell::Empty => {
                self.error = Some(BoardError::InvalidArgument(format!(
                    "square {} is already occupied",
                    c
                )));
                false
            }
            Some(slot) => {
                *slot = cell;
                true
            }
        }
    }
}
