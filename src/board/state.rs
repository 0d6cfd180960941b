//! Ground-truth game state.
//!
//! `Board` owns the grid, the piece registry, and the turn. It is the only
//! place state transitions happen; views only ever read from it.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::action::Action;
use super::coord::Coord;
use super::piece::{Piece, PieceId, PlayerId};
use crate::config::RulesConfig;
use crate::error::BoardError;
use crate::movegen;
use crate::resolve::{game_status, resolve_battle, BattleOutcome, GameEvent};

/// The content of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    /// Impassable terrain. Never occupied.
    Lake,
    Piece(PieceId),
    /// A piece whose identity the reader may not see. Only produced by
    /// restricted views, never stored on a `Board`.
    Hidden,
}

/// A grid of cells indexed as `grid[y][x]`.
pub type Grid = Vec<Vec<Cell>>;

/// Whether `apply` mutates the board or returns a modified copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyMode {
    InPlace,
    Copy,
}

/// Termination status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    WonBy(PlayerId),
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// The authoritative state of a match.
///
/// Cells are stored row-major. Every `Cell::Piece` id is a valid index into
/// the registry and appears on at most one square. Captured pieces leave the
/// grid but stay in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    pieces: Vec<Piece>,
    now_playing: PlayerId,
    rules: RulesConfig,
}

impl Board {
    /// Creates a board from an initial placement.
    ///
    /// `pieces[i]` describes the piece with id `i`. Fails with
    /// `InvalidArgument` if the grid is empty or ragged, contains a `Hidden`
    /// cell, or references a piece id that is unknown or already placed.
    pub fn new(grid: Grid, pieces: Vec<Piece>, starting: PlayerId) -> Result<Board, BoardError> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidArgument(
                "board must have at least one square".to_string(),
            ));
        }
        if pieces.len() > usize::from(u16::MAX) + 1 {
            return Err(BoardError::InvalidArgument(format!(
                "too many pieces: {}",
                pieces.len()
            )));
        }

        let mut placed = vec![false; pieces.len()];
        let mut cells = Vec::with_capacity(rows * cols);
        for (y, row) in grid.into_iter().enumerate() {
            if row.len() != cols {
                return Err(BoardError::InvalidArgument(format!(
                    "row {} has {} squares, expected {}",
                    y,
                    row.len(),
                    cols
                )));
            }
            for cell in row {
                match cell {
                    Cell::Hidden => {
                        return Err(BoardError::InvalidArgument(
                            "hidden squares cannot appear on a board".to_string(),
                        ));
                    }
                    Cell::Piece(id) => match placed.get_mut(id.index()) {
                        None => {
                            return Err(BoardError::InvalidArgument(format!(
                                "square references unknown piece {}",
                                id
                            )));
                        }
                        Some(true) => {
                            return Err(BoardError::InvalidArgument(format!(
                                "piece {} is placed twice",
                                id
                            )));
                        }
                        Some(seen) => *seen = true,
                    },
                    Cell::Empty | Cell::Lake => {}
                }
                cells.push(cell);
            }
        }

        Ok(Board {
            rows,
            cols,
            cells,
            pieces,
            now_playing: starting,
            rules: RulesConfig::default(),
        })
    }

    /// Replaces the end-of-game rules.
    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> RulesConfig {
        self.rules
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> PlayerId {
        self.now_playing
    }

    pub fn is_in_bounds(&self, c: Coord) -> bool {
        self.index(c).is_some()
    }

    fn index(&self, c: Coord) -> Option<usize> {
        let x = usize::try_from(c.x).ok()?;
        let y = usize::try_from(c.y).ok()?;
        (x < self.cols && y < self.rows).then_some(y * self.cols + x)
    }

    /// Returns an independent copy of the grid.
    pub fn snapshot(&self) -> Grid {
        self.cells.chunks(self.cols).map(<[Cell]>::to_vec).collect()
    }

    pub fn cell_at(&self, c: Coord) -> Result<Cell, BoardError> {
        self.index(c)
            .map(|i| self.cells[i])
            .ok_or(BoardError::OutOfBounds(c))
    }

    /// Looks up a piece in the registry, whether or not it is still on the grid.
    pub fn piece_at(&self, id: PieceId) -> Result<Piece, BoardError> {
        self.pieces
            .get(id.index())
            .copied()
            .ok_or(BoardError::UnknownPieceId(id))
    }

    /// Returns the owner of the piece on `c`, or `None` for empty squares and lakes.
    pub fn owner_at(&self, c: Coord) -> Result<Option<PlayerId>, BoardError> {
        match self.cell_at(c)? {
            Cell::Empty | Cell::Lake => Ok(None),
            Cell::Piece(id) => self.registered(id).map(|p| Some(p.owner)),
            Cell::Hidden => Err(hidden_on_board(c)),
        }
    }

    /// Registry lookup for an id read off the grid. A miss is a broken invariant.
    fn registered(&self, id: PieceId) -> Result<Piece, BoardError> {
        self.piece_at(id).map_err(|_| {
            BoardError::InconsistentState(format!("grid references unregistered piece {}", id))
        })
    }

    /// Iterates the full registry, including captured pieces.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, Piece)> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .map(|(i, p)| (PieceId(i as u16), *p))
    }

    /// Iterates the pieces still on the grid with their squares.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, PieceId)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| match cell {
            Cell::Piece(id) => Some((Coord::new((i % cols) as i32, (i / cols) as i32), *id)),
            _ => None,
        })
    }

    /// Returns the square holding `id`, or `None` if the piece has been captured.
    pub fn locate(&self, id: PieceId) -> Option<Coord> {
        self.occupied().find(|(_, p)| *p == id).map(|(c, _)| c)
    }

    /// Lists the legal actions of the piece on `from`.
    ///
    /// Empty when `from` is off the board, holds no piece, or holds a piece
    /// of the player who is not on turn.
    pub fn legal_destinations(&self, from: Coord) -> Result<Vec<Action>, BoardError> {
        movegen::legal_destinations(self, from)
    }

    pub fn is_legal(&self, action: Action) -> Result<bool, BoardError> {
        Ok(self.legal_destinations(action.from)?.contains(&action))
    }

    fn ensure_legal(&self, action: Action) -> Result<(), BoardError> {
        if self.is_legal(action)? {
            Ok(())
        } else {
            Err(BoardError::IllegalMove(action))
        }
    }

    /// Applies a legal action either in place or to a fresh copy.
    ///
    /// With `ApplyMode::Copy` the receiver is left untouched and the
    /// successor state is returned owned.
    pub fn apply(&mut self, action: Action, mode: ApplyMode) -> Result<Cow<'_, Board>, BoardError> {
        match mode {
            ApplyMode::InPlace => {
                self.play(action)?;
                Ok(Cow::Borrowed(&*self))
            }
            ApplyMode::Copy => self.successor(action).map(|(next, _)| Cow::Owned(next)),
        }
    }

    /// Applies a legal action in place and reports what happened.
    pub fn play(&mut self, action: Action) -> Result<GameEvent, BoardError> {
        self.ensure_legal(action)?;
        self.execute(action)
    }

    /// Returns the state after a legal action without modifying `self`.
    pub fn successor(&self, action: Action) -> Result<(Board, GameEvent), BoardError> {
        self.ensure_legal(action)?;
        let mut next = self.clone();
        let event = next.execute(action)?;
        Ok((next, event))
    }

    /// Evaluates whether the game is over under this board's rules.
    pub fn has_ended(&self) -> Result<GameStatus, BoardError> {
        game_status(self)
    }

    /// Performs an already validated action and passes the turn.
    fn execute(&mut self, action: Action) -> Result<GameEvent, BoardError> {
        let player = self.now_playing;
        let attacker_id = match self.cell_at(action.from)? {
            Cell::Piece(id) => id,
            _ => {
                return Err(BoardError::InconsistentState(format!(
                    "no piece to move on {}",
                    action.from
                )));
            }
        };

        let event = match self.cell_at(action.to)? {
            Cell::Empty => {
                self.set(action.from, Cell::Empty)?;
                self.set(action.to, Cell::Piece(attacker_id))?;
                debug!(%action, piece = %attacker_id, "move");
                GameEvent::Move {
                    action,
                    player,
                    piece: attacker_id,
                }
            }
            Cell::Piece(defender_id) => {
                let attacker = self.registered(attacker_id)?;
                let defender = self.registered(defender_id)?;
                let outcome = resolve_battle(&attacker, &defender)?;

                self.set(action.from, Cell::Empty)?;
                let removed = match outcome {
                    BattleOutcome::AttackerWins => {
                        self.set(action.to, Cell::Piece(attacker_id))?;
                        vec![defender_id]
                    }
                    BattleOutcome::DefenderWins => vec![attacker_id],
                    BattleOutcome::Draw => {
                        self.set(action.to, Cell::Empty)?;
                        vec![attacker_id, defender_id]
                    }
                };
                debug!(
                    %action,
                    attacker = %attacker.value,
                    defender = %defender.value,
                    ?outcome,
                    "battle"
                );
                GameEvent::Battle {
                    action,
                    player,
                    attacker: attacker_id,
                    defender: defender_id,
                    outcome,
                    removed,
                }
            }
            Cell::Lake => return Err(BoardError::IllegalMove(action)),
            Cell::Hidden => return Err(hidden_on_board(action.to)),
        };

        self.now_playing = player.other();
        Ok(event)
    }

    fn set(&mut self, c: Coord, cell: Cell) -> Result<(), BoardError> {
        let i = self.index(c).ok_or(BoardError::OutOfBounds(c))?;
        self.cells[i] = cell;
        Ok(())
    }
}

fn hidden_on_board(c: Coord) -> BoardError {
    BoardError::InconsistentState(format!("board holds a hidden square at {}", c))
}
