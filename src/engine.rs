//! Engine state management.
//!
//! The engine is the single owner of the authoritative board. It serializes
//! every state transition, tracks which pieces battles have revealed, hands
//! out per-player restricted views, and notifies observers.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::board::{Action, Board, GameStatus, PieceId, PieceValue, PlayerId, ALL_PLAYERS};
use crate::error::BoardError;
use crate::observer::GameObserver;
use crate::resolve::GameEvent;
use crate::view::RestrictedView;

/// Runs one match.
pub struct Engine {
    board: Board,
    /// Pieces whose identity a battle has made public to both players.
    revealed: HashSet<PieceId>,
    observers: Vec<Box<dyn GameObserver>>,
    status: GameStatus,
}

impl Engine {
    /// Starts a match from an initial placement.
    ///
    /// Each player must own exactly one flag, and it must be on the grid.
    pub fn new(board: Board) -> Result<Self, BoardError> {
        for player in ALL_PLAYERS {
            let flags: Vec<PieceId> = board
                .pieces()
                .filter(|(_, p)| p.owner == player && p.value == PieceValue::Flag)
                .map(|(id, _)| id)
                .collect();
            if flags.len() != 1 {
                return Err(BoardError::InvalidArgument(format!(
                    "{} must have exactly one flag, found {}",
                    player,
                    flags.len()
                )));
            }
            if board.locate(flags[0]).is_none() {
                return Err(BoardError::InvalidArgument(format!(
                    "{}'s flag is not on the board",
                    player
                )));
            }
        }
        let status = board.has_ended()?;
        Ok(Engine {
            board,
            revealed: HashSet::new(),
            observers: Vec::new(),
            status,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_player(&self) -> PlayerId {
        self.board.current_player()
    }

    /// Registers an observer for all subsequent events.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    pub fn is_revealed(&self, id: PieceId) -> bool {
        self.revealed.contains(&id)
    }

    /// The pieces `player` may identify: their own, plus any revealed in battle.
    pub fn accessible_ids(&self, player: PlayerId) -> HashSet<PieceId> {
        self.board
            .pieces()
            .filter(|(id, p)| p.owner == player || self.revealed.contains(id))
            .map(|(id, _)| id)
            .collect()
    }

    /// Returns what `player` is entitled to see of the board.
    pub fn view_for(&self, player: PlayerId) -> RestrictedView<'_> {
        RestrictedView::new(&self.board, self.accessible_ids(player))
    }

    /// Applies an action for the player on turn.
    pub fn play(&mut self, action: Action) -> Result<GameEvent, BoardError> {
        if self.status.is_over() {
            warn!(%action, status = ?self.status, "action after the game ended");
            return Err(BoardError::UnsupportedOperation("the game is already over"));
        }
        let event = self.board.play(action).inspect_err(|e| {
            warn!(%action, error = %e, "rejected action");
        })?;

        if let GameEvent::Battle {
            attacker, defender, ..
        } = &event
        {
            self.revealed.insert(*attacker);
            self.revealed.insert(*defender);
        }
        for observer in &mut self.observers {
            observer.on_event(&event);
        }

        self.status = self.board.has_ended()?;
        if self.status.is_over() {
            info!(status = ?self.status, "game over");
            for observer in &mut self.observers {
                observer.on_game_over(self.status);
            }
        }
        Ok(event)
    }
}
