//! Records of applied actions, for observers of the game.

use serde::{Deserialize, Serialize};

use super::combat::BattleOutcome;
use crate::board::{Action, PieceId, PlayerId};

/// What an applied action did to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    /// A piece moved onto an empty square.
    Move {
        action: Action,
        player: PlayerId,
        piece: PieceId,
    },
    /// A piece attacked an opposing piece.
    Battle {
        action: Action,
        player: PlayerId,
        attacker: PieceId,
        defender: PieceId,
        outcome: BattleOutcome,
        /// Pieces taken off the grid by the battle.
        removed: Vec<PieceId>,
    },
}

impl GameEvent {
    pub fn action(&self) -> Action {
        match self {
            GameEvent::Move { action, .. } | GameEvent::Battle { action, .. } => *action,
        }
    }

    /// The player who made the action.
    pub fn player(&self) -> PlayerId {
        match self {
            GameEvent::Move { player, .. } | GameEvent::Battle { player, .. } => *player,
        }
    }

    pub fn removed(&self) -> &[PieceId] {
        match self {
            GameEvent::Move { .. } => &[],
            GameEvent::Battle { removed, .. } => removed,
        }
    }
}
