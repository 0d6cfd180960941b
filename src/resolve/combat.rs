//! Battle resolution.
//!
//! Special cases are checked in a fixed order before ranks are compared:
//! flag capture, spy against the top rank, miner against a bomb, and finally
//! any other attack on a bomb.

use serde::{Deserialize, Serialize};

use crate::board::{Piece, PieceValue};
use crate::error::BoardError;

/// The result of one piece attacking another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleOutcome {
    AttackerWins,
    DefenderWins,
    Draw,
}

/// Resolves an attack between two ranks, ignoring ownership.
pub fn resolve(attacker: PieceValue, defender: PieceValue) -> BattleOutcome {
    match (attacker, defender) {
        (_, PieceValue::Flag) => BattleOutcome::AttackerWins,
        (PieceValue::Spy, PieceValue::Rank10) => BattleOutcome::AttackerWins,
        (PieceValue::Miner, PieceValue::Bomb) => BattleOutcome::AttackerWins,
        (_, PieceValue::Bomb) => BattleOutcome::DefenderWins,
        _ => match attacker.power().cmp(&defender.power()) {
            std::cmp::Ordering::Greater => BattleOutcome::AttackerWins,
            std::cmp::Ordering::Equal => BattleOutcome::Draw,
            std::cmp::Ordering::Less => BattleOutcome::DefenderWins,
        },
    }
}

/// Resolves an attack between two placed pieces.
///
/// Fails with `InvalidArgument` if both pieces belong to the same player.
pub fn resolve_battle(attacker: &Piece, defender: &Piece) -> Result<BattleOutcome, BoardError> {
    if attacker.owner == defender.owner {
        return Err(BoardError::InvalidArgument(format!(
            "{} cannot attack its own {}",
            attacker.owner, defender.value
        )));
    }
    Ok(resolve(attacker.value, defender.value))
}
