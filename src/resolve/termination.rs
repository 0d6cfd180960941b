//! End-of-game detection.
//!
//! A player whose flag has left the grid has lost. A player without any flag
//! in the registry can never lose by capture. When both flags stand, the
//! board's `StalemateRule` decides whether a blocked position is a draw.

use std::collections::HashSet;

use crate::board::{Board, GameStatus, PieceId, PieceValue, PlayerId};
use crate::config::StalemateRule;
use crate::error::BoardError;
use crate::movegen::{occupant, ray_cast};

/// Evaluates the status of `board` under its rules.
pub fn game_status(board: &Board) -> Result<GameStatus, BoardError> {
    let on_grid: HashSet<PieceId> = board.occupied().map(|(_, id)| id).collect();
    let red_lost = flag_captured(board, PlayerId::Red, &on_grid);
    let blue_lost = flag_captured(board, PlayerId::Blue, &on_grid);
    match (red_lost, blue_lost) {
        (true, true) => return Ok(GameStatus::Draw),
        (true, false) => return Ok(GameStatus::WonBy(PlayerId::Blue)),
        (false, true) => return Ok(GameStatus::WonBy(PlayerId::Red)),
        (false, false) => {}
    }

    let blocked = match board.rules().stalemate {
        StalemateRule::Disabled => false,
        StalemateRule::CurrentPlayerBlocked => !can_move(board, board.current_player())?,
        StalemateRule::BothPlayersBlocked => {
            !can_move(board, PlayerId::Red)? && !can_move(board, PlayerId::Blue)?
        }
    };
    Ok(if blocked {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    })
}

/// True if `player` owns a flag and none of their flags remain on the grid.
fn flag_captured(board: &Board, player: PlayerId, on_grid: &HashSet<PieceId>) -> bool {
    let mut flags = board
        .pieces()
        .filter(|(_, p)| p.owner == player && p.value == PieceValue::Flag)
        .map(|(id, _)| id)
        .peekable();
    flags.peek().is_some() && flags.all(|id| !on_grid.contains(&id))
}

/// True if any piece of `player` has at least one legal action, ignoring whose turn it is.
pub fn can_move(board: &Board, player: PlayerId) -> Result<bool, BoardError> {
    for (from, id) in board.occupied() {
        let piece = board.piece_at(id)?;
        if piece.owner != player || piece.value.is_immobile() {
            continue;
        }
        let actions = ray_cast(from, player, piece.value.mobility(), |c| occupant(board, c))?;
        if !actions.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}
