//! Legal move generation.
//!
//! Move generation only sees a board through `BoardView`, so the same ray
//! casting serves the engine's global view and the players' restricted views.
//! The only view-specific input is the movement range of the moving piece.

use crate::board::{Action, Cell, Coord, PlayerId, DIRECTIONS, UNBOUNDED_MOBILITY};
use crate::error::BoardError;
use crate::view::BoardView;

/// What a square means to a piece travelling through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    Empty,
    Lake,
    Piece(PlayerId),
}

/// Classifies a square of `view`. Returns `None` for squares off the board.
pub fn occupant<V: BoardView + ?Sized>(view: &V, c: Coord) -> Result<Option<Occupant>, BoardError> {
    if !view.is_in_bounds(c) {
        return Ok(None);
    }
    let occupant = match view.cell_at(c)? {
        Cell::Empty => Occupant::Empty,
        Cell::Lake => Occupant::Lake,
        Cell::Piece(_) | Cell::Hidden => {
            let owner = view.owner_at(c)?.ok_or_else(|| {
                BoardError::InconsistentState(format!("occupied square {} has no owner", c))
            })?;
            Occupant::Piece(owner)
        }
    };
    Ok(Some(occupant))
}

/// Casts a ray in each direction from `from`, up to `reach` squares.
///
/// Empty squares are recorded and the ray continues. Lakes and friendly
/// pieces stop the ray without being recorded. An opposing piece is recorded
/// as an attack and stops the ray.
pub fn ray_cast<F>(
    from: Coord,
    mover: PlayerId,
    reach: u32,
    mut occupant: F,
) -> Result<Vec<Action>, BoardError>
where
    F: FnMut(Coord) -> Result<Option<Occupant>, BoardError>,
{
    let mut actions = Vec::new();
    for dir in DIRECTIONS {
        let mut to = from;
        for _ in 0..reach {
            to = to + dir;
            match occupant(to)? {
                None | Some(Occupant::Lake) => break,
                Some(Occupant::Empty) => actions.push(Action::new(from, to)),
                Some(Occupant::Piece(owner)) => {
                    if owner != mover {
                        actions.push(Action::new(from, to));
                    }
                    break;
                }
            }
        }
    }
    Ok(actions)
}

/// Lists the legal actions of the piece on `from` as seen through `view`.
///
/// A piece whose identity the view hides is given unbounded range so that
/// its reach reveals nothing about its rank.
pub fn legal_destinations<V: BoardView + ?Sized>(
    view: &V,
    from: Coord,
) -> Result<Vec<Action>, BoardError> {
    if !view.is_in_bounds(from) {
        return Ok(Vec::new());
    }
    let reach = match view.cell_at(from)? {
        Cell::Empty | Cell::Lake => return Ok(Vec::new()),
        Cell::Piece(id) => view.piece_at(id)?.value.mobility(),
        Cell::Hidden => UNBOUNDED_MOBILITY,
    };
    let mover = view.owner_at(from)?.ok_or_else(|| {
        BoardError::InconsistentState(format!("occupied square {} has no owner", from))
    })?;
    if mover != view.current_player() {
        return Ok(Vec::new());
    }
    ray_cast(from, mover, reach, |c| occupant(view, c))
}

/// Lists every legal action available to the player on turn.
pub fn all_legal_actions<V: BoardView + ?Sized>(view: &V) -> Result<Vec<Action>, BoardError> {
    let mut actions = Vec::new();
    for y in 0..view.rows() {
        for x in 0..view.cols() {
            actions.extend(legal_destinations(view, Coord::new(x as i32, y as i32))?);
        }
    }
    Ok(actions)
}
