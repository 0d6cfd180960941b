//! Single-piece actions.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// Moves the piece on `from` towards `to`.
///
/// If `to` holds an opposing piece the action is an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub from: Coord,
    pub to: Coord,
}

impl Action {
    pub const fn new(from: Coord, to: Coord) -> Self {
        Action { from, to }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}
