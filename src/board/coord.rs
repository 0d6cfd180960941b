//! Grid coordinates.
//!
//! A coordinate carries no knowledge of the board it points into; bounds
//! checks are always made against a concrete board or view.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// A square on the grid: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// The four orthogonal unit steps a piece may travel along.
pub const DIRECTIONS: [Coord; 4] = [
    Coord { x: 1, y: 0 },
    Coord { x: -1, y: 0 },
    Coord { x: 0, y: 1 },
    Coord { x: 0, y: -1 },
];

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }

    /// Manhattan distance between two squares.
    pub fn distance(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addition_is_componentwise() {
        assert_eq!(Coord::new(2, 3) + Coord::new(-1, 4), Coord::new(1, 7));
    }

    #[test]
    fn directions_are_unit_steps() {
        for d in DIRECTIONS {
            assert_eq!(Coord::new(0, 0).distance(d), 1);
        }
    }

    #[test]
    fn display_format() {
        assert_eq!(Coord::new(4, -2).to_string(), "(4, -2)");
    }
}
