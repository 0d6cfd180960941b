//! Players, piece ranks, and piece identity.
//!
//! Rank metadata (combat power and movement range) lives on `PieceValue`;
//! a `Piece` binds a rank to its owner and never changes once placed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Movement range used for pieces that may travel any distance in a line.
pub const UNBOUNDED_MOBILITY: u32 = u32::MAX;

/// One of the two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    Red,
    Blue,
}

/// Both players in turn order.
pub const ALL_PLAYERS: [PlayerId; 2] = [PlayerId::Red, PlayerId::Blue];

impl PlayerId {
    /// Returns the opposing player.
    pub const fn other(self) -> Self {
        match self {
            PlayerId::Red => PlayerId::Blue,
            PlayerId::Blue => PlayerId::Red,
        }
    }

    /// Index usable for per-player arrays.
    pub const fn index(self) -> usize {
        match self {
            PlayerId::Red => 0,
            PlayerId::Blue => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::Red => f.write_str("red"),
            PlayerId::Blue => f.write_str("blue"),
        }
    }
}

/// The rank of a piece.
///
/// Variants are ordered from weakest to strongest, with the two immobile
/// pieces first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceValue {
    Flag,
    Bomb,
    Spy,
    Scout,
    Miner,
    Rank4,
    Rank5,
    Rank6,
    Rank7,
    Rank8,
    Rank9,
    Rank10,
}

/// The number of distinct ranks.
pub const PIECE_VALUE_COUNT: usize = 12;

/// All ranks in declaration order.
pub const ALL_PIECE_VALUES: [PieceValue; PIECE_VALUE_COUNT] = [
    PieceValue::Flag,
    PieceValue::Bomb,
    PieceValue::Spy,
    PieceValue::Scout,
    PieceValue::Miner,
    PieceValue::Rank4,
    PieceValue::Rank5,
    PieceValue::Rank6,
    PieceValue::Rank7,
    PieceValue::Rank8,
    PieceValue::Rank9,
    PieceValue::Rank10,
];

impl PieceValue {
    /// Strength used for generic rank comparison.
    ///
    /// Flag and Bomb carry sentinel values; combat special-cases both before
    /// powers are ever compared.
    pub const fn power(self) -> i32 {
        match self {
            PieceValue::Flag => -1,
            PieceValue::Bomb => 20,
            PieceValue::Spy => 1,
            PieceValue::Scout => 2,
            PieceValue::Miner => 3,
            PieceValue::Rank4 => 4,
            PieceValue::Rank5 => 5,
            PieceValue::Rank6 => 6,
            PieceValue::Rank7 => 7,
            PieceValue::Rank8 => 8,
            PieceValue::Rank9 => 9,
            PieceValue::Rank10 => 10,
        }
    }

    /// Maximum number of squares the piece may cross in one straight move.
    pub const fn mobility(self) -> u32 {
        match self {
            PieceValue::Flag | PieceValue::Bomb => 0,
            PieceValue::Scout => UNBOUNDED_MOBILITY,
            _ => 1,
        }
    }

    /// Returns true if the piece can never leave its square.
    pub const fn is_immobile(self) -> bool {
        self.mobility() == 0
    }

    /// Number of pieces of this rank in a classic 40-piece army.
    pub const fn classic_count(self) -> usize {
        match self {
            PieceValue::Flag => 1,
            PieceValue::Bomb => 6,
            PieceValue::Spy => 1,
            PieceValue::Scout => 8,
            PieceValue::Miner => 5,
            PieceValue::Rank4 | PieceValue::Rank5 | PieceValue::Rank6 => 4,
            PieceValue::Rank7 => 3,
            PieceValue::Rank8 => 2,
            PieceValue::Rank9 | PieceValue::Rank10 => 1,
        }
    }
}

impl fmt::Display for PieceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Stable identifier of a piece, valid for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u16);

impl PieceId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A rank bound to the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: PlayerId,
    pub value: PieceValue,
}

impl Piece {
    pub const fn new(owner: PlayerId, value: PieceValue) -> Self {
        Piece { owner, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_has_twelve_ranks() {
        assert_eq!(ALL_PIECE_VALUES.len(), 12);
        for w in ALL_PIECE_VALUES.windows(2) {
            assert!(w[0] < w[1]);
        }
    }

    #[test]
    fn classic_army_has_forty_pieces() {
        let total: usize = ALL_PIECE_VALUES.iter().map(|v| v.classic_count()).sum();
        assert_eq!(total, 40);
    }

    #[test]
    fn only_scout_is_unbounded() {
        for v in ALL_PIECE_VALUES {
            match v {
                PieceValue::Scout => assert_eq!(v.mobility(), UNBOUNDED_MOBILITY),
                PieceValue::Flag | PieceValue::Bomb => assert!(v.is_immobile()),
                _ => assert_eq!(v.mobility(), 1),
            }
        }
    }

    #[test]
    fn other_player_is_involution() {
        for p in ALL_PLAYERS {
            assert_ne!(p.other(), p);
            assert_eq!(p.other().other(), p);
        }
        assert_eq!(PlayerId::Red.index(), 0);
        assert_eq!(PlayerId::Blue.index(), 1);
    }
}
