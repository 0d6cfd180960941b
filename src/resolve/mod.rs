//! Action resolution.
//!
//! Decides battle outcomes, describes applied actions as events, and
//! evaluates whether the game is over.

pub mod combat;
pub mod event;
pub mod termination;

pub use combat::{resolve, resolve_battle, BattleOutcome};
pub use event::GameEvent;
pub use termination::{can_move, game_status};
