//! Rules configuration.
//!
//! Only the end-of-game policy is configurable. Rules can be built in code
//! or loaded from JSON, where missing fields fall back to the defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// When a game that still has both flags on the board is declared a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalemateRule {
    /// Only a flag capture ends the game.
    Disabled,
    /// Draw when the player to move has no legal action with any piece.
    #[default]
    CurrentPlayerBlocked,
    /// Draw when neither player has a piece that could move, turn aside.
    BothPlayersBlocked,
}

/// Configuration for end-of-game evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub stalemate: StalemateRule,
}

impl RulesConfig {
    /// Parses a rules configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<RulesConfig, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a rules configuration from a JSON file at the given path.
    pub fn load(path: &Path) -> Result<RulesConfig, ConfigError> {
        let data = fs::read_to_string(path)?;
        RulesConfig::from_json(&data)
    }
}
