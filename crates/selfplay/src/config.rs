//! Match settings, read from TOML.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// One side of a self-play match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub name: String,
    /// Plies searched after the bot's own move
    pub difficulty: u8,
    /// Play uniformly random moves instead of searching
    pub random: bool,
}

impl BotConfig {
    pub fn new(name: &str, difficulty: u8, random: bool) -> Self {
        Self {
            name: name.to_string(),
            difficulty,
            random,
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self::new("Bot", 2, false)
    }
}

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: u32,
    /// Plies after which an undecided game is abandoned
    pub max_plies: u32,
    pub white: BotConfig,
    pub black: BotConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 10,
            max_plies: 200,
            white: BotConfig::new("White", 2, false),
            black: BotConfig::new("Black", 2, false),
        }
    }
}

impl MatchConfig {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("Failed to parse match config")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("In {}", path.display()))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
