//! Play configuration.
//!
//! The rules themselves are fixed. `PlayConfig` only controls how the
//! headless driver runs a game: which seed feeds the die, how long to
//! play before giving up, and whether to keep a move log.

use serde::{Deserialize, Serialize};

/// Driver configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Seed for the die RNG.
    /// Same seed and policy produce the same game.
    pub seed: u64,

    /// Maximum resolved rolls before the driver stops (0 = unlimited).
    pub max_turns: u32,

    /// Keep the per-move history in the final state.
    pub record_history: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_turns: 10_000,
            record_history: true,
        }
    }
}

impl PlayConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the die seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the roll cap.
    pub fn with_max_turns(mut self, max: u32) -> Self {
        self.max_turns = max;
        self
    }

    /// Enable or disable move history.
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Check whether `turns` resolved rolls has hit the cap.
    #[must_use]
    pub fn turn_limit_reached(&self, turns: u32) -> bool {
        self.max_turns > 0 && turns >= self.max_turns
    }
}
