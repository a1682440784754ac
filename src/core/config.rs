//! Engine configuration.
//!
//! `EngineConfig` carries the seed and the handful of numeric rules that
//! shape a game. Deck contents come from the static card catalogue in
//! [`cards::registry`](crate::cards::registry).
//!
//! ```
//! use poker_monster::core::EngineConfig;
//!
//! let config = EngineConfig::new().with_seed(7).max_hand_size(6);
//! assert_eq!(config.seed, 7);
//! assert_eq!(config.max_hand_size, 6);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Numeric rules and the RNG seed for an engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the engine RNG. Each game forks its own stream from it.
    pub seed: u64,
    /// Health both sides start with.
    pub starting_health: i32,
    /// Cards each side draws before the first turn.
    pub opening_hand: usize,
    /// Hand size above which ending the turn forces discards.
    pub max_hand_size: usize,
    /// Power-card plays granted at the start of each turn.
    pub power_plays_per_turn: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            starting_health: 15,
            opening_hand: 4,
            max_hand_size: 5,
            power_plays_per_turn: 1,
        }
    }
}

impl EngineConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set starting health.
    #[must_use]
    pub fn starting_health(mut self, health: i32) -> Self {
        self.starting_health = health;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn opening_hand(mut self, cards: usize) -> Self {
        self.opening_hand = cards;
        self
    }

    /// Set the maximum hand size at end of turn.
    #[must_use]
    pub fn max_hand_size(mut self, cards: usize) -> Self {
        self.max_hand_size = cards;
        self
    }

    /// Set power-card plays per turn.
    #[must_use]
    pub fn power_plays_per_turn(mut self, plays: i32) -> Self {
        self.power_plays_per_turn = plays;
        self
    }

    /// Reject configurations the rules cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.starting_health < 1 {
            return Err(EngineError::InvalidConfig(format!(
                "starting health must be at least 1, got {}",
                self.starting_health
            )));
        }
        if self.max_hand_size == 0 {
            return Err(EngineError::InvalidConfig("max hand size must be at least 1".into()));
        }
        if self.power_plays_per_turn < 0 {
            return Err(EngineError::InvalidConfig(format!(
                "power plays per turn cannot be negative, got {}",
                self.power_plays_per_turn
            )));
        }
        Ok(())
    }
}
