//! Match configuration.
//!
//! A `MatchConfig` fixes everything a match needs before the first turn:
//! seat count, end conditions, pile shuffling, the RNG seed and which
//! strategy each seat plays. It deserializes from JSON so the CLI can load
//! it from a file, and `validate` rejects inconsistent values up front.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::PlayerId;
use crate::strategy::StrategyKind;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 8;

/// Which strategy each seat plays.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategySpec {
    /// Every seat plays the same strategy.
    Single(StrategyKind),
    /// One strategy per seat, in seat order.
    PerPlayer(Vec<StrategyKind>),
}

impl Default for StrategySpec {
    fn default() -> Self {
        StrategySpec::Single(StrategyKind::default())
    }
}

impl StrategySpec {
    /// Strategy for one seat. Seats past the end of a short list fall back
    /// to the default; `MatchConfig::validate` rejects such lists anyway.
    #[must_use]
    pub fn for_player(&self, player: PlayerId) -> StrategyKind {
        match self {
            StrategySpec::Single(kind) => *kind,
            StrategySpec::PerPlayer(kinds) => {
                kinds.get(player.index()).copied().unwrap_or_default()
            }
        }
    }
}

/// Match parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of seats (default: 4).
    pub player_count: usize,

    /// Stop after this many turns (default: no cutoff).
    pub max_turns: Option<u32>,

    /// Card points needed to win (default: 15).
    pub winning_points: u32,

    /// Shuffle each pile at setup (default: true).
    pub shuffle: bool,

    /// RNG seed for shuffles and random picks.
    pub seed: u64,

    /// Strategy assignment (default: everyone plays `Random`).
    pub strategies: StrategySpec,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            max_turns: None,
            winning_points: 15,
            shuffle: true,
            seed: 42,
            strategies: StrategySpec::default(),
        }
    }
}

impl MatchConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of seats.
    #[must_use]
    pub fn with_players(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Set a turn cutoff.
    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = Some(turns);
        self
    }

    /// Set the winning threshold.
    #[must_use]
    pub fn with_winning_points(mut self, points: u32) -> Self {
        self.winning_points = points;
        self
    }

    /// Enable or disable pile shuffling.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Every seat plays `kind`.
    #[must_use]
    pub fn with_strategy(mut self, kind: StrategyKind) -> Self {
        self.strategies = StrategySpec::Single(kind);
        self
    }

    /// One strategy per seat.
    #[must_use]
    pub fn with_strategies(mut self, kinds: Vec<StrategyKind>) -> Self {
        self.strategies = StrategySpec::PerPlayer(kinds);
        self
    }

    /// Check the parameters are consistent.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count == 0 || self.player_count > MAX_PLAYERS {
            return Err(ConfigError::PlayerCount {
                got: self.player_count,
                max: MAX_PLAYERS,
            });
        }
        if self.winning_points == 0 {
            return Err(ConfigError::InvalidWinningPoints);
        }
        if let StrategySpec::PerPlayer(kinds) = &self.strategies {
            if kinds.len() != self.player_count {
                return Err(ConfigError::StrategyCount {
                    got: kinds.len(),
                    players: self.player_count,
                });
            }
        }
        Ok(())
    }
}
