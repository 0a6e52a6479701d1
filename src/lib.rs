//! # splendor-sim
//!
//! A match engine for the board game Splendor, with pluggable acquisition
//! strategies and a parallel experiment harness.
//!
//! ## Design Principles
//!
//! 1. **Strategies decide, the board mutates**: a strategy gets a read-only
//!    `Board` and returns an `Action`. Only `Board` moves coins and cards.
//!
//! 2. **Conservation is checked, not assumed**: coins, cards and points are
//!    counted at setup and re-validated after every turn. A mismatch is a
//!    fatal `EngineError`, never a silent fix.
//!
//! 3. **Reproducible**: all randomness flows from the configured seed, so a
//!    match or a whole experiment replays exactly.
//!
//! ## Modules
//!
//! - `core`: colors, players, actions, RNG, configuration, errors
//! - `cards`: card, coin and noble records plus the static card tables
//! - `board`: bank, piles and players, with the payment and conservation logic
//! - `strategy`: random, cheapest-first and points-seeking policies
//! - `rules`: turn resolution and end conditions
//! - `game`: the match controller
//! - `experiment`: many matches in parallel, summarized
//!
//! ```
//! use splendor_sim::{Game, MatchConfig, StrategyKind};
//!
//! let config = MatchConfig::new()
//!     .with_players(2)
//!     .with_max_turns(50)
//!     .with_strategy(StrategyKind::CheapestFirst);
//! let outcome = Game::new(config).unwrap().run().unwrap();
//! assert!(outcome.turns_played <= 50);
//! ```

pub mod core;
pub mod cards;
pub mod board;
pub mod strategy;
pub mod rules;
pub mod game;
pub mod experiment;

// Re-export commonly used types
pub use crate::core::{
    Action, CardSlot, Color, ColorMap, CostVector,
    Player, PlayerId, PlayerMap,
    GameRng, MatchConfig, StrategySpec, TurnRecord,
    ConfigError, EngineError, Error, InvariantViolation, Result,
};

pub use crate::cards::{Card, CardTable, Coin, Level, Noble, STANDARD_TABLES};

pub use crate::board::{Applied, Board};

pub use crate::strategy::{Strategy, StrategyKind};

pub use crate::rules::{EndCause, MatchStatus, TurnReport};

pub use crate::game::{Game, MatchOutcome};

pub use crate::experiment::{run_experiment, ExperimentConfig, ExperimentReport, ExperimentSummary};
