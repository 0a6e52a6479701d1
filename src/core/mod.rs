//! Core types: colors, players, actions, RNG, configuration and errors.
//!
//! Everything here is plain data plus derived queries. Mutation of shared
//! match state happens in `board`, decisions in `strategy`.

pub mod color;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use color::{Color, ColorMap, CostVector, NUM_COLORS};
pub use player::{Player, PlayerId, PlayerMap, MAX_COINS};
pub use rng::GameRng;
pub use config::{MatchConfig, StrategySpec, MAX_PLAYERS};
pub use action::{Action, CardSlot, CoinPicks, TurnRecord, MAX_COINS_PER_TURN, TAKE_TWO_MIN_STOCK};
pub use error::{ConfigError, EngineError, Error, InvariantViolation, Result};
