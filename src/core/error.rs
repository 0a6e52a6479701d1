//! Engine error types.
//!
//! Ordinary rule failures (an unaffordable purchase, an empty coin stack)
//! are not errors: they come back as `bool`/`Option` and the caller falls
//! through to its next policy step. What lives here is fatal:
//!
//! - `ConfigError`: bad card tables or match parameters, caught before a
//!   match starts.
//! - `EngineError`: the engine contradicted itself mid-match (a conservation
//!   law broke, or a payment did not reconcile with the card's cost). The
//!   match aborts.

use thiserror::Error;

use super::color::Color;
use super::player::PlayerId;
use crate::cards::Level;

/// Broken conservation or ownership law.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("coin count mismatch: bank {bank} + players {players} != {expected}")]
    Coins { bank: usize, players: usize, expected: usize },

    #[error("card count mismatch: piles {piles} + players {players} != {expected}")]
    Cards { piles: usize, players: usize, expected: usize },

    #[error("point count mismatch: unbought {unbought} + players {players} != {expected}")]
    Points { unbought: u32, players: u32, expected: u32 },

    #[error("{what} held by {holder} has owner {owner:?}")]
    Owner {
        what: &'static str,
        holder: String,
        owner: Option<PlayerId>,
    },
}

/// Internal-consistency failure. Aborts the current match.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),

    #[error("payment mismatch for {color}: bank gained {actual} coins, expected {expected}")]
    PaymentMismatch {
        color: Color,
        expected: u32,
        actual: u32,
    },
}

/// Invalid static data or match parameters.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("level {level} {color} cards cost {actual:?}, expected {expected:?}")]
    CostMismatch {
        level: Level,
        color: Color,
        expected: Vec<u32>,
        actual: Vec<u32>,
    },

    #[error("level {0} table has no cards")]
    EmptyTable(Level),

    #[error("level {level} table has no {color} cards")]
    MissingColor { level: Level, color: Color },

    #[error("level {found} table given where level {expected} belongs")]
    MisplacedTable { expected: Level, found: Level },

    #[error("player count must be between 1 and {max}, got {got}")]
    PlayerCount { got: usize, max: usize },

    #[error("{got} strategies given for {players} players")]
    StrategyCount { got: usize, players: usize },

    #[error("winning points must be positive")]
    InvalidWinningPoints,
}

/// Any failure surfaced by the public API.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Crate-level result type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = EngineError::from(InvariantViolation::Coins {
            bank: 28,
            players: 1,
            expected: 30,
        });
        assert_eq!(
            err.to_string(),
            "invariant violated: coin count mismatch: bank 28 + players 1 != 30"
        );

        let err = Error::from(ConfigError::StrategyCount { got: 2, players: 4 });
        assert_eq!(err.to_string(), "2 strategies given for 4 players");
    }

    #[test]
    fn test_engine_error_converts() {
        let err: Error = EngineError::PaymentMismatch {
            color: Color::Red,
            expected: 2,
            actual: 1,
        }
        .into();
        assert!(matches!(err, Error::Engine(EngineError::PaymentMismatch { .. })));
    }
}
