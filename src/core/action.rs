//! Actions: what a strategy decides to do with its turn.
//!
//! Strategies return an `Action`; only the board executes it. A turn is
//! exactly one action:
//! - buy one visible card, addressed by its `CardSlot`
//! - take up to three coins of distinct colors
//! - take two coins of one color
//! - pass, when nothing is possible

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;
use super::player::PlayerId;
use crate::cards::Level;

/// Most coins taken in a single turn.
pub const MAX_COINS_PER_TURN: usize = 3;

/// Bank coins of a color needed before a player may take two of it.
pub const TAKE_TWO_MIN_STOCK: usize = 4;

/// Coins taken one at a time, in order. Never more than three.
pub type CoinPicks = SmallVec<[Color; MAX_COINS_PER_TURN]>;

/// Address of a visible card: its level and position in that row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSlot {
    pub level: Level,
    pub index: usize,
}

impl CardSlot {
    /// Create a new slot.
    #[must_use]
    pub const fn new(level: Level, index: usize) -> Self {
        Self { level, index }
    }
}

impl std::fmt::Display for CardSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "level {} slot {}", self.level, self.index)
    }
}

/// One turn's decision.
///
/// ```
/// use splendor_sim::core::{Action, Color};
///
/// let take = Action::take_coins(&[Color::Red, Color::Blue]);
/// assert_eq!(take.coin_count(), 2);
/// assert_eq!(Action::TakeTwo(Color::Green).coin_count(), 2);
/// assert!(Action::Pass.is_pass());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Buy the card in this slot.
    Buy(CardSlot),
    /// Take one coin of each listed color, in order.
    TakeCoins(CoinPicks),
    /// Take two coins of one color. Ends the turn.
    TakeTwo(Color),
    /// Nothing could be done.
    Pass,
}

impl Action {
    /// Build a coin-taking action from a slice of colors.
    #[must_use]
    pub fn take_coins(colors: &[Color]) -> Self {
        Action::TakeCoins(SmallVec::from_slice(colors))
    }

    /// Coins this action asks for.
    #[must_use]
    pub fn coin_count(&self) -> usize {
        match self {
            Action::TakeCoins(colors) => colors.len(),
            Action::TakeTwo(_) => 2,
            Action::Buy(_) | Action::Pass => 0,
        }
    }

    /// Whether this is `Pass`, or a coin take with nothing in it.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        match self {
            Action::Pass => true,
            Action::TakeCoins(colors) => colors.is_empty(),
            Action::Buy(_) | Action::TakeTwo(_) => false,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Buy(slot) => write!(f, "buy {slot}"),
            Action::TakeCoins(colors) => {
                f.write_str("take")?;
                for color in colors {
                    write!(f, " {color}")?;
                }
                Ok(())
            }
            Action::TakeTwo(color) => write!(f, "take two {color}"),
            Action::Pass => f.write_str("pass"),
        }
    }
}

/// A resolved turn, kept in the match history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Who acted.
    pub player: PlayerId,

    /// 1-based turn number across the whole match.
    pub turn: u32,

    /// What was actually executed (may differ from the strategy's choice
    /// if the board rejected a purchase).
    pub action: Action,

    /// Coins that actually moved from the bank.
    pub coins_taken: usize,

    /// Points of the card bought, if any.
    pub bought_points: Option<u32>,
}

impl TurnRecord {
    /// Whether the player did anything this turn.
    #[must_use]
    pub fn acted(&self) -> bool {
        self.coins_taken > 0 || self.bought_points.is_some()
    }
}
