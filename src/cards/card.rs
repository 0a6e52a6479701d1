//! Cards, coins and nobles.
//!
//! All three are created once when a match is set up and never destroyed.
//! After that the only field that changes is `owner`, as the board moves
//! an item between the bank/piles and a player.

use serde::{Deserialize, Serialize};

use crate::core::{Color, CostVector, PlayerId};

/// Card tier. Level one is the cheapest row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    One,
    Two,
    Three,
}

impl Level {
    /// All levels, cheapest first. This is the scan order strategies use.
    pub const ALL: [Level; 3] = [Level::One, Level::Two, Level::Three];

    /// 0-based pile index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Level::One => 0,
            Level::Two => 1,
            Level::Three => 2,
        }
    }

    /// 1-based level number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A purchasable card.
///
/// Equality is structural, owner included.
///
/// ```
/// use splendor_sim::cards::{Card, Level};
/// use splendor_sim::core::{Color, CostVector};
///
/// let card = Card::new(
///     Color::Red,
///     Level::One,
///     1,
///     CostVector::from_pairs(&[(Color::White, 4)]),
/// );
/// assert_eq!(card.cost.total(), 4);
/// assert!(card.owner.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Color of the permanent discount this card grants.
    pub color: Color,
    pub level: Level,
    pub points: u32,
    pub cost: CostVector,
    pub owner: Option<PlayerId>,
}

impl Card {
    /// Create an unowned card.
    #[must_use]
    pub fn new(color: Color, level: Level, points: u32, cost: CostVector) -> Self {
        Self {
            color,
            level,
            points,
            cost,
            owner: None,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Card(points={}, color={}, level={}, cost={}",
            self.points, self.color, self.level, self.cost
        )?;
        match self.owner {
            Some(owner) => write!(f, ", owner={owner})"),
            None => f.write_str(")"),
        }
    }
}

/// One resource token.
///
/// Coins of a color are interchangeable but tracked one by one so that
/// conservation can be checked by counting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub color: Color,
    pub owner: Option<PlayerId>,
}

impl Coin {
    /// Create an unowned coin.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self { color, owner: None }
    }
}

/// A noble tile.
///
/// Modeled so that point totals account for it, but no turn logic ever
/// awards one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Noble {
    pub points: u32,
    /// Cards per color a player would need to attract this noble.
    pub requirement: CostVector,
    pub owner: Option<PlayerId>,
}

impl Noble {
    /// Create an unowned noble.
    #[must_use]
    pub fn new(points: u32, requirement: CostVector) -> Self {
        Self {
            points,
            requirement,
            owner: None,
        }
    }
}
