//! Players: identification, per-player storage and the player record.
//!
//! ## PlayerId
//!
//! Seat index, 0-based. Seat order is turn order and the tie-break order
//! for deciding a winner.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! Holdings of one seat (coins, purchased cards, nobles) plus the derived
//! views the strategies and the payment logic read: coins and cards per
//! color, combined resources, points, affordability.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::color::{Color, ColorMap, CostVector};
use crate::cards::{Card, Coin, Noble};
use crate::strategy::StrategyKind;

/// Most coins a player may hold at once.
pub const MAX_COINS: usize = 10;

/// Seat identifier, 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping around the table.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all seats of a `player_count`-player table.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player{}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use splendor_sim::core::{PlayerId, PlayerMap};
///
/// let mut stuck: PlayerMap<u32> = PlayerMap::with_value(4, 0);
/// stuck[PlayerId::new(2)] += 1;
///
/// assert_eq!(stuck[PlayerId::new(2)], 1);
/// assert_eq!(stuck.player_count(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    ///
    /// Callers validate the player count first; see `MatchConfig::validate`.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    /// Create a map with every entry set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// One seat's holdings.
///
/// The board moves coins and cards in and out; a `Player` only answers
/// questions about what it holds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub strategy: StrategyKind,
    pub coins: Vec<Coin>,
    pub cards: Vec<Card>,
    /// Never populated by the turn logic.
    pub nobles: Vec<Noble>,
    pub max_coins: usize,
}

impl Player {
    /// Create an empty-handed player.
    pub fn new(name: impl Into<String>, strategy: StrategyKind) -> Self {
        Self {
            name: name.into(),
            strategy,
            coins: Vec::new(),
            cards: Vec::new(),
            nobles: Vec::new(),
            max_coins: MAX_COINS,
        }
    }

    /// Coins held, per color.
    #[must_use]
    pub fn coins_by_color(&self) -> ColorMap<u32> {
        let mut counts = ColorMap::default();
        for coin in &self.coins {
            counts[coin.color] += 1;
        }
        counts
    }

    /// Purchased cards, per color. Each one is a permanent discount.
    #[must_use]
    pub fn cards_by_color(&self) -> ColorMap<u32> {
        let mut counts = ColorMap::default();
        for card in &self.cards {
            counts[card.color] += 1;
        }
        counts
    }

    /// Cards plus coins, per color.
    #[must_use]
    pub fn resources(&self) -> ColorMap<u32> {
        let cards = self.cards_by_color();
        let coins = self.coins_by_color();
        ColorMap::new(|color| cards[color] + coins[color])
    }

    /// Coins of one color.
    #[must_use]
    pub fn coins_of(&self, color: Color) -> u32 {
        self.coins.iter().filter(|coin| coin.color == color).count() as u32
    }

    /// Cards of one color.
    #[must_use]
    pub fn cards_of(&self, color: Color) -> u32 {
        self.cards.iter().filter(|card| card.color == color).count() as u32
    }

    /// Points from cards only. This is what the winning threshold reads.
    #[must_use]
    pub fn card_points(&self) -> u32 {
        self.cards.iter().map(|card| card.points).sum()
    }

    /// Points from cards and nobles.
    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.card_points() + self.nobles.iter().map(|noble| noble.points).sum::<u32>()
    }

    /// Signed per-color gap between a card's cost and what this player has.
    ///
    /// Positive entries are still missing; zero or negative are covered.
    #[must_use]
    pub fn shortfall(&self, cost: &CostVector) -> ColorMap<i64> {
        let have = self.resources();
        ColorMap::new(|color| i64::from(cost[color]) - i64::from(have[color]))
    }

    /// Whether cards plus coins cover every color of `card`'s cost.
    #[must_use]
    pub fn can_afford(&self, card: &Card) -> bool {
        let have = self.resources();
        card.cost.nonzero().all(|(color, amount)| have[color] >= amount)
    }

    /// How many more coins this player may take.
    #[must_use]
    pub fn coin_capacity(&self) -> usize {
        self.max_coins.saturating_sub(self.coins.len())
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) has coins {}, {} cards, and {} points",
            self.name,
            self.strategy,
            self.coins_by_color(),
            self.cards.len(),
            self.total_points()
        )
    }
}
