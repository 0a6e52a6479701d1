//! Shared match state: the coin bank, the three card piles and the players.
//!
//! The board is the only place coins and cards change hands. It exposes
//! read-only queries for strategies and exactly two mutations:
//!
//! - `take_coin_of_color`: one coin bank → player
//! - `buy_card`: pay (discounts first, then coins back to the bank), then
//!   card pile → player
//!
//! `apply` executes a strategy's `Action` as a sequence of those two,
//! checking the per-turn coin rules on the way.
//!
//! Conservation totals are fixed when the board is built and checked by
//! `validate` (see `invariants`).

mod invariants;

use tracing::error;

use crate::cards::{Card, CardTable, Coin, Level};
use crate::core::{
    Action, CardSlot, Color, ColorMap, ConfigError, CostVector, EngineError, GameRng,
    InvariantViolation, Player, PlayerId, PlayerMap, MAX_COINS_PER_TURN, TAKE_TWO_MIN_STOCK,
};

/// Coins of each color in the bank at setup.
pub const COINS_PER_COLOR: usize = 6;

/// Cards face-up at the front of each pile.
pub const VISIBLE_CARDS: usize = 4;

/// What `Board::apply` actually moved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Applied {
    /// Coins that left the bank.
    pub coins_taken: usize,
    /// The card bought, now owned by the player.
    pub bought: Option<Card>,
}

impl Applied {
    /// Whether anything changed hands.
    #[must_use]
    pub fn acted(&self) -> bool {
        self.coins_taken > 0 || self.bought.is_some()
    }
}

/// Bank, piles and players of one match.
#[derive(Clone, Debug)]
pub struct Board {
    bank: ColorMap<Vec<Coin>>,
    piles: [Vec<Card>; 3],
    players: PlayerMap<Player>,
    num_total_coins: usize,
    num_total_cards: usize,
    max_total_points: u32,
}

impl Board {
    /// Build a board around given piles, with a full bank.
    ///
    /// Conservation totals are taken from this starting position.
    #[must_use]
    pub fn new(players: PlayerMap<Player>, piles: [Vec<Card>; 3]) -> Self {
        let bank = ColorMap::new(|color| vec![Coin::new(color); COINS_PER_COLOR]);

        let num_total_coins = bank.values().map(Vec::len).sum::<usize>()
            + players.values().map(|p| p.coins.len()).sum::<usize>();
        let num_total_cards = piles.iter().map(Vec::len).sum::<usize>()
            + players.values().map(|p| p.cards.len()).sum::<usize>();
        let max_total_points = piles
            .iter()
            .flatten()
            .map(|card| card.points)
            .sum::<u32>()
            + players.values().map(Player::total_points).sum::<u32>();

        Self {
            bank,
            piles,
            players,
            num_total_coins,
            num_total_cards,
            max_total_points,
        }
    }

    /// Build a board from card tables, shuffling each pile if an RNG is given.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a table sits at the wrong level or fails
    /// validation.
    pub fn from_tables(
        players: PlayerMap<Player>,
        tables: &[&CardTable; 3],
        shuffle: Option<&mut GameRng>,
    ) -> Result<Self, ConfigError> {
        for (expected, table) in Level::ALL.into_iter().zip(tables) {
            if table.level != expected {
                return Err(ConfigError::MisplacedTable {
                    expected,
                    found: table.level,
                });
            }
        }
        let mut piles = [
            tables[0].build_pile()?,
            tables[1].build_pile()?,
            tables[2].build_pile()?,
        ];
        if let Some(rng) = shuffle {
            for pile in &mut piles {
                rng.shuffle(pile);
            }
        }
        Ok(Self::new(players, piles))
    }

    // === Players ===

    /// All players in seat order.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// One player.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    // === Bank ===

    /// Coins of one color left in the bank.
    #[must_use]
    pub fn bank_count(&self, color: Color) -> usize {
        self.bank[color].len()
    }

    /// Bank stock per color.
    #[must_use]
    pub fn bank_counts(&self) -> ColorMap<usize> {
        ColorMap::new(|color| self.bank[color].len())
    }

    /// Coins left in the bank, all colors.
    #[must_use]
    pub fn num_coins_available(&self) -> usize {
        self.bank.values().map(Vec::len).sum()
    }

    /// Colors the bank has run out of.
    #[must_use]
    pub fn colors_with_no_coins(&self) -> Vec<Color> {
        self.bank
            .iter()
            .filter(|(_, coins)| coins.is_empty())
            .map(|(color, _)| color)
            .collect()
    }

    // === Piles ===

    /// Every card still in a level's pile, front first.
    #[must_use]
    pub fn pile(&self, level: Level) -> &[Card] {
        &self.piles[level.index()]
    }

    /// The face-up front of a level's pile.
    #[must_use]
    pub fn visible_cards(&self, level: Level) -> &[Card] {
        let pile = self.pile(level);
        &pile[..pile.len().min(VISIBLE_CARDS)]
    }

    /// Every visible card with its slot, cheapest level first.
    pub fn visible_slots(&self) -> impl Iterator<Item = (CardSlot, &Card)> {
        Level::ALL.into_iter().flat_map(move |level| {
            self.visible_cards(level)
                .iter()
                .enumerate()
                .map(move |(index, card)| (CardSlot::new(level, index), card))
        })
    }

    /// The visible card in a slot, if there is one.
    #[must_use]
    pub fn card_at(&self, slot: CardSlot) -> Option<&Card> {
        self.visible_cards(slot.level).get(slot.index)
    }

    /// Cards left across all piles.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.piles.iter().map(Vec::len).sum()
    }

    // === Conservation totals ===

    /// Coins in play, fixed at setup.
    #[must_use]
    pub fn num_total_coins(&self) -> usize {
        self.num_total_coins
    }

    /// Cards in play, fixed at setup.
    #[must_use]
    pub fn num_total_cards(&self) -> usize {
        self.num_total_cards
    }

    /// Sum of every card's points, fixed at setup.
    #[must_use]
    pub fn max_total_points(&self) -> u32 {
        self.max_total_points
    }

    /// Check every conservation and ownership law.
    ///
    /// # Errors
    ///
    /// The first violated law.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        invariants::check(self)
    }

    // === Mutations ===

    /// Move one coin of `color` from the bank to `player`.
    ///
    /// Returns `None`, changing nothing, if the bank has none left.
    pub fn take_coin_of_color(&mut self, player: PlayerId, color: Color) -> Option<Coin> {
        let mut coin = self.bank[color].pop()?;
        coin.owner = Some(player);
        self.players[player].coins.push(coin);
        Some(coin)
    }

    /// Buy the visible card in `slot` for `player`.
    ///
    /// Each color owed is first covered by the player's cards of that color,
    /// then by coins, which go back to the bank. The card then leaves its
    /// pile and joins the player's cards.
    ///
    /// Returns `Ok(false)`, changing nothing, if the slot is empty or the
    /// player cannot afford the card.
    ///
    /// # Errors
    ///
    /// `EngineError::PaymentMismatch` if the coins returned to the bank do
    /// not match the card's cost net of discounts. The board is then left
    /// unchanged.
    pub fn buy_card(&mut self, player: PlayerId, slot: CardSlot) -> Result<bool, EngineError> {
        let Some(card) = self.card_at(slot) else {
            return Ok(false);
        };
        if !self.players[player].can_afford(card) {
            return Ok(false);
        }

        let cost = card.cost.clone();
        let discounts = self.players[player].cards_by_color();

        // Staged on copies; nothing changes unless the payment reconciles.
        let mut coins = self.players[player].coins.clone();
        let mut bank = self.bank.clone();
        for (color, amount) in cost.nonzero() {
            let owed = amount.saturating_sub(discounts[color]);
            for _ in 0..owed {
                let Some(pos) = coins.iter().position(|coin| coin.color == color) else {
                    break;
                };
                let mut coin = coins.remove(pos);
                coin.owner = None;
                bank[color].push(coin);
            }
        }

        let bank_after = ColorMap::new(|color| bank[color].len());
        if let Err(err) = reconcile_payment(&cost, &discounts, &self.bank_counts(), &bank_after) {
            error!(%player, %slot, %err, "payment did not reconcile");
            return Err(err);
        }
        self.players[player].coins = coins;
        self.bank = bank;

        let mut card = self.piles[slot.level.index()].remove(slot.index);
        card.owner = Some(player);
        self.players[player].cards.push(card);
        Ok(true)
    }

    /// Execute `action` for `player`.
    ///
    /// Coin takes go one coin at a time. A take is skipped when the bank is
    /// out of that color, the player is at `max_coins`, the color was
    /// already taken this turn or the turn's three coins are used up.
    /// `TakeTwo` needs `TAKE_TWO_MIN_STOCK` coins in the bank and room for
    /// both. A rejected purchase leaves everything unchanged.
    ///
    /// # Errors
    ///
    /// Propagates `EngineError` from `buy_card`.
    pub fn apply(&mut self, player: PlayerId, action: &Action) -> Result<Applied, EngineError> {
        let mut applied = Applied::default();
        match action {
            Action::Buy(slot) => {
                if self.buy_card(player, *slot)? {
                    applied.bought = self.players[player].cards.last().cloned();
                }
            }
            Action::TakeCoins(colors) => {
                for (i, &color) in colors.iter().enumerate().take(MAX_COINS_PER_TURN) {
                    if colors[..i].contains(&color) || self.players[player].coin_capacity() == 0 {
                        continue;
                    }
                    if self.take_coin_of_color(player, color).is_some() {
                        applied.coins_taken += 1;
                    }
                }
            }
            Action::TakeTwo(color) => {
                if self.bank_count(*color) >= TAKE_TWO_MIN_STOCK
                    && self.players[player].coin_capacity() >= 2
                {
                    for _ in 0..2 {
                        if self.take_coin_of_color(player, *color).is_some() {
                            applied.coins_taken += 1;
                        }
                    }
                }
            }
            Action::Pass => {}
        }
        Ok(applied)
    }
}

/// Check that the bank gained, per color, exactly the cost net of discounts.
fn reconcile_payment(
    cost: &CostVector,
    discounts: &ColorMap<u32>,
    bank_before: &ColorMap<usize>,
    bank_after: &ColorMap<usize>,
) -> Result<(), EngineError> {
    for color in Color::ALL {
        let expected = cost[color].saturating_sub(discounts[color]);
        let actual = bank_after[color].saturating_sub(bank_before[color]) as u32;
        if actual != expected {
            return Err(EngineError::PaymentMismatch {
                color,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
impl Board {
    /// Drop a bank coin without accounting for it.
    pub(crate) fn discard_bank_coin(&mut self, color: Color) -> Option<Coin> {
        self.bank[color].pop()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Players:")?;
        for player in self.players.values() {
            writeln!(f, "  {player}")?;
        }
        writeln!(f, "Bank coins:")?;
        for (color, coins) in self.bank.iter() {
            writeln!(f, "  {color}: {}", coins.len())?;
        }
        writeln!(f, "Visible cards:")?;
        for level in Level::ALL {
            writeln!(f, "  Level {level} ({} in pile):", self.pile(level).len())?;
            for card in self.visible_cards(level) {
                writeln!(f, "    {card}")?;
            }
        }
        Ok(())
    }
}
