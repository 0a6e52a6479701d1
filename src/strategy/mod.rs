//! Acquisition strategies.
//!
//! A strategy reads the board and returns the `Action` its seat should take.
//! It never mutates the board; the turn engine hands the action to
//! `Board::apply`.
//!
//! The set is closed: `StrategyKind` names every policy and dispatches to
//! its implementation, so adding a policy means adding a variant.
//!
//! - `random`: buy the first affordable card, else random coins
//! - `cheapest`: buy the first affordable card, else work toward the
//!   level-one card with the lowest weighted cost
//! - `points`: like `cheapest`, but only point-bearing cards count
//! - `targeting`: coin planning toward a chosen card, shared by the last two

pub mod cheapest;
pub mod points;
pub mod random;
pub mod targeting;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::cards::{Card, Level};
use crate::core::{Action, CardSlot, CoinPicks, Color, GameRng, PlayerId, MAX_COINS_PER_TURN};

pub use cheapest::CheapestFirst;
pub use points::PointsSeeking;
pub use random::RandomStrategy;
pub use targeting::coin_plan_for;

/// Decision interface shared by every policy.
pub trait Strategy: Send + Sync {
    /// Pick this turn's action for `player`.
    ///
    /// `rng` is only consulted for random coin picks.
    fn choose_action(&self, board: &Board, player: PlayerId, rng: &mut GameRng) -> Action;
}

/// The available policies.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    Random,
    CheapestFirst,
    PointsSeeking,
}

impl StrategyKind {
    /// Every policy.
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Random,
        StrategyKind::CheapestFirst,
        StrategyKind::PointsSeeking,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::CheapestFirst => "cheapest_first",
            StrategyKind::PointsSeeking => "points_seeking",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Strategy for StrategyKind {
    fn choose_action(&self, board: &Board, player: PlayerId, rng: &mut GameRng) -> Action {
        match self {
            StrategyKind::Random => RandomStrategy.choose_action(board, player, rng),
            StrategyKind::CheapestFirst => CheapestFirst.choose_action(board, player, rng),
            StrategyKind::PointsSeeking => PointsSeeking.choose_action(board, player, rng),
        }
    }
}

/// First visible card `player` can afford that passes `keep`, scanning
/// level one first and each row front to back.
pub(crate) fn first_affordable(
    board: &Board,
    player: PlayerId,
    keep: impl Fn(&Card) -> bool,
) -> Option<CardSlot> {
    let holder = board.player(player);
    board
        .visible_slots()
        .find(|(_, card)| keep(card) && holder.can_afford(card))
        .map(|(slot, _)| slot)
}

/// Visible card of `level` with the lowest weighted cost among those
/// passing `keep`. Ties go to the card nearest the front.
pub(crate) fn cheapest_visible(
    board: &Board,
    level: Level,
    keep: impl Fn(&Card) -> bool,
) -> Option<(CardSlot, &Card)> {
    let mut best: Option<(CardSlot, &Card)> = None;
    for (index, card) in board.visible_cards(level).iter().enumerate() {
        if !keep(card) {
            continue;
        }
        let cheaper = match best {
            Some((_, current)) => card.cost.cmp_weighted(&current.cost).is_lt(),
            None => true,
        };
        if cheaper {
            best = Some((CardSlot::new(level, index), card));
        }
    }
    best
}

/// Up to three coins, one at a time, each drawn uniformly from the colors
/// the bank still has and this turn has not taken. Capped by how many more
/// coins the player may hold.
pub fn random_coin_picks(board: &Board, player: PlayerId, rng: &mut GameRng) -> CoinPicks {
    let limit = MAX_COINS_PER_TURN.min(board.player(player).coin_capacity());
    let mut picks: CoinPicks = SmallVec::new();
    while picks.len() < limit {
        let Some(color) = random_available_color(board, &picks, rng) else {
            break;
        };
        picks.push(color);
    }
    picks
}

/// `random_coin_picks` as an action, or `Pass` if nothing can be taken.
pub fn random_coins(board: &Board, player: PlayerId, rng: &mut GameRng) -> Action {
    let picks = random_coin_picks(board, player, rng);
    if picks.is_empty() {
        Action::Pass
    } else {
        Action::TakeCoins(picks)
    }
}

/// A uniformly random color the bank has and `taken` does not contain.
pub(crate) fn random_available_color(
    board: &Board,
    taken: &[Color],
    rng: &mut GameRng,
) -> Option<Color> {
    let available: SmallVec<[Color; 5]> = Color::ALL
        .into_iter()
        .filter(|color| board.bank_count(*color) > 0 && !taken.contains(color))
        .collect();
    rng.choose(&available).copied()
}
