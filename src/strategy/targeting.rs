//! Coin planning toward a chosen card.
//!
//! Given the card a strategy wants, work out which coins close the gap
//! between its cost and what the player already has:
//!
//! 1. Take two: the first color still short by two or more whose bank
//!    stack holds at least `TAKE_TWO_MIN_STOCK` coins is taken twice, and
//!    that is the whole turn.
//! 2. Otherwise up to three single coins of distinct colors. Each pick is
//!    the first color still short that the bank has; when no short color is
//!    left, a random available color.
//!
//! Every plan fits inside the player's remaining coin capacity.

use smallvec::SmallVec;

use super::random_available_color;
use crate::board::Board;
use crate::cards::Card;
use crate::core::{
    Action, CoinPicks, Color, GameRng, PlayerId, MAX_COINS_PER_TURN, TAKE_TWO_MIN_STOCK,
};

/// Plan this turn's coins for `player`, aiming at `card`.
///
/// Returns `Pass` only if no coin at all can be taken.
pub fn coin_plan_for(board: &Board, player: PlayerId, card: &Card, rng: &mut GameRng) -> Action {
    let holder = board.player(player);
    let capacity = holder.coin_capacity();
    let shortfall = holder.shortfall(&card.cost);

    if capacity >= 2 {
        let double = Color::ALL.into_iter().find(|&color| {
            shortfall[color] >= 2 && board.bank_count(color) >= TAKE_TWO_MIN_STOCK
        });
        if let Some(color) = double {
            return Action::TakeTwo(color);
        }
    }

    // Picks never repeat a color, so the shortfall computed up front stays
    // accurate for every color not yet picked.
    let limit = MAX_COINS_PER_TURN.min(capacity);
    let mut picks: CoinPicks = SmallVec::new();
    while picks.len() < limit {
        let needed = Color::ALL.into_iter().find(|color| {
            shortfall[*color] > 0 && board.bank_count(*color) > 0 && !picks.contains(color)
        });
        let Some(color) = needed.or_else(|| random_available_color(board, &picks, rng)) else {
            break;
        };
        picks.push(color);
    }

    if picks.is_empty() {
        Action::Pass
    } else {
        Action::TakeCoins(picks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::test_support::*;
    use crate::strategy::StrategyKind;

    fn target(cost: &[(Color, u32)]) -> Card {
        card(Color::Black, 1, cost)
    }

    #[test]
    fn test_take_two_when_short_by_two() {
        let board = standard_board(StrategyKind::CheapestFirst);
        let mut rng = GameRng::new(0);
        let wanted = target(&[(Color::Red, 1), (Color::Green, 3)]);

        assert_eq!(
            coin_plan_for(&board, P0, &wanted, &mut rng),
            Action::TakeTwo(Color::Green)
        );
    }

    #[test]
    fn test_take_two_needs_bank_stock() {
        let mut board = standard_board(StrategyKind::CheapestFirst);
        give_coins(&mut board, PlayerId::new(1), &[Color::Green; 3]);
        let mut rng = GameRng::new(0);
        let wanted = target(&[(Color::Red, 1), (Color::Green, 3)]);

        // Three green left in the bank: single coins instead, short colors first
        let Action::TakeCoins(picks) = coin_plan_for(&board, P0, &wanted, &mut rng) else {
            panic!("expected single coins");
        };
        assert_eq!(picks.len(), 3);
        assert_eq!(&picks[..2], &[Color::Red, Color::Green]);
        assert!(!picks[2..].contains(&Color::Red));
        assert!(!picks[2..].contains(&Color::Green));
    }

    #[test]
    fn test_singles_follow_canonical_order() {
        let board = standard_board(StrategyKind::CheapestFirst);
        let mut rng = GameRng::new(0);
        let wanted = target(&[
            (Color::White, 1),
            (Color::Blue, 1),
            (Color::Green, 1),
            (Color::Red, 1),
        ]);

        assert_eq!(
            coin_plan_for(&board, P0, &wanted, &mut rng),
            Action::take_coins(&[Color::Red, Color::Blue, Color::Green])
        );
    }

    #[test]
    fn test_covered_colors_are_skipped() {
        let mut board = standard_board(StrategyKind::CheapestFirst);
        give_coins(&mut board, P0, &[Color::Red, Color::Blue]);
        let mut rng = GameRng::new(0);
        let wanted = target(&[(Color::Red, 1), (Color::Blue, 1), (Color::White, 1)]);

        let Action::TakeCoins(picks) = coin_plan_for(&board, P0, &wanted, &mut rng) else {
            panic!("expected single coins");
        };
        assert_eq!(picks[0], Color::White);
        assert_eq!(picks.len(), 3);
    }

    #[test]
    fn test_plan_respects_capacity() {
        let mut board = standard_board(StrategyKind::CheapestFirst);
        give_coins(&mut board, P0, &[Color::Black; 5]);
        give_coins(&mut board, P0, &[Color::White; 4]);
        let mut rng = GameRng::new(0);
        let wanted = target(&[(Color::Red, 4)]);

        // One slot left: no take-two, a single red instead
        assert_eq!(
            coin_plan_for(&board, P0, &wanted, &mut rng),
            Action::take_coins(&[Color::Red])
        );

        give_coins(&mut board, P0, &[Color::Blue]);
        assert_eq!(coin_plan_for(&board, P0, &wanted, &mut rng), Action::Pass);
    }
}
