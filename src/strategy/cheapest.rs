//! Work toward the cheapest level-one card.

use super::{cheapest_visible, coin_plan_for, first_affordable, random_coins, Strategy};
use crate::board::Board;
use crate::cards::Level;
use crate::core::{Action, GameRng, PlayerId};

/// Buys the first affordable visible card. Otherwise picks the level-one
/// card with the lowest weighted cost and buys it or takes coins toward it.
///
/// Weighted cost is total cost over the number of colors in the cost, so a
/// card spread over several colors counts as cheaper than one concentrated
/// in a single color.
#[derive(Clone, Copy, Debug, Default)]
pub struct CheapestFirst;

impl Strategy for CheapestFirst {
    fn choose_action(&self, board: &Board, player: PlayerId, rng: &mut GameRng) -> Action {
        if let Some(slot) = first_affordable(board, player, |_| true) {
            return Action::Buy(slot);
        }
        let Some((slot, card)) = cheapest_visible(board, Level::One, |_| true) else {
            return random_coins(board, player, rng);
        };
        if board.player(player).can_afford(card) {
            return Action::Buy(slot);
        }
        coin_plan_for(board, player, card, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardSlot, Color};
    use crate::strategy::test_support::*;
    use crate::strategy::StrategyKind;

    #[test]
    fn test_opening_targets_lowest_weighted_card() {
        // Unshuffled level one opens with {green: 3}, {green: 2, red: 1},
        // {white: 2, green: 2} and {white: 1, blue: 1, green: 1, red: 1}.
        // The last one weighs 1 and gets red, blue, green.
        let board = standard_board(StrategyKind::CheapestFirst);
        let mut rng = GameRng::new(0);

        assert_eq!(
            CheapestFirst.choose_action(&board, P0, &mut rng),
            Action::take_coins(&[Color::Red, Color::Blue, Color::Green])
        );
    }

    #[test]
    fn test_buys_target_once_affordable() {
        let mut board = standard_board(StrategyKind::CheapestFirst);
        give_coins(&mut board, P0, &[Color::Red, Color::Blue, Color::Green, Color::White]);
        let mut rng = GameRng::new(0);

        // Slot 1 ({green: 2, red: 1}) is not affordable, slot 3 is
        assert_eq!(
            CheapestFirst.choose_action(&board, P0, &mut rng),
            Action::Buy(CardSlot::new(Level::One, 3))
        );
    }

    #[test]
    fn test_empty_row_falls_back_to_random() {
        let board = board_with_row(Vec::new());
        let mut rng = GameRng::new(0);

        let action = CheapestFirst.choose_action(&board, P0, &mut rng);
        assert_eq!(action.coin_count(), 3);
    }

    #[test]
    fn test_short_by_two_takes_two() {
        let board = board_with_row(vec![card(Color::Red, 0, &[(Color::Black, 4)])]);
        let mut rng = GameRng::new(0);

        assert_eq!(
            CheapestFirst.choose_action(&board, P0, &mut rng),
            Action::TakeTwo(Color::Black)
        );
    }
}
