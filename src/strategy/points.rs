//! Work toward the cheapest point-bearing card.

use super::{cheapest_visible, coin_plan_for, first_affordable, random_coins, Strategy};
use crate::board::Board;
use crate::cards::{Card, Level};
use crate::core::{Action, GameRng, PlayerId};

/// Buys the first affordable visible card worth points. Otherwise picks a
/// level-one target and buys it or takes coins toward it.
///
/// The target is the lowest weighted-cost level-one card among those worth
/// points. If no visible level-one card is worth points, the lowest
/// weighted-cost level-one card overall.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointsSeeking;

fn scores(card: &Card) -> bool {
    card.points > 0
}

impl Strategy for PointsSeeking {
    fn choose_action(&self, board: &Board, player: PlayerId, rng: &mut GameRng) -> Action {
        if let Some(slot) = first_affordable(board, player, scores) {
            return Action::Buy(slot);
        }
        let target = cheapest_visible(board, Level::One, scores)
            .or_else(|| cheapest_visible(board, Level::One, |_| true));
        let Some((slot, card)) = target else {
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

    fn row() -> Vec<Card> {
        vec![
            card(Color::Red, 0, &[(Color::Blue, 1)]),
            card(Color::Red, 1, &[(Color::White, 4)]),
            card(Color::Red, 1, &[(Color::Green, 2), (Color::Black, 2)]),
        ]
    }

    #[test]
    fn test_ignores_pointless_affordable_card() {
        let mut board = board_with_row(row());
        give_coins(&mut board, P0, &[Color::Blue]);
        let mut rng = GameRng::new(0);

        // Slot 0 is affordable but worthless; slot 2 weighs 2 against 4
        assert_eq!(
            PointsSeeking.choose_action(&board, P0, &mut rng),
            Action::TakeTwo(Color::Green)
        );
    }

    #[test]
    fn test_buys_affordable_point_card() {
        let mut board = board_with_row(row());
        give_coins(&mut board, P0, &[Color::White; 4]);
        let mut rng = GameRng::new(0);

        assert_eq!(
            PointsSeeking.choose_action(&board, P0, &mut rng),
            Action::Buy(CardSlot::new(Level::One, 1))
        );
    }

    #[test]
    fn test_pointless_row_targets_cheapest() {
        let board = board_with_row(vec![
            card(Color::Red, 0, &[(Color::Blue, 3)]),
            card(Color::Red, 0, &[(Color::White, 2)]),
        ]);
        let mut rng = GameRng::new(0);

        assert_eq!(
            PointsSeeking.choose_action(&board, P0, &mut rng),
            Action::TakeTwo(Color::White)
        );
    }
}
