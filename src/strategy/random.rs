//! Buy whatever is affordable, otherwise grab random coins.

use super::{first_affordable, random_coins, Strategy};
use crate::board::Board;
use crate::core::{Action, GameRng, PlayerId};

/// Buys the first affordable visible card; otherwise takes up to three
/// random coins of distinct colors.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn choose_action(&self, board: &Board, player: PlayerId, rng: &mut GameRng) -> Action {
        match first_affordable(board, player, |_| true) {
            Some(slot) => Action::Buy(slot),
            None => random_coins(board, player, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Level;
    use crate::core::{CardSlot, Color};
    use crate::strategy::test_support::*;
    use crate::strategy::StrategyKind;

    #[test]
    fn test_opening_takes_three_coins() {
        let board = standard_board(StrategyKind::Random);
        let mut rng = GameRng::new(11);

        let Action::TakeCoins(picks) = RandomStrategy.choose_action(&board, P0, &mut rng) else {
            panic!("nothing is affordable at the start");
        };
        assert_eq!(picks.len(), 3);
    }

    #[test]
    fn test_buys_when_affordable() {
        let mut board = standard_board(StrategyKind::Random);
        give_coins(&mut board, P0, &[Color::Green; 3]);
        let mut rng = GameRng::new(11);

        assert_eq!(
            RandomStrategy.choose_action(&board, P0, &mut rng),
            Action::Buy(CardSlot::new(Level::One, 0))
        );
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = standard_board(StrategyKind::Random);
        let a = RandomStrategy.choose_action(&board, P0, &mut GameRng::new(5));
        let b = RandomStrategy.choose_action(&board, P0, &mut GameRng::new(5));
        assert_eq!(a, b);
    }
}
