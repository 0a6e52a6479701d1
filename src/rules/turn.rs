//! One player's turn.
//!
//! The player's strategy chooses an action, the board executes it. If the
//! board turns a purchase down the turn is not lost: the player takes
//! random coins instead.

use tracing::{debug, warn};

use crate::board::Board;
use crate::cards::Card;
use crate::core::{Action, EngineError, GameRng, PlayerId};
use crate::strategy::{random_coins, Strategy};

/// What happened during one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// The action that was executed.
    pub action: Action,
    pub coins_taken: usize,
    pub bought: Option<Card>,
    /// Two coins of one color were taken.
    pub took_two: bool,
}

impl TurnReport {
    /// Whether anything changed hands. A turn that did not act counts
    /// toward the stuck-turn limit.
    #[must_use]
    pub fn acted(&self) -> bool {
        self.coins_taken > 0 || self.bought.is_some()
    }
}

/// Play `player`'s turn on `board`.
///
/// # Errors
///
/// Fatal engine errors from the board. Rule violations are not errors.
pub fn resolve_turn(
    board: &mut Board,
    player: PlayerId,
    rng: &mut GameRng,
) -> Result<TurnReport, EngineError> {
    let strategy = board.player(player).strategy;
    let mut action = strategy.choose_action(board, player, rng);
    let mut applied = board.apply(player, &action)?;

    if matches!(action, Action::Buy(_)) && applied.bought.is_none() {
        warn!(%player, %action, "purchase rejected, taking coins instead");
        action = random_coins(board, player, rng);
        applied = board.apply(player, &action)?;
    }

    let report = TurnReport {
        took_two: matches!(action, Action::TakeTwo(_)) && applied.coins_taken == 2,
        action,
        coins_taken: applied.coins_taken,
        bought: applied.bought,
    };
    debug!(
        %player,
        %strategy,
        action = %report.action,
        coins = report.coins_taken,
        bought = ?report.bought.as_ref().map(|card| card.points),
        "turn resolved"
    );
    Ok(report)
}
