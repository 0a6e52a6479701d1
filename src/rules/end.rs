//! Match status and end conditions.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{MatchConfig, PlayerId};

/// Why a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndCause {
    /// The configured turn cutoff was reached.
    MaxTurns,
    /// A player's card points reached the winning threshold.
    WinningPoints,
    /// Every player in a row failed to do anything.
    PlayersStuck,
}

impl EndCause {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EndCause::MaxTurns => "max_turns",
            EndCause::WinningPoints => "winning_points",
            EndCause::PlayersStuck => "players_stuck",
        }
    }
}

impl std::fmt::Display for EndCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a match stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Running,
    Ended(EndCause),
    /// A fatal engine error stopped the match. There is no outcome.
    Aborted,
}

impl MatchStatus {
    /// Ended normally or aborted.
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, MatchStatus::Running)
    }

    #[must_use]
    pub fn cause(self) -> Option<EndCause> {
        match self {
            MatchStatus::Ended(cause) => Some(cause),
            MatchStatus::Running | MatchStatus::Aborted => None,
        }
    }
}

/// Counters the end check reads, owned by the match controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnCounters {
    pub turns_played: u32,
    /// Consecutive turns, across all players, in which nothing happened.
    pub stuck_turns: usize,
}

/// Evaluate the end conditions in priority order:
///
/// 1. turn cutoff
/// 2. winning points, won by the first qualifying player in seat order
/// 3. every player stuck in a row
///
/// Returns the cause and, for winning points only, the winner.
#[must_use]
pub fn check_end(
    board: &Board,
    config: &MatchConfig,
    counters: TurnCounters,
) -> Option<(EndCause, Option<PlayerId>)> {
    if config
        .max_turns
        .is_some_and(|max| counters.turns_played >= max)
    {
        return Some((EndCause::MaxTurns, None));
    }
    let winner = board
        .players()
        .iter()
        .find(|(_, player)| player.card_points() >= config.winning_points)
        .map(|(id, _)| id);
    if winner.is_some() {
        return Some((EndCause::WinningPoints, winner));
    }
    if counters.stuck_turns >= board.player_count() {
        return Some((EndCause::PlayersStuck, None));
    }
    None
}
