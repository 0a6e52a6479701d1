//! The match controller.
//!
//! A `Game` owns the board, the RNG and the match-level counters, and moves
//! play forward one turn at a time with `advance_turn`. A headless driver
//! calls `run`; an interactive one calls `advance_turn` once per event.
//!
//! ## Turn boundary
//!
//! Each `advance_turn`:
//!
//! 1. returns at once if the match already ended
//! 2. checks the end conditions (a match can be over before any turn, e.g.
//!    with a cutoff of zero)
//! 3. resolves the current player's turn and validates the board
//! 4. updates turns played, take-two turns and the stuck counter, records
//!    the turn in the history, passes play to the next seat
//! 5. checks the end conditions again
//!
//! A fatal `EngineError` in step 3 aborts the match: the status becomes
//! `Aborted` and every later call returns that error.
//!
//! ## Randomness
//!
//! Pile shuffles and strategy coin picks draw from separate streams derived
//! from the configured seed, so the same seed always replays the same match.
//!
//! ```
//! use splendor_sim::core::MatchConfig;
//! use splendor_sim::game::Game;
//! use splendor_sim::rules::EndCause;
//!
//! let config = MatchConfig::new().with_max_turns(12).with_seed(1);
//! let outcome = Game::new(config).unwrap().run().unwrap();
//! assert!(outcome.turns_played <= 12);
//! if outcome.cause == EndCause::MaxTurns {
//!     assert_eq!(outcome.turns_played, 12);
//! }
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::board::Board;
use crate::cards::{CardTable, STANDARD_TABLES};
use crate::core::{
    EngineError, GameRng, MatchConfig, Player, PlayerId, PlayerMap, Result, TurnRecord,
};
use crate::rules::{check_end, resolve_turn, EndCause, MatchStatus, TurnCounters};
use crate::strategy::StrategyKind;

/// Summary of a finished match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub seed: u64,
    pub turns_played: u32,
    /// Turns in which a player took two coins of one color.
    pub take_two_turns: u32,
    pub cause: EndCause,
    /// Set only when the match ended on winning points.
    pub winner: Option<PlayerId>,
    /// Total points per seat.
    pub scores: Vec<u32>,
    /// Strategy per seat.
    pub strategies: Vec<StrategyKind>,
}

impl MatchOutcome {
    /// Mean of the players' scores.
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        self.scores.iter().map(|&s| f64::from(s)).sum::<f64>() / self.scores.len() as f64
    }
}

/// One match in progress.
#[derive(Clone, Debug)]
pub struct Game {
    config: MatchConfig,
    board: Board,
    rng: GameRng,
    current: PlayerId,
    counters: TurnCounters,
    take_two_turns: u32,
    status: MatchStatus,
    winner: Option<PlayerId>,
    /// First fatal error; once set the match is `Aborted`.
    fault: Option<EngineError>,
    history: Vector<TurnRecord>,
}

impl Game {
    /// Set up a match on the standard card tables.
    ///
    /// # Errors
    ///
    /// `ConfigError` for an invalid config, `EngineError` if the starting
    /// board fails validation.
    pub fn new(config: MatchConfig) -> Result<Self> {
        Self::with_tables(config, &STANDARD_TABLES)
    }

    /// Set up a match on custom card tables.
    ///
    /// # Errors
    ///
    /// As `new`, plus any table that fails its cost check.
    pub fn with_tables(config: MatchConfig, tables: &[&CardTable; 3]) -> Result<Self> {
        config.validate()?;

        let players = PlayerMap::new(config.player_count, |p| {
            Player::new(p.to_string(), config.strategies.for_player(p))
        });
        let root = GameRng::new(config.seed);
        let mut shuffle_rng = root.for_context("shuffle");
        let shuffle = config.shuffle.then_some(&mut shuffle_rng);
        let board = Board::from_tables(players, tables, shuffle)?;
        board.validate().map_err(EngineError::from)?;

        Ok(Self {
            rng: root.for_context("strategy"),
            config,
            board,
            current: PlayerId::new(0),
            counters: TurnCounters::default(),
            take_two_turns: 0,
            status: MatchStatus::Running,
            winner: None,
            fault: None,
            history: Vector::new(),
        })
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Seat whose turn is next.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.counters.turns_played
    }

    #[must_use]
    pub fn take_two_turns(&self) -> u32 {
        self.take_two_turns
    }

    /// Consecutive turns in which nobody did anything.
    #[must_use]
    pub fn stuck_turns(&self) -> usize {
        self.counters.stuck_turns
    }

    #[must_use]
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// The recorded winner. Only a winning-points end has one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// The player with the most points right now, first seat on ties.
    ///
    /// Unlike `winner` this always names somebody.
    #[must_use]
    pub fn leader(&self) -> PlayerId {
        let mut leader = PlayerId::new(0);
        let mut best = 0;
        for (id, player) in self.board.players().iter() {
            if player.total_points() > best {
                best = player.total_points();
                leader = id;
            }
        }
        leader
    }

    /// The error that aborted the match, if one did.
    #[must_use]
    pub fn fault(&self) -> Option<&EngineError> {
        self.fault.as_ref()
    }

    /// Every turn resolved so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// The outcome, once the match has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.status.cause().map(|cause| self.outcome_for(cause))
    }

    // === Play ===

    /// Play one turn, or report the end of the match.
    ///
    /// Once the match has ended further calls change nothing.
    ///
    /// # Errors
    ///
    /// A fatal `EngineError`. The match is then `Aborted`: the board is left
    /// as the failing turn found it and every later call returns the same
    /// error without playing.
    pub fn advance_turn(&mut self) -> std::result::Result<MatchStatus, EngineError> {
        if let Some(fault) = &self.fault {
            return Err(fault.clone());
        }
        if self.status.is_over() || self.update_status() {
            return Ok(self.status);
        }

        let player = self.current;
        let report = match resolve_turn(&mut self.board, player, &mut self.rng) {
            Ok(report) => report,
            Err(err) => return Err(self.abort(player, err)),
        };
        if let Err(violation) = self.board.validate() {
            return Err(self.abort(player, violation.into()));
        }

        self.counters.turns_played += 1;
        if report.took_two {
            self.take_two_turns += 1;
        }
        if report.acted() {
            self.counters.stuck_turns = 0;
        } else {
            self.counters.stuck_turns += 1;
        }
        self.history.push_back(TurnRecord {
            player,
            turn: self.counters.turns_played,
            action: report.action,
            coins_taken: report.coins_taken,
            bought_points: report.bought.map(|card| card.points),
        });
        self.current = player.next(self.board.player_count());

        self.update_status();
        Ok(self.status)
    }

    /// Play until the match ends.
    ///
    /// # Errors
    ///
    /// The first fatal `EngineError`.
    pub fn run(&mut self) -> std::result::Result<MatchOutcome, EngineError> {
        loop {
            if let MatchStatus::Ended(cause) = self.advance_turn()? {
                return Ok(self.outcome_for(cause));
            }
        }
    }

    /// Record a fatal error and stop the match.
    fn abort(&mut self, player: PlayerId, err: EngineError) -> EngineError {
        let turn = self.counters.turns_played + 1;
        error!(%player, turn, %err, "match aborted");
        self.status = MatchStatus::Aborted;
        self.fault = Some(err.clone());
        err
    }

    /// Check the end conditions; returns whether the match is now over.
    fn update_status(&mut self) -> bool {
        let Some((cause, winner)) = check_end(&self.board, &self.config, self.counters) else {
            return false;
        };
        self.status = MatchStatus::Ended(cause);
        self.winner = winner;
        info!(
            %cause,
            winner = ?winner,
            turns = self.counters.turns_played,
            take_two = self.take_two_turns,
            "match over"
        );
        true
    }

    fn outcome_for(&self, cause: EndCause) -> MatchOutcome {
        let players = self.board.players();
        MatchOutcome {
            seed: self.config.seed,
            turns_played: self.counters.turns_played,
            take_two_turns: self.take_two_turns,
            cause,
            winner: self.winner,
            scores: players.values().map(Player::total_points).collect(),
            strategies: players.values().map(|p| p.strategy).collect(),
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Turn {} ({} to play)",
            self.counters.turns_played + 1,
            self.current
        )?;
        write!(f, "{}", self.board)
    }
}
