//! Batch experiments: many independent matches, one summary.
//!
//! Matches share nothing, so they run in parallel on the rayon pool. Match
//! `i` plays the template config with seed `seed_offset + i`, which makes an
//! experiment reproducible regardless of thread count. Outcomes come back in
//! match order.

use std::collections::BTreeMap;

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{Error, MatchConfig, Result};
use crate::game::{Game, MatchOutcome};
use crate::rules::EndCause;

/// Experiment parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Number of matches (default: 10).
    pub games: u64,

    /// Config every match starts from; its seed is replaced per match.
    /// Defaults to a 100-turn cutoff and a one-point win.
    pub template: MatchConfig,

    /// Seed of the first match (default: 0).
    pub seed_offset: u64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            games: 10,
            template: MatchConfig::new().with_max_turns(100).with_winning_points(1),
            seed_offset: 0,
        }
    }
}

impl ExperimentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of matches.
    #[must_use]
    pub fn with_games(mut self, games: u64) -> Self {
        self.games = games;
        self
    }

    /// Set the per-match template.
    #[must_use]
    pub fn with_template(mut self, template: MatchConfig) -> Self {
        self.template = template;
        self
    }

    /// Set the seed of the first match.
    #[must_use]
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }

    /// Config for match `index`.
    #[must_use]
    pub fn match_config(&self, index: u64) -> MatchConfig {
        self.template
            .clone()
            .with_seed(self.seed_offset.wrapping_add(index))
    }
}

/// Aggregates over an experiment's outcomes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperimentSummary {
    pub games: usize,
    pub mean_turns: f64,
    pub min_turns: u32,
    pub max_turns: u32,
    /// Matches per turn count.
    pub turn_histogram: BTreeMap<u32, usize>,
    /// Matches per end cause.
    pub causes: FxHashMap<EndCause, usize>,
    /// Recorded wins per seat.
    pub wins: Vec<usize>,
    pub mean_take_two_turns: f64,
    /// Mean over matches of the average player score.
    pub mean_average_score: f64,
}

impl ExperimentSummary {
    /// Summarize `outcomes`.
    #[must_use]
    pub fn from_outcomes(outcomes: &[MatchOutcome]) -> Self {
        if outcomes.is_empty() {
            return Self::default();
        }
        let games = outcomes.len();
        let seats = outcomes.iter().map(|o| o.scores.len()).max().unwrap_or(0);

        let mut summary = Self {
            games,
            min_turns: u32::MAX,
            wins: vec![0; seats],
            ..Self::default()
        };
        let mut total_turns = 0u64;
        let mut total_take_two = 0u64;
        let mut total_average = 0.0;

        for outcome in outcomes {
            total_turns += u64::from(outcome.turns_played);
            total_take_two += u64::from(outcome.take_two_turns);
            total_average += outcome.average_score();
            summary.min_turns = summary.min_turns.min(outcome.turns_played);
            summary.max_turns = summary.max_turns.max(outcome.turns_played);
            *summary.turn_histogram.entry(outcome.turns_played).or_default() += 1;
            *summary.causes.entry(outcome.cause).or_default() += 1;
            if let Some(winner) = outcome.winner {
                summary.wins[winner.index()] += 1;
            }
        }

        summary.mean_turns = total_turns as f64 / games as f64;
        summary.mean_take_two_turns = total_take_two as f64 / games as f64;
        summary.mean_average_score = total_average / games as f64;
        summary
    }

    /// Matches that ended with `cause`.
    #[must_use]
    pub fn count(&self, cause: EndCause) -> usize {
        self.causes.get(&cause).copied().unwrap_or(0)
    }
}

/// Outcomes of every match plus their summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub outcomes: Vec<MatchOutcome>,
    pub summary: ExperimentSummary,
}

/// Play every match of `config` and summarize.
///
/// # Errors
///
/// A `ConfigError` for an invalid template, or the first fatal
/// `EngineError` any match hits.
pub fn run_experiment(config: &ExperimentConfig) -> Result<ExperimentReport> {
    config.template.validate()?;

    let outcomes = (0..config.games)
        .into_par_iter()
        .map(|index| -> Result<MatchOutcome> {
            let mut game = Game::new(config.match_config(index))?;
            game.run().map_err(Error::from)
        })
        .collect::<Result<Vec<_>>>()?;

    let summary = ExperimentSummary::from_outcomes(&outcomes);
    info!(
        games = summary.games,
        mean_turns = summary.mean_turns,
        winning_points = summary.count(EndCause::WinningPoints),
        players_stuck = summary.count(EndCause::PlayersStuck),
        max_turns = summary.count(EndCause::MaxTurns),
        "experiment finished"
    );
    Ok(ExperimentReport { outcomes, summary })
}
