//! Whole-match behaviour: termination, scenarios, and per-turn bookkeeping.

use splendor_sim::core::{Action, Color, MatchConfig, PlayerId};
use splendor_sim::game::Game;
use splendor_sim::rules::{EndCause, MatchStatus};
use splendor_sim::strategy::StrategyKind;

fn unshuffled(kind: StrategyKind) -> MatchConfig {
    MatchConfig::new().with_shuffle(false).with_strategy(kind)
}

/// A fresh match holds all 30 coins in the bank.
#[test]
fn test_initial_bank_is_full() {
    for players in 1..=8 {
        let game = Game::new(MatchConfig::new().with_players(players)).unwrap();
        assert_eq!(game.board().num_coins_available(), 30);
        assert!(game.board().colors_with_no_coins().is_empty());
        for color in Color::ALL {
            assert_eq!(game.board().bank_count(color), 6);
        }
    }
}

/// With an unreachable threshold the cutoff ends the match after exactly
/// that many turns.
#[test]
fn test_max_turns_is_exact() {
    for kind in StrategyKind::ALL {
        for turns in [1, 7, 25] {
            let config = MatchConfig::new()
                .with_strategy(kind)
                .with_winning_points(1000)
                .with_max_turns(turns)
                .with_seed(u64::from(turns));
            let mut game = Game::new(config).unwrap();
            let outcome = game.run().unwrap();

            // A stuck table can end it first; otherwise the cutoff is exact
            if outcome.cause == EndCause::MaxTurns {
                assert_eq!(outcome.turns_played, turns, "{kind}");
            } else {
                assert_eq!(outcome.cause, EndCause::PlayersStuck);
                assert!(outcome.turns_played < turns);
            }
            assert_eq!(game.history().len(), outcome.turns_played as usize);
            assert!(outcome.winner.is_none());
        }
    }
}

/// Early turns cannot stall a fresh table, so a short cutoff always fires.
#[test]
fn test_short_cutoff_always_fires() {
    for kind in StrategyKind::ALL {
        let config = MatchConfig::new().with_strategy(kind).with_max_turns(8);
        let outcome = Game::new(config).unwrap().run().unwrap();
        assert_eq!(outcome.cause, EndCause::MaxTurns);
        assert_eq!(outcome.turns_played, 8);
    }
}

/// With a one-point threshold the match stops on the turn a point card is
/// bought, and that buyer is the winner.
#[test]
fn test_one_point_ends_on_first_point_card() {
    for kind in StrategyKind::ALL {
        for seed in 0..8 {
            let config = MatchConfig::new()
                .with_strategy(kind)
                .with_winning_points(1)
                .with_seed(seed);
            let mut game = Game::new(config).unwrap();
            let outcome = game.run().unwrap();
            let history = game.history();

            let scoring_turns = history
                .iter()
                .filter(|r| r.bought_points.is_some_and(|p| p >= 1))
                .count();
            match outcome.cause {
                EndCause::WinningPoints => {
                    assert_eq!(scoring_turns, 1);
                    let last = history.last().unwrap();
                    assert_eq!(Some(last.player), outcome.winner);
                    assert!(last.bought_points.is_some_and(|p| p >= 1));
                }
                EndCause::PlayersStuck => assert_eq!(scoring_turns, 0),
                EndCause::MaxTurns => unreachable!("no cutoff configured"),
            }
        }
    }
}

/// Four cheapest-first players on unshuffled piles: the four-color level
/// one card is reachable with three coins and then one more, so seat one
/// buys on its third turn, before anyone else.
#[test]
fn test_scenario_first_purchase() {
    for seed in 0..8 {
        let config = unshuffled(StrategyKind::CheapestFirst)
            .with_winning_points(1)
            .with_max_turns(100)
            .with_seed(seed);
        let mut game = Game::new(config).unwrap();
        for _ in 0..9 {
            game.advance_turn().unwrap();
        }
        let history = game.history();

        assert_eq!(
            history[0].action,
            Action::take_coins(&[Color::Red, Color::Blue, Color::Green])
        );
        assert!(history.iter().take(8).all(|r| r.bought_points.is_none()));
        assert_eq!(history[8].player, PlayerId::new(0));
        assert_eq!(history[8].bought_points, Some(0));
        assert!(matches!(history[8].action, Action::Buy(_)));
    }
}

/// Same scenario run to the end: a one-point card decides it well inside
/// the cutoff for most seeds, and never does the cutoff fire.
#[test]
fn test_scenario_ends_on_points() {
    let mut on_points = 0;
    for seed in 0..32 {
        let config = unshuffled(StrategyKind::CheapestFirst)
            .with_winning_points(1)
            .with_max_turns(100)
            .with_seed(seed);
        let outcome = Game::new(config).unwrap().run().unwrap();

        assert_ne!(outcome.cause, EndCause::MaxTurns);
        assert!(outcome.turns_played < 100);
        if outcome.cause == EndCause::WinningPoints {
            on_points += 1;
        }
    }
    assert!(on_points >= 24, "{on_points} of 32 ended on points");
}

/// Four default (random) players on unshuffled piles with a one-point
/// threshold: a point card decides nearly every match long before the
/// cutoff.
#[test]
fn test_default_scenario_ends_on_points() {
    let mut on_points = 0;
    for seed in 0..64 {
        let config = MatchConfig::new()
            .with_shuffle(false)
            .with_winning_points(1)
            .with_max_turns(100)
            .with_seed(seed);
        assert_eq!(config.strategies.for_player(PlayerId::new(3)), StrategyKind::Random);
        let outcome = Game::new(config).unwrap().run().unwrap();

        assert_ne!(outcome.cause, EndCause::MaxTurns);
        assert!(outcome.turns_played < 100);
        if outcome.cause == EndCause::WinningPoints {
            on_points += 1;
        }
    }
    assert!(on_points >= 48, "{on_points} of 64 ended on points");
}

/// Points-seeking passes over pointless cards it can afford, so a table of
/// them hoards coins up to the cap and stalls before anyone scores.
#[test]
fn test_points_seeking_table_stalls() {
    for seed in 0..16 {
        let config = unshuffled(StrategyKind::PointsSeeking)
            .with_winning_points(1)
            .with_max_turns(100)
            .with_seed(seed);
        let outcome = Game::new(config).unwrap().run().unwrap();

        assert_eq!(outcome.cause, EndCause::PlayersStuck, "seed {seed}");
        assert!(outcome.winner.is_none());
        assert!(outcome.turns_played <= 20, "seed {seed}: {}", outcome.turns_played);
    }
}

/// Nobody moves once the bank is drained and nothing is affordable: the
/// match ends after one full round of stuck turns.
#[test]
fn test_stuck_table_ends() {
    let config = unshuffled(StrategyKind::PointsSeeking).with_seed(3);
    let mut game = Game::new(config).unwrap();
    let outcome = game.run().unwrap();

    assert_eq!(outcome.cause, EndCause::PlayersStuck);
    assert!(outcome.winner.is_none());
    assert_eq!(game.stuck_turns(), 4);

    let tail: Vec<_> = game.history().iter().rev().take(4).collect();
    assert!(tail.iter().all(|r| !r.acted()));
    assert!(tail.iter().all(|r| r.action == Action::Pass));
}

/// Every turn respects the coin cap and the take-two rule, and the
/// counters agree with the history.
#[test]
fn test_turn_bookkeeping() {
    for kind in StrategyKind::ALL {
        let config = MatchConfig::new().with_strategy(kind).with_seed(17);
        let mut game = Game::new(config).unwrap();
        let mut previous_bank = game.board().num_coins_available();

        while game.advance_turn().unwrap() == MatchStatus::Running {
            let record = game.history().last().unwrap();
            let bank = game.board().num_coins_available();

            assert!(record.coins_taken <= 3);
            if record.bought_points.is_none() {
                assert_eq!(previous_bank - bank, record.coins_taken);
            }
            if let Action::TakeTwo(_) = record.action {
                assert_eq!(record.coins_taken, 2);
            }
            previous_bank = bank;
        }

        let took_two = game
            .history()
            .iter()
            .filter(|r| matches!(r.action, Action::TakeTwo(_)))
            .count();
        assert_eq!(game.take_two_turns() as usize, took_two);
        assert_eq!(game.outcome().unwrap().take_two_turns as usize, took_two);
    }
}

/// Mixed strategies per seat.
#[test]
fn test_mixed_table() {
    let config = MatchConfig::new().with_players(3).with_strategies(vec![
        StrategyKind::Random,
        StrategyKind::CheapestFirst,
        StrategyKind::PointsSeeking,
    ]);
    let outcome = Game::new(config).unwrap().run().unwrap();

    assert_eq!(
        outcome.strategies,
        vec![
            StrategyKind::Random,
            StrategyKind::CheapestFirst,
            StrategyKind::PointsSeeking,
        ]
    );
    assert_eq!(outcome.scores.len(), 3);
}
