//! Splendor CLI - play single matches or batch experiments.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use splendor_sim::core::MatchConfig;
use splendor_sim::experiment::{run_experiment, ExperimentConfig};
use splendor_sim::game::Game;
use splendor_sim::strategy::StrategyKind;

/// Splendor match engine
#[derive(Parser, Debug)]
#[command(name = "splendor")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play one match and print its outcome as JSON
    Run {
        #[command(flatten)]
        settings: MatchArgs,

        /// Print the final board before the outcome
        #[arg(long)]
        describe: bool,
    },

    /// Play many matches in parallel and print a JSON report
    Experiment {
        #[command(flatten)]
        settings: MatchArgs,

        /// Number of matches
        #[arg(short, long, default_value = "10")]
        games: u64,

        /// Print only the summary, not every outcome
        #[arg(long)]
        summary_only: bool,
    },
}

/// Match settings shared by both commands. Flags override the config file.
#[derive(ClapArgs, Debug)]
struct MatchArgs {
    /// JSON match config to start from
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of players (1-8)
    #[arg(short, long)]
    players: Option<usize>,

    /// Stop after this many turns
    #[arg(long)]
    max_turns: Option<u32>,

    /// Card points needed to win
    #[arg(long)]
    winning_points: Option<u32>,

    /// Deal the piles in table order
    #[arg(long)]
    no_shuffle: bool,

    /// RNG seed (for experiments, the first match's seed)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Strategy for every seat, or once per seat in order
    #[arg(long = "strategy", value_enum)]
    strategies: Vec<StrategyKind>,
}

impl MatchArgs {
    /// Apply the flags on top of the config file, or `fallback` without one.
    fn resolve(&self, fallback: MatchConfig) -> Result<MatchConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => fallback,
        };
        if let Some(players) = self.players {
            config = config.with_players(players);
        }
        if let Some(turns) = self.max_turns {
            config = config.with_max_turns(turns);
        }
        if let Some(points) = self.winning_points {
            config = config.with_winning_points(points);
        }
        if self.no_shuffle {
            config = config.with_shuffle(false);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        match self.strategies.as_slice() {
            [] => {}
            [kind] => config = config.with_strategy(*kind),
            kinds => config = config.with_strategies(kinds.to_vec()),
        }
        Ok(config)
    }
}

/// CLI error type.
#[derive(Debug)]
struct CliError {
    message: String,
}

impl CliError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<splendor_sim::Error> for CliError {
    fn from(e: splendor_sim::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<splendor_sim::EngineError> for CliError {
    fn from(e: splendor_sim::EngineError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {e}"))
    }
}

fn load_config(path: &Path) -> Result<MatchConfig, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::new(format!("Invalid config {}: {e}", path.display())))
}

fn run(settings: &MatchArgs, describe: bool) -> Result<(), CliError> {
    let config = settings.resolve(MatchConfig::default())?;
    let mut game = Game::new(config)?;
    let outcome = game.run()?;
    if describe {
        println!("{game}");
    }
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

fn experiment(settings: &MatchArgs, games: u64, summary_only: bool) -> Result<(), CliError> {
    let template = settings.resolve(ExperimentConfig::default().template)?;
    let config = ExperimentConfig {
        games,
        seed_offset: template.seed,
        template,
    };
    let report = run_experiment(&config)?;
    let json = if summary_only {
        serde_json::to_string_pretty(&report.summary)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{json}");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let result = match &args.command {
        Commands::Run { settings, describe } => run(settings, *describe),
        Commands::Experiment {
            settings,
            games,
            summary_only,
        } => experiment(settings, *games, *summary_only),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
