//! tic-tac-three console game.

mod cli;

use std::io;

use anyhow::{bail, Result};
use clap::Parser;
use cli::{Cli, PolicyChoice};
use tic_tac_three::{
    ConfigurationLoader, ConsoleApp, ConsoleView, FirstAvailablePolicy, GameEngine, GameRng,
    MoveResolver, Presenter, RandomPolicy,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the board.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(configuration) = ConfigurationLoader::load_game_configuration(cli.config.as_deref())
    else {
        bail!("the game configuration is invalid, not starting");
    };
    info!(?configuration, seed = ?cli.seed, policy = ?cli.policy, "configuration ready");

    let rng = |offset: u64| match cli.seed {
        Some(seed) => GameRng::new(seed.wrapping_add(offset)),
        None => GameRng::from_entropy(),
    };
    let resolver = match cli.policy {
        PolicyChoice::Random => MoveResolver::new(RandomPolicy::new(rng(1))),
        PolicyChoice::FirstAvailable => MoveResolver::new(FirstAvailablePolicy),
    };
    let engine = GameEngine::new(rng(0));

    let stdin = io::stdin();
    let view = ConsoleView::new(stdin.lock(), io::stdout());
    let mut app = ConsoleApp::new(Presenter::new(configuration, engine, resolver, view));

    let games = app.play()?;
    info!(games, "session finished");
    Ok(())
}
