//! Glue between the engine, the resolver and a `View`.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::{Game, GameConfiguration, PlayerMove};
use crate::resolver::MoveResolver;
use crate::rules::GameEngine;

use super::view::View;

/// Drives one turn at a time and keeps the view informed.
pub struct Presenter<V> {
    configuration: GameConfiguration,
    engine: GameEngine,
    resolver: MoveResolver,
    view: V,
}

impl<V: View> Presenter<V> {
    pub fn new(
        configuration: GameConfiguration,
        engine: GameEngine,
        resolver: MoveResolver,
        view: V,
    ) -> Self {
        Self {
            configuration,
            engine,
            resolver,
            view,
        }
    }

    /// Give back the view.
    pub fn into_view(self) -> V {
        self.view
    }

    /// Start a game and show its turn order, board and first prompt.
    pub fn start_new_game(&mut self) -> Result<Game> {
        let game = self
            .engine
            .start_new_game(&self.configuration)
            .context("failed to start a new game")?;
        self.view.print_game_start(&game)?;
        Ok(game)
    }

    /// Resolve and apply the active player's move.
    ///
    /// An escape ends the game; a rejected move is reported and the same
    /// snapshot is returned so the player is asked again.
    pub fn player_makes_move(&mut self, game: &Game) -> Result<Game> {
        let player_move = self
            .resolver
            .next_move(game, &mut self.view)
            .context("failed to resolve the next move")?;

        let position = match player_move {
            PlayerMove::Escape => return Ok(self.engine.exit_game(game)),
            PlayerMove::Place(position) if !game.is_game_over() => position,
            PlayerMove::Place(_) | PlayerMove::Empty => {
                debug!(player = %game.active_player(), "move rejected");
                self.view.warn_invalid_move()?;
                return Ok(game.clone());
            }
        };

        let next = self
            .engine
            .apply_move(game, position)
            .with_context(|| format!("failed to apply move at {}", position))?;
        if !next.is_game_over() {
            self.view.print_board(next.board())?;
            self.view.print_turn(next.active_player())?;
        }
        Ok(next)
    }

    /// Show the final board and result of a finished game.
    pub fn announce_results(&mut self, game: &Game) -> Result<()> {
        if let Some(outcome) = game.outcome() {
            info!(?outcome, turns = game.turn_count(), "game finished");
            self.view.print_board(game.board())?;
            self.view.announce_results(game.winner(), game.is_escape())?;
        }
        Ok(())
    }

    /// Ask whether to play again. Anything but a clear yes means no.
    pub fn try_again(&mut self) -> Result<bool> {
        Ok(self.view.input_try_again()? == Some(true))
    }

    pub fn good_bye(&mut self) -> Result<()> {
        self.view.print_goodbye()?;
        Ok(())
    }
}
