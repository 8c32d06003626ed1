//! Game transitions.
//!
//! `GameEngine` turns one `Game` snapshot into the next:
//! - `start_new_game`: players from the configuration, shuffled turn order
//! - `apply_move`: place the active player's mark, detect a win
//! - `exit_game`: abandon the game
//!
//! Only `start_new_game` touches the RNG; the other transitions are pure.

use tracing::{debug, info, instrument};

use crate::core::{Board, BoardPosition, Game, GameConfiguration, GameError, GameRng, Player};

/// Applies validated moves to game snapshots.
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    rng: GameRng,
}

impl GameEngine {
    /// Create an engine that shuffles turn order with the given RNG.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Create an engine with a fixed seed, for reproducible turn orders.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Start a game from a configuration.
    ///
    /// The first configured mark goes to the computer, the others to humans
    /// in configured order; the list is then shuffled into the turn order.
    #[instrument(skip(self))]
    pub fn start_new_game(&mut self, configuration: &GameConfiguration) -> Result<Game, GameError> {
        let marks = configuration.player_marks();
        let mut players: Vec<Player> = Vec::with_capacity(marks.len());
        players.push(Player::computer(marks[0]));
        players.extend(marks[1..].iter().map(|&mark| Player::human(mark)));

        self.rng.shuffle(&mut players);

        let board = Board::new(configuration.playground_size())?;
        let game = Game::builder(board, players).build()?;

        info!(
            size = game.board().size(),
            order = ?game.players().iter().map(|p| p.mark()).collect::<Vec<_>>(),
            "started new game"
        );
        Ok(game)
    }

    /// Place the active player's mark at `position`.
    ///
    /// A finished game is returned unchanged. Otherwise the position must be
    /// valid and free; `MoveResolver` guarantees that for resolved moves.
    /// A winning move keeps the turn count; any other move advances it.
    #[instrument(skip(self, game), fields(turn = game.turn_count()))]
    pub fn apply_move(&self, game: &Game, position: BoardPosition) -> Result<Game, GameError> {
        if game.is_game_over() {
            debug!("game already over, move ignored");
            return Ok(game.clone());
        }

        let (row, col) = (position.row(), position.col());
        let board = game.board();
        if !board.is_position_valid(row, col) {
            return Err(GameError::PositionInvalid { row, col });
        }
        if board.is_position_occupied(row, col) {
            return Err(GameError::PositionOccupied { row, col });
        }

        let active = game.active_player();
        let next_board = board.with_mark(position, active.mark());
        debug!(mark = %active.mark(), %position, "mark placed");

        let won = next_board.check_for_a_winner(position);
        let builder = Game::builder(next_board, game.players().iter().copied());
        if won {
            info!(winner = %active, "line completed");
            return builder.winner(active).turn_count(game.turn_count()).build();
        }

        builder.turn_count(game.turn_count() + 1).build()
    }

    /// Abandon the game. Board, players and turn count are kept.
    #[instrument(skip(self, game), fields(turn = game.turn_count()))]
    pub fn exit_game(&self, game: &Game) -> Game {
        info!("game abandoned");
        game.escaped()
    }
}
