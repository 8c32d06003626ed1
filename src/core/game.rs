//! Game snapshots.
//!
//! A `Game` is an immutable value: board, turn order, turn count, winner and
//! escape flag. Every move produces a new `Game`; earlier snapshots remain
//! valid and can be inspected independently.
//!
//! ## Construction
//!
//! Games are built through `GameBuilder`, whose `build` validates every
//! invariant before a `Game` exists:
//!
//! - at least one player
//! - `turn_count <= max_turns` where `max_turns = size * size`
//! - the winner, if any, is one of the players
//!
//! ```
//! use tic_tac_three::core::{Board, Game, Player};
//!
//! let players = [Player::computer('X'), Player::human('O'), Player::human('A')];
//! let game = Game::builder(Board::new(3).unwrap(), players)
//!     .turn_count(4)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(game.max_turns(), 9);
//! assert_eq!(game.active_player(), Player::human('O'));
//! assert!(!game.is_game_over());
//! ```

use serde::Serialize;
use smallvec::SmallVec;

use super::board::Board;
use super::config::NUMBER_OF_PLAYERS;
use super::error::GameError;
use super::player::Player;

/// Turn order storage; inline for the usual three players.
pub type PlayerList = SmallVec<[Player; NUMBER_OF_PLAYERS]>;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GameOutcome {
    /// A human abandoned the game. Never counts as a win.
    Escaped,
    /// A player completed a line.
    Winner(Player),
    /// Every cell was filled without a line.
    Draw,
}

/// Immutable game snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Game {
    board: Board,
    players: PlayerList,
    max_turns: usize,
    turn_count: usize,
    winner: Option<Player>,
    escape: bool,
}

impl Game {
    /// Start building a game from a board and the turn order.
    pub fn builder(board: Board, players: impl IntoIterator<Item = Player>) -> GameBuilder {
        GameBuilder::new(board, players)
    }

    /// Get the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Turns needed to fill the board.
    #[must_use]
    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// Moves played so far that did not end the game with a win.
    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// True if a human abandoned this game.
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.escape
    }

    /// True once there is a winner, the board is full, or the game was abandoned.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some() || self.turn_count >= self.max_turns || self.escape
    }

    /// The player whose turn it is: `players[turn_count % player_count]`.
    #[must_use]
    pub fn active_player(&self) -> Player {
        self.players[self.turn_count % self.players.len()]
    }

    /// Get the player at a turn-order slot.
    pub fn player_at(&self, turn: usize) -> Result<Player, GameError> {
        self.players
            .get(turn)
            .copied()
            .ok_or(GameError::PlayerIndexOutOfRange {
                index: turn,
                player_count: self.players.len(),
            })
    }

    /// Get the outcome, or `None` while the game is still running.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.escape {
            Some(GameOutcome::Escaped)
        } else if let Some(winner) = self.winner {
            Some(GameOutcome::Winner(winner))
        } else if self.turn_count >= self.max_turns {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Copy of this game with the escape flag raised.
    pub(crate) fn escaped(&self) -> Game {
        Game {
            escape: true,
            ..self.clone()
        }
    }
}

/// Validating builder for `Game`.
///
/// Nothing is checked until `build`, so the setters can be chained in any
/// order; an invalid combination never yields a `Game`.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    board: Board,
    players: PlayerList,
    turn_count: usize,
    winner: Option<Player>,
    escape: bool,
}

impl GameBuilder {
    /// Start a builder with turn count 0, no winner and no escape.
    pub fn new(board: Board, players: impl IntoIterator<Item = Player>) -> Self {
        Self {
            board,
            players: players.into_iter().collect(),
            turn_count: 0,
            winner: None,
            escape: false,
        }
    }

    #[must_use]
    pub fn turn_count(mut self, turn_count: usize) -> Self {
        self.turn_count = turn_count;
        self
    }

    #[must_use]
    pub fn winner(mut self, winner: Player) -> Self {
        self.winner = Some(winner);
        self
    }

    #[must_use]
    pub fn escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Validate and produce the game.
    pub fn build(self) -> Result<Game, GameError> {
        if self.players.is_empty() {
            return Err(GameError::NoPlayers);
        }

        let max_turns = self.board.size() * self.board.size();
        if self.turn_count > max_turns {
            return Err(GameError::TurnCountOutOfRange {
                turn_count: self.turn_count,
                max_turns,
            });
        }

        if let Some(winner) = self.winner {
            if !self.players.contains(&winner) {
                return Err(GameError::WinnerNotInGame { mark: winner.mark() });
            }
        }

        Ok(Game {
            board: self.board,
            players: self.players,
            max_turns,
            turn_count: self.turn_count,
            winner: self.winner,
            escape: self.escape,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players() -> [Player; 3] {
        [Player::computer('X'), Player::human('O'), Player::human('A')]
    }

    fn board() -> Board {
        Board::new(3).unwrap()
    }

    #[test]
    fn test_new_game_defaults() {
        let game = Game::builder(board(), players()).build().unwrap();
        assert_eq!(game.turn_count(), 0);
        assert_eq!(game.max_turns(), 9);
        assert_eq!(game.winner(), None);
        assert!(!game.is_escape());
        assert!(!game.is_game_over());
        assert_eq!(game.outcome(), None);
        assert_eq!(game.players(), &players());
    }

    #[test]
    fn test_no_players() {
        let result = Game::builder(board(), Vec::new()).build();
        assert_eq!(result, Err(GameError::NoPlayers));
    }

    #[test]
    fn test_turn_count_bounds() {
        assert!(Game::builder(board(), players()).turn_count(9).build().is_ok());
        assert_eq!(
            Game::builder(board(), players()).turn_count(10).build(),
            Err(GameError::TurnCountOutOfRange { turn_count: 10, max_turns: 9 })
        );
    }

    #[test]
    fn test_winner_must_be_a_player() {
        let result = Game::builder(board(), players()).winner(Player::human('Z')).build();
        assert_eq!(result, Err(GameError::WinnerNotInGame { mark: 'Z' }));

        // Same mark, different kind is a different player.
        let result = Game::builder(board(), players()).winner(Player::human('X')).build();
        assert!(result.is_err());

        let game = Game::builder(board(), players())
            .winner(Player::human('O'))
            .build()
            .unwrap();
        assert_eq!(game.winner(), Some(Player::human('O')));
        assert!(game.is_game_over());
        assert_eq!(game.outcome(), Some(GameOutcome::Winner(Player::human('O'))));
    }

    #[test]
    fn test_active_player_rotation() {
        let expected = players();
        for turn in 0..9 {
            let game = Game::builder(board(), players()).turn_count(turn).build().unwrap();
            assert_eq!(game.active_player(), expected[turn % 3]);
        }
    }

    #[test]
    fn test_player_at() {
        let game = Game::builder(board(), players()).build().unwrap();
        assert_eq!(game.player_at(0), Ok(Player::computer('X')));
        assert_eq!(game.player_at(2), Ok(Player::human('A')));
        assert_eq!(
            game.player_at(3),
            Err(GameError::PlayerIndexOutOfRange { index: 3, player_count: 3 })
        );
    }

    #[test]
    fn test_draw_when_turns_exhausted() {
        let game = Game::builder(board(), players()).turn_count(9).build().unwrap();
        assert!(game.is_game_over());
        assert_eq!(game.winner(), None);
        assert_eq!(game.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_escape_outcome_takes_precedence() {
        let game = Game::builder(board(), players())
            .turn_count(9)
            .escape(true)
            .build()
            .unwrap();
        assert!(game.is_game_over());
        assert_eq!(game.outcome(), Some(GameOutcome::Escaped));
    }

    #[test]
    fn test_escaped_copy_keeps_everything_else() {
        let game = Game::builder(board(), players()).turn_count(4).build().unwrap();
        let exited = game.escaped();

        assert!(exited.is_escape());
        assert_eq!(exited.turn_count(), 4);
        assert_eq!(exited.board(), game.board());
        assert_eq!(exited.players(), game.players());
        assert!(!game.is_escape());
    }

    #[test]
    fn test_snapshot_serialization() {
        let game = Game::builder(board(), players()).turn_count(2).build().unwrap();
        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["turn_count"], 2);
        assert_eq!(json["max_turns"], 9);
        assert_eq!(json["players"].as_array().unwrap().len(), 3);
        assert!(json["winner"].is_null());
    }
}
