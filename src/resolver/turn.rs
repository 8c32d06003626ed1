//! Turn resolution: from a game snapshot and a move source to a `PlayerMove`.

use tracing::{debug, instrument};

use crate::core::{BoardPosition, Game, GameError, PlayerKind, PlayerMove};

use super::input::{HumanCommand, HumanInput};
use super::policy::{ComputerPolicy, RandomPolicy};

/// Produces the active player's move.
///
/// Human turns read from a `HumanInput`; computer turns ask the policy.
/// This is the one place that dispatches on `PlayerKind`.
pub struct MoveResolver {
    policy: Box<dyn ComputerPolicy>,
}

impl MoveResolver {
    /// Create a resolver using the given computer policy.
    pub fn new(policy: impl ComputerPolicy + 'static) -> Self {
        Self {
            policy: Box::new(policy),
        }
    }

    /// Resolve the next move.
    ///
    /// - game over: `PlayerMove::Empty`
    /// - computer: the policy's choice, always valid and free
    /// - human: `Escape` for `exit` or exhausted input, `Place` for in-range
    ///   free coordinates, `Empty` for anything else
    ///
    /// Only the computer branch can fail, when the board has no free cell.
    #[instrument(skip_all, fields(turn = game.turn_count()))]
    pub fn next_move(
        &mut self,
        game: &Game,
        input: &mut dyn HumanInput,
    ) -> Result<PlayerMove, GameError> {
        if game.is_game_over() {
            return Ok(PlayerMove::Empty);
        }

        let board = game.board();
        match game.active_player().kind() {
            PlayerKind::Computer => {
                let position = self.policy.select_position(board)?;
                Ok(PlayerMove::Place(position))
            }
            PlayerKind::Human => {
                let Some(line) = input.next_line() else {
                    debug!("human input exhausted");
                    return Ok(PlayerMove::Escape);
                };

                let resolved = match HumanCommand::parse(&line) {
                    HumanCommand::Exit => PlayerMove::Escape,
                    HumanCommand::Coordinates { row, col }
                        if board.is_position_valid(row, col)
                            && !board.is_position_occupied(row, col) =>
                    {
                        PlayerMove::Place(BoardPosition::new(row, col))
                    }
                    HumanCommand::Coordinates { .. } | HumanCommand::Unrecognized => {
                        PlayerMove::Empty
                    }
                };
                debug!(input = %line.trim(), ?resolved, "human input resolved");
                Ok(resolved)
            }
        }
    }
}

impl Default for MoveResolver {
    fn default() -> Self {
        Self::new(RandomPolicy::default())
    }
}

impl std::fmt::Debug for MoveResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveResolver").finish_non_exhaustive()
    }
}
