//! The play-again loop.

use anyhow::Result;

use super::presenter::Presenter;
use super::view::View;

/// Runs games back to back until the players stop.
pub struct ConsoleApp<V> {
    presenter: Presenter<V>,
}

impl<V: View> ConsoleApp<V> {
    pub fn new(presenter: Presenter<V>) -> Self {
        Self { presenter }
    }

    /// Play until a finished game is followed by a "no".
    ///
    /// Returns the number of games that were played to the end.
    pub fn play(&mut self) -> Result<usize> {
        let mut finished = 0;
        let mut game = self.presenter.start_new_game()?;

        loop {
            game = self.presenter.player_makes_move(&game)?;
            if !game.is_game_over() {
                continue;
            }

            finished += 1;
            self.presenter.announce_results(&game)?;
            if !self.presenter.try_again()? {
                self.presenter.good_bye()?;
                return Ok(finished);
            }
            game = self.presenter.start_new_game()?;
        }
    }

    /// Give back the presenter.
    pub fn into_presenter(self) -> Presenter<V> {
        self.presenter
    }
}
