//! Text rendering and prompting.

use std::io::{self, BufRead, Write};

use crate::core::{Board, Game, Player, NUMBER_OF_PLAYERS};
use crate::resolver::HumanInput;

/// Attempts `input_try_again` makes before giving up.
const TRY_AGAIN_ATTEMPTS: usize = 5;

/// What the presenter shows and asks. Also the human move source.
pub trait View: HumanInput {
    fn print_game_start(&mut self, game: &Game) -> io::Result<()>;

    fn print_board(&mut self, board: &Board) -> io::Result<()>;

    fn print_turn(&mut self, player: Player) -> io::Result<()>;

    fn warn_invalid_move(&mut self) -> io::Result<()>;

    /// Announce how the game ended: escape, draw, or winner.
    fn announce_results(&mut self, winner: Option<Player>, escape: bool) -> io::Result<()>;

    /// Ask whether to play again. `Some(true)` for yes, `Some(false)` for no,
    /// `None` if no valid answer was given.
    fn input_try_again(&mut self) -> io::Result<Option<bool>>;

    fn print_goodbye(&mut self) -> io::Result<()>;
}

/// `View` over any line reader and writer.
pub struct ConsoleView<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a prompt and read one whitespace-trimmed line. `None` on end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> HumanInput for ConsoleView<R, W> {
    fn next_line(&mut self) -> Option<String> {
        match self.prompt("Insert coordinates of the position to mark: ") {
            Ok(line) => line,
            Err(err) => {
                tracing::error!(%err, "failed to read player move");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> View for ConsoleView<R, W> {
    fn print_game_start(&mut self, game: &Game) -> io::Result<()> {
        writeln!(
            self.output,
            "Started new game with #players={} and playgroundSize={}",
            NUMBER_OF_PLAYERS,
            game.board().size()
        )?;
        for (turn, player) in game.players().iter().enumerate() {
            writeln!(self.output, "--Turn #{} ->  {}", turn + 1, player)?;
        }
        self.print_board(game.board())?;
        self.print_turn(game.active_player())
    }

    fn print_board(&mut self, board: &Board) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", board)?;
        writeln!(self.output)
    }

    fn print_turn(&mut self, player: Player) -> io::Result<()> {
        writeln!(self.output, "It's your turn {}!", player)
    }

    fn warn_invalid_move(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "The position you tried to mark is invalid or already occupied!"
        )
    }

    fn announce_results(&mut self, winner: Option<Player>, escape: bool) -> io::Result<()> {
        match (escape, winner) {
            (true, _) => writeln!(self.output, "\nEXITING THE GAME!!!\nNo winner!"),
            (false, None) => writeln!(self.output, "GAME IS OVER!!!\nBoard is full. It's a Draw!"),
            (false, Some(winner)) => {
                writeln!(self.output, "GAME IS OVER!!!\n{} has won the game!", winner)
            }
        }
    }

    fn input_try_again(&mut self) -> io::Result<Option<bool>> {
        for _ in 0..TRY_AGAIN_ATTEMPTS {
            let Some(answer) = self.prompt("Would you like to start a new game? (Y/N): ")? else {
                return Ok(None);
            };
            if answer.eq_ignore_ascii_case("y") {
                return Ok(Some(true));
            }
            if answer.eq_ignore_ascii_case("n") {
                return Ok(Some(false));
            }
            writeln!(self.output)?;
            writeln!(self.output, "Invalid input.")?;
        }
        Ok(None)
    }

    fn print_goodbye(&mut self) -> io::Result<()> {
        writeln!(self.output, "GOOD BYE!!!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn view(input: &str) -> ConsoleView<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleView::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(view: ConsoleView<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(view.into_output()).unwrap()
    }

    #[test]
    fn test_announce_results_branches() {
        let mut v = view("");
        v.announce_results(Some(Player::human('O')), true).unwrap();
        v.announce_results(None, false).unwrap();
        v.announce_results(Some(Player::human('O')), false).unwrap();
        let out = output(v);

        assert!(out.contains("EXITING THE GAME!!!\nNo winner!"));
        assert!(out.contains("Board is full. It's a Draw!"));
        assert!(out.contains("Human player 'O' has won the game!"));
    }

    #[test]
    fn test_next_line_reads_and_trims() {
        let mut v = view("  2,3  \nexit\n");
        assert_eq!(v.next_line().as_deref(), Some("2,3"));
        assert_eq!(v.next_line().as_deref(), Some("exit"));
        assert_eq!(v.next_line(), None);
        assert!(output(v).starts_with("Insert coordinates of the position to mark: "));
    }

    #[test]
    fn test_try_again_answers() {
        assert_eq!(view("y\n").input_try_again().unwrap(), Some(true));
        assert_eq!(view("N\n").input_try_again().unwrap(), Some(false));
        assert_eq!(view("maybe\nY\n").input_try_again().unwrap(), Some(true));
        assert_eq!(view("").input_try_again().unwrap(), None);
    }

    #[test]
    fn test_try_again_gives_up_after_five_attempts() {
        let mut v = view("a\nb\nc\nd\ne\ny\n");
        assert_eq!(v.input_try_again().unwrap(), None);
        assert_eq!(output(v).matches("Invalid input.").count(), 5);
    }

    #[test]
    fn test_print_game_start() {
        let players = [Player::human('O'), Player::computer('X'), Player::human('A')];
        let game = Game::builder(Board::new(3).unwrap(), players).build().unwrap();
        let mut v = view("");
        v.print_game_start(&game).unwrap();
        let out = output(v);

        assert!(out.starts_with("Started new game with #players=3 and playgroundSize=3\n"));
        assert!(out.contains("--Turn #1 ->  Human player 'O'\n"));
        assert!(out.contains("--Turn #2 ->  Computer player 'X'\n"));
        assert!(out.contains("- - - - - - -\n|   |   |   | \n"));
        assert!(out.ends_with("It's your turn Human player 'O'!\n"));
    }
}
