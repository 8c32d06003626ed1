//! Human move input.
//!
//! A human turn reads one line of text. Recognized forms:
//! - `exit` in any letter case: abandon the game
//! - `R,C`: 1-indexed row and column, both decimal digits only
//!
//! Everything else is an invalid move, not an error.

/// Source of raw human input, one line per call.
///
/// Returns `None` once the source is exhausted. Implemented for closures so
/// tests and embedders can script input:
///
/// ```
/// use tic_tac_three::resolver::HumanInput;
///
/// let mut lines = vec!["1,1".to_string()].into_iter();
/// let mut input = move || lines.next();
/// assert_eq!(input.next_line().as_deref(), Some("1,1"));
/// assert_eq!(input.next_line(), None);
/// ```
pub trait HumanInput {
    fn next_line(&mut self) -> Option<String>;
}

impl<F> HumanInput for F
where
    F: FnMut() -> Option<String>,
{
    fn next_line(&mut self) -> Option<String> {
        self()
    }
}

/// A line of human input, classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HumanCommand {
    /// Abandon the game.
    Exit,
    /// Zero-indexed coordinates. Not yet checked against any board.
    Coordinates { row: usize, col: usize },
    /// Anything unrecognized, including `0` coordinates.
    Unrecognized,
}

impl HumanCommand {
    /// Classify one line of input. Surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.eq_ignore_ascii_case("exit") {
            return HumanCommand::Exit;
        }

        let Some((row, col)) = line.split_once(',') else {
            return HumanCommand::Unrecognized;
        };

        match (parse_one_based(row), parse_one_based(col)) {
            (Some(row), Some(col)) => HumanCommand::Coordinates { row, col },
            _ => HumanCommand::Unrecognized,
        }
    }
}

/// Parse a run of ASCII digits as a 1-indexed value and return it 0-indexed.
fn parse_one_based(digits: &str) -> Option<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<usize>().ok()?.checked_sub(1)
}
