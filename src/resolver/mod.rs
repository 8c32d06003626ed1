//! Move sources and turn resolution.
//!
//! - `input`: human text input and its grammar
//! - `policy`: computer move selection
//! - `turn`: `MoveResolver`, which picks the source for the active player
//!   and turns its output into a `PlayerMove`

pub mod input;
pub mod policy;
pub mod turn;

pub use input::{HumanCommand, HumanInput};
pub use policy::{ComputerPolicy, FirstAvailablePolicy, RandomPolicy};
pub use turn::MoveResolver;
