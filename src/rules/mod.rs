//! Game transitions.
//!
//! `GameEngine` moves from one `Game` snapshot to the next. Positions are
//! expected to come from `MoveResolver`; anything else is reported as an
//! illegal-state `GameError`.

pub mod engine;

pub use engine::GameEngine;
