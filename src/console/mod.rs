//! Console front end.
//!
//! - `view`: the `View` trait and `ConsoleView`, which renders to any writer
//!   and reads from any line reader
//! - `presenter`: turns resolved moves into engine calls and view updates
//! - `app`: the play-again loop
//!
//! The core never reaches this module; all I/O is injected here.

pub mod view;
pub mod presenter;
pub mod app;

pub use view::{ConsoleView, View};
pub use presenter::Presenter;
pub use app::ConsoleApp;
