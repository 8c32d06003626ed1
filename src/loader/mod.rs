//! Loading `GameConfiguration` from TOML files.
//!
//! ```toml
//! [playground]
//! size = 3
//!
//! [players]
//! marks = ["X", "O", "A"]
//! ```
//!
//! The size must be within 3-10 and the three marks must be distinct single
//! characters. The first mark is the computer's.

pub mod error;
pub mod file;

pub use error::LoadError;
pub use file::{ConfigurationLoader, DEFAULT_CONFIGURATION};
