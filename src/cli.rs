//! Command-line interface for tic-tac-three.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Three-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tic-tac-three")]
#[command(about = "Three-player tic-tac-toe on an N x N board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML configuration file. The built-in 3x3 game is used when omitted.
    pub config: Option<PathBuf>,

    /// Seed for turn order and computer moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// How the computer player picks its cell
    #[arg(long, value_enum, default_value = "random")]
    pub policy: PolicyChoice,
}

/// Available computer policies
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyChoice {
    /// Any free cell at random
    Random,
    /// The first free cell in row-major order
    FirstAvailable,
}
