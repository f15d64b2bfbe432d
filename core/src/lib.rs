#![no_std]

extern crate alloc;

pub use board::*;
pub use engine::*;
pub use error::*;
pub use ports::*;
pub use scheduler::*;
pub use scores::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod ports;
mod scheduler;
mod scores;
mod types;

/// Number of holes on the board.
pub const HOLE_COUNT: usize = 9;

/// Holes per board row, the board is rendered as a square grid.
pub const HOLES_PER_ROW: usize = 3;

/// Length of one round, in seconds.
pub const ROUND_SECS: u32 = 30;

/// Period of the countdown timer.
pub const COUNTDOWN_PERIOD_MS: u32 = 1000;

/// How many entries the high-score list keeps.
pub const HIGH_SCORE_SLOTS: usize = 5;
