use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid slot index")]
    InvalidSlot,
    #[error("A round is already running")]
    AlreadyRunning,
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),
    #[error("Could not persist high scores: {0}")]
    Storage(String),
}

pub type Result<T> = core::result::Result<T, GameError>;
