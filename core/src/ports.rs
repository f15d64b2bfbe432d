use alloc::string::String;

use crate::*;

/// Where the high-score list lives between sessions.
pub trait ScoreStore {
    /// Absent or unreadable data loads as an empty list.
    fn load(&mut self) -> HighScores;

    fn save(&mut self, scores: &HighScores) -> Result<()>;
}

/// Audible cue played when a round starts. Fire-and-forget.
pub trait SoundCue {
    fn play_startup(&mut self);
}

impl SoundCue for () {
    fn play_startup(&mut self) {}
}

/// Keeps the encoded list in memory, the way a key-value store would.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryScoreStore {
    raw: Option<String>,
    saves: usize,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            saves: 0,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&mut self) -> HighScores {
        self.raw
            .as_deref()
            .map(HighScores::decode)
            .unwrap_or_default()
    }

    fn save(&mut self, scores: &HighScores) -> Result<()> {
        self.raw = Some(scores.encode());
        self.saves += 1;
        Ok(())
    }
}
