use alloc::string::ToString;
use core::str::FromStr;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Controls how often the reveal timer fires.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub const fn reveal_period_ms(self) -> u32 {
        use Difficulty::*;
        match self {
            Easy => 1500,
            Normal => 1000,
            Hard => 700,
        }
    }

    pub const fn name(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "easy",
            Normal => "normal",
            Hard => "hard",
        }
    }

    pub const fn label(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "Easy",
            Normal => "Normal",
            Hard => "Hard",
        }
    }

    /// Like [`str::parse`], but anything unrecognized falls back to the default.
    pub fn from_name_lossy(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::debug!("unknown difficulty {:?}, using default", name);
            Self::default()
        })
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GameError::UnknownDifficulty(s.to_string()))
    }
}

/// Appearance of a mole, picked anew every time it pops up.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    #[default]
    Plain,
    Hat,
    Mustache,
    Angry,
    Peeking,
    Tongue,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Plain,
        Face::Hat,
        Face::Mustache,
        Face::Angry,
        Face::Peeking,
        Face::Tongue,
    ];

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One hole on the board and the mole that may be sitting in it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub position: usize,
    pub visible: bool,
    pub face: Face,
}

impl Slot {
    pub const fn hidden(position: usize, face: Face) -> Self {
        Self {
            position,
            visible: false,
            face,
        }
    }
}
