use crate::utils::*;
use serde::{Deserialize, Serialize};
use whackamole_core::Difficulty;

/// User choices that outlive a page load.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub difficulty: Difficulty,
}

impl StorageKey for Settings {
    const KEY: &'static str = "whackamole:settings";
}
