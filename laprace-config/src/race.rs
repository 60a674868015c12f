//! Race parameters and interactive input settings.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct RaceConfig {
    /// Number of laps when none is given on the command line.
    #[serde(default = "default_laps")]
    #[validate(range(min = 1, max = 10_000))]
    pub laps: u32,

    /// Separator between racer names in interactive input.
    #[serde(default = "default_separator")]
    #[validate(custom(function = validation::validate_separator))]
    pub separator: String,

    /// How many times an invalid answer is re‑prompted (0 for unlimited).
    #[serde(default)]
    pub max_attempts: usize,
}

fn default_laps() -> u32 {
    5
}

fn default_separator() -> String {
    ",".into()
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            laps: default_laps(),
            separator: default_separator(),
            max_attempts: 0,
        }
    }
}
