//! Advancement rule selection.
//!
//! The CLI builds its rule set from this section:
//! - `always`: every attempt succeeds
//! - `random`: roll `0..=max_roll`, advance at or above `threshold`

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation;

#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Always,
    #[default]
    Random,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
#[validate(schema(function = validation::validate_roll_bounds))]
pub struct RulesConfig {
    #[serde(default)]
    pub kind: RuleKind,

    /// Lowest passing roll.
    #[serde(default = "default_threshold")]
    pub threshold: u8,

    /// Highest possible roll.
    #[serde(default = "default_max_roll")]
    pub max_roll: u8,

    /// Seed for reproducible races.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_threshold() -> u8 {
    4
}

fn default_max_roll() -> u8 {
    9
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            kind: RuleKind::default(),
            threshold: default_threshold(),
            max_roll: default_max_roll(),
            seed: None,
        }
    }
}
