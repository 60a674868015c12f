//! # laprace-core
//!
//! Rules engine and aggregation for lap races.
//! A fixed number of competitors advance across a fixed number of laps,
//! gated by an ordered set of rules. One record is captured per lap and
//! the winners are derived from the final positions.
//!
//! ### Key Submodules:
//! - `competitor`: Named entities with a monotonically non-decreasing position
//! - `rules`: The `Rule` trait, verdicts and the built-in rules
//! - `engine`: Executes one lap over every competitor
//! - `race`: Orchestrates laps, records and winner derivation
//! - `scenario`: Loosely-typed YAML race documents
//! - `validation`: Pure predicates over loosely-typed input

pub mod competitor;
pub mod error;
pub mod race;
pub mod record;
pub mod rules;
pub mod scenario;
pub mod validation;

mod engine;

pub mod prelude {
    pub use crate::competitor::*;
    pub use crate::error::*;
    pub use crate::race::*;
    pub use crate::record::*;
    pub use crate::rules::*;
    pub use crate::scenario::*;
}

pub use competitor::Competitor;
pub use error::RaceError;
pub use race::{Race, RaceState};
pub use record::{Record, Standing};
pub use rules::{Rule, RuleSet, Verdict};
pub use scenario::Scenario;
