//! # Race Scenarios
//!
//! YAML documents describing a complete race so it can be replayed:
//!
//! ```yaml
//! laps: 5
//! seed: 7
//! racers: [pobi, crong, honux]
//! rules:
//!   - random
//!   - scripted: [true, true, false]
//! ```
//!
//! Values are kept loosely typed until the race vets them, so a document
//! can trigger every error a race can raise.

use serde_yaml::{Mapping, Value};
use tracing::info;

use crate::{Race, RaceError};

#[derive(Debug, Clone)]
pub struct Scenario {
    laps: Value,
    racers: Value,
    rules: Option<Value>,
    seed: Option<u64>,
}

impl Scenario {
    pub fn from_yaml(source: &str) -> Result<Self, RaceError> {
        let document: Value = serde_yaml::from_str(source)?;
        let Value::Mapping(map) = document else {
            return Err(RaceError::Scenario("document must be a mapping".into()));
        };
        Self::from_mapping(map)
    }

    fn from_mapping(mut map: Mapping) -> Result<Self, RaceError> {
        let seed = match map.remove("seed") {
            None => None,
            Some(value) => Some(value.as_u64().ok_or_else(|| {
                RaceError::Scenario("seed must be a non-negative integer".into())
            })?),
        };
        Ok(Self {
            // missing keys surface as the race's own input errors
            laps: map.remove("laps").unwrap_or(Value::Null),
            racers: map.remove("racers").unwrap_or(Value::Null),
            rules: map.remove("rules"),
            seed,
        })
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Builds and runs the race described by the document.
    ///
    /// On error the partially-run race is lost; use [`Scenario::prepare`]
    /// and [`Scenario::start`] to keep it.
    pub fn run(&self) -> Result<Race, RaceError> {
        let mut race = self.prepare()?;
        self.start(&mut race)?;
        Ok(race)
    }

    pub fn prepare(&self) -> Result<Race, RaceError> {
        let race = Race::from_value(&self.laps)?;
        Ok(match self.seed {
            Some(seed) => race.with_seed(seed),
            None => race,
        })
    }

    pub fn start(&self, race: &mut Race) -> Result<(), RaceError> {
        info!(laps = race.laps(), seeded = self.seed.is_some(), "running scenario");
        race.start_with_values(&self.racers, self.rules.as_ref())
    }
}
