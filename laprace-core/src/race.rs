//! ## laprace-core::race
//! **Race orchestration and winner derivation**
//!
//! A `Race` owns its lap count, field, rule set and record history.
//! It is a one-shot object: `start` runs every lap to completion and any
//! later call is refused.

use serde_yaml::Value;
use tracing::{debug, instrument};

use crate::engine::run_round;
use crate::rules::{AlwaysAdvance, Rule, RuleRef, RuleSet};
use crate::validation;
use crate::{Competitor, RaceError, Record};

/// Lifecycle of a race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceState {
    /// Built with a lap count, not started yet.
    Configured,
    /// Every lap ran and winners are known.
    Completed,
    /// A rule produced a malformed result mid-race. Records captured so
    /// far are kept.
    Aborted,
}

#[derive(Debug)]
pub struct Race {
    laps: u32,
    competitors: Vec<Competitor>,
    records: Vec<Record>,
    winners: Vec<Competitor>,
    state: RaceState,
    seed: Option<u64>,
}

impl Race {
    /// Creates a race over `laps` laps. Zero laps is rejected.
    pub fn new(laps: u32) -> Result<Self, RaceError> {
        if laps == 0 {
            return Err(RaceError::InvalidRoundCount("0".into()));
        }
        Ok(Self {
            laps,
            competitors: Vec::new(),
            records: Vec::new(),
            winners: Vec::new(),
            state: RaceState::Configured,
            seed: None,
        })
    }

    /// Creates a race from a loosely-typed lap count.
    pub fn from_value(laps: &Value) -> Result<Self, RaceError> {
        let laps = validation::round_count(laps)
            .ok_or_else(|| RaceError::InvalidRoundCount(validation::describe(laps)))?;
        Self::new(laps)
    }

    /// Seeds random rules resolved by [`Race::start_with_values`] that do
    /// not carry their own seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn laps(&self) -> u32 {
        self.laps
    }

    pub fn state(&self) -> RaceState {
        self.state
    }

    /// Records captured so far, one per finished lap. Empty before `start`.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Competitors sharing the highest final position, in input order.
    /// Empty until the race completes.
    pub fn winners(&self) -> &[Competitor] {
        &self.winners
    }

    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    /// Runs the race.
    ///
    /// `None` for `rules` means the single always-advance rule; an empty
    /// list is an error.
    #[instrument(skip_all, fields(laps = self.laps, racers = competitors.len()))]
    pub fn start(
        &mut self,
        competitors: Vec<Competitor>,
        rules: Option<Vec<Box<dyn Rule>>>,
    ) -> Result<(), RaceError> {
        self.ensure_configured()?;
        if competitors.is_empty() {
            return Err(RaceError::InsufficientRacers);
        }
        let rules = rules.unwrap_or_else(|| vec![Box::new(AlwaysAdvance)]);
        let rules = RuleSet::new(rules)?;
        self.run(competitors, rules)
    }

    /// Runs the race from loosely-typed input, as found in scenario
    /// documents.
    ///
    /// Racers must be a sequence of names. Rules, when present, must be a
    /// non-empty sequence of rule references. Every check happens before
    /// the first lap.
    pub fn start_with_values(
        &mut self,
        competitors: &Value,
        rules: Option<&Value>,
    ) -> Result<(), RaceError> {
        self.ensure_configured()?;
        let Value::Sequence(entries) = competitors else {
            return Err(RaceError::InvalidStartInput);
        };
        if entries.is_empty() {
            return Err(RaceError::InsufficientRacers);
        }
        if !entries.iter().all(validation::is_racer_name) {
            return Err(RaceError::InvalidStartInput);
        }
        let competitors = entries
            .iter()
            .filter_map(Value::as_str)
            .map(Competitor::new)
            .collect::<Result<Vec<_>, _>>()?;

        let rules = match rules {
            None => None,
            Some(value) => Some(self.resolve_rules(value)?),
        };
        self.start(competitors, rules)
    }

    fn resolve_rules(&self, value: &Value) -> Result<Vec<Box<dyn Rule>>, RaceError> {
        let Value::Sequence(refs) = value else {
            return Err(RaceError::InvalidRuleInput);
        };
        if refs.is_empty() {
            return Err(RaceError::InsufficientRules);
        }
        refs.iter()
            .enumerate()
            .map(|(index, value)| {
                RuleRef::parse(value)
                    .map(|rule| {
                        // distinct streams for distinct random rules
                        let seed = self.seed.map(|s| s.wrapping_add(index as u64));
                        rule.build(seed)
                    })
                    .ok_or(RaceError::RuleNotCallable { index })
            })
            .collect()
    }

    fn ensure_configured(&self) -> Result<(), RaceError> {
        match self.state {
            RaceState::Configured => Ok(()),
            _ => Err(RaceError::AlreadyStarted),
        }
    }

    fn run(&mut self, competitors: Vec<Competitor>, mut rules: RuleSet) -> Result<(), RaceError> {
        self.competitors = competitors;
        self.records.reserve(self.laps as usize);

        for round in 1..=self.laps {
            let advanced = match run_round(&mut self.competitors, &mut rules) {
                Ok(advanced) => advanced,
                Err(err) => {
                    self.state = RaceState::Aborted;
                    return Err(err);
                }
            };
            debug!(round, advanced, "lap complete");
            self.records.push(Record::capture(round, &self.competitors));
        }

        self.winners = derive_winners(&self.competitors);
        self.state = RaceState::Completed;
        debug!(winners = self.winners.len(), "race complete");
        Ok(())
    }
}

/// Every competitor at the maximum position, keeping input order.
fn derive_winners(competitors: &[Competitor]) -> Vec<Competitor> {
    let Some(best) = competitors.iter().map(Competitor::position).max() else {
        return Vec::new();
    };
    competitors
        .iter()
        .filter(|c| c.position() == best)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::rules::{NeverAdvance, ScriptedRule};

    fn field(names: &[&str]) -> Vec<Competitor> {
        names.iter().map(|n| Competitor::new(n).unwrap()).collect()
    }

    #[test]
    fn test_zero_laps_rejected() {
        assert!(matches!(
            Race::new(0),
            Err(RaceError::InvalidRoundCount(_))
        ));
    }

    #[test]
    fn test_empty_before_start() {
        let race = Race::new(5).unwrap();
        assert!(race.records().is_empty());
        assert!(race.winners().is_empty());
        assert_eq!(race.state(), RaceState::Configured);
    }

    #[test]
    fn test_default_rule_runs_everyone_to_the_line() {
        let mut race = Race::new(5).unwrap();
        race.start(field(&["1", "2"]), None).unwrap();
        assert_eq!(race.records().len(), 5);
        assert!(race.competitors().iter().all(|c| c.position() == 5));
        assert_eq!(race.winners().len(), 2);
        assert_eq!(race.state(), RaceState::Completed);
    }

    #[test]
    fn test_records_are_in_round_order() {
        let mut race = Race::new(3).unwrap();
        race.start(field(&["solo"]), None).unwrap();
        let rounds: Vec<_> = race.records().iter().map(Record::round).collect();
        assert_eq!(rounds, vec![1, 2, 3]);
        let positions: Vec<_> = race
            .records()
            .iter()
            .map(|r| r.position_of("solo").unwrap())
            .collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn test_single_winner() {
        // a passes every lap, b only the first
        let script = ScriptedRule::from_bools(&[true, true, true, false]);
        let mut race = Race::new(2).unwrap();
        race.start(field(&["a", "b"]), Some(vec![Box::new(script)])).unwrap();
        let winners: Vec<_> = race.winners().iter().map(Competitor::name).collect();
        assert_eq!(winners, vec!["a"]);
    }

    #[test]
    fn test_tie_when_nobody_moves() {
        let mut race = Race::new(4).unwrap();
        race.start(field(&["x", "y", "z"]), Some(vec![Box::new(NeverAdvance)])).unwrap();
        let winners: Vec<_> = race.winners().iter().map(Competitor::name).collect();
        assert_eq!(winners, vec!["x", "y", "z"]);
        assert!(race.competitors().iter().all(|c| c.position() == 0));
    }

    #[test]
    fn test_second_start_is_refused() {
        let mut race = Race::new(2).unwrap();
        race.start(field(&["a"]), None).unwrap();
        assert_eq!(
            race.start(field(&["b"]), None).unwrap_err(),
            RaceError::AlreadyStarted
        );
        assert_eq!(race.records().len(), 2);
        assert_eq!(race.winners()[0].name(), "a");
    }

    #[test]
    fn test_validation_failure_leaves_race_configured() {
        let mut race = Race::new(2).unwrap();
        assert_eq!(
            race.start(field(&["a"]), Some(Vec::new())).unwrap_err(),
            RaceError::InsufficientRules
        );
        assert_eq!(race.state(), RaceState::Configured);
        race.start(field(&["a"]), None).unwrap();
    }

    #[test]
    fn test_malformed_rule_aborts_without_rollback() {
        let outcomes = vec![
            Value::Bool(true),
            Value::Bool(true),
            Value::String("str".into()),
        ];
        let mut race = Race::new(5).unwrap();
        let err = race
            .start(field(&["a", "b"]), Some(vec![Box::new(ScriptedRule::new(outcomes))]))
            .unwrap_err();
        assert!(matches!(err, RaceError::InvalidRuleResult { index: 0, .. }));
        assert_eq!(race.state(), RaceState::Aborted);
        assert_eq!(race.records().len(), 1);
        assert!(race.winners().is_empty());
        assert_eq!(race.competitors()[0].position(), 1);
    }

    #[test]
    fn test_seeded_random_rules_are_reproducible() {
        let racers: Value = serde_yaml::from_str("[a, b, c]").unwrap();
        let rules: Value = serde_yaml::from_str("[random]").unwrap();

        let mut first = Race::new(10).unwrap().with_seed(99);
        first.start_with_values(&racers, Some(&rules)).unwrap();
        let mut second = Race::new(10).unwrap().with_seed(99);
        second.start_with_values(&racers, Some(&rules)).unwrap();

        assert_eq!(first.records(), second.records());
        assert_eq!(first.winners(), second.winners());
    }

    #[traced_test]
    #[test]
    fn test_laps_are_traced() {
        let mut race = Race::new(2).unwrap();
        race.start(field(&["pobi"]), None).unwrap();
        assert!(logs_contain("lap complete"));
        assert!(logs_contain("race complete"));
    }

    #[traced_test]
    #[test]
    fn test_validation_failures_are_not_logged() {
        let mut race = Race::new(2).unwrap();
        assert!(race.start(Vec::new(), None).is_err());
        assert!(!logs_contain("not enough racers"));
    }
}
