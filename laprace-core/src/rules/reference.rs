//! Rule references as they appear in scenario documents.

use serde_yaml::{Mapping, Value};

use super::{AlwaysAdvance, NeverAdvance, Rule, ScriptedRule, ThresholdRule};

/// A parsed, not yet instantiated rule.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleRef {
    Always,
    Never,
    /// The classic 0..=9 roll, moving on 4 or more.
    Random,
    Threshold {
        threshold: u8,
        max_roll: u8,
        seed: Option<u64>,
    },
    Scripted(Vec<Value>),
}

impl RuleRef {
    /// Recognises `always`, `never`, `random`, `{threshold: {..}}` and
    /// `{scripted: [..]}`. Anything else is not a rule.
    pub fn parse(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) => match name.as_str() {
                "always" => Some(RuleRef::Always),
                "never" => Some(RuleRef::Never),
                "random" => Some(RuleRef::Random),
                _ => None,
            },
            Value::Mapping(map) if map.len() == 1 => {
                let (key, body) = map.iter().next()?;
                match key.as_str()? {
                    "threshold" => parse_threshold(body.as_mapping()?),
                    "scripted" => match body {
                        Value::Sequence(outcomes) if !outcomes.is_empty() => {
                            Some(RuleRef::Scripted(outcomes.clone()))
                        }
                        _ => None,
                    },
                    _ => None,
                }
            }
            _ => None,
        }
    }

    /// Instantiates the rule. `fallback_seed` seeds random rules that do
    /// not carry a seed of their own.
    pub fn build(self, fallback_seed: Option<u64>) -> Box<dyn Rule> {
        match self {
            RuleRef::Always => Box::new(AlwaysAdvance),
            RuleRef::Never => Box::new(NeverAdvance),
            RuleRef::Random => Box::new(threshold_rule(
                ThresholdRule::CLASSIC_THRESHOLD,
                ThresholdRule::CLASSIC_MAX_ROLL,
                fallback_seed,
            )),
            RuleRef::Threshold {
                threshold,
                max_roll,
                seed,
            } => Box::new(threshold_rule(threshold, max_roll, seed.or(fallback_seed))),
            RuleRef::Scripted(outcomes) => Box::new(ScriptedRule::new(outcomes)),
        }
    }
}

fn threshold_rule(threshold: u8, max_roll: u8, seed: Option<u64>) -> ThresholdRule {
    match seed {
        Some(seed) => ThresholdRule::seeded(threshold, max_roll, seed),
        None => ThresholdRule::new(threshold, max_roll),
    }
}

fn parse_threshold(body: &Mapping) -> Option<RuleRef> {
    let small = |key: &str, default: u8| match body.get(key) {
        None => Some(default),
        Some(v) => v.as_u64().and_then(|n| u8::try_from(n).ok()),
    };
    let seed = match body.get("seed") {
        None => None,
        Some(v) => Some(v.as_u64()?),
    };
    Some(RuleRef::Threshold {
        threshold: small("threshold", ThresholdRule::CLASSIC_THRESHOLD)?,
        max_roll: small("max_roll", ThresholdRule::CLASSIC_MAX_ROLL)?,
        seed,
    })
}
