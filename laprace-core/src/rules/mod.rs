//! # Race Rules
//!
//! A rule decides whether a single advancement attempt succeeds.
//! Every rule in a [`RuleSet`] has to pass for a competitor to move.
//!
//! ## Rules:
//! - `AlwaysAdvance`: Passes every attempt. The default rule set.
//! - `NeverAdvance`: Fails every attempt.
//! - `ThresholdRule`: Rolls a die and passes at or above a threshold.
//! - `ScriptedRule`: Replays a fixed list of loosely-typed outcomes.
//! - Any `FnMut() -> R` closure where `R: Into<Verdict>`.

use serde_yaml::Value;

use crate::validation::describe;
use crate::RaceError;

mod reference;
mod scripted;
mod threshold;

pub use reference::RuleRef;
pub use scripted::ScriptedRule;
pub use threshold::ThresholdRule;

/// Outcome of evaluating a rule once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
    /// The rule produced something other than a boolean.
    Malformed(String),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

impl From<bool> for Verdict {
    fn from(value: bool) -> Self {
        if value {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

impl From<Value> for Verdict {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(b) => b.into(),
            other => Verdict::Malformed(describe(&other)),
        }
    }
}

impl From<&Value> for Verdict {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(b) => (*b).into(),
            other => Verdict::Malformed(describe(other)),
        }
    }
}

/// Trait for advancement rules.
pub trait Rule {
    /// Evaluates one advancement attempt.
    fn evaluate(&mut self) -> Verdict;
}

impl<F, R> Rule for F
where
    F: FnMut() -> R,
    R: Into<Verdict>,
{
    #[inline]
    fn evaluate(&mut self) -> Verdict {
        self().into()
    }
}

/// A rule that never holds a competitor back.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysAdvance;

impl Rule for AlwaysAdvance {
    #[inline]
    fn evaluate(&mut self) -> Verdict {
        Verdict::Pass
    }
}

/// A rule that never lets a competitor move.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverAdvance;

impl Rule for NeverAdvance {
    #[inline]
    fn evaluate(&mut self) -> Verdict {
        Verdict::Fail
    }
}

/// Ordered, non-empty collection of rules applied to every attempt.
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// Builds a rule set; at least one rule is required.
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Result<Self, RaceError> {
        if rules.is_empty() {
            return Err(RaceError::InsufficientRules);
        }
        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Rule>> {
        self.rules.iter_mut()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            rules: vec![Box::new(AlwaysAdvance)],
        }
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rules.len())
            .finish()
    }
}
