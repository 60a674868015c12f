use serde_yaml::Value;

use super::{Rule, Verdict};

/// Replays a fixed list of outcomes, wrapping around at the end.
///
/// Outcomes are loosely typed; anything other than a boolean surfaces as
/// [`Verdict::Malformed`] when it is reached.
#[derive(Debug, Clone)]
pub struct ScriptedRule {
    outcomes: Vec<Value>,
    cursor: usize,
}

impl ScriptedRule {
    pub fn new(outcomes: Vec<Value>) -> Self {
        Self {
            outcomes,
            cursor: 0,
        }
    }

    pub fn from_bools(outcomes: &[bool]) -> Self {
        Self::new(outcomes.iter().copied().map(Value::Bool).collect())
    }
}

impl Rule for ScriptedRule {
    fn evaluate(&mut self) -> Verdict {
        if self.outcomes.is_empty() {
            return Verdict::Malformed("no scripted outcome".into());
        }
        let outcome = &self.outcomes[self.cursor % self.outcomes.len()];
        self.cursor += 1;
        Verdict::from(outcome)
    }
}
