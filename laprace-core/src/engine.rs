//! Round engine: one lap over the whole field.

use tracing::trace;

use crate::rules::{RuleSet, Verdict};
use crate::{Competitor, RaceError};

/// Runs a single lap. Competitors are attempted strictly in order and each
/// one that passes every rule moves forward by one.
///
/// Returns how many competitors advanced.
pub(crate) fn run_round(
    competitors: &mut [Competitor],
    rules: &mut RuleSet,
) -> Result<usize, RaceError> {
    let mut advanced = 0;
    for competitor in competitors.iter_mut() {
        if attempt(rules)? {
            competitor.advance();
            advanced += 1;
        }
        trace!(
            racer = competitor.name(),
            position = competitor.position(),
            "attempt resolved"
        );
    }
    Ok(advanced)
}

/// Evaluates the rules in order, stopping at the first failure.
fn attempt(rules: &mut RuleSet) -> Result<bool, RaceError> {
    for (index, rule) in rules.iter_mut().enumerate() {
        match rule.evaluate() {
            Verdict::Pass => {}
            Verdict::Fail => return Ok(false),
            Verdict::Malformed(found) => {
                return Err(RaceError::InvalidRuleResult { index, found });
            }
        }
    }
    Ok(true)
}
