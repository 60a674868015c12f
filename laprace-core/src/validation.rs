//! Pure predicates over loosely-typed race input.
//!
//! These hold no state and have no side effects; the race uses them to
//! vet values coming from scenario documents before anything is mutated.

use serde_yaml::Value;

use crate::rules::RuleRef;

/// Returns the lap count if `value` is a positive integer that fits `u32`.
///
/// Integral floats such as `5.0` are accepted; booleans, strings, null,
/// sequences and mappings are not.
pub fn round_count(value: &Value) -> Option<u32> {
    let Value::Number(n) = value else {
        return None;
    };
    let laps = match n.as_u64() {
        Some(laps) => laps,
        None => {
            let f = n.as_f64()?;
            if !f.is_finite() || f.fract() != 0.0 || f < 1.0 || f > u32::MAX as f64 {
                return None;
            }
            f as u64
        }
    };
    u32::try_from(laps).ok().filter(|&laps| laps >= 1)
}

pub fn is_round_count(value: &Value) -> bool {
    round_count(value).is_some()
}

/// An ordered sequence, the only shape accepted for racers and rules.
pub fn is_sequence(value: &Value) -> bool {
    matches!(value, Value::Sequence(_))
}

pub fn is_racer_name(value: &Value) -> bool {
    value.as_str().is_some_and(|name| !name.trim().is_empty())
}

pub fn is_rule_reference(value: &Value) -> bool {
    RuleRef::parse(value).is_some()
}

/// Strict boolean check on a rule's result.
pub fn verdict_of(value: &Value) -> Option<bool> {
    value.as_bool()
}

/// Short human-readable description of a value, used in error messages.
pub fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Sequence(seq) => format!("sequence of {} item(s)", seq.len()),
        Value::Mapping(map) => format!("mapping of {} key(s)", map.len()),
        Value::Tagged(tagged) => format!("tagged value {}", tagged.tag),
    }
}
