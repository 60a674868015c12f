//! Custom validation functions for configuration.

use validator::ValidationError;

use crate::RulesConfig;

/// A separator must be present and must not be whitespace, since names
/// are trimmed after splitting.
pub fn validate_separator(separator: &str) -> Result<(), ValidationError> {
    if separator.is_empty() || separator.trim().is_empty() {
        return Err(ValidationError::new("invalid_separator"));
    }
    Ok(())
}

pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    let re = regex::Regex::new("^(?i)(trace|debug|info|warn|error)$")
        .map_err(|_| ValidationError::new("invalid_regex"))?;
    if re.is_match(level) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}

/// The passing threshold has to be a reachable roll.
pub fn validate_roll_bounds(rules: &RulesConfig) -> Result<(), ValidationError> {
    if rules.threshold > rules.max_roll {
        return Err(ValidationError::new("threshold_above_max_roll"));
    }
    Ok(())
}
