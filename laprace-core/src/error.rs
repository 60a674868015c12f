use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RaceError {
    #[error("invalid round count: {0}")]
    InvalidRoundCount(String),

    #[error("input not suitable for starting a race")]
    InvalidStartInput,

    #[error("not enough racers to start a race")]
    InsufficientRacers,

    #[error("input not suitable as a rule set")]
    InvalidRuleInput,

    #[error("not enough rules to start a race")]
    InsufficientRules,

    #[error("a race rule must be callable (rule #{index})")]
    RuleNotCallable { index: usize },

    #[error("rule return value is not suitable (rule #{index} returned {found})")]
    InvalidRuleResult { index: usize, found: String },

    #[error("invalid racer name: {0:?}")]
    InvalidRacerName(String),

    #[error("race has already been started")]
    AlreadyStarted,

    #[error("invalid scenario: {0}")]
    Scenario(String),
}

impl From<serde_yaml::Error> for RaceError {
    fn from(err: serde_yaml::Error) -> Self {
        RaceError::Scenario(err.to_string())
    }
}
