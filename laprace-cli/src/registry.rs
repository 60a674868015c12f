//! Racer registration: entity menu, names and lap count.

use std::fmt;
use std::io::{BufRead, Write};

use clap::ValueEnum;
use laprace_core::{Competitor, Race, RaceError};

use crate::error::CliError;
use crate::input::Prompt;

/// What kind of racer is on the track. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    Car,
    Horse,
    Snail,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Car, EntityKind::Horse, EntityKind::Snail];

    /// Menu number, starting at 1.
    pub fn number(self) -> usize {
        match self {
            EntityKind::Car => 1,
            EntityKind::Horse => 2,
            EntityKind::Snail => 3,
        }
    }

    pub fn from_number(answer: &str) -> Option<Self> {
        let number: usize = answer.parse().ok()?;
        Self::ALL.into_iter().find(|kind| kind.number() == number)
    }

    fn menu() -> String {
        Self::ALL
            .iter()
            .map(|kind| format!("{}. {kind}", kind.number()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Car => "car",
            EntityKind::Horse => "horse",
            EntityKind::Snail => "snail",
        })
    }
}

pub struct RacerRegistry {
    separator: String,
    kind: EntityKind,
}

impl RacerRegistry {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            kind: EntityKind::Car,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: EntityKind) {
        self.kind = kind;
    }

    pub fn select_entity_type<R: BufRead, W: Write>(
        &mut self,
        prompt: &mut Prompt<R, W>,
    ) -> Result<EntityKind, CliError> {
        let question = format!(
            "Choose the type of racer by number.\n{}\n",
            EntityKind::menu()
        );
        self.kind = prompt.retry_scan(&question, |answer| {
            EntityKind::from_number(answer)
                .ok_or_else(|| format!("{answer:?} is not a valid type number."))
        })?;
        Ok(self.kind)
    }

    pub fn register<R: BufRead, W: Write>(
        &self,
        prompt: &mut Prompt<R, W>,
    ) -> Result<Vec<Competitor>, CliError> {
        let question = format!(
            "Enter the names of the {}s to race (separated by '{}').\n",
            self.kind, self.separator
        );
        prompt.retry_scan(&question, |answer| self.parse_names(answer))
    }

    /// Splits on the separator and trims every name.
    pub fn parse_names(&self, line: &str) -> Result<Vec<Competitor>, RaceError> {
        line.split(self.separator.as_str())
            .map(Competitor::new)
            .collect()
    }

    /// Asks for the lap count; an empty answer takes `default_laps`.
    pub fn ask_laps<R: BufRead, W: Write>(
        &self,
        prompt: &mut Prompt<R, W>,
        default_laps: u32,
    ) -> Result<Race, CliError> {
        let question = format!("How many laps? [{default_laps}]\n");
        prompt.retry_scan(&question, |answer| {
            if answer.is_empty() {
                return Race::new(default_laps);
            }
            answer
                .parse::<u32>()
                .map_err(|_| RaceError::InvalidRoundCount(format!("{answer:?}")))
                .and_then(Race::new)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn names(racers: &[Competitor]) -> Vec<&str> {
        racers.iter().map(Competitor::name).collect()
    }

    #[test]
    fn test_parse_names_trims() {
        let registry = RacerRegistry::new(",");
        let racers = registry.parse_names(" pobi, crong ,honux").unwrap();
        assert_eq!(names(&racers), vec!["pobi", "crong", "honux"]);
    }

    #[test]
    fn test_parse_names_rejects_blank_entries() {
        let registry = RacerRegistry::new(",");
        assert!(registry.parse_names("pobi,,crong").is_err());
        assert!(registry.parse_names("").is_err());
    }

    #[test]
    fn test_custom_separator() {
        let registry = RacerRegistry::new("|");
        let racers = registry.parse_names("a, b|c").unwrap();
        assert_eq!(names(&racers), vec!["a, b", "c"]);
    }

    #[test]
    fn test_select_entity_type_retries() {
        let mut out = Vec::new();
        let mut prompt = Prompt::new(Cursor::new("9\nhorse\n2\n"), &mut out, 0);
        let mut registry = RacerRegistry::new(",");
        assert_eq!(
            registry.select_entity_type(&mut prompt).unwrap(),
            EntityKind::Horse
        );
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1. car\n2. horse\n3. snail"));
        assert!(text.contains("\"9\" is not a valid type number."));
    }

    #[test]
    fn test_register_mentions_kind_and_retries() {
        let mut out = Vec::new();
        let mut prompt = Prompt::new(Cursor::new(" , \na,b\n"), &mut out, 0);
        let mut registry = RacerRegistry::new(",");
        registry.set_kind(EntityKind::Snail);
        let racers = registry.register(&mut prompt).unwrap();
        assert_eq!(names(&racers), vec!["a", "b"]);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("names of the snails"));
        assert!(text.contains("Please try again."));
    }

    #[test]
    fn test_ask_laps_default_and_retry() {
        let registry = RacerRegistry::new(",");

        let mut prompt = Prompt::new(Cursor::new("\n"), Vec::new(), 0);
        assert_eq!(registry.ask_laps(&mut prompt, 5).unwrap().laps(), 5);

        let mut prompt = Prompt::new(Cursor::new("0\n-2\nfour\n4\n"), Vec::new(), 0);
        assert_eq!(registry.ask_laps(&mut prompt, 5).unwrap().laps(), 4);
    }
}
