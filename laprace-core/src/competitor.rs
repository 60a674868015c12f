//! Racers taking part in a lap race.

use std::fmt;

use crate::RaceError;

/// A named entity that advances independently across laps.
///
/// The position starts at zero and only ever grows, by exactly one per
/// successful attempt. Only the round engine can move a competitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Competitor {
    name: String,
    position: u32,
}

impl Competitor {
    /// Creates a competitor at the starting line.
    ///
    /// Surrounding whitespace is trimmed; a blank name is rejected.
    pub fn new(name: impl AsRef<str>) -> Result<Self, RaceError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(RaceError::InvalidRacerName(name.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            position: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.position += 1;
    }
}

impl fmt::Display for Competitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_competitor_starts_at_zero() {
        let racer = Competitor::new("pobi").unwrap();
        assert_eq!(racer.name(), "pobi");
        assert_eq!(racer.position(), 0);
    }

    #[test]
    fn test_name_is_trimmed() {
        let racer = Competitor::new("  crong ").unwrap();
        assert_eq!(racer.name(), "crong");
    }

    #[test]
    fn test_blank_name_is_rejected() {
        assert!(matches!(
            Competitor::new("   "),
            Err(RaceError::InvalidRacerName(_))
        ));
        assert!(Competitor::new("").is_err());
    }

    #[test]
    fn test_advance_moves_by_one() {
        let mut racer = Competitor::new("honux").unwrap();
        racer.advance();
        racer.advance();
        assert_eq!(racer.position(), 2);
    }
}
