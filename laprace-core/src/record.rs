//! Per-lap snapshots of the field.

use crate::Competitor;

/// One competitor's position at the end of a lap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub name: String,
    pub position: u32,
}

/// Snapshot of every competitor's position taken after a lap.
///
/// Standings keep the competitors' input order. Names are not required to
/// be unique, so this is a list rather than a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    round: u32,
    standings: Vec<Standing>,
}

impl Record {
    pub(crate) fn capture(round: u32, competitors: &[Competitor]) -> Self {
        let standings = competitors
            .iter()
            .map(|c| Standing {
                name: c.name().to_string(),
                position: c.position(),
            })
            .collect();
        Self { round, standings }
    }

    /// 1-based lap number this record was taken after.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn standings(&self) -> &[Standing] {
        &self.standings
    }

    /// Position of the first competitor with the given name.
    pub fn position_of(&self, name: &str) -> Option<u32> {
        self.standings
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.position)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.standings.iter().map(|s| (s.name.as_str(), s.position))
    }
}
