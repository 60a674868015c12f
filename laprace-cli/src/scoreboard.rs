//! Text rendering of race records and winners.

use std::io::{self, Write};

use laprace_core::{Competitor, Race, Record};

const TRACK_MARK: &str = "-";

pub struct Scoreboard<'a> {
    race: &'a Race,
}

impl<'a> Scoreboard<'a> {
    pub fn new(race: &'a Race) -> Self {
        Self { race }
    }

    /// One block per lap, `name : ---`, separated by blank lines.
    pub fn display_records<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Race results")?;
        for record in self.race.records() {
            write_record(out, record)?;
            writeln!(out)?;
        }
        Ok(())
    }

    pub fn display_winners<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let names: Vec<_> = self.race.winners().iter().map(Competitor::name).collect();
        writeln!(out, "Winners: {}", names.join(", "))
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.display_records(out)?;
        if !self.race.winners().is_empty() {
            self.display_winners(out)?;
        }
        Ok(())
    }
}

fn write_record<W: Write>(out: &mut W, record: &Record) -> io::Result<()> {
    for (name, position) in record.iter() {
        writeln!(out, "{name} : {}", TRACK_MARK.repeat(position as usize))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use laprace_core::rules::{Rule, ScriptedRule};

    use super::*;

    #[test]
    fn test_render_records_and_winners() {
        let mut race = Race::new(2).unwrap();
        let field = vec![Competitor::new("pobi").unwrap(), Competitor::new("crong").unwrap()];
        let rules: Vec<Box<dyn Rule>> = vec![Box::new(ScriptedRule::from_bools(&[true, false]))];
        race.start(field, Some(rules)).unwrap();

        let mut out = Vec::new();
        Scoreboard::new(&race).render(&mut out).unwrap();
        let expected = "\nRace results\n\
                        pobi : -\ncrong : \n\n\
                        pobi : --\ncrong : \n\n\
                        Winners: pobi\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_tied_winners_are_comma_separated() {
        let mut race = Race::new(1).unwrap();
        let field = vec![Competitor::new("a").unwrap(), Competitor::new("b").unwrap()];
        race.start(field, None).unwrap();

        let mut out = Vec::new();
        Scoreboard::new(&race).display_winners(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Winners: a, b\n");
    }

    #[test]
    fn test_unstarted_race_renders_header_only() {
        let race = Race::new(3).unwrap();
        let mut out = Vec::new();
        Scoreboard::new(&race).render(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nRace results\n");
    }
}
