//! Parsing of typed player commands.

use game_core::{CombatAction, ItemId, SkillId};

/// One line of player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Act(CombatAction),
    Status,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("'{0}' needs an id, e.g. '{0} <id>'")]
    MissingArgument(&'static str),

    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
}

pub const HELP: &str = "\
commands:
  attack | a          basic attack
  skill <id> | s <id> use a skill
  item <id> | i <id>  use an item
  flee | f            try to escape
  status              show both combatants
  help                show this list
  quit | q            leave the fight";

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Result<Self, ParseError>> {
        let mut words = line.split_whitespace();
        let verb = words.next()?.to_ascii_lowercase();
        let argument = words.next();

        let command = match (verb.as_str(), argument) {
            ("attack" | "a", _) => Ok(Self::Act(CombatAction::BasicAttack)),
            ("flee" | "f", _) => Ok(Self::Act(CombatAction::Flee)),
            ("skill" | "s", Some(id)) => Ok(Self::Act(CombatAction::skill(SkillId::from(id)))),
            ("skill" | "s", None) => Err(ParseError::MissingArgument("skill")),
            ("item" | "i", Some(id)) => Ok(Self::Act(CombatAction::item(ItemId::from(id)))),
            ("item" | "i", None) => Err(ParseError::MissingArgument("item")),
            ("status", _) => Ok(Self::Status),
            ("help" | "?", _) => Ok(Self::Help),
            ("quit" | "q" | "exit", _) => Ok(Self::Quit),
            _ => Err(ParseError::Unknown(verb)),
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actions() {
        assert_eq!(
            Command::parse("attack"),
            Some(Ok(Command::Act(CombatAction::BasicAttack)))
        );
        assert_eq!(
            Command::parse("  SKILL power_strike "),
            Some(Ok(Command::Act(CombatAction::skill(SkillId::new("power_strike")))))
        );
        assert_eq!(
            Command::parse("i health_potion"),
            Some(Ok(Command::Act(CombatAction::item(ItemId::new("health_potion")))))
        );
        assert_eq!(Command::parse("flee"), Some(Ok(Command::Act(CombatAction::Flee))));
        assert_eq!(Command::parse("q"), Some(Ok(Command::Quit)));
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(Command::parse("   "), None);
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(
            Command::parse("skill"),
            Some(Err(ParseError::MissingArgument("skill")))
        );
        assert_eq!(
            Command::parse("dance"),
            Some(Err(ParseError::Unknown("dance".to_owned())))
        );
    }
}
