//! Common types used throughout the dicebot.

use std::fmt;
use std::str::FromStr;

use strum::{Display, EnumString, VariantNames};

use crate::error::{BotError, Result};

/// Prefix every roll type token starts with.
pub const ROLL_TYPE_PREFIX: char = 'd';

/// A validated roll type token such as `d20`.
///
/// Only the die shape is carried; the dice count is not part of the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollType(String);

impl RollType {
    /// Returns the token as it should appear in chat messages
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RollType {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim();
        let is_valid = token
            .strip_prefix(ROLL_TYPE_PREFIX)
            .is_some_and(|sides| !sides.is_empty() && sides.bytes().all(|b| b.is_ascii_digit()));

        if is_valid {
            Ok(RollType(token.to_string()))
        } else {
            Err(BotError::InvalidRollType(s.to_string()))
        }
    }
}

impl fmt::Display for RollType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Common tabletop dice, offered as roll type suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, VariantNames, Display)]
#[strum(serialize_all = "lowercase")]
pub enum StandardDie {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
}

impl StandardDie {
    /// Number of faces on this die
    pub fn sides(self) -> u32 {
        match self {
            StandardDie::D4 => 4,
            StandardDie::D6 => 6,
            StandardDie::D8 => 8,
            StandardDie::D10 => 10,
            StandardDie::D12 => 12,
            StandardDie::D20 => 20,
            StandardDie::D100 => 100,
        }
    }
}

impl From<StandardDie> for RollType {
    fn from(die: StandardDie) -> Self {
        RollType(die.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_tokens() -> std::result::Result<(), BotError> {
        assert_eq!("d20".parse::<RollType>()?.as_str(), "d20");
        assert_eq!("  d1000 ".parse::<RollType>()?.as_str(), "d1000");
        Ok(())
    }

    #[test]
    fn rejects_malformed_tokens() {
        for raw in ["20", "d", "dx", "D20", "1d20", "d20+1", ""] {
            assert!(
                matches!(raw.parse::<RollType>(), Err(BotError::InvalidRollType(_))),
                "expected '{raw}' to be rejected"
            );
        }
    }

    #[test]
    fn standard_die_names_round_trip() -> std::result::Result<(), strum::ParseError> {
        for name in StandardDie::VARIANTS {
            let die: StandardDie = name.parse()?;
            assert_eq!(die.to_string(), *name);
            assert_eq!(*name, format!("d{}", die.sides()));
        }
        Ok(())
    }

    #[test]
    fn standard_die_is_valid_roll_type() {
        let roll_type = RollType::from(StandardDie::D12);
        assert_eq!(roll_type.as_str(), "d12");
        assert_eq!("d12".parse::<RollType>().ok(), Some(roll_type));
    }
}
