//! Binary choice representation
//!
//! A choice is the single per-step input of a session: left or right.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The user's answer for the current letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
}

/// Error type for unrecognised choice input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceError {
    Invalid(String),
}

impl fmt::Display for ChoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(raw) => write!(f, "Invalid choice {raw:?}, expected \"L\" or \"R\""),
        }
    }
}

impl std::error::Error for ChoiceError {}

impl Choice {
    /// Both choices, left first
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    /// The literal used for this choice in histories and exports
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "L",
            Self::Right => "R",
        }
    }

    /// The other choice
    #[inline]
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Parse a whole history string such as `"LRRL"`
    ///
    /// Whitespace and `→` separators are ignored, so the output of
    /// [`crate::output::formatters::format_history`] parses back.
    ///
    /// # Errors
    /// Returns `ChoiceError::Invalid` naming the first unrecognised character.
    ///
    /// # Examples
    /// ```
    /// use mind_reader::core::Choice;
    ///
    /// let choices = Choice::parse_many("L R → L").unwrap();
    /// assert_eq!(choices, vec![Choice::Left, Choice::Right, Choice::Left]);
    ///
    /// assert!(Choice::parse_many("LX").is_err());
    /// ```
    pub fn parse_many(input: &str) -> Result<Vec<Self>, ChoiceError> {
        input
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '→' && *c != ',')
            .map(|c| c.to_string().parse())
            .collect()
    }
}

impl FromStr for Choice {
    type Err = ChoiceError;

    /// Accepts exactly the literals `L` and `R`
    ///
    /// Front-ends normalise case before parsing; the engine does not guess.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" => Ok(Self::Left),
            "R" => Ok(Self::Right),
            other => Err(ChoiceError::Invalid(other.to_string())),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
