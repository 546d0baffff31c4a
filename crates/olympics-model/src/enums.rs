//! Type-safe enumerations for the categorical columns of the athlete dataset.
//!
//! The source CSV stores these as free text (`"M"`, `"Summer"`, `"Gold"`);
//! parsing is trimmed and case-insensitive so the Normalizer can reject
//! anything outside the fixed vocabulary at load time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseEnumError;

/// Athlete sex as recorded in the `Sex` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    /// Returns the single-letter code used in the source data.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sex {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "M" | "MALE" => Ok(Sex::Male),
            "F" | "FEMALE" => Ok(Sex::Female),
            _ => Err(ParseEnumError::new("sex", s)),
        }
    }
}

/// Games season. An edition is identified by its year plus season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Winter => "Winter",
        }
    }

    /// Splits the season out of a games label such as `"1992 Summer"`.
    ///
    /// The season is the last whitespace-separated token of the label.
    pub fn from_games_label(label: &str) -> Option<Self> {
        label.split_whitespace().last()?.parse().ok()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Season {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SUMMER" => Ok(Season::Summer),
            "WINTER" => Ok(Season::Winter),
            _ => Err(ParseEnumError::new("season", s)),
        }
    }
}

/// Medal outcome of one athlete-event participation.
///
/// Absence of a medal is modelled as `Option::None` on the record rather than
/// as a fourth variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub const ALL: [Medal; 3] = [Medal::Gold, Medal::Silver, Medal::Bronze];

    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Medal {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GOLD" => Ok(Medal::Gold),
            "SILVER" => Ok(Medal::Silver),
            "BRONZE" => Ok(Medal::Bronze),
            _ => Err(ParseEnumError::new("medal", s)),
        }
    }
}
