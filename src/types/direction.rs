//! Compass directions used as exit labels.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{GraphError, GraphResult};

/// One of the four exit labels a room can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// North.
    #[serde(rename = "n")]
    North,
    /// South.
    #[serde(rename = "s")]
    South,
    /// East.
    #[serde(rename = "e")]
    East,
    /// West.
    #[serde(rename = "w")]
    West,
}

impl Direction {
    /// The direction that undoes this one. `d.opposite().opposite() == d`.
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// One-letter token for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
        }
    }

    /// Parse a one-letter token, returning None for anything outside the alphabet.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "n" => Some(Self::North),
            "s" => Some(Self::South),
            "e" => Some(Self::East),
            "w" => Some(Self::West),
            _ => None,
        }
    }
}

/// Look up the opposite of a raw token.
pub fn opposite_of(token: &str) -> GraphResult<Direction> {
    token.parse::<Direction>().map(Direction::opposite)
}

impl FromStr for Direction {
    type Err = GraphError;

    fn from_str(s: &str) -> GraphResult<Self> {
        Self::from_name(s).ok_or_else(|| GraphError::InvalidDirection(s.to_string()))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
