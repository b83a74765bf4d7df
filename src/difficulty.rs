use crate::util::EnumExt;
use enum_map::Enum;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How fast the snake moves when not in bonus mode
#[derive(Clone, Copy, Debug, Default, Deserialize, Enum, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Width of the widest label, for aligning menus
    pub(crate) const DISPLAY_WIDTH: u16 = 12;

    /// Base number of ticks per second
    pub(crate) fn tick_rate(self) -> u32 {
        match self {
            Difficulty::Beginner => 6,
            Difficulty::Intermediate => 12,
            Difficulty::Advanced => 20,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    /// The next level, wrapping around after the hardest
    pub(crate) fn cycle(self) -> Difficulty {
        self.next().unwrap_or_else(Difficulty::min)
    }

    /// The previous level, wrapping around before the easiest
    pub(crate) fn cycle_back(self) -> Difficulty {
        self.prev().unwrap_or_else(Difficulty::max)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Difficulty, ParseDifficultyError> {
        Difficulty::iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDifficultyError(s.to_owned()))
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid difficulty {0:?}; expected beginner, intermediate, or advanced")]
pub(crate) struct ParseDifficultyError(String);
