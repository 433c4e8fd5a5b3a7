use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed catalog of games the shop trades accounts for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameCode {
    Lol,
    Valorant,
    Pubg,
    Fifa,
}

impl GameCode {
    pub const ALL: [Self; 4] = [Self::Lol, Self::Valorant, Self::Pubg, Self::Fifa];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Lol => "lol",
            Self::Valorant => "valorant",
            Self::Pubg => "pubg",
            Self::Fifa => "fifa",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Lol => "League of Legends",
            Self::Valorant => "Valorant",
            Self::Pubg => "PUBG",
            Self::Fifa => "FIFA",
        }
    }
}

/// Returned when a string is not one of [`GameCode::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGame(pub String);

impl fmt::Display for UnknownGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown game code '{}'", self.0)
    }
}

impl std::error::Error for UnknownGame {}

impl FromStr for GameCode {
    type Err = UnknownGame;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|game| game.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| UnknownGame(code.to_owned()))
    }
}

impl fmt::Display for GameCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
