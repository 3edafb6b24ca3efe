use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four supported leagues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum League {
    Mlb,
    Nfl,
    Nba,
    Nhl,
}

/// Which play-by-play grouping a league's game detail carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakdownKind {
    Innings,
    Drives,
    None,
}

impl League {
    pub const ALL: [League; 4] = [League::Mlb, League::Nfl, League::Nba, League::Nhl];

    /// Upper-case league code, e.g. "MLB"
    pub fn code(&self) -> &'static str {
        match self {
            League::Mlb => "MLB",
            League::Nfl => "NFL",
            League::Nba => "NBA",
            League::Nhl => "NHL",
        }
    }

    /// Lower-case code used as cache key prefix
    pub fn key_prefix(&self) -> &'static str {
        match self {
            League::Mlb => "mlb",
            League::Nfl => "nfl",
            League::Nba => "nba",
            League::Nhl => "nhl",
        }
    }

    /// ESPN `{sport}/{league}` path segment
    pub fn sport_path(&self) -> &'static str {
        match self {
            League::Mlb => "baseball/mlb",
            League::Nfl => "football/nfl",
            League::Nba => "basketball/nba",
            League::Nhl => "hockey/nhl",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            League::Mlb => "Major League Baseball",
            League::Nfl => "National Football League",
            League::Nba => "National Basketball Association",
            League::Nhl => "National Hockey League",
        }
    }

    pub fn breakdown_kind(&self) -> BreakdownKind {
        match self {
            League::Mlb => BreakdownKind::Innings,
            League::Nfl => BreakdownKind::Drives,
            League::Nba | League::Nhl => BreakdownKind::None,
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl AsRef<str> for League {
    fn as_ref(&self) -> &str {
        self.code()
    }
}

impl FromStr for League {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        League::ALL
            .into_iter()
            .find(|league| league.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::unsupported_league(s))
    }
}
