use super::league::League;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Coarse game state used for filtering and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Scheduled,
    Live,
    Final,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct GameStatus {
    pub kind: StatusKind,
    /// Human readable status such as "Top 5th" or "Final"
    pub display_text: String,
    pub period: u32,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct TeamSide {
    pub name: String,
    pub abbreviation: String,
    /// Score as sent by the API, "0" when missing
    pub score: String,
    /// Season record summary, e.g. "10-5"
    pub record: String,
    pub logo_url: Option<String>,
}

/// One scoreboard entry.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Game {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub status: GameStatus,
    pub home_team: TeamSide,
    pub away_team: TeamSide,
    pub start_time: Option<DateTime<Utc>>,
    pub venue: String,
    pub last_play: Option<String>,
}

impl Game {
    pub fn is_live(&self) -> bool {
        self.status.kind == StatusKind::Live
    }

    /// Score line as "<away>-<home>"
    pub fn score_line(&self) -> String {
        format!("{}-{}", self.away_team.score, self.home_team.score)
    }
}

/// A live game tagged with the league it was found in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveGame {
    pub league: League,
    pub game: Game,
}
