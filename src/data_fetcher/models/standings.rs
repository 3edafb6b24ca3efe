use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct StandingsEntry {
    pub team: String,
    pub abbreviation: String,
    pub wins: u32,
    pub losses: u32,
    /// Percentage as reported by the API, 0.0 when absent
    pub win_percent: f64,
    /// Display value such as "2.5" or "-"
    pub games_behind: String,
    pub division: String,
    pub rank: Option<u32>,
    pub logo_url: Option<String>,
}

impl StandingsEntry {
    /// `wins / (wins + losses)`, or 0.0 before any game is played
    pub fn computed_win_percent(&self) -> f64 {
        let played = self.games_played();
        if played == 0 {
            0.0
        } else {
            f64::from(self.wins) / played as f64
        }
    }

    pub fn games_played(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses)
    }
}
