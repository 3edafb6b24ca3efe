use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Team {
    pub id: String,
    /// Display name, e.g. "Milwaukee Brewers"
    pub name: String,
    pub abbreviation: String,
    pub location: String,
    pub nickname: String,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub alternate_color: Option<String>,
}

/// One line of a team's season statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct TeamStat {
    pub name: String,
    pub value: String,
    pub rank: Option<u32>,
    pub category: String,
}
