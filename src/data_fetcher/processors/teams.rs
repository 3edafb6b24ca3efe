use serde_json::Value;

use super::json::{json_array, json_non_empty, json_str, json_str_or};
use crate::data_fetcher::models::Team;

/// Teams listed under `sports[0].leagues[0].teams`, sorted by display name
/// ignoring case.
pub fn normalize_teams(raw: &Value) -> Vec<Team> {
    let mut teams: Vec<Team> = json_array(raw, &["sports", "0", "leagues", "0", "teams"])
        .iter()
        .filter_map(|wrapper| wrapper.get("team"))
        .map(|team| Team {
            id: json_str(team, &["id"]),
            name: json_str_or(team, &["displayName"], "Unknown Team"),
            abbreviation: json_str(team, &["abbreviation"]),
            location: json_str(team, &["location"]),
            nickname: json_str(team, &["name"]),
            logo_url: json_non_empty(team, &["logos", "0", "href"]),
            primary_color: json_non_empty(team, &["color"]),
            alternate_color: json_non_empty(team, &["alternateColor"]),
        })
        .collect();

    teams.sort_by_cached_key(|team| team.name.to_lowercase());
    teams
}
