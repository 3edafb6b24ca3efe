use serde_json::Value;

use super::json::{
    NULL, json_array, json_non_empty, json_opt_f64, json_opt_u32, json_str, json_str_or,
};
use crate::data_fetcher::models::StandingsEntry;

const UNKNOWN_DIVISION: &str = "Unknown Division";

/// Flattens a standings payload into entries tagged with their division.
///
/// The payload nests either conference → division or division directly
/// under `children`. Both shapes produce the same flat list, in source order.
pub fn normalize_standings(raw: &Value) -> Vec<StandingsEntry> {
    let mut entries = Vec::new();
    for child in json_array(raw, &["children"]) {
        collect_group(child, &mut entries);
    }
    entries
}

fn collect_group(group: &Value, out: &mut Vec<StandingsEntry>) {
    let nested = json_array(group, &["children"]);
    if !nested.is_empty() {
        for division in nested {
            collect_group(division, out);
        }
        return;
    }

    let division = json_str_or(group, &["name"], UNKNOWN_DIVISION);
    out.extend(
        json_array(group, &["standings", "entries"])
            .iter()
            .zip(1u32..)
            .map(|(entry, position)| normalize_entry(entry, &division, position)),
    );
}

/// `position` is the 1-based place within the division, used when no seed is sent
fn normalize_entry(entry: &Value, division: &str, position: u32) -> StandingsEntry {
    let stats = json_array(entry, &["stats"]);
    let team = entry.get("team").unwrap_or(&NULL);

    StandingsEntry {
        team: json_str_or(team, &["displayName"], "Unknown Team"),
        abbreviation: json_str(team, &["abbreviation"]),
        wins: find_stat(stats, "wins").and_then(stat_u32).unwrap_or(0),
        losses: find_stat(stats, "losses").and_then(stat_u32).unwrap_or(0),
        win_percent: find_stat(stats, "winPercent")
            .and_then(stat_f64)
            .unwrap_or(0.0),
        games_behind: find_stat(stats, "gamesBehind")
            .and_then(|s| json_non_empty(s, &["displayValue"]))
            .unwrap_or_else(|| "0".to_string()),
        division: division.to_string(),
        rank: find_stat(stats, "playoffSeed")
            .or_else(|| find_stat(stats, "rank"))
            .and_then(stat_u32)
            .or(Some(position)),
        logo_url: json_non_empty(team, &["logos", "0", "href"])
            .or_else(|| json_non_empty(team, &["logo"])),
    }
}

/// Stats arrive as an unordered list keyed by `name`
fn find_stat<'a>(stats: &'a [Value], name: &str) -> Option<&'a Value> {
    stats.iter().find(|s| json_str(s, &["name"]) == name)
}

fn stat_u32(stat: &Value) -> Option<u32> {
    json_opt_u32(stat, &["value"]).or_else(|| json_opt_u32(stat, &["displayValue"]))
}

fn stat_f64(stat: &Value) -> Option<f64> {
    json_opt_f64(stat, &["value"]).or_else(|| json_opt_f64(stat, &["displayValue"]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(name: &str, wins: u32, losses: u32) -> Value {
        json!({
            "team": {"displayName": name, "abbreviation": name.to_uppercase()},
            "stats": [
                {"name": "losses", "value": losses},
                {"name": "gamesBehind", "displayValue": "-"},
                {"name": "wins", "value": wins},
                {"name": "winPercent", "value": 0.5},
                {"name": "playoffSeed", "value": 2.0}
            ]
        })
    }

    fn division(name: &str, teams: &[&str]) -> Value {
        let entries: Vec<Value> = teams.iter().map(|t| entry(t, 5, 5)).collect();
        json!({"name": name, "standings": {"entries": entries}})
    }

    #[test]
    fn test_conference_division_nesting_is_flattened_in_order() {
        let raw = json!({"children": [
            {"name": "American League", "children": [
                division("AL East", &["a1", "a2", "a3"]),
                division("AL West", &["b1", "b2", "b3"])
            ]}
        ]});

        let standings = normalize_standings(&raw);
        assert_eq!(standings.len(), 6);
        let order: Vec<(&str, &str)> = standings
            .iter()
            .map(|e| (e.division.as_str(), e.team.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("AL East", "a1"),
                ("AL East", "a2"),
                ("AL East", "a3"),
                ("AL West", "b1"),
                ("AL West", "b2"),
                ("AL West", "b3"),
            ]
        );
    }

    #[test]
    fn test_division_only_shape() {
        let raw = json!({"children": [division("Atlantic", &["x"])]});
        let standings = normalize_standings(&raw);
        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].division, "Atlantic");
    }

    #[test]
    fn test_stats_are_looked_up_by_name() {
        let raw = json!({"children": [
            {"name": "D", "standings": {"entries": [entry("t", 9, 3)]}}
        ]});
        let e = &normalize_standings(&raw)[0];
        assert_eq!(e.wins, 9);
        assert_eq!(e.losses, 3);
        assert!((e.win_percent - 0.5).abs() < f64::EPSILON);
        assert_eq!(e.games_behind, "-");
        assert_eq!(e.rank, Some(2));
        assert_eq!(e.abbreviation, "T");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let raw = json!({"children": [{"standings": {"entries": [{}]}}]});
        let e = &normalize_standings(&raw)[0];
        assert_eq!(e.division, "Unknown Division");
        assert_eq!(e.team, "Unknown Team");
        assert_eq!(e.wins, 0);
        assert_eq!(e.losses, 0);
        assert_eq!(e.win_percent, 0.0);
        assert_eq!(e.games_behind, "0");
        assert_eq!(e.rank, Some(1));
        assert_eq!(e.logo_url, None);
    }

    #[test]
    fn test_rank_falls_back_to_position_in_division() {
        let unseeded = |name: &str| json!({"team": {"displayName": name}, "stats": []});
        let raw = json!({"children": [
            {"name": "East", "standings": {"entries": [unseeded("e1"), unseeded("e2")]}},
            {"name": "West", "standings": {"entries": [unseeded("w1"), entry("w2", 1, 1)]}}
        ]});

        let standings = normalize_standings(&raw);
        let ranks: Vec<(&str, Option<u32>)> = standings
            .iter()
            .map(|e| (e.team.as_str(), e.rank))
            .collect();
        assert_eq!(
            ranks,
            vec![("e1", Some(1)), ("e2", Some(2)), ("w1", Some(1)), ("w2", Some(2))]
        );
    }

    #[test]
    fn test_empty_payload() {
        assert!(normalize_standings(&json!({})).is_empty());
        assert!(normalize_standings(&json!({"children": []})).is_empty());
    }
}
