use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

use super::json::{
    NULL, json_array, json_non_empty, json_opt_u32, json_path, json_str, json_str_or, json_u32,
};
use crate::data_fetcher::models::{
    Batter, BreakdownKind, Drive, DrivePlay, GameDetail, Half, Inning, InningHalf, League,
    Official, PlayBreakdown, Quarter,
};

/// Builds a [`GameDetail`] from a game summary payload.
///
/// The play breakdown depends on the league: innings for baseball, drives for
/// football and nothing for the rest.
pub fn normalize_game_detail(raw: &Value, league: League) -> GameDetail {
    let competition = json_path(raw, &["header", "competitions", "0"]).unwrap_or(&NULL);
    let game_info = raw.get("gameInfo").unwrap_or(&NULL);

    let breakdown = match league.breakdown_kind() {
        BreakdownKind::Innings => {
            PlayBreakdown::Innings(group_innings(json_array(raw, &["plays"])))
        }
        BreakdownKind::Drives => PlayBreakdown::Drives(group_drives(raw.get("drives"))),
        BreakdownKind::None => PlayBreakdown::None,
    };

    GameDetail {
        name: matchup_name(competition),
        status: json_non_empty(competition, &["status", "type", "description"])
            .or_else(|| json_non_empty(competition, &["status", "type", "detail"]))
            .unwrap_or_default(),
        venue: json_non_empty(competition, &["venue", "fullName"])
            .or_else(|| json_non_empty(game_info, &["venue", "fullName"]))
            .unwrap_or_default(),
        weather: weather(competition).or_else(|| weather(game_info)),
        officials: officials(competition, game_info),
        breakdown,
    }
}

fn matchup_name(competition: &Value) -> String {
    let names: Vec<String> = json_array(competition, &["competitors"])
        .iter()
        .filter_map(|c| json_non_empty(c, &["team", "displayName"]))
        .collect();

    if names.is_empty() {
        "Game".to_string()
    } else {
        names.join(" vs ")
    }
}

fn weather(source: &Value) -> Option<String> {
    json_non_empty(source, &["weather", "displayValue"]).or_else(|| {
        let temperature = json_non_empty(source, &["weather", "temperature"])?;
        Some(format!("{temperature}°"))
    })
}

fn officials(competition: &Value, game_info: &Value) -> Vec<Official> {
    let mut list = json_array(competition, &["officials"]);
    if list.is_empty() {
        list = json_array(game_info, &["officials"]);
    }

    list.iter()
        .map(|official| Official {
            name: json_non_empty(official, &["displayName"])
                .unwrap_or_else(|| json_str(official, &["fullName"])),
            role: json_non_empty(official, &["position", "name"])
                .or_else(|| json_non_empty(official, &["position", "displayName"]))
                .unwrap_or_else(|| json_str(official, &["role"])),
        })
        .collect()
}

/// Groups plays into innings, ascending by inning number.
///
/// The first play of a half fixes its score as `away-home`. Later plays
/// append batters, and any play naming a pitcher replaces the previous one.
pub fn group_innings(plays: &[Value]) -> Vec<Inning> {
    let mut innings: BTreeMap<u32, Inning> = BTreeMap::new();
    let mut skipped = 0usize;

    for play in plays {
        let half = json_non_empty(play, &["halfInning"])
            .or_else(|| json_non_empty(play, &["period", "type"]))
            .and_then(|h| Half::parse(&h));
        let Some(half) = half else {
            skipped += 1;
            continue;
        };

        let number = if play.get("inning").is_some() {
            json_u32(play, &["inning"])
        } else {
            json_u32(play, &["period", "number"])
        };

        let slot = innings
            .entry(number)
            .or_insert_with(|| Inning::new(number))
            .half_mut(half);

        let inning_half = slot.get_or_insert_with(|| InningHalf {
            number,
            half,
            score: format!(
                "{}-{}",
                json_u32(play, &["awayScore"]),
                json_u32(play, &["homeScore"])
            ),
            batters: Vec::new(),
            pitcher: None,
        });

        inning_half.batters.push(Batter {
            name: participant(play, "batter").unwrap_or_else(|| "Unknown Batter".to_string()),
            result: play_result(play),
        });

        if let Some(pitcher) = participant(play, "pitcher") {
            inning_half.pitcher = Some(pitcher);
        }
    }

    if skipped > 0 {
        debug!("Skipped {skipped} plays without a recognisable half inning");
    }
    innings.into_values().collect()
}

/// Name of the athlete in `role`, either as a direct field or in `participants`
fn participant(play: &Value, role: &str) -> Option<String> {
    json_non_empty(play, &[role, "athlete", "displayName"]).or_else(|| {
        json_array(play, &["participants"])
            .iter()
            .find(|p| json_str(p, &["type"]) == role)
            .and_then(|p| json_non_empty(p, &["athlete", "displayName"]))
    })
}

fn play_result(play: &Value) -> String {
    json_non_empty(play, &["result"])
        .or_else(|| json_non_empty(play, &["type", "text"]))
        .or_else(|| json_non_empty(play, &["text"]))
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Groups drives by quarter, ascending, keeping listed order inside a quarter.
///
/// Accepts either a plain array or the `{previous: [...], current: {...}}`
/// shape of an in-progress game.
pub fn group_drives(drives: Option<&Value>) -> Vec<Quarter> {
    let listed: Vec<&Value> = match drives {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(obj @ Value::Object(_)) => {
            let mut all: Vec<&Value> = json_array(obj, &["previous"]).iter().collect();
            if let Some(current) = obj.get("current").filter(|c| c.is_object()) {
                all.push(current);
            }
            all
        }
        _ => Vec::new(),
    };

    let mut quarters: BTreeMap<u32, Vec<Drive>> = BTreeMap::new();
    for drive in listed {
        let drive = normalize_drive(drive);
        quarters.entry(drive.quarter_number).or_default().push(drive);
    }

    quarters
        .into_iter()
        .map(|(number, drives)| Quarter { number, drives })
        .collect()
}

fn normalize_drive(drive: &Value) -> Drive {
    let quarter_number = json_opt_u32(drive, &["start", "period", "number"])
        .or_else(|| json_opt_u32(drive, &["period", "number"]))
        .or_else(|| json_opt_u32(drive, &["period"]))
        .unwrap_or(0);

    Drive {
        quarter_number,
        description: json_str(drive, &["description"]),
        score_result: drive_result(drive),
        quarterback: json_non_empty(drive, &["leader", "athlete", "displayName"]),
        plays: json_array(drive, &["plays"])
            .iter()
            .map(|p| DrivePlay {
                description: json_str_or(p, &["text"], "Unknown"),
            })
            .collect(),
    }
}

/// `result` or `displayResult`, sent either as text or as `{displayName}`
fn drive_result(drive: &Value) -> String {
    ["result", "displayResult"]
        .iter()
        .find_map(|field| match drive.get(*field)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            obj @ Value::Object(_) => json_non_empty(obj, &["displayName"]),
            _ => None,
        })
        .unwrap_or_default()
}
