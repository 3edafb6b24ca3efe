use serde_json::Value;
use tracing::debug;

use super::json::{
    NULL, json_array, json_bool, json_datetime, json_non_empty, json_path, json_str,
    json_str_or, json_u32,
};
use crate::data_fetcher::models::{Game, GameStatus, StatusKind, TeamSide};

/// Turns a scoreboard payload into one [`Game`] per usable event.
///
/// Only the first competition of each event is read. Events without both a
/// home and an away competitor are dropped.
pub fn normalize_scores(raw: &Value) -> Vec<Game> {
    let events = json_array(raw, &["events"]);
    let games: Vec<Game> = events.iter().filter_map(normalize_event).collect();

    if games.len() != events.len() {
        debug!(
            "Skipped {} of {} scoreboard events with incomplete competitors",
            events.len() - games.len(),
            events.len()
        );
    }
    games
}

fn normalize_event(event: &Value) -> Option<Game> {
    let competition = json_path(event, &["competitions", "0"])?;
    let competitors = json_array(competition, &["competitors"]);
    if competitors.len() < 2 {
        return None;
    }

    let side = |tag: &str| {
        competitors
            .iter()
            .find(|c| json_str(c, &["homeAway"]).eq_ignore_ascii_case(tag))
    };
    let home = normalize_side(side("home")?);
    let away = normalize_side(side("away")?);

    // Competition status is the authoritative one, the event copy is a fallback
    let status_source = json_path(competition, &["status"])
        .filter(|s| s.is_object())
        .or_else(|| json_path(event, &["status"]))
        .unwrap_or(&NULL);

    let name = json_non_empty(event, &["name"])
        .unwrap_or_else(|| format!("{} vs {}", away.name, home.name));

    Some(Game {
        id: json_str(event, &["id"]),
        name,
        short_name: json_str(event, &["shortName"]),
        status: normalize_status(status_source),
        home_team: home,
        away_team: away,
        start_time: json_datetime(event, &["date"]),
        venue: json_non_empty(competition, &["venue", "fullName"])
            .unwrap_or_else(|| json_str(event, &["venue", "displayName"])),
        last_play: last_play(competition),
    })
}

fn normalize_side(competitor: &Value) -> TeamSide {
    TeamSide {
        name: json_str_or(competitor, &["team", "displayName"], "Unknown Team"),
        abbreviation: json_str(competitor, &["team", "abbreviation"]),
        score: json_str_or(competitor, &["score"], "0"),
        record: json_str(competitor, &["records", "0", "summary"]),
        logo_url: json_non_empty(competitor, &["team", "logo"]),
    }
}

/// Maps an ESPN `status` object onto a [`GameStatus`].
pub fn normalize_status(status: &Value) -> GameStatus {
    let completed = json_bool(status, &["type", "completed"]);
    let state = json_str(status, &["type", "state"]);
    let type_name = json_str(status, &["type", "name"]);

    let kind = if completed {
        StatusKind::Final
    } else {
        status_kind(&state, &type_name)
    };

    let display_text = ["shortDetail", "detail", "description"]
        .into_iter()
        .find_map(|field| json_non_empty(status, &["type", field]))
        .unwrap_or_else(|| "Unknown".to_string());

    GameStatus {
        kind,
        display_text,
        period: json_u32(status, &["period"]),
        completed,
    }
}

fn status_kind(state: &str, type_name: &str) -> StatusKind {
    // Postponed and canceled games arrive with state "post" but were never played
    match type_name {
        "STATUS_POSTPONED" | "STATUS_SUSPENDED" | "STATUS_DELAYED" => {
            return StatusKind::Scheduled;
        }
        "STATUS_CANCELED" | "STATUS_CANCELLED" => return StatusKind::Unknown,
        _ => {}
    }

    match state {
        "pre" => return StatusKind::Scheduled,
        "in" => return StatusKind::Live,
        "post" => return StatusKind::Final,
        _ => {}
    }

    match type_name {
        "STATUS_SCHEDULED" => StatusKind::Scheduled,
        "STATUS_IN_PROGRESS" | "STATUS_HALFTIME" | "STATUS_END_PERIOD" | "STATUS_RAIN_DELAY" => {
            StatusKind::Live
        }
        name if name.starts_with("STATUS_FINAL") => StatusKind::Final,
        _ => StatusKind::Unknown,
    }
}

fn last_play(competition: &Value) -> Option<String> {
    json_non_empty(competition, &["situation", "lastPlay", "text"]).or_else(|| {
        json_non_empty(competition, &["notes", "0", "headline"])
            .or_else(|| json_non_empty(competition, &["notes", "0", "description"]))
    })
}
