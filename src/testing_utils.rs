use serde_json::{Value, json};

/// Test utilities for building API-shaped JSON payloads
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates one competitor of a scoreboard competition
    pub fn create_competitor(
        home_away: &str,
        team: &str,
        abbreviation: &str,
        score: &str,
    ) -> Value {
        json!({
            "homeAway": home_away,
            "score": score,
            "team": {
                "displayName": team,
                "abbreviation": abbreviation,
                "logo": format!("https://example.com/{}.png", abbreviation.to_lowercase())
            },
            "records": [{"summary": "10-5"}]
        })
    }

    /// Creates a scoreboard event with the given state (`pre`, `in` or `post`)
    pub fn create_scoreboard_event(
        id: &str,
        home: (&str, &str),
        away: (&str, &str),
        state: &str,
    ) -> Value {
        let completed = state == "post";
        let period = if state == "pre" { 0 } else { 5 };
        let detail = match state {
            "pre" => "7:05 PM ET",
            "in" => "Top 5th",
            _ => "Final",
        };
        let home_abbreviation = abbreviate(home.0);
        let away_abbreviation = abbreviate(away.0);
        json!({
            "id": id,
            "name": format!("{} at {}", away.0, home.0),
            "shortName": format!("{away_abbreviation} @ {home_abbreviation}"),
            "date": "2024-04-01T17:05Z",
            "competitions": [{
                "competitors": [
                    Self::create_competitor("home", home.0, &home_abbreviation, home.1),
                    Self::create_competitor("away", away.0, &away_abbreviation, away.1)
                ],
                "status": {
                    "period": period,
                    "type": {
                        "state": state,
                        "completed": completed,
                        "shortDetail": detail
                    }
                },
                "venue": {"fullName": "Test Park"}
            }]
        })
    }

    /// Wraps events into a scoreboard payload
    pub fn create_scoreboard(events: Vec<Value>) -> Value {
        json!({ "events": events })
    }

    /// Creates a standings entry with the stats looked up by name
    pub fn create_standings_entry(team: &str, wins: u32, losses: u32, games_behind: &str) -> Value {
        let played = f64::from(wins) + f64::from(losses);
        let percent = if played == 0.0 {
            0.0
        } else {
            f64::from(wins) / played
        };
        json!({
            "team": {"displayName": team, "abbreviation": abbreviate(team)},
            "stats": [
                {"name": "wins", "value": wins, "displayValue": wins.to_string()},
                {"name": "losses", "value": losses, "displayValue": losses.to_string()},
                {"name": "winPercent", "value": percent},
                {"name": "gamesBehind", "displayValue": games_behind}
            ]
        })
    }

    /// Creates a division holding the given entries
    pub fn create_standings_division(name: &str, entries: Vec<Value>) -> Value {
        json!({"name": name, "standings": {"entries": entries}})
    }

    /// Creates a conference wrapping divisions, as the baseball and football feeds nest them
    pub fn create_standings_conference(name: &str, divisions: Vec<Value>) -> Value {
        json!({"name": name, "children": divisions})
    }

    /// Creates a baseball play for a game summary
    pub fn create_baseball_play(
        inning: u32,
        half: &str,
        batter: &str,
        pitcher: &str,
        away_score: u32,
        home_score: u32,
    ) -> Value {
        json!({
            "inning": inning,
            "halfInning": half,
            "awayScore": away_score,
            "homeScore": home_score,
            "batter": {"athlete": {"displayName": batter}},
            "pitcher": {"athlete": {"displayName": pitcher}},
            "result": "Groundout"
        })
    }

    /// Creates a football drive for a game summary
    pub fn create_drive(quarter: u32, description: &str, result: &str) -> Value {
        json!({
            "description": description,
            "period": {"number": quarter},
            "result": result,
            "plays": [{"text": "Kickoff"}, {"text": format!("{result} on the drive")}]
        })
    }

    /// Creates a game summary header with the given competitor names
    pub fn create_summary(teams: &[&str], status: &str) -> Value {
        let competitors: Vec<Value> = teams
            .iter()
            .map(|t| json!({"team": {"displayName": t}}))
            .collect();
        json!({
            "header": {"competitions": [{
                "competitors": competitors,
                "status": {"type": {"description": status}},
                "venue": {"fullName": "Test Park"}
            }]}
        })
    }

    /// Creates a news article
    pub fn create_article(headline: &str) -> Value {
        json!({
            "headline": headline,
            "description": format!("{headline} in detail"),
            "published": "2024-04-01T12:00:00Z",
            "links": {"web": {"href": "https://example.com/story"}}
        })
    }

    /// Creates a teams payload from `(id, display name)` pairs
    pub fn create_teams(teams: &[(&str, &str)]) -> Value {
        let wrapped: Vec<Value> = teams
            .iter()
            .map(|(id, name)| {
                json!({"team": {
                    "id": id,
                    "displayName": name,
                    "abbreviation": abbreviate(name),
                    "logos": [{"href": format!("https://example.com/{id}.png")}]
                }})
            })
            .collect();
        json!({"sports": [{"leagues": [{"teams": wrapped}]}]})
    }
}

fn abbreviate(team: &str) -> String {
    team.chars()
        .filter(|c| c.is_alphanumeric())
        .take(3)
        .collect::<String>()
        .to_uppercase()
}
