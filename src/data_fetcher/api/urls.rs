//! URL and cache-key routing for API endpoints

use chrono::NaiveDate;
use reqwest::Url;

use crate::data_fetcher::models::League;
use crate::error::AppError;

/// What to fetch, together with the parameter each kind needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind<'a> {
    /// Scoreboard for one calendar day
    Scores(NaiveDate),
    Standings,
    /// Summary of one game, by event id
    GameDetail(&'a str),
    News,
    Teams,
    /// Season statistics of one team, by team id
    TeamStats(&'a str),
}

/// A resolved request target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub url: String,
    pub cache_key: String,
}

/// Formats a date the way the scoreboard expects it.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use sports_gateway::data_fetcher::api::format_api_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
/// assert_eq!(format_api_date(date), "20240704");
/// ```
pub fn format_api_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Resolves a league code and endpoint kind into a URL and cache key.
///
/// Fails with [`AppError::UnsupportedLeague`] for anything other than the
/// four supported league codes.
///
/// # Example
/// ```
/// use sports_gateway::data_fetcher::api::{resolve_endpoint, EndpointKind};
///
/// let endpoint = resolve_endpoint("https://api.example.com", &EndpointKind::News, "nfl").unwrap();
/// assert_eq!(endpoint.url, "https://api.example.com/football/nfl/news");
/// assert_eq!(endpoint.cache_key, "nfl-news");
/// ```
pub fn resolve_endpoint(
    base_url: &str,
    kind: &EndpointKind<'_>,
    league: &str,
) -> Result<Endpoint, AppError> {
    let league: League = league.parse()?;
    build_endpoint(base_url, kind, league)
}

/// Routing table for an already-parsed league.
///
/// Ids are percent-encoded into their path segment or query pair. Fails only
/// when `base_url` is not an absolute URL that can carry a path.
pub fn build_endpoint(
    base_url: &str,
    kind: &EndpointKind<'_>,
    league: League,
) -> Result<Endpoint, AppError> {
    let prefix = league.key_prefix();

    let (path, query, cache_key): (Vec<&str>, Option<(&str, String)>, String) = match *kind {
        EndpointKind::Scores(date) => {
            let date = format_api_date(date);
            let cache_key = format!("{prefix}-scores-{date}");
            (vec!["scoreboard"], Some(("dates", date)), cache_key)
        }
        EndpointKind::Standings => (vec!["standings"], None, format!("{prefix}-standings")),
        EndpointKind::GameDetail(game_id) => (
            vec!["summary"],
            Some(("event", game_id.to_string())),
            format!("{prefix}-game-{game_id}"),
        ),
        EndpointKind::News => (vec!["news"], None, format!("{prefix}-news")),
        EndpointKind::Teams => (vec!["teams"], None, format!("{prefix}-teams")),
        EndpointKind::TeamStats(team_id) => (
            vec!["teams", team_id, "statistics"],
            None,
            format!("{prefix}-team-stats-{team_id}"),
        ),
    };

    let mut url = Url::parse(base_url).map_err(|e| {
        AppError::config_error(format!("Invalid API base URL '{base_url}': {e}"))
    })?;
    url.path_segments_mut()
        .map_err(|()| {
            AppError::config_error(format!("API base URL '{base_url}' cannot hold a path"))
        })?
        .pop_if_empty()
        .extend(league.sport_path().split('/'))
        .extend(path);
    if let Some((name, value)) = query {
        url.query_pairs_mut().append_pair(name, &value);
    }

    Ok(Endpoint {
        url: url.into(),
        cache_key,
    })
}
