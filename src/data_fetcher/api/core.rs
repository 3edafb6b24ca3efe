use chrono::NaiveDate;
use futures::future::join_all;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::fetch_utils::{FetchOptions, fetch_with_cache};
use super::http_client::create_http_client_with_timeout;
use super::urls::{EndpointKind, build_endpoint};
use crate::config::Config;
use crate::data_fetcher::cache::{CacheStatus, ResponseCache};
use crate::data_fetcher::models::{
    Game, GameDetail, League, LiveGame, NewsItem, StandingsEntry, Team, TeamStat,
};
use crate::data_fetcher::processors::{
    normalize_game_detail, normalize_news, normalize_scores, normalize_standings,
    normalize_team_stats, normalize_teams,
};
use crate::error::AppError;

/// Gateway to the sports API.
///
/// Owns its HTTP client and response cache. Share it by reference (or behind
/// an `Arc`) rather than constructing one per request, otherwise every call
/// starts with a cold cache.
#[derive(Debug)]
pub struct SportsApi {
    client: Client,
    cache: ResponseCache,
    base_url: String,
    timeout: Duration,
}

impl SportsApi {
    /// Builds a gateway with its own pooled HTTP client.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout())
            .map_err(|e| AppError::HttpClient(e.to_string()))?;
        Ok(Self::with_client(client, config))
    }

    /// Builds a gateway around an existing client.
    pub fn with_client(client: Client, config: &Config) -> Self {
        info!(
            "Creating sports API gateway: base_url={}, timeout={:?}, cache_ttl={:?}",
            config.base_url(),
            config.http_timeout(),
            config.cache_ttl()
        );
        Self {
            client,
            cache: ResponseCache::new(config.cache_ttl()),
            base_url: config.base_url().to_string(),
            timeout: config.http_timeout(),
        }
    }

    /// The supported leagues. Never touches the network.
    pub fn get_leagues(&self) -> Vec<League> {
        League::ALL.to_vec()
    }

    /// Scoreboard for one calendar day.
    pub async fn get_scores(
        &self,
        league: impl AsRef<str>,
        date: NaiveDate,
    ) -> Result<Vec<Game>, AppError> {
        let raw = self
            .fetch_raw(league, EndpointKind::Scores(date), FetchOptions::default())
            .await?;
        Ok(normalize_scores(&raw))
    }

    pub async fn get_standings(
        &self,
        league: impl AsRef<str>,
    ) -> Result<Vec<StandingsEntry>, AppError> {
        let raw = self
            .fetch_raw(league, EndpointKind::Standings, FetchOptions::default())
            .await?;
        Ok(normalize_standings(&raw))
    }

    pub async fn get_news(&self, league: impl AsRef<str>) -> Result<Vec<NewsItem>, AppError> {
        let raw = self
            .fetch_raw(league, EndpointKind::News, FetchOptions::default())
            .await?;
        Ok(normalize_news(&raw))
    }

    /// Summary of a single game, with the play breakdown its league carries.
    pub async fn get_game_details(
        &self,
        game_id: &str,
        league: impl AsRef<str>,
    ) -> Result<GameDetail, AppError> {
        let league: League = league.as_ref().parse()?;
        let raw = self
            .fetch_endpoint(
                league,
                EndpointKind::GameDetail(game_id),
                FetchOptions::default(),
            )
            .await?;
        Ok(normalize_game_detail(&raw, league))
    }

    pub async fn get_teams(&self, league: impl AsRef<str>) -> Result<Vec<Team>, AppError> {
        let raw = self
            .fetch_raw(league, EndpointKind::Teams, FetchOptions::default())
            .await?;
        Ok(normalize_teams(&raw))
    }

    /// Season statistics of an MLB team.
    pub async fn get_team_stats(&self, team_id: &str) -> Result<Vec<TeamStat>, AppError> {
        self.get_team_stats_for(League::Mlb, team_id).await
    }

    pub async fn get_team_stats_for(
        &self,
        league: impl AsRef<str>,
        team_id: &str,
    ) -> Result<Vec<TeamStat>, AppError> {
        let raw = self
            .fetch_raw(
                league,
                EndpointKind::TeamStats(team_id),
                FetchOptions::default(),
            )
            .await?;
        Ok(normalize_team_stats(&raw))
    }

    /// Games in progress across every league on the given day.
    ///
    /// The four scoreboards are fetched concurrently. A league that fails is
    /// logged and left out; it never hides the others.
    #[instrument(skip(self))]
    pub async fn get_all_live_games(&self, date: NaiveDate) -> Vec<LiveGame> {
        let fetches = League::ALL.into_iter().map(|league| async move {
            (league, self.get_scores(league, date).await)
        });

        let mut live = Vec::new();
        for (league, result) in join_all(fetches).await {
            match result {
                Ok(games) => live.extend(
                    games
                        .into_iter()
                        .filter(Game::is_live)
                        .map(|game| LiveGame { league, game }),
                ),
                Err(e) => warn!("Skipping {} in live games: {}", league, e),
            }
        }

        debug!("Found {} live games on {}", live.len(), date);
        live
    }

    /// Bypasses a fresh cache entry and refetches a scoreboard.
    pub async fn refresh_scores(
        &self,
        league: impl AsRef<str>,
        date: NaiveDate,
    ) -> Result<Vec<Game>, AppError> {
        let raw = self
            .fetch_raw(league, EndpointKind::Scores(date), FetchOptions::force_refresh())
            .await?;
        Ok(normalize_scores(&raw))
    }

    /// Raw JSON for any endpoint, through the cache, with per-call options.
    pub async fn fetch_raw(
        &self,
        league: impl AsRef<str>,
        kind: EndpointKind<'_>,
        options: FetchOptions,
    ) -> Result<Value, AppError> {
        let league: League = league.as_ref().parse()?;
        self.fetch_endpoint(league, kind, options).await
    }

    async fn fetch_endpoint(
        &self,
        league: League,
        kind: EndpointKind<'_>,
        options: FetchOptions,
    ) -> Result<Value, AppError> {
        let endpoint = build_endpoint(&self.base_url, &kind, league)?;
        fetch_with_cache(
            &self.client,
            &self.cache,
            &endpoint.url,
            &endpoint.cache_key,
            options,
            self.timeout,
        )
        .await
    }

    /// Drops every cached response.
    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }

    /// Age and expiry of every cached response, newest first.
    pub async fn cache_status(&self) -> Vec<CacheStatus> {
        self.cache.status().await
    }
}
