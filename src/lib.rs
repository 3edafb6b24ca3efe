//! Sports data gateway over the ESPN site API
//!
//! This library fetches scores, standings, game details, news, teams and
//! team statistics for MLB, NFL, NBA and NHL, caches the raw responses for a
//! few minutes and normalizes them into one consistent set of records.
//!
//! # Examples
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use sports_gateway::{AppError, Config, SportsApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let api = SportsApi::new(&config)?;
//!
//!     let today = Utc::now().date_naive();
//!     for game in api.get_scores("MLB", today).await? {
//!         println!("{}: {} ({})", game.name, game.score_line(), game.status.display_text);
//!     }
//!
//!     // Served from cache for the next five minutes
//!     let standings = api.get_standings("MLB").await?;
//!     println!("{} teams in the standings", standings.len());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{FetchOptions, SportsApi};
pub use data_fetcher::cache::CacheStatus;
pub use data_fetcher::models::{
    Game, GameDetail, GameStatus, League, LiveGame, NewsItem, PlayBreakdown, StandingsEntry,
    StatusKind, Team, TeamSide, TeamStat,
};
pub use error::{AppError, FetchCause};
pub use logging::{LogTarget, setup_logging};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
