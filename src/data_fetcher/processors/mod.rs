//! Normalization of raw API payloads into domain records.
//!
//! Every normalizer is a pure, total function over `serde_json::Value`:
//! malformed or partial input yields defaults or an empty result, never an
//! error.

pub mod game_detail;
pub mod json;
pub mod news;
pub mod scores;
pub mod standings;
pub mod team_stats;
pub mod teams;

pub use game_detail::{group_drives, group_innings, normalize_game_detail};
pub use json::*;
pub use news::normalize_news;
pub use scores::{normalize_scores, normalize_status};
pub use standings::normalize_standings;
pub use team_stats::normalize_team_stats;
pub use teams::normalize_teams;
