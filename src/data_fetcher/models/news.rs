use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct NewsItem {
    pub headline: String,
    pub description: String,
    pub published_at: Option<DateTime<Utc>>,
    pub source: String,
    pub url: String,
}
